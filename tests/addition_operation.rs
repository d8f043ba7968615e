//! Integration tests for the addition operation through the public API.

use grip_core::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn addition_sockets() -> (AdditionOperation, Vec<Socket>, Vec<Socket>) {
    let addition = AdditionOperation;
    let bus: Arc<dyn EventSink> = Arc::new(EventBus::new());
    let inputs = addition.create_input_sockets(bus.clone());
    let outputs = addition.create_output_sockets(bus);
    (addition, inputs, outputs)
}

#[test]
fn test_operation() {
    let (addition, inputs, outputs) = addition_sockets();
    let a = inputs[0].typed::<f64>().unwrap();
    let b = inputs[1].typed::<f64>().unwrap();
    let c = outputs[0].typed::<f64>().unwrap();

    a.set_value(1234.0).unwrap();
    b.set_value(5678.0).unwrap();
    addition.perform(&inputs, &outputs).unwrap();

    assert_eq!(c.value(), Ok(1234.0 + 5678.0));
    assert_eq!(c.value(), Ok(6912.0));
}

#[test]
fn test_sum_of_pairs() {
    let samples = [
        -1.0e12, -3.75, -1.0, -0.1, 0.0, 0.1, 0.2, 1.0, 2.5, 1234.0, 5678.0, 1.0e-9, 9.87e15,
    ];
    let (addition, inputs, outputs) = addition_sockets();

    for &x in &samples {
        for &y in &samples {
            inputs[0].typed::<f64>().unwrap().set_value(x).unwrap();
            inputs[1].typed::<f64>().unwrap().set_value(y).unwrap();
            addition.perform(&inputs, &outputs).unwrap();

            let sum = outputs[0].typed::<f64>().unwrap().value().unwrap();
            let tolerance = f64::EPSILON * (x.abs() + y.abs()).max(1.0);
            assert!(
                (sum - (x + y)).abs() <= tolerance,
                "{} + {} gave {}",
                x,
                y,
                sum
            );
        }
    }
}

#[test]
fn test_perform_is_idempotent() {
    let (addition, inputs, outputs) = addition_sockets();
    inputs[0].set_value(json!(0.1)).unwrap();
    inputs[1].set_value(json!(0.2)).unwrap();

    addition.perform(&inputs, &outputs).unwrap();
    let first = outputs[0].value();
    addition.perform(&inputs, &outputs).unwrap();
    let second = outputs[0].value();

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_unset_inputs_fail_the_same_way_every_time() {
    let (addition, inputs, outputs) = addition_sockets();

    for _ in 0..3 {
        assert_eq!(
            addition.perform(&inputs, &outputs),
            Err(OperationError::UnsetInput {
                index: 0,
                identifier: "a".to_string()
            })
        );
        assert!(!outputs[0].is_set());
    }

    inputs[0].set_value(json!(1.0)).unwrap();
    for _ in 0..3 {
        assert_eq!(
            addition.perform(&inputs, &outputs),
            Err(OperationError::UnsetInput {
                index: 1,
                identifier: "b".to_string()
            })
        );
    }
}

#[test]
fn test_cleared_input_is_unset_again() {
    let (addition, inputs, outputs) = addition_sockets();
    inputs[0].set_value(json!(1.0)).unwrap();
    inputs[1].set_value(json!(2.0)).unwrap();
    addition.perform(&inputs, &outputs).unwrap();

    inputs[1].clear();

    assert!(matches!(
        addition.perform(&inputs, &outputs),
        Err(OperationError::UnsetInput { index: 1, .. })
    ));
    // the previous result is kept
    assert_eq!(outputs[0].value(), Some(json!(3.0)));
}

#[test]
fn test_input_rejects_non_numbers() {
    let (_, inputs, _) = addition_sockets();

    let err = inputs[0].set_value(json!("1234")).unwrap_err();

    assert!(matches!(err, SocketError::InvalidType { .. }));
    assert!(err.to_string().contains("holds number values"));
    assert!(!inputs[0].is_set());
    assert!(inputs[0].typed::<String>().is_err());
}

#[test]
fn test_wrong_socket_count() {
    let (addition, inputs, outputs) = addition_sockets();

    let err = addition.perform(&inputs[..1], &outputs).unwrap_err();

    assert_eq!(err.to_string(), "Add expects 2 input sockets, got 1");
}

#[test]
fn test_operation_as_trait_object() {
    let operation: Arc<dyn Operation> = Arc::new(AdditionOperation);
    let step = Step::new(operation, Arc::new(NullEventSink));

    step.input("a").unwrap().typed::<f64>().unwrap().set_value(40.0).unwrap();
    step.input("b").unwrap().typed::<f64>().unwrap().set_value(2.0).unwrap();
    step.run().unwrap();

    assert_eq!(
        step.output("sum").unwrap().typed::<f64>().unwrap().value(),
        Ok(42.0)
    );
}
