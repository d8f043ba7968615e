//! Adds two numbers with sockets wired to an event bus that logs every change.
//!
//! Run with `cargo run --example addition`.

use grip_core::prelude::*;
use std::sync::Arc;

fn main() -> Result<(), OperationError> {
    let bus = Arc::new(EventBus::new());
    bus.subscribe(|event| {
        let value = event
            .value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "<unset>".to_string());
        println!("{:?} '{}' -> {}", event.direction, event.identifier, value);
    });

    let step = Step::new(Arc::new(AdditionOperation), bus);

    // Running before the inputs are set fails without touching the output
    if let Err(err) = step.run() {
        println!("{}", err);
    }

    step.inputs()[0].typed::<f64>()?.set_value(1234.0)?;
    step.inputs()[1].typed::<f64>()?.set_value(5678.0)?;
    step.run()?;

    let sum = step.outputs()[0].typed::<f64>()?.value()?;
    println!("{} v{}: 1234 + 5678 = {}", grip_core::NAME, grip_core::VERSION, sum);
    Ok(())
}
