//! Values carried by sockets and the mapping between Rust types and the
//! runtime type tag a socket is declared with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The Alias for serde_json::Value, the erased representation of a socket value
pub type SocketValue = serde_json::Value;

/// The declared type of a socket. Fixed when the socket is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Number,
    Boolean,
    Text,
    List,
    /// Accepts any value except `null`.
    Any,
}

impl ValueType {
    /// Runtime check that `value` may be stored in a socket of this type.
    pub fn accepts(&self, value: &SocketValue) -> bool {
        match self {
            ValueType::Number => value.is_number(),
            ValueType::Boolean => value.is_boolean(),
            ValueType::Text => value.is_string(),
            ValueType::List => value.is_array(),
            ValueType::Any => !value.is_null(),
        }
    }

    /// Best-effort classification of a value, used in error messages.
    pub fn of(value: &SocketValue) -> Option<ValueType> {
        match value {
            SocketValue::Number(_) => Some(ValueType::Number),
            SocketValue::Bool(_) => Some(ValueType::Boolean),
            SocketValue::String(_) => Some(ValueType::Text),
            SocketValue::Array(_) => Some(ValueType::List),
            SocketValue::Object(_) => Some(ValueType::Any),
            SocketValue::Null => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
            ValueType::Text => "text",
            ValueType::List => "list",
            ValueType::Any => "any",
        };
        f.write_str(name)
    }
}

/// A Rust type that can be held by a socket.
///
/// `VALUE_TYPE` is what a socket must be declared as for a typed view over
/// `Self` to be handed out.
pub trait SocketType: Sized {
    const VALUE_TYPE: ValueType;

    fn into_value(self) -> SocketValue;

    /// Returns `None` when the stored value does not decode as `Self`.
    fn from_value(value: &SocketValue) -> Option<Self>;
}

impl SocketType for f64 {
    const VALUE_TYPE: ValueType = ValueType::Number;

    fn into_value(self) -> SocketValue {
        // Non-finite floats have no JSON form and come back as `null`
        serde_json::Number::from_f64(self)
            .map(SocketValue::Number)
            .unwrap_or(SocketValue::Null)
    }

    fn from_value(value: &SocketValue) -> Option<Self> {
        value.as_f64()
    }
}

impl SocketType for i64 {
    const VALUE_TYPE: ValueType = ValueType::Number;

    fn into_value(self) -> SocketValue {
        SocketValue::from(self)
    }

    fn from_value(value: &SocketValue) -> Option<Self> {
        value.as_i64()
    }
}

impl SocketType for bool {
    const VALUE_TYPE: ValueType = ValueType::Boolean;

    fn into_value(self) -> SocketValue {
        SocketValue::Bool(self)
    }

    fn from_value(value: &SocketValue) -> Option<Self> {
        value.as_bool()
    }
}

impl SocketType for String {
    const VALUE_TYPE: ValueType = ValueType::Text;

    fn into_value(self) -> SocketValue {
        SocketValue::String(self)
    }

    fn from_value(value: &SocketValue) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl SocketType for Vec<f64> {
    const VALUE_TYPE: ValueType = ValueType::List;

    fn into_value(self) -> SocketValue {
        SocketValue::Array(self.into_iter().map(f64::into_value).collect())
    }

    fn from_value(value: &SocketValue) -> Option<Self> {
        value.as_array()?.iter().map(SocketValue::as_f64).collect()
    }
}
