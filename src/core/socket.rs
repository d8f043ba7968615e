use crate::core::error::SocketError;
use crate::core::event::{EventSink, SocketChanged};
use crate::core::value::{SocketType, SocketValue, ValueType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// Whether a socket feeds an operation or receives its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Input,
    Output,
}

/// Describes one socket of an operation's signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocketHint {
    pub identifier: String,
    pub value_type: ValueType,
    pub direction: Direction,
    /// Value the socket starts with, if any.
    pub default_value: Option<SocketValue>,
}

impl SocketHint {
    pub fn input(identifier: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            identifier: identifier.into(),
            value_type,
            direction: Direction::Input,
            default_value: None,
        }
    }

    pub fn output(identifier: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            identifier: identifier.into(),
            value_type,
            direction: Direction::Output,
            default_value: None,
        }
    }

    /// Sets the starting value. It must satisfy the hint's value type, otherwise
    /// the socket is created empty.
    pub fn with_default(mut self, value: impl Into<SocketValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// A typed, observable value holder.
///
/// The value type is taken from the hint and cannot change afterwards. Every
/// successful write is published to the sink the socket was created with.
pub struct Socket {
    id: Uuid,
    hint: SocketHint,
    value: Mutex<Option<SocketValue>>,
    sink: Arc<dyn EventSink>,
}

impl Socket {
    /// Creates a socket from its hint, starting with the hint's default value.
    pub fn new(hint: SocketHint, sink: Arc<dyn EventSink>) -> Self {
        let initial = match &hint.default_value {
            Some(default) if hint.value_type.accepts(default) => Some(default.clone()),
            Some(default) => {
                log::warn!(
                    "Default {} for socket '{}' is not a {} value, starting empty.",
                    default,
                    hint.identifier,
                    hint.value_type
                );
                None
            }
            None => None,
        };

        let id = Uuid::new_v4();
        log::trace!(
            "Created {:?} socket '{}' ({}) with id {}",
            hint.direction,
            hint.identifier,
            hint.value_type,
            id
        );

        Socket {
            id,
            hint,
            value: Mutex::new(initial),
            sink,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn identifier(&self) -> &str {
        &self.hint.identifier
    }

    pub fn value_type(&self) -> ValueType {
        self.hint.value_type
    }

    pub fn direction(&self) -> Direction {
        self.hint.direction
    }

    pub fn hint(&self) -> &SocketHint {
        &self.hint
    }

    fn slot(&self) -> MutexGuard<'_, Option<SocketValue>> {
        self.value.lock().unwrap_or_else(|poisoned| {
            log::warn!("Socket '{}' lock was poisoned, recovering.", self.identifier());
            poisoned.into_inner()
        })
    }

    /// Returns a copy of the stored value, `None` if the socket was never set.
    pub fn value(&self) -> Option<SocketValue> {
        self.slot().clone()
    }

    pub fn is_set(&self) -> bool {
        self.slot().is_some()
    }

    /// Stores `value` and publishes the change.
    ///
    /// Fails with [`SocketError::InvalidType`] if the value does not match the
    /// socket's declared type; the old value is kept and nothing is published.
    pub fn set_value(&self, value: SocketValue) -> Result<(), SocketError> {
        if !self.hint.value_type.accepts(&value) {
            let found = ValueType::of(&value)
                .map(|t| t.to_string())
                .unwrap_or_else(|| "null".to_string());
            log::warn!(
                "Rejected {} value for {} socket '{}'.",
                found,
                self.hint.value_type,
                self.identifier()
            );
            return Err(SocketError::InvalidType {
                identifier: self.identifier().to_string(),
                expected: self.hint.value_type,
                found,
            });
        }

        *self.slot() = Some(value.clone());
        log::trace!("Socket '{}' set to {}", self.identifier(), value);
        self.publish(Some(value));
        Ok(())
    }

    /// Empties the socket and publishes the change.
    pub fn clear(&self) {
        *self.slot() = None;
        self.publish(None);
    }

    // Called without the value lock held so sinks may read the socket back.
    fn publish(&self, value: Option<SocketValue>) {
        self.sink.publish(SocketChanged {
            socket_id: self.id,
            identifier: self.hint.identifier.clone(),
            direction: self.hint.direction,
            value,
        });
    }

    /// A statically typed view over this socket.
    ///
    /// `T` must map to the socket's declared type; sockets declared
    /// [`ValueType::Any`] hand out views of any type.
    pub fn typed<T: SocketType>(&self) -> Result<TypedSocket<'_, T>, SocketError> {
        let declared = self.hint.value_type;
        if declared != ValueType::Any && declared != T::VALUE_TYPE {
            return Err(SocketError::InvalidType {
                identifier: self.identifier().to_string(),
                expected: declared,
                found: T::VALUE_TYPE.to_string(),
            });
        }
        Ok(TypedSocket {
            socket: self,
            _marker: PhantomData,
        })
    }
}

impl fmt::Debug for Socket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Socket")
            .field("id", &self.id)
            .field("hint", &self.hint)
            .field("value", &self.value())
            .finish()
    }
}

/// Borrowed view of a [`Socket`] that reads and writes `T` directly.
pub struct TypedSocket<'a, T> {
    socket: &'a Socket,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: SocketType> TypedSocket<'a, T> {
    pub fn socket(&self) -> &'a Socket {
        self.socket
    }

    pub fn set_value(&self, value: T) -> Result<(), SocketError> {
        self.socket.set_value(value.into_value())
    }

    /// Reads the value, failing with [`SocketError::Unset`] if there is none.
    pub fn value(&self) -> Result<T, SocketError> {
        let raw = self.socket.value().ok_or_else(|| SocketError::Unset {
            identifier: self.socket.identifier().to_string(),
        })?;
        T::from_value(&raw).ok_or_else(|| SocketError::Decode {
            identifier: self.socket.identifier().to_string(),
            reason: format!("{} is not a {}", raw, T::VALUE_TYPE),
        })
    }
}
