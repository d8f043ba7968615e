//! # grip-core
//!
//! Typed, observable sockets and pure operations, the smallest building blocks
//! of an image-processing pipeline.
//!
//! ## Features
//!
//! - **Typed Sockets**: every socket is declared with a value type that never changes
//! - **Observable**: each successful write is published to the sink the socket was built with
//! - **Pure Operations**: an operation declares its socket signature and computes outputs from inputs
//! - **No Globals**: notification sinks are passed in explicitly
//! - **Optional tokio Channel**: forward change events to async code (feature `channel`)
//!
//! ## Quick Start
//!
//! ```rust
//! use grip_core::prelude::*;
//! use std::sync::Arc;
//!
//! let addition = AdditionOperation;
//! let sink: Arc<dyn EventSink> = Arc::new(EventBus::new());
//!
//! let inputs = addition.create_input_sockets(sink.clone());
//! let outputs = addition.create_output_sockets(sink);
//!
//! inputs[0].typed::<f64>()?.set_value(1234.0)?;
//! inputs[1].typed::<f64>()?.set_value(5678.0)?;
//! addition.perform(&inputs, &outputs)?;
//!
//! assert_eq!(outputs[0].typed::<f64>()?.value()?, 6912.0);
//! # Ok::<(), OperationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`prelude`]: Commonly used types and traits (import with `use grip_core::prelude::*`)
//! - [`operations`]: Built-in operations

// ============================================================================
// Core Module
// ============================================================================

mod core;

// ============================================================================
// Public Re-exports - Granular Imports
// ============================================================================

pub use crate::core::error::{OperationError, SocketError};
pub use crate::core::event::{EventBus, EventSink, MemoryEventSink, NullEventSink, SocketChanged};
pub use crate::core::operation::{require_inputs, Operation};
pub use crate::core::socket::{Direction, Socket, SocketHint, TypedSocket};
pub use crate::core::step::Step;
pub use crate::core::validation::{ValidationIssue, ValidationResult};
pub use crate::core::value::{SocketType, SocketValue, ValueType};

#[cfg(feature = "channel")]
pub use crate::core::event::ChannelEventSink;

/// Built-in operations.
pub mod operations {
    pub use crate::core::operations::addition::AdditionOperation;
}

// ============================================================================
// Prelude Module - Convenient Bulk Imports
// ============================================================================

/// Imports everything needed to create sockets, fill them and run operations.
///
/// # Example
/// ```rust
/// use grip_core::prelude::*;
/// ```
pub mod prelude {
    pub use super::operations::AdditionOperation;
    pub use super::{
        Direction, EventBus, EventSink, MemoryEventSink, NullEventSink, Operation,
        OperationError, Socket, SocketChanged, SocketError, SocketHint, SocketType, SocketValue,
        Step, TypedSocket, ValidationIssue, ValidationResult, ValueType,
    };

    #[cfg(feature = "channel")]
    pub use super::ChannelEventSink;
}

// ============================================================================
// Library Metadata
// ============================================================================

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate.
pub const NAME: &str = env!("CARGO_PKG_NAME");
