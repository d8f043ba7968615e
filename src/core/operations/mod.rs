//! Built-in operations.

pub mod addition;
