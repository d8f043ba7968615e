pub mod error;
pub mod event;
pub mod operation;
pub mod operations;
pub mod socket;
pub mod step;
pub mod validation;
pub mod value;
