//! Core utilities and shared types
//!
//! - `error`: error taxonomy shared by every comparison component
//! - `options`: the single configuration value threaded through a run

pub mod error;
pub mod options;

pub use error::{CompareError, CompareResult};
pub use options::CompareOptions;
