//! Comparison data structures and algorithms
//!
//! - `comparison`: equality policy, tree walk and the resulting report
//! - `core`: errors and options shared across the crate

pub mod comparison;
pub mod core;
