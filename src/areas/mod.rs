//! Filesystem-facing components
//!
//! - `workspace`: read-only access to one root directory
//! - `session`: a validated pair of roots plus the output writer

pub mod session;
pub mod workspace;
