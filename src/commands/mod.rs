//! Presentation of comparison reports
//!
//! Commands are implemented on [`crate::areas::session::Session`] and render
//! into its writer. The core never formats output itself.

pub mod compare;
