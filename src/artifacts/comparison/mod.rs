//! Directory tree comparison
//!
//! - `relative_path`: cross-side matching key with a platform-neutral separator
//! - `file_stat`: size and modification time of one file
//! - `equality`: the file equality policy (metadata heuristic or byte-exact)
//! - `report`: the four-bucket result of a run
//! - `filter`: bucket selection for display
//! - `tree_diff`: the recursive lock-step walk over two roots

pub mod equality;
pub mod file_stat;
pub mod filter;
pub mod relative_path;
pub mod report;
pub mod tree_diff;
