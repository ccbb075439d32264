//! Stride maze CLI library.
//!
//! Argument types, output format selection, and the solve command used by
//! the `stridemaze` binary.

pub mod commands;
pub mod output;
