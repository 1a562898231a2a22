//! `vmsim` re-exports the paging engine and its error type under one name.

pub use paging::*;
pub use vmsim_error::{Error, Result};
