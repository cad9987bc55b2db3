#![forbid(unsafe_code)]
//! splitr: split a file into shards by line count, file count or byte count.
//!
//! Umbrella crate re-exporting the workspace members.

pub use splitr_core;
pub use splitr_exec;
pub use splitr_io;

pub use splitr_core::prelude::*;
pub use splitr_exec::{split_file, ExecError, Splitter};
