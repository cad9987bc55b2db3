#![forbid(unsafe_code)]
//! splitr-exec: the split runtime.
//!
//! `Splitter::split` is the typed entry point; `split_file` keeps the
//! flag-style contract (three integers, zero meaning "unset") for callers
//! that have not parsed their input into a `SplitPolicy`.

pub mod error;
pub mod runtime;
pub mod session;

use std::path::Path;

use splitr_core::config::SplitConfig;
use splitr_core::manifest::SplitManifest;
use splitr_core::policy::SplitPolicy;

pub use error::ExecError;
pub use runtime::Splitter;
pub use session::SplitSession;

/// Split `input` with default tuning. Exactly one of the three sizes must be
/// positive and none may be negative.
pub fn split_file(
    input: impl AsRef<Path>,
    lines_per_file: i64,
    number_of_files: i64,
    bytes_per_file: i64,
) -> Result<SplitManifest, ExecError> {
    let policy = SplitPolicy::from_flags(lines_per_file, number_of_files, bytes_per_file)?;
    Splitter::new(SplitConfig::default()).split(input.as_ref(), policy)
}
