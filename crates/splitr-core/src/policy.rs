//! Split policy: which boundary rule a split operation follows.
//!
//! Exactly one mode is active per operation. The flag-style convention of
//! three independent integers survives only in `SplitPolicy::from_flags`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "n", rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Every shard holds `n` lines; the last holds the remainder.
    ByLines(u64),
    /// Exactly `n` shards; the last absorbs `total_lines % n` extra lines.
    ByFileCount(u64),
    /// Every shard holds `n` bytes; the last holds the remainder.
    ByBytes(u64),
}

impl SplitPolicy {
    pub fn by_lines(n: u64) -> Result<Self> {
        SplitPolicy::ByLines(n).validated()
    }

    pub fn by_file_count(n: u64) -> Result<Self> {
        SplitPolicy::ByFileCount(n).validated()
    }

    pub fn by_bytes(n: u64) -> Result<Self> {
        SplitPolicy::ByBytes(n).validated()
    }

    /// Build a policy from `-l/-n/-b` style integers where zero means "unset".
    ///
    /// Negative values, no positive value, or more than one positive value are
    /// all `InvalidArgument`.
    pub fn from_flags(
        lines_per_file: i64,
        number_of_files: i64,
        bytes_per_file: i64,
    ) -> Result<Self> {
        if lines_per_file < 0 || number_of_files < 0 || bytes_per_file < 0 {
            return Err(Error::InvalidArgument(
                "lines per file, number of files and bytes per file must be non-negative".into(),
            ));
        }

        let requested = [lines_per_file, number_of_files, bytes_per_file]
            .iter()
            .filter(|v| **v > 0)
            .count();
        match requested {
            0 => Err(Error::InvalidArgument(
                "must specify one of lines per file, number of files or bytes per file".into(),
            )),
            1 if bytes_per_file > 0 => Ok(SplitPolicy::ByBytes(bytes_per_file as u64)),
            1 if number_of_files > 0 => Ok(SplitPolicy::ByFileCount(number_of_files as u64)),
            1 => Ok(SplitPolicy::ByLines(lines_per_file as u64)),
            _ => Err(Error::InvalidArgument(
                "cannot request more than one of lines per file, number of files \
                 and bytes per file"
                    .into(),
            )),
        }
    }

    /// The size parameter of whichever mode is active.
    pub fn size(&self) -> u64 {
        match *self {
            SplitPolicy::ByLines(n) | SplitPolicy::ByFileCount(n) | SplitPolicy::ByBytes(n) => n,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size() == 0 {
            return Err(Error::InvalidArgument(format!(
                "{} must be a positive integer",
                self.parameter_name()
            )));
        }
        Ok(())
    }

    fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    fn parameter_name(&self) -> &'static str {
        match self {
            SplitPolicy::ByLines(_) => "lines per file",
            SplitPolicy::ByFileCount(_) => "number of files",
            SplitPolicy::ByBytes(_) => "bytes per file",
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitPolicy::ByLines(n) => write!(f, "{} lines per file", n),
            SplitPolicy::ByFileCount(n) => write!(f, "{} files", n),
            SplitPolicy::ByBytes(n) => write!(f, "{} bytes per file", n),
        }
    }
}
