//! Shard naming.
//!
//! `name(i) = input + ('a' + i / 26) + ('a' + i % 26)`: `aa`, `ab`, ..., `az`,
//! `ba`, ... `zz`. Every mode names its outputs through `shard_path`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Number of shards a two-letter base-26 suffix can name.
pub const MAX_SHARDS: usize = 26 * 26;

pub fn shard_suffix(index: usize) -> Result<String> {
    if index >= MAX_SHARDS {
        return Err(Error::ShardLimitExceeded {
            index,
            limit: MAX_SHARDS,
        });
    }
    let hi = (b'a' + (index / 26) as u8) as char;
    let lo = (b'a' + (index % 26) as u8) as char;
    Ok([hi, lo].iter().collect())
}

/// Output path for shard `index`: the input path with the suffix appended
/// verbatim (no extension handling, same directory as the input).
pub fn shard_path(input: &Path, index: usize) -> Result<PathBuf> {
    let suffix = shard_suffix(index)?;
    let mut name: OsString = input.as_os_str().to_owned();
    name.push(suffix);
    Ok(PathBuf::from(name))
}
