//! Tuning knobs for a split operation. None of these change where shard
//! boundaries fall; they only affect how the bytes get there.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_READ_CHUNK_BYTES: usize = 4096;
pub const DEFAULT_WRITE_BUFFER_BYTES: usize = 8192;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Size of each raw read in byte mode.
    pub read_chunk_bytes: usize,
    /// Capacity of the buffered writer wrapped around each shard.
    pub write_buffer_bytes: usize,
    /// fsync each shard as it is closed.
    pub sync_on_close: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            read_chunk_bytes: DEFAULT_READ_CHUNK_BYTES,
            write_buffer_bytes: DEFAULT_WRITE_BUFFER_BYTES,
            sync_on_close: false,
        }
    }
}

impl SplitConfig {
    /// Defaults overridden by `SPLITR_READ_CHUNK_BYTES`,
    /// `SPLITR_WRITE_BUFFER_BYTES` and `SPLITR_SYNC_ON_CLOSE`.
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(v) = lookup("SPLITR_READ_CHUNK_BYTES").and_then(|s| s.trim().parse().ok()) {
            cfg.read_chunk_bytes = v;
        }
        if let Some(v) = lookup("SPLITR_WRITE_BUFFER_BYTES").and_then(|s| s.trim().parse().ok()) {
            cfg.write_buffer_bytes = v;
        }
        if let Some(v) = lookup("SPLITR_SYNC_ON_CLOSE").and_then(|s| parse_bool(&s)) {
            cfg.sync_on_close = v;
        }
        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.read_chunk_bytes == 0 {
            return Err(Error::Config("read chunk size must be positive".into()));
        }
        if self.write_buffer_bytes == 0 {
            return Err(Error::Config("write buffer size must be positive".into()));
        }
        Ok(())
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
