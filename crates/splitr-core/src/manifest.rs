//! Record of a completed split: what was written, where, and how much.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::policy::SplitPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardRecord {
    pub index: usize,
    pub path: PathBuf,
    pub bytes: u64,
    pub lines: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitManifest {
    pub input: PathBuf,
    pub policy: SplitPolicy,
    pub shards: Vec<ShardRecord>,
    pub started_ms: u64,
    pub finished_ms: u64,
}

impl SplitManifest {
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Bytes written across all shards. In line modes this includes any
    /// newline added to an unterminated final line.
    pub fn total_bytes(&self) -> u64 {
        self.shards.iter().map(|s| s.bytes).sum()
    }

    pub fn total_lines(&self) -> u64 {
        self.shards.iter().map(|s| s.lines).sum()
    }

    pub fn duration_ms(&self) -> u64 {
        self.finished_ms.saturating_sub(self.started_ms)
    }
}
