//! Convenience re-exports for downstream crates.

pub use crate::config::SplitConfig;
pub use crate::error::{Error, Result};
pub use crate::manifest::{ShardRecord, SplitManifest};
pub use crate::policy::SplitPolicy;
pub use crate::shard::{shard_path, shard_suffix, MAX_SHARDS};
