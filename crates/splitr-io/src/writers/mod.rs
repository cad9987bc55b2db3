pub mod shard;

pub use shard::{FinishedShard, ShardWriter};
