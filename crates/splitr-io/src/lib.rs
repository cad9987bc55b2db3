#![forbid(unsafe_code)]
//! splitr-io: streaming readers and shard writers.
//!
//! - `readers`: fixed-size chunk reader (byte mode) and newline-delimited
//!   line reader with a counting pass and rewind (line modes).
//! - `writers`: buffered `ShardWriter` that owns exactly one output file.

pub mod readers;
pub mod writers;

pub mod error;

pub use readers::{ChunkReader, LineReader};
pub use writers::{FinishedShard, ShardWriter};
