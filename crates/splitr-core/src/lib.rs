#![forbid(unsafe_code)]
//! splitr-core: shared kernel for splitr.
//!
//! This crate contains only *pure* types and small helpers. There is **no I/O**
//! here; opening, reading and writing files lives in `splitr-io`.
//!
//! Crates that use this:
//! - splitr-io: names the files it creates via `shard::shard_path`.
//! - splitr-exec: drives a `SplitPolicy` under a `SplitConfig` and emits a `SplitManifest`.
//! - splitr-cli: turns flags into a `SplitPolicy` via `SplitPolicy::from_flags`.

pub mod config;
pub mod error;
pub mod manifest;
pub mod policy;
pub mod prelude;
pub mod shard;
