//! Runtime: split one input file into shards under a `SplitPolicy` and emit a
//! `SplitManifest`.
//!
//! - Byte mode streams fixed-size chunks and cuts at exact byte offsets.
//! - Line mode opens a new shard every `n` lines.
//! - File-count mode counts lines, rewinds, then runs line mode with
//!   `total / n` lines per shard, folding the remainder into the last shard.
//!
//! Everything is sequential; one input handle and at most one shard handle
//! are open at any time.

use std::fs::File;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use splitr_core::config::SplitConfig;
use splitr_core::error::Error as CoreError;
use splitr_core::manifest::SplitManifest;
use splitr_core::policy::SplitPolicy;
use splitr_core::shard::MAX_SHARDS;
use splitr_io::{ChunkReader, LineReader};

use crate::error::ExecError;
use crate::session::SplitSession;

/// Splitter owns the tuning config; each `split` call gets its own session.
pub struct Splitter {
    cfg: SplitConfig,
}

impl Splitter {
    pub fn new(cfg: SplitConfig) -> Self {
        Self { cfg }
    }

    /// Split `input` into `<input>aa`, `<input>ab`, ... next to it.
    ///
    /// On failure, shards already written stay on disk; the input is never
    /// modified.
    pub fn split(&self, input: &Path, policy: SplitPolicy) -> Result<SplitManifest, ExecError> {
        policy.validate()?;
        self.cfg.validate()?;

        let started_ms = now_millis();

        #[cfg(feature = "tracing")]
        tracing::debug!(input = %input.display(), %policy, "starting split");

        let mut session = SplitSession::new(input, &self.cfg);
        match policy {
            SplitPolicy::ByBytes(n) => self.split_by_bytes(input, n, &mut session)?,
            SplitPolicy::ByLines(n) => {
                let mut reader = LineReader::from_path(input)?;
                split_by_lines(&mut reader, n, None, &mut session)?;
            }
            SplitPolicy::ByFileCount(n) => split_by_file_count(input, n, &mut session)?,
        }
        let shards = session.finish()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(input = %input.display(), shards = shards.len(), "split finished");

        Ok(SplitManifest {
            input: input.to_path_buf(),
            policy,
            shards,
            started_ms,
            finished_ms: now_millis(),
        })
    }

    fn split_by_bytes(
        &self,
        input: &Path,
        bytes_per_file: u64,
        session: &mut SplitSession<'_>,
    ) -> Result<(), ExecError> {
        let mut reader = ChunkReader::from_path(input, self.cfg.read_chunk_bytes)?;
        while let Some(chunk) = reader.next_chunk()? {
            #[cfg(feature = "tracing")]
            tracing::trace!(len = chunk.len(), "read chunk");

            let mut rest = chunk;
            while !rest.is_empty() {
                // Shards are opened lazily so input ending on a boundary
                // leaves no empty trailing shard.
                let writer = session.ensure_open()?;
                let room = bytes_per_file - writer.bytes_written();
                let take = usize::try_from(room).map_or(rest.len(), |room| room.min(rest.len()));
                writer.write_bytes(&rest[..take])?;
                rest = &rest[take..];
                if writer.bytes_written() == bytes_per_file {
                    session.close_current()?;
                }
            }
        }
        Ok(())
    }
}

fn split_by_file_count(
    input: &Path,
    number_of_files: u64,
    session: &mut SplitSession<'_>,
) -> Result<(), ExecError> {
    if number_of_files > MAX_SHARDS as u64 {
        return Err(CoreError::ShardLimitExceeded {
            index: (number_of_files - 1) as usize,
            limit: MAX_SHARDS,
        }
        .into());
    }

    let mut reader = LineReader::from_path(input)?;
    let total_lines = reader.count_lines()?;
    if total_lines == 0 {
        return Ok(());
    }
    if number_of_files > total_lines {
        return Err(CoreError::InvalidArgument(format!(
            "number of files ({}) exceeds the number of lines ({}) in {}",
            number_of_files,
            total_lines,
            input.display()
        ))
        .into());
    }
    reader.rewind()?;

    let lines_per_file = total_lines / number_of_files;
    split_by_lines(&mut reader, lines_per_file, Some(number_of_files), session)
}

/// Write lines into shards of `lines_per_file`. With `max_shards`, once that
/// many shards exist every further line goes into the last one.
fn split_by_lines(
    reader: &mut LineReader<File>,
    lines_per_file: u64,
    max_shards: Option<u64>,
    session: &mut SplitSession<'_>,
) -> Result<(), ExecError> {
    let mut line = Vec::new();
    let mut line_index = 0u64;
    while reader.next_line(&mut line)? {
        let at_boundary = line_index % lines_per_file == 0;
        let capped = max_shards.is_some_and(|max| session.shards_opened() as u64 >= max);
        let writer = if at_boundary && !capped {
            session.open_next()?
        } else {
            session.ensure_open()?
        };
        writer.write_line(&line)?;
        line_index += 1;
    }
    Ok(())
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
