//! Per-operation session: which shard is open and what has been written.
//!
//! At most one `ShardWriter` is alive at a time. A new shard is only created
//! after the previous one has been flushed and closed, and indices are handed
//! out contiguously from 0. Dropping the session on an error path drops the
//! open writer, which releases its handle.

use std::fs::File;
use std::io;
use std::path::Path;

use splitr_core::config::SplitConfig;
use splitr_core::manifest::ShardRecord;
use splitr_core::shard::shard_path;
use splitr_io::error::Error as IoError;
use splitr_io::ShardWriter;

use crate::error::ExecError;

pub struct SplitSession<'a> {
    input: &'a Path,
    cfg: &'a SplitConfig,
    next_index: usize,
    current: Option<ShardWriter>,
    closed: Vec<ShardRecord>,
    // Run on each shard's handle after its buffer is flushed.
    sync: fn(&File) -> io::Result<()>,
    // First close-time failure; reported only if nothing worse happens.
    deferred: Option<IoError>,
}

fn skip_sync(_: &File) -> io::Result<()> {
    Ok(())
}

impl<'a> SplitSession<'a> {
    pub fn new(input: &'a Path, cfg: &'a SplitConfig) -> Self {
        Self {
            input,
            cfg,
            next_index: 0,
            current: None,
            closed: Vec::new(),
            sync: if cfg.sync_on_close {
                File::sync_all
            } else {
                skip_sync
            },
            deferred: None,
        }
    }

    #[cfg(test)]
    fn with_sync(
        input: &'a Path,
        cfg: &'a SplitConfig,
        sync: fn(&File) -> io::Result<()>,
    ) -> Self {
        Self {
            sync,
            ..Self::new(input, cfg)
        }
    }

    /// Number of shards created so far, including the open one.
    pub fn shards_opened(&self) -> usize {
        self.next_index
    }

    /// Close the open shard (if any) and start the next one.
    pub fn open_next(&mut self) -> Result<&mut ShardWriter, ExecError> {
        self.close_current()?;
        let writer = self.create_next()?;
        Ok(self.current.insert(writer))
    }

    /// The open shard, starting a new one if none is open.
    pub fn ensure_open(&mut self) -> Result<&mut ShardWriter, ExecError> {
        let writer = match self.current.take() {
            Some(writer) => writer,
            None => self.create_next()?,
        };
        Ok(self.current.insert(writer))
    }

    /// Flush and close the open shard. A flush failure aborts; an fsync
    /// failure is remembered and surfaced by `finish`.
    pub fn close_current(&mut self) -> Result<(), ExecError> {
        let Some(writer) = self.current.take() else {
            return Ok(());
        };
        let (record, outcome) = writer.finish()?.close(self.sync);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            index = record.index,
            path = %record.path.display(),
            bytes = record.bytes,
            lines = record.lines,
            "closed shard"
        );

        if let Err(e) = outcome {
            self.deferred.get_or_insert(e);
        }
        self.closed.push(record);
        Ok(())
    }

    /// Close whatever is open and hand back the shard records in index order.
    pub fn finish(mut self) -> Result<Vec<ShardRecord>, ExecError> {
        self.close_current()?;
        if let Some(e) = self.deferred.take() {
            return Err(e.into());
        }
        Ok(std::mem::take(&mut self.closed))
    }

    fn create_next(&mut self) -> Result<ShardWriter, ExecError> {
        let index = self.next_index;
        let path = shard_path(self.input, index)?;
        let writer = ShardWriter::create(path, index, self.cfg.write_buffer_bytes)?;
        self.next_index += 1;

        #[cfg(feature = "tracing")]
        tracing::debug!(index, path = %writer.path().display(), "opened shard");

        Ok(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn indices_are_contiguous_and_one_shard_is_open() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let cfg = SplitConfig::default();
        let mut session = SplitSession::new(&input, &cfg);

        session.open_next().unwrap().write_line(b"a").unwrap();
        session.ensure_open().unwrap().write_line(b"b").unwrap();
        assert_eq!(session.shards_opened(), 1);

        session.open_next().unwrap().write_line(b"c").unwrap();
        assert_eq!(session.shards_opened(), 2);

        let records = session.finish().unwrap();
        assert_eq!(records.iter().map(|r| r.index).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(records[0].lines, 2);
        assert_eq!(records[1].lines, 1);
        assert_eq!(fs::read(dir.path().join("in.txtaa")).unwrap(), b"a\nb\n");
        assert_eq!(fs::read(dir.path().join("in.txtab")).unwrap(), b"c\n");
    }

    #[test]
    fn close_then_ensure_open_starts_a_new_shard() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let cfg = SplitConfig::default();
        let mut session = SplitSession::new(&input, &cfg);

        session.ensure_open().unwrap().write_bytes(b"xy").unwrap();
        session.close_current().unwrap();
        session.close_current().unwrap();
        assert_eq!(session.shards_opened(), 1);
        session.ensure_open().unwrap().write_bytes(b"z").unwrap();

        assert_eq!(session.shards_opened(), 2);

        let records = session.finish().unwrap();
        assert_eq!(records.iter().map(|r| r.bytes).collect::<Vec<_>>(), vec![2, 1]);
    }

    fn failing_sync(_: &File) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "device gone"))
    }

    #[test]
    fn sync_failure_is_reported_after_remaining_shards_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let cfg = SplitConfig::default();
        let mut session = SplitSession::with_sync(&input, &cfg, failing_sync);

        session.open_next().unwrap().write_line(b"first").unwrap();
        session.open_next().unwrap().write_line(b"second").unwrap();
        assert_eq!(session.shards_opened(), 2);

        match session.finish() {
            Err(ExecError::Io(IoError::Close { path, .. })) => {
                assert_eq!(path, dir.path().join("in.txtaa"));
            }
            other => panic!("expected Close error for shard 0, got {:?}", other),
        }
        assert_eq!(fs::read(dir.path().join("in.txtaa")).unwrap(), b"first\n");
        assert_eq!(fs::read(dir.path().join("in.txtab")).unwrap(), b"second\n");
    }

    #[test]
    fn later_create_failure_replaces_deferred_sync_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::create_dir(dir.path().join("in.txtab")).unwrap();
        let cfg = SplitConfig::default();
        let mut session = SplitSession::with_sync(&input, &cfg, failing_sync);

        session.open_next().unwrap().write_line(b"first").unwrap();
        match session.open_next() {
            Err(ExecError::Io(IoError::Create { path, .. })) => {
                assert_eq!(path, dir.path().join("in.txtab"));
            }
            Err(other) => panic!("expected Create error, got {:?}", other),
            Ok(_) => panic!("expected Create error"),
        }
        assert_eq!(fs::read(dir.path().join("in.txtaa")).unwrap(), b"first\n");
    }

    #[test]
    fn untouched_session_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let cfg = SplitConfig::default();
        let session = SplitSession::new(&input, &cfg);
        assert!(session.finish().unwrap().is_empty());
        assert!(!dir.path().join("in.txtaa").exists());
    }
}
