//! Buffered writer owning a single shard file.
//!
//! Closing is two-step: `finish` flushes the buffer (a failure there is a
//! write error and aborts the split), then `FinishedShard::close` runs the
//! caller's sync step and drops the handle. A sync failure is returned next
//! to the record so the caller may defer it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use splitr_core::manifest::ShardRecord;

use crate::error::{Error, Result};

pub struct ShardWriter {
    index: usize,
    path: PathBuf,
    out: BufWriter<File>,
    bytes: u64,
    lines: u64,
}

impl ShardWriter {
    /// Create (or truncate) the shard file at `path`.
    pub fn create(path: PathBuf, index: usize, buffer_bytes: usize) -> Result<Self> {
        let file = File::create(&path).map_err(|source| Error::Create {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            index,
            path,
            out: BufWriter::with_capacity(buffer_bytes.max(1), file),
            bytes: 0,
            lines: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    /// Append raw bytes verbatim.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.out.write_all(data).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })?;
        self.bytes += data.len() as u64;
        Ok(())
    }

    /// Append `line` followed by a single `\n`.
    pub fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.write_bytes(line)?;
        self.write_bytes(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Flush buffered data to the file.
    pub fn finish(self) -> Result<FinishedShard> {
        let ShardWriter {
            index,
            path,
            out,
            bytes,
            lines,
        } = self;
        let file = match out.into_inner() {
            Ok(file) => file,
            Err(e) => {
                return Err(Error::Write {
                    path,
                    source: e.into_error(),
                })
            }
        };
        Ok(FinishedShard {
            record: ShardRecord {
                index,
                path,
                bytes,
                lines,
            },
            file,
        })
    }
}

/// A shard whose buffer has been flushed but whose handle is still open.
pub struct FinishedShard {
    record: ShardRecord,
    file: File,
}

impl FinishedShard {
    /// Run `sync` on the handle, then release it. The record is returned even
    /// when `sync` fails so the caller can keep accounting for what reached
    /// the disk.
    pub fn close<F>(self, sync: F) -> (ShardRecord, Result<()>)
    where
        F: FnOnce(&File) -> std::io::Result<()>,
    {
        let FinishedShard { record, file } = self;
        let outcome = sync(&file).map_err(|source| Error::Close {
            path: record.path.clone(),
            source,
        });
        drop(file);
        (record, outcome)
    }
}
