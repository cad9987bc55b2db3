//! Fixed-size raw chunk reader for byte-mode splitting.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub struct ChunkReader<R: Read> {
    inner: R,
    buf: Vec<u8>,
    source: PathBuf,
}

impl ChunkReader<File> {
    pub fn from_path(path: &Path, chunk_bytes: usize) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::with_source(file, chunk_bytes, path.to_path_buf()))
    }
}

impl<R: Read> ChunkReader<R> {
    pub fn from_reader(reader: R, chunk_bytes: usize) -> Self {
        Self::with_source(reader, chunk_bytes, PathBuf::from("<reader>"))
    }

    fn with_source(inner: R, chunk_bytes: usize, source: PathBuf) -> Self {
        Self {
            inner,
            buf: vec![0u8; chunk_bytes.max(1)],
            source,
        }
    }

    /// Next chunk of at most `chunk_bytes`, or `None` at end of input.
    /// A short chunk does not imply end of input.
    pub fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
        loop {
            match self.inner.read(&mut self.buf) {
                Ok(0) => return Ok(None),
                Ok(n) => return Ok(Some(&self.buf[..n])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::Read {
                        path: self.source.clone(),
                        source,
                    })
                }
            }
        }
    }
}
