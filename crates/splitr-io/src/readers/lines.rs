//! Newline-delimited line reader.
//!
//! Lines are raw bytes with the trailing `\n` stripped; `\r` and invalid UTF-8
//! pass through untouched. An unterminated final segment counts as a line, an
//! empty one after the last `\n` does not.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    source: PathBuf,
}

impl LineReader<File> {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            reader: BufReader::new(file),
            source: path.to_path_buf(),
        })
    }
}

impl<R: Read> LineReader<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            source: PathBuf::from("<reader>"),
        }
    }

    /// Read the next line into `line` (cleared first). Returns `false` at
    /// end of input.
    pub fn next_line(&mut self, line: &mut Vec<u8>) -> Result<bool> {
        line.clear();
        let n = self
            .reader
            .read_until(b'\n', line)
            .map_err(|source| self.read_error(source))?;
        if n == 0 {
            return Ok(false);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        Ok(true)
    }

    /// Count the remaining lines without materializing them.
    pub fn count_lines(&mut self) -> Result<u64> {
        let mut lines = 0u64;
        let mut last = None;
        loop {
            let buf = self
                .reader
                .fill_buf()
                .map_err(|source| Error::Read {
                    path: self.source.clone(),
                    source,
                })?;
            if buf.is_empty() {
                break;
            }
            lines += buf.iter().filter(|&&b| b == b'\n').count() as u64;
            last = buf.last().copied();
            let len = buf.len();
            self.reader.consume(len);
        }
        if matches!(last, Some(b) if b != b'\n') {
            lines += 1;
        }
        Ok(lines)
    }

    fn read_error(&self, source: std::io::Error) -> Error {
        Error::Read {
            path: self.source.clone(),
            source,
        }
    }
}

impl<R: Read + Seek> LineReader<R> {
    /// Seek back to the start of the input, discarding buffered data.
    pub fn rewind(&mut self) -> Result<()> {
        self.reader
            .rewind()
            .map_err(|source| self.read_error(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(data: &[u8]) -> Vec<Vec<u8>> {
        let mut rdr = LineReader::from_reader(Cursor::new(data.to_vec()));
        let mut out = Vec::new();
        let mut line = Vec::new();
        while rdr.next_line(&mut line).unwrap() {
            out.push(line.clone());
        }
        out
    }

    #[test]
    fn strips_only_the_newline() {
        let lines = collect(b"one\ntwo\r\n\nlast");
        assert_eq!(
            lines,
            vec![b"one".to_vec(), b"two\r".to_vec(), b"".to_vec(), b"last".to_vec()]
        );
    }

    #[test]
    fn count_matches_iteration() {
        let cases: [&[u8]; 7] = [b"", b"a", b"a\n", b"a\nb", b"a\n\n", b"\n\n\n", b"x\ny\nz\n"];
        for data in cases {
            let mut rdr = LineReader::from_reader(Cursor::new(data.to_vec()));
            assert_eq!(rdr.count_lines().unwrap(), collect(data).len() as u64, "{:?}", data);
        }
    }

    #[test]
    fn rewind_allows_a_second_pass() {
        let mut rdr = LineReader::from_reader(Cursor::new(b"a\nb\nc\n".to_vec()));
        assert_eq!(rdr.count_lines().unwrap(), 3);
        rdr.rewind().unwrap();
        let mut line = Vec::new();
        assert!(rdr.next_line(&mut line).unwrap());
        assert_eq!(line, b"a");
    }
}
