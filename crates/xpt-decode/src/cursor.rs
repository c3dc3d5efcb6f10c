//! Forward-only byte cursor over the input stream.
//!
//! The transport layout is consumed strictly front to back, so the cursor
//! only supports exact-length reads. A read that cannot supply the requested
//! byte count fails with [`XptError::UnexpectedEof`] carrying the section
//! name and absolute offset; it never returns a short read.

use std::io::{BufReader, Read};

use crate::error::{Result, XptError};

/// Sequential reader tracking the absolute byte offset.
pub struct ByteCursor<R: Read> {
    inner: BufReader<R>,
    offset: u64,
}

impl<R: Read> ByteCursor<R> {
    /// Wrap a reader at offset zero.
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            offset: 0,
        }
    }

    /// Absolute offset of the next byte to be read.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Read exactly `len` bytes, labelled with the section being parsed.
    pub fn read_exact(&mut self, len: usize, section: &'static str) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.inner.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                XptError::UnexpectedEof {
                    section,
                    offset: self.offset,
                    expected: len,
                }
            } else {
                XptError::Io(e)
            }
        })?;
        self.offset += len as u64;
        Ok(buf)
    }

    /// Read and discard exactly `len` bytes.
    pub fn skip(&mut self, len: usize, section: &'static str) -> Result<()> {
        if len > 0 {
            self.read_exact(len, section)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_exact_advances_offset() {
        let mut cursor = ByteCursor::new(Cursor::new(b"abcdef".to_vec()));
        let first = cursor.read_exact(4, "test").unwrap();
        assert_eq!(first, b"abcd");
        assert_eq!(cursor.offset(), 4);
        let rest = cursor.read_exact(2, "test").unwrap();
        assert_eq!(rest, b"ef");
        assert_eq!(cursor.offset(), 6);
    }

    #[test]
    fn test_short_read_is_unexpected_eof() {
        let mut cursor = ByteCursor::new(Cursor::new(b"abc".to_vec()));
        let err = cursor.read_exact(8, "library header").unwrap_err();
        match err {
            XptError::UnexpectedEof {
                section,
                offset,
                expected,
            } => {
                assert_eq!(section, "library header");
                assert_eq!(offset, 0);
                assert_eq!(expected, 8);
            }
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn test_skip() {
        let mut cursor = ByteCursor::new(Cursor::new(b"abcdef".to_vec()));
        cursor.skip(0, "padding").unwrap();
        assert_eq!(cursor.offset(), 0);
        cursor.skip(4, "padding").unwrap();
        assert_eq!(cursor.offset(), 4);
        assert_eq!(cursor.read_exact(2, "test").unwrap(), b"ef");
    }
}
