use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, Kind as ErrorKind};
use crate::result::Result;
use crate::sink::Sink;

use super::Tag;

/// Shared contract of every descriptor kind.
///
/// A decoder is built empty, fed once with the payload of one descriptor
/// occurrence and queried afterwards. Decoding is mechanical byte
/// consumption; semantic checks live in `validate` so a table parser can
/// decode a whole loop first and validate in a second pass.
pub trait Decoder: fmt::Display + Send {
    fn tag(&self) -> Tag;

    /// `offset` points at the first payload byte (right after the tag and
    /// length bytes), `length` is the value of the length byte.
    ///
    /// Returns the number of payload bytes consumed. Never reads past
    /// `offset + length`. On a short buffer fails with `Truncated` and
    /// leaves the previously published state untouched.
    fn decode(&mut self, buf: &[u8], offset: usize, length: usize) -> Result<usize>;

    fn validate(&self) -> Result<()>;

    /// Absolute offset of the byte following the consumed payload.
    fn index(&self) -> Result<usize>;

    /// Single diagnostic line. Works on the empty state as well.
    fn describe(&self) -> String {
        self.to_string()
    }

    fn log(&self, sink: &mut dyn Sink) {
        sink.write(&self.describe());
    }
}

/// Fails with `Truncated` unless `buf` holds `want` bytes starting at `offset`.
#[inline(always)]
pub(crate) fn ensure(buf: &[u8], offset: usize, want: usize) -> Result<()> {
    let actual = buf.len().saturating_sub(offset);

    if actual < want {
        Err(Error::new(ErrorKind::Truncated(actual, want)))
    } else {
        Ok(())
    }
}

pub trait Szer {
    fn sz(&self) -> usize;
}

pub trait TryNewer<'buf> {
    fn try_new(buf: &'buf [u8]) -> Result<Self>
    where
        Self: Sized;
}

pub struct Cursor<'buf, T> {
    buf: &'buf [u8],
    phantom: PhantomData<T>,
}

impl<'buf, T> Cursor<'buf, T> {
    #[inline(always)]
    pub fn new(buf: &'buf [u8]) -> Cursor<'buf, T> {
        Cursor {
            buf,
            phantom: PhantomData,
        }
    }

    #[inline(always)]
    fn buf_drain(&mut self) {
        self.buf = &self.buf[self.buf.len()..];
    }
}

impl<'buf, T> Iterator for Cursor<'buf, T>
where
    T: TryNewer<'buf> + Szer,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buf.is_empty() {
            return None;
        }

        let row = match T::try_new(self.buf) {
            Ok(row) => row,
            Err(e) => {
                self.buf_drain();
                return Some(Err(e));
            }
        };

        // seek buf
        if self.buf.len() > row.sz() {
            self.buf = &self.buf[row.sz()..];
        } else {
            self.buf_drain();
        }

        Some(Ok(row))
    }
}

#[cfg(test)]
mod tests {
    use super::ensure;
    use crate::error::{Error, Kind as ErrorKind};

    #[test]
    fn ensure_len() {
        let buf = [0u8; 4];

        assert!(ensure(&buf, 0, 4).is_ok());
        assert!(ensure(&buf, 4, 0).is_ok());
        assert_eq!(
            ensure(&buf, 2, 3),
            Err(Error::new(ErrorKind::Truncated(2, 3)))
        );
        assert_eq!(
            ensure(&buf, 9, 1),
            Err(Error::new(ErrorKind::Truncated(0, 1)))
        );
    }
}
