mod registry;
mod tag;
mod traits;
mod walk;

mod desc_0x0a;
mod desc_dvb_0x49;

use std::fmt;

use crate::error::{Error, Kind as ErrorKind};
use crate::result::Result;

pub use self::desc_0x0a::{AudioType, Desc0x0A, Language};
pub use self::desc_dvb_0x49::DescDVB0x49;
pub use self::registry::{Constructor, Registry};
pub use self::tag::{Tag, TagDVB};
pub use self::traits::{Cursor, Decoder, Szer, TryNewer};
pub use self::walk::{Descriptors, Entry};

/// Raw view of one descriptor inside a descriptor loop:
/// tag byte, length byte, payload.
///
/// Only the header is required to be present, the payload may be cut.
#[derive(Clone)]
pub struct Descriptor<'buf> {
    buf: &'buf [u8],
}

impl<'buf> Descriptor<'buf> {
    pub const HEADER_SZ: usize = 2;

    /// unchecked, `try_new` validates the header
    #[inline(always)]
    pub(crate) fn new(buf: &'buf [u8]) -> Descriptor<'buf> {
        Descriptor { buf }
    }

    #[inline(always)]
    pub fn validate(&self) -> Result<()> {
        if self.buf.len() < Self::HEADER_SZ {
            Err(Error::new(ErrorKind::Truncated(
                self.buf.len(),
                Self::HEADER_SZ,
            )))
        } else {
            Ok(())
        }
    }

    #[inline(always)]
    pub fn tag(&self) -> Tag {
        Tag::from(self.buf[0])
    }

    #[inline(always)]
    pub fn tag_byte(&self) -> u8 {
        self.buf[0]
    }

    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.buf[1]
    }

    /// payload present in the buffer, may be shorter than `len`
    #[inline(always)]
    pub fn buf_data(&self) -> &'buf [u8] {
        &self.buf[Self::HEADER_SZ..]
    }

    #[inline(always)]
    pub fn is_complete(&self) -> bool {
        self.buf.len() == self.sz()
    }
}

impl<'buf> Szer for Descriptor<'buf> {
    /// declared size, header included
    #[inline(always)]
    fn sz(&self) -> usize {
        Self::HEADER_SZ + (self.len() as usize)
    }
}

impl<'buf> TryNewer<'buf> for Descriptor<'buf> {
    #[inline(always)]
    fn try_new(buf: &'buf [u8]) -> Result<Descriptor<'buf>> {
        let mut d = Descriptor::new(buf);
        d.validate()?;
        d.buf = &buf[..d.sz().min(buf.len())]; // slice
        Ok(d)
    }
}

impl<'buf> fmt::Debug for Descriptor<'buf> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ":desc (:tag {:?} :length {} :data",
            self.tag(),
            self.len()
        )?;

        for b in self.buf_data() {
            write!(f, " {:02X}", b)?;
        }

        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::{Cursor, Descriptor, Szer, Tag, TagDVB, TryNewer};
    use crate::error::{Error, Kind as ErrorKind};

    #[test]
    fn cursor() {
        let buf = [0x49, 0x01, 0x80, 0x48, 0x00, 0x0A, 0x04, b'e'];
        let rows: Vec<_> = Cursor::<Descriptor>::new(&buf).collect();

        assert_eq!(rows.len(), 3);

        let d0 = rows[0].as_ref().unwrap();
        assert_eq!(d0.tag(), Tag::DVB(TagDVB::CountryAvailability));
        assert_eq!(d0.sz(), 3);
        assert!(d0.is_complete());

        let d1 = rows[1].as_ref().unwrap();
        assert_eq!(d1.tag(), Tag::DVB(TagDVB::Service));
        assert_eq!(d1.buf_data(), &[] as &[u8]);

        let d2 = rows[2].as_ref().unwrap();
        assert_eq!(d2.sz(), 6);
        assert!(!d2.is_complete());
        assert_eq!(
            format!("{:?}", d2),
            ":desc (:tag ISO639 :length 4 :data 65)"
        );
    }

    #[test]
    fn err_header() {
        let buf = [0x49];
        let mut rows = Cursor::<Descriptor>::new(&buf);

        match rows.next() {
            Some(Err(e)) => assert_eq!(e, Error::new(ErrorKind::Truncated(1, 2))),
            _ => panic!("expected header error"),
        }
        assert!(rows.next().is_none());
    }

    #[test]
    fn err_try_new_short() {
        assert_eq!(
            Descriptor::try_new(&[]).err(),
            Some(Error::new(ErrorKind::Truncated(0, 2)))
        );
        assert_eq!(
            Descriptor::try_new(&[0x49]).err(),
            Some(Error::new(ErrorKind::Truncated(1, 2)))
        );
    }
}
