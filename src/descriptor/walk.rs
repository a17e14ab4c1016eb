use std::fmt;

use log::{debug, warn};

use crate::result::Result;
use crate::sink::Sink;

use super::registry::Registry;
use super::traits::{Cursor, Decoder, Szer};
use super::{Descriptor, Tag};

/// Walks a descriptor loop: header, registry lookup, decode.
///
/// Unknown tags come out as entries without a decoder. A decode failure
/// is yielded as an error item and the walk goes on with the next header.
/// A `Truncated` payload means the buffer ended, so the cursor is already
/// drained and nothing follows it. The position always advances by the
/// declared length.
///
/// Validation is left to the caller, see `Entry::validate`.
pub struct Descriptors<'buf, 'r> {
    buf: &'buf [u8],
    registry: &'r Registry,
    cursor: Cursor<'buf, Descriptor<'buf>>,
    pos: usize,
}

impl<'buf, 'r> Descriptors<'buf, 'r> {
    pub fn new(buf: &'buf [u8], registry: &'r Registry) -> Descriptors<'buf, 'r> {
        Descriptors {
            buf,
            registry,
            cursor: Cursor::new(buf),
            pos: 0,
        }
    }

    /// offset of the next tag byte
    #[inline(always)]
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl<'buf, 'r> Iterator for Descriptors<'buf, 'r> {
    type Item = Result<Entry<'buf>>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = match self.cursor.next()? {
            Ok(raw) => raw,
            Err(err) => {
                warn!("descriptor header at {}: {}", self.pos, err);
                self.pos = self.buf.len();
                return Some(Err(err));
            }
        };

        let offset = self.pos;
        self.pos += raw.sz();

        let decoder = match self.registry.lookup(raw.tag_byte()) {
            Some(mut decoder) => {
                let payload = offset + Descriptor::HEADER_SZ;
                if let Err(err) = decoder.decode(self.buf, payload, usize::from(raw.len())) {
                    warn!("descriptor {:?} at {}: {}", raw.tag(), offset, err);
                    return Some(Err(err));
                }
                Some(decoder)
            }
            None => {
                debug!(
                    "skip unknown descriptor (:tag 0x{:02X} :length {})",
                    raw.tag_byte(),
                    raw.len()
                );
                None
            }
        };

        Some(Ok(Entry {
            raw,
            offset,
            decoder,
        }))
    }
}

/// One descriptor of a loop, decoded when its tag is registered.
pub struct Entry<'buf> {
    raw: Descriptor<'buf>,
    offset: usize,
    decoder: Option<Box<dyn Decoder>>,
}

impl<'buf> Entry<'buf> {
    #[inline(always)]
    pub fn tag(&self) -> Tag {
        self.raw.tag()
    }

    #[inline(always)]
    pub fn raw(&self) -> &Descriptor<'buf> {
        &self.raw
    }

    /// offset of the tag byte
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline(always)]
    pub fn decoder(&self) -> Option<&dyn Decoder> {
        self.decoder.as_deref()
    }

    #[inline(always)]
    pub fn into_decoder(self) -> Option<Box<dyn Decoder>> {
        self.decoder
    }

    #[inline(always)]
    pub fn is_known(&self) -> bool {
        self.decoder.is_some()
    }

    /// Second phase. Unknown descriptors are never rejected.
    pub fn validate(&self) -> Result<()> {
        match self.decoder {
            Some(ref d) => d.validate(),
            None => Ok(()),
        }
    }

    pub fn describe(&self) -> String {
        match self.decoder {
            Some(ref d) => d.describe(),
            None => {
                let mut s = format!(
                    "UNDEFINED DESCRIPTOR: Tag: 0x{:02X} Length: {}",
                    self.raw.tag_byte(),
                    self.raw.len()
                );
                if !self.raw.buf_data().is_empty() {
                    s.push_str(" Data:");
                    for b in self.raw.buf_data() {
                        s.push_str(&format!(" {:02X}", b));
                    }
                }
                s
            }
        }
    }

    pub fn log(&self, sink: &mut dyn Sink) {
        sink.write(&self.describe());
    }
}

impl<'buf> fmt::Debug for Entry<'buf> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":entry (:offset {} ", self.offset)?;
        fmt::Debug::fmt(&self.raw, f)?;
        write!(f, ")")
    }
}
