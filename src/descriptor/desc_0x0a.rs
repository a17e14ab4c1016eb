use std::fmt;

use crate::code::Code;
use crate::error::{Error, Kind as ErrorKind};
use crate::result::Result;

use super::traits::{ensure, Decoder};
use super::Tag;

/// ISO/IEC 13818-1
///
/// ISO 639 language descriptor
#[derive(Clone, Debug, Default)]
pub struct Desc0x0A {
    languages: Option<Vec<Language>>,
    index: usize,
}

impl Desc0x0A {
    pub const TAG: u8 = 0x0A;

    pub fn new() -> Desc0x0A {
        Desc0x0A::default()
    }

    #[inline(always)]
    pub fn languages(&self) -> Result<&[Language]> {
        self.languages
            .as_deref()
            .ok_or_else(|| Error::new(ErrorKind::NotDecoded))
    }
}

impl Decoder for Desc0x0A {
    #[inline(always)]
    fn tag(&self) -> Tag {
        Tag::ISO639
    }

    fn decode(&mut self, buf: &[u8], offset: usize, length: usize) -> Result<usize> {
        let consumed = (length / Language::SZ) * Language::SZ;

        ensure(buf, offset, consumed)?;

        self.languages = Some(
            buf[offset..offset + consumed]
                .chunks_exact(Language::SZ)
                .map(Language::must_from_bytes_4)
                .collect(),
        );
        self.index = offset + consumed;

        Ok(consumed)
    }

    fn validate(&self) -> Result<()> {
        for l in self.languages()? {
            if l.audio_type().is_reserved() {
                return Err(Error::new(ErrorKind::Validation(
                    "audio_type",
                    u8::from(l.audio_type()),
                )));
            }
        }

        Ok(())
    }

    #[inline(always)]
    fn index(&self) -> Result<usize> {
        self.languages().map(|_| self.index)
    }
}

impl fmt::Display for Desc0x0A {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ISO 639 LANGUAGE DESCRIPTOR: Languages: ")?;

        let languages = self.languages().unwrap_or(&[]);
        if languages.is_empty() {
            return write!(f, "not present");
        }

        for (i, l) in languages.iter().enumerate() {
            if i != 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", l)?;
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Language {
    code: Code,
    audio_type: AudioType,
}

impl Language {
    const SZ: usize = 4;

    #[inline(always)]
    fn must_from_bytes_4(b: &[u8]) -> Language {
        Language {
            code: Code::must_from_bytes_3(b),
            audio_type: AudioType::from(b[3]),
        }
    }

    #[inline(always)]
    pub fn iso_639_language_code(&self) -> Code {
        self.code
    }

    #[inline(always)]
    pub fn audio_type(&self) -> AudioType {
        self.audio_type
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/0x{:02X}", self.code, u8::from(self.audio_type))
    }
}

/// ISO/IEC 13818-1 Table 2-60
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AudioType {
    Undefined,
    CleanEffects,
    HearingImpaired,
    VisualImpairedCommentary,

    /// 0x04...0x7F
    UserPrivate(u8),

    /// 0x80...0xFF
    Reserved(u8),
}

impl AudioType {
    #[inline(always)]
    pub fn is_reserved(self) -> bool {
        match self {
            AudioType::Reserved(..) => true,
            _ => false,
        }
    }
}

impl From<u8> for AudioType {
    fn from(d: u8) -> Self {
        match d {
            0x00 => AudioType::Undefined,
            0x01 => AudioType::CleanEffects,
            0x02 => AudioType::HearingImpaired,
            0x03 => AudioType::VisualImpairedCommentary,
            0x04..=0x7F => AudioType::UserPrivate(d),
            0x80..=0xFF => AudioType::Reserved(d),
        }
    }
}

impl From<AudioType> for u8 {
    fn from(a: AudioType) -> u8 {
        match a {
            AudioType::Undefined => 0x00,
            AudioType::CleanEffects => 0x01,
            AudioType::HearingImpaired => 0x02,
            AudioType::VisualImpairedCommentary => 0x03,
            AudioType::UserPrivate(d) | AudioType::Reserved(d) => d,
        }
    }
}
