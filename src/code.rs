use std::fmt;

/// Fixed-width 3-character code: ISO 3166 country code,
/// ISO 639-2 language code.
///
/// Every byte is transcribed as-is into the char of the same value,
/// nothing is validated.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Code([char; 3]);

impl Code {
    pub const SZ: usize = 3;

    /// `b` must hold at least `Code::SZ` bytes.
    #[inline(always)]
    pub fn must_from_bytes_3(b: &[u8]) -> Code {
        Code([char::from(b[0]), char::from(b[1]), char::from(b[2])])
    }

    #[inline(always)]
    pub fn chars(&self) -> [char; 3] {
        self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

impl PartialEq<&str> for Code {
    fn eq(&self, other: &&str) -> bool {
        other.chars().eq(self.0.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::Code;

    #[test]
    fn display() {
        assert_eq!(Code::must_from_bytes_3(b"GBR").to_string(), "GBR");
        assert_eq!(Code::must_from_bytes_3(b"usa"), "usa");
    }

    #[test]
    fn raw_transcription() {
        let c = Code::must_from_bytes_3(&[0x00, 0x7F, 0xE9]);

        assert_eq!(c.chars(), ['\u{0}', '\u{7F}', '\u{E9}']);
        assert_ne!(c, "GBR");
    }
}
