use std::fmt;

use crate::code::Code;
use crate::error::{Error, Kind as ErrorKind};
use crate::result::Result;

use super::traits::{ensure, Decoder};
use super::{Tag, TagDVB};

/// ETSI EN 300 468 V1.15.1
///
/// Country availability descriptor
///
/// ```text
/// country_availability_flag  1 bslbf
/// reserved_future_use        7 bslbf
/// for (i=0;i<N;i++) {
///     country_code          24 bslbf
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct DescDVB0x49 {
    state: Option<State>,
}

#[derive(Clone, Debug)]
struct State {
    availability_flag: bool,
    country_codes: Vec<Code>,
    consumed: usize,
    index: usize,
}

impl DescDVB0x49 {
    pub const TAG: u8 = 0x49;

    const FLAG_SZ: usize = 1;

    pub fn new() -> DescDVB0x49 {
        DescDVB0x49::default()
    }

    #[inline(always)]
    fn state(&self) -> Result<&State> {
        self.state
            .as_ref()
            .ok_or_else(|| Error::new(ErrorKind::NotDecoded))
    }

    /// true - the service is available in the listed countries,
    /// false - the listed countries are excluded
    #[inline(always)]
    pub fn availability_flag(&self) -> Result<bool> {
        self.state().map(|s| s.availability_flag)
    }

    #[inline(always)]
    pub fn country_codes(&self) -> Result<&[Code]> {
        self.state().map(|s| s.country_codes.as_slice())
    }

    /// payload bytes read by the last successful decode
    #[inline(always)]
    pub fn consumed(&self) -> Result<usize> {
        self.state().map(|s| s.consumed)
    }
}

impl Decoder for DescDVB0x49 {
    #[inline(always)]
    fn tag(&self) -> Tag {
        Tag::DVB(TagDVB::CountryAvailability)
    }

    fn decode(&mut self, buf: &[u8], offset: usize, length: usize) -> Result<usize> {
        if length == 0 {
            self.state = Some(State {
                availability_flag: false,
                country_codes: Vec::new(),
                consumed: 0,
                index: offset,
            });
            return Ok(0);
        }

        // up to 2 trailing bytes are dropped when (length - 1) is not
        // a multiple of 3; the caller seeks by the declared length anyway
        let country_count = (length - Self::FLAG_SZ) / Code::SZ;
        let consumed = Self::FLAG_SZ + Code::SZ * country_count;

        ensure(buf, offset, consumed)?;

        let availability_flag = (buf[offset] & 0b1000_0000) != 0;
        let country_codes = buf[offset + Self::FLAG_SZ..offset + consumed]
            .chunks_exact(Code::SZ)
            .map(Code::must_from_bytes_3)
            .collect();

        self.state = Some(State {
            availability_flag,
            country_codes,
            consumed,
            index: offset + consumed,
        });

        Ok(consumed)
    }

    #[inline(always)]
    fn validate(&self) -> Result<()> {
        self.state().map(|_| ())
    }

    #[inline(always)]
    fn index(&self) -> Result<usize> {
        self.state().map(|s| s.index)
    }
}

impl fmt::Display for DescDVB0x49 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (flag, codes) = match self.state {
            Some(ref s) => (s.availability_flag, s.country_codes.as_slice()),
            None => (false, &[][..]),
        };

        write!(
            f,
            "DVB COUNTRY AVAILABILITY DESCRIPTOR: Flag: {} Country codes: ",
            if flag { "True" } else { "False" }
        )?;

        if codes.is_empty() {
            return write!(f, "not present");
        }

        for (i, code) in codes.iter().enumerate() {
            if i != 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", code)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DescDVB0x49;
    use crate::descriptor::{Decoder, Tag, TagDVB};
    use crate::error::{Error, Kind as ErrorKind};
    use crate::sink::CaptureSink;

    #[test]
    fn decode_two_countries() {
        let buf = [0x80, b'G', b'B', b'R', b'U', b'S', b'A'];
        let mut d = DescDVB0x49::new();

        assert_eq!(d.decode(&buf, 0, 7), Ok(7));
        assert_eq!(d.availability_flag(), Ok(true));
        let codes = d.country_codes().unwrap();
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[0], "GBR");
        assert_eq!(codes[1], "USA");
        assert_eq!(d.consumed(), Ok(7));
        assert_eq!(d.index(), Ok(7));
        assert_eq!(d.tag(), Tag::DVB(TagDVB::CountryAvailability));
    }

    #[test]
    fn decode_flag_only() {
        let mut d = DescDVB0x49::new();

        assert_eq!(d.decode(&[0x00], 0, 1), Ok(1));
        assert_eq!(d.availability_flag(), Ok(false));
        assert_eq!(d.country_codes().map(|c| c.len()), Ok(0));
        assert_eq!(d.consumed(), Ok(1));
    }

    #[test]
    fn decode_zero_length() {
        let mut d = DescDVB0x49::new();

        assert_eq!(d.decode(&[], 0, 0), Ok(0));
        assert_eq!(d.availability_flag(), Ok(false));
        assert_eq!(d.country_codes().map(|c| c.len()), Ok(0));
        assert_eq!(d.consumed(), Ok(0));
        assert_eq!(d.index(), Ok(0));
        assert_eq!(
            d.describe(),
            "DVB COUNTRY AVAILABILITY DESCRIPTOR: Flag: False Country codes: not present"
        );
    }

    #[test]
    fn decode_at_offset() {
        let buf = [0x49, 0x04, 0xFF, b'D', b'E', b'U', 0x0A];
        let mut d = DescDVB0x49::new();

        assert_eq!(d.decode(&buf, 2, 4), Ok(4));
        assert_eq!(d.availability_flag(), Ok(true));
        assert_eq!(d.country_codes().unwrap()[0], "DEU");
        assert_eq!(d.index(), Ok(6));
    }

    #[test]
    fn flag_ignores_reserved_bits() {
        let mut d = DescDVB0x49::new();

        assert!(d.decode(&[0x7F], 0, 1).is_ok());
        assert_eq!(d.availability_flag(), Ok(false));

        assert!(d.decode(&[0xFF], 0, 1).is_ok());
        assert_eq!(d.availability_flag(), Ok(true));

        assert!(d.decode(&[0x80], 0, 1).is_ok());
        assert_eq!(d.availability_flag(), Ok(true));
    }

    #[test]
    fn trailing_bytes_dropped() {
        let buf = [0x00, 0x80, b'F', b'R', b'A', b'x', b'y'];
        let mut d = DescDVB0x49::new();

        assert_eq!(d.decode(&buf, 1, 6), Ok(4));
        assert_eq!(d.country_codes().map(|c| c.len()), Ok(1));
        assert_eq!(d.index(), Ok(1 + 4));
    }

    #[test]
    fn consumed_matches_length() {
        let buf = [0x80; 256];

        for length in 1..=255usize {
            let mut d = DescDVB0x49::new();
            let count = (length - 1) / 3;

            assert_eq!(d.decode(&buf, 0, length), Ok(1 + 3 * count));
            assert_eq!(d.country_codes().map(|c| c.len()), Ok(count));
        }
    }

    #[test]
    fn err_truncated() {
        let buf = [0x80, b'G', b'B'];
        let mut d = DescDVB0x49::new();

        assert_eq!(
            d.decode(&buf, 0, 4),
            Err(Error::new(ErrorKind::Truncated(3, 4)))
        );
        assert_eq!(d.index(), Err(Error::new(ErrorKind::NotDecoded)));
        assert_eq!(d.availability_flag(), Err(Error::new(ErrorKind::NotDecoded)));
        assert_eq!(d.consumed(), Err(Error::new(ErrorKind::NotDecoded)));
    }

    #[test]
    fn err_truncated_keeps_previous() {
        let mut d = DescDVB0x49::new();

        assert_eq!(d.decode(&[0x80, b'I', b'T', b'A'], 0, 4), Ok(4));
        assert!(d.decode(&[0x00, b'E'], 0, 4).is_err());

        assert_eq!(d.availability_flag(), Ok(true));
        assert_eq!(d.country_codes().unwrap()[0], "ITA");
        assert_eq!(d.index(), Ok(4));
    }

    #[test]
    fn err_not_decoded() {
        let d = DescDVB0x49::new();

        assert_eq!(d.index(), Err(Error::new(ErrorKind::NotDecoded)));
        assert_eq!(d.consumed(), Err(Error::new(ErrorKind::NotDecoded)));
        assert_eq!(
            d.country_codes().err(),
            Some(Error::new(ErrorKind::NotDecoded))
        );
        assert_eq!(d.validate(), Err(Error::new(ErrorKind::NotDecoded)));
    }

    #[test]
    fn validate_always_ok() {
        let mut d = DescDVB0x49::new();

        assert!(d.decode(&[0x00, b'C', b'H', b'E'], 0, 4).is_ok());
        assert_eq!(d.validate(), Ok(()));
    }

    #[test]
    fn describe() {
        let mut d = DescDVB0x49::new();

        assert_eq!(
            d.describe(),
            "DVB COUNTRY AVAILABILITY DESCRIPTOR: Flag: False Country codes: not present"
        );

        assert!(d
            .decode(&[0x80, b'G', b'B', b'R', b'U', b'S', b'A'], 0, 7)
            .is_ok());
        assert_eq!(
            d.describe(),
            "DVB COUNTRY AVAILABILITY DESCRIPTOR: Flag: True Country codes: GBR,USA"
        );
    }

    #[test]
    fn log() {
        let mut d = DescDVB0x49::new();
        let mut sink = CaptureSink::new();

        assert!(d.decode(&[0x00, b'N', b'Z', b'L'], 0, 4).is_ok());
        d.log(&mut sink);

        assert_eq!(
            sink.lines(),
            &["DVB COUNTRY AVAILABILITY DESCRIPTOR: Flag: False Country codes: NZL".to_string()]
        );
    }
}
