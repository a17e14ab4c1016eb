use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
pub enum Kind {
    /// (actual, expected) payload bytes
    Truncated(usize, usize),
    /// accessor used before a successful decode
    NotDecoded,
    /// (field, value)
    Validation(&'static str, u8),
}

pub struct Error(Kind);

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error(kind)
    }

    #[inline(always)]
    pub fn kind(&self) -> &Kind {
        &self.0
    }

    #[inline(always)]
    pub fn is_truncated(&self) -> bool {
        match self.0 {
            Kind::Truncated(..) => true,
            _ => false,
        }
    }

    fn txt(&self) -> &'static str {
        match self.0 {
            Kind::Truncated(..) => "descriptor is short, more data required",
            Kind::NotDecoded => "descriptor requested before block processed",
            Kind::Validation(..) => "descriptor field is not valid",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"(:error ({:?}) (:txt "{}""#, self.0, self.txt())?;

        match self.0 {
            Kind::Truncated(actual, expected) => {
                write!(f, " (:sz-actual {} :sz-expected {})", actual, expected)?
            }
            Kind::Validation(field, value) => {
                write!(f, " (:field {} :got 0x{:02X})", field, value)?
            }
            Kind::NotDecoded => {}
        }

        write!(f, "))")
    }
}

impl StdError for Error {}

impl PartialEq for Error {
    fn eq(&self, other: &Error) -> bool {
        match (&self.0, &other.0) {
            (Kind::Truncated(a1, b1), Kind::Truncated(a2, b2)) => a1 == a2 && b1 == b2,
            (Kind::NotDecoded, Kind::NotDecoded) => true,
            (Kind::Validation(a1, b1), Kind::Validation(a2, b2)) => a1 == a2 && b1 == b2,
            _ => false,
        }
    }
}
impl Eq for Error {}
