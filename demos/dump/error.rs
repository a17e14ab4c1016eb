use std::borrow::Cow;
use std::convert::Into;
use std::error::Error as StdError;
use std::fmt;
use std::io::Error as IoError;
use std::num::ParseIntError;
use std::result::Result as StdResult;

use desc::error::Error as DescError;
use url::ParseError as UrlError;

pub type Result<T> = StdResult<T, Error>;

macro_rules! from {
    ($src:path, $dst:path) => {
        impl From<$src> for Error {
            fn from(err: $src) -> Error {
                Error::new($dst(err))
            }
        }
    };
}

#[derive(Debug)]
pub enum Kind {
    InputUrl(UrlError),
    InputUrlSchemeUnsupported,
    InputUrlBadPath,
    Arg(ParseIntError),
    Io(IoError),
    Desc(DescError),
}

pub struct Error {
    pub kind: Kind,
    pub details: Option<Cow<'static, str>>,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            kind,
            details: None,
        }
    }

    pub fn new_with_details<I>(kind: Kind, details: I) -> Error
    where
        I: Into<Cow<'static, str>>,
    {
        Error {
            kind,
            details: Some(details.into()),
        }
    }

    fn txt(&self) -> &'static str {
        match self.kind {
            Kind::InputUrl(..) => "malformed input URL",
            Kind::InputUrlSchemeUnsupported => "only file:// input is supported",
            Kind::InputUrlBadPath => "input URL is not a valid file path",
            Kind::Arg(..) => "malformed numeric argument",
            Kind::Io(..) => "input read error",
            Kind::Desc(..) => "descriptor error",
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
        write!(f, r#"(:error {:?} ("{}""#, self.kind, self.txt())?;

        if let Some(details) = self.details.as_ref() {
            write!(f, r#" "{}""#, details)?;
        }

        write!(f, "))")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.kind {
            Kind::InputUrl(ref err) => Some(err),
            Kind::Arg(ref err) => Some(err),
            Kind::Io(ref err) => Some(err),
            Kind::Desc(ref err) => Some(err),
            Kind::InputUrlSchemeUnsupported | Kind::InputUrlBadPath => None,
        }
    }
}

from!(UrlError, Kind::InputUrl);
from!(ParseIntError, Kind::Arg);
from!(IoError, Kind::Io);
from!(DescError, Kind::Desc);
