//! MPEG-2/DVB SI descriptor decoding.
//!
//! Every descriptor kind implements [`Decoder`]; a [`Registry`] maps tag
//! bytes to decoders and [`Descriptors`] walks a whole descriptor loop.
//!
//! ```
//! use si_desc::{Decoder, DescDVB0x49};
//!
//! let buf = [0x80, b'G', b'B', b'R', b'U', b'S', b'A'];
//! let mut d = DescDVB0x49::new();
//!
//! assert_eq!(d.decode(&buf, 0, buf.len()), Ok(7));
//! assert_eq!(
//!     d.describe(),
//!     "DVB COUNTRY AVAILABILITY DESCRIPTOR: Flag: True Country codes: GBR,USA"
//! );
//! ```

pub mod code;
pub mod descriptor;
pub mod error;
pub mod result;
pub mod sink;

pub use code::Code;
pub use descriptor::{
    AudioType, Decoder, Desc0x0A, DescDVB0x49, Descriptor, Descriptors, Entry, Language,
    Registry, Tag, TagDVB,
};
pub use error::{Error, Kind as ErrorKind};
pub use result::Result;
pub use sink::{CaptureSink, LogSink, Sink};
