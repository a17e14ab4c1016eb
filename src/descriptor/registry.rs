use std::collections::HashMap;
use std::fmt;

use super::traits::Decoder;
use super::{Desc0x0A, DescDVB0x49};

pub type Constructor = fn() -> Box<dyn Decoder>;

/// Maps a descriptor tag byte to the constructor of its decoder.
#[derive(Clone)]
pub struct Registry {
    entries: HashMap<u8, Constructor>,
}

impl Registry {
    /// Empty registry, every tag is unknown.
    pub fn new() -> Registry {
        Registry {
            entries: HashMap::new(),
        }
    }

    /// Replaces any constructor already registered for `tag`.
    pub fn register(&mut self, tag: u8, ctor: Constructor) -> &mut Registry {
        self.entries.insert(tag, ctor);
        self
    }

    #[inline(always)]
    pub fn contains(&self, tag: u8) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Fresh, empty decoder for `tag`.
    #[inline(always)]
    pub fn lookup(&self, tag: u8) -> Option<Box<dyn Decoder>> {
        self.entries.get(&tag).map(|ctor| ctor())
    }
}

impl Default for Registry {
    fn default() -> Registry {
        let mut r = Registry::new();
        r.register(Desc0x0A::TAG, || Box::new(Desc0x0A::new()))
            .register(DescDVB0x49::TAG, || Box::new(DescDVB0x49::new()));
        r
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&u8> = self.entries.keys().collect();
        tags.sort();

        write!(f, ":registry (:tags")?;
        for tag in tags {
            write!(f, " 0x{:02X}", tag)?;
        }
        write!(f, ")")
    }
}
