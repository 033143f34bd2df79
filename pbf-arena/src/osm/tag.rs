use std::fmt;

use crate::memory::item::{Item, HEADER_SIZE};

/// The tags of an object: `key\0value\0` pairs stored back to back.
#[derive(Clone, Copy)]
pub struct TagList<'a> {
    data: &'a [u8],
}

impl<'a> TagList<'a> {
    pub(crate) fn new(item: Option<Item<'a>>) -> TagList<'a> {
        let data = match item {
            Some(item) => &item.as_bytes()[HEADER_SIZE..],
            None => &[],
        };
        TagList { data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> TagIter<'a> {
        TagIter { rest: self.data }
    }

    /// Value of the first tag with this key.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn has_tag(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }
}

impl<'a> IntoIterator for TagList<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = TagIter<'a>;

    fn into_iter(self) -> TagIter<'a> {
        self.iter()
    }
}

impl fmt::Debug for TagList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

pub struct TagIter<'a> {
    rest: &'a [u8],
}

fn split_cstr(bytes: &[u8]) -> Option<(&str, &[u8])> {
    let end = bytes.iter().position(|b| *b == 0)?;
    let s = std::str::from_utf8(&bytes[..end]).unwrap_or_default();
    Some((s, &bytes[end + 1..]))
}

impl<'a> Iterator for TagIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, rest) = split_cstr(self.rest)?;
        let (value, rest) = split_cstr(rest)?;
        self.rest = rest;
        Some((key, value))
    }
}
