use std::fmt;

use super::layout::NODE_REF_SIZE;
use super::location::Location;
use crate::memory::item::{read_i32, read_i64, Item, ItemType, HEADER_SIZE};

/// A node id as referenced from a way or ring, with the node location if
/// it is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRef {
    pub id: i64,
    pub location: Location,
}

impl NodeRef {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            location: Location::undefined(),
        }
    }

    pub fn with_location(id: i64, location: Location) -> Self {
        Self { id, location }
    }
}

/// Way nodes, outer ring or inner ring. All three share this layout.
#[derive(Clone, Copy)]
pub struct NodeRefList<'a> {
    item_type: ItemType,
    data: &'a [u8],
}

impl<'a> NodeRefList<'a> {
    pub(crate) fn new(item: Option<Item<'a>>, default_type: ItemType) -> NodeRefList<'a> {
        match item {
            Some(item) => NodeRefList {
                item_type: item.item_type(),
                data: &item.as_bytes()[HEADER_SIZE..],
            },
            None => NodeRefList {
                item_type: default_type,
                data: &[],
            },
        }
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn len(&self) -> usize {
        self.data.len() / NODE_REF_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NodeRef> {
        let at = index * NODE_REF_SIZE;
        if at + NODE_REF_SIZE > self.data.len() {
            return None;
        }
        Some(NodeRef {
            id: read_i64(self.data, at),
            location: Location::new(read_i32(self.data, at + 8), read_i32(self.data, at + 12)),
        })
    }

    pub fn first(&self) -> Option<NodeRef> {
        self.get(0)
    }

    pub fn last(&self) -> Option<NodeRef> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// First and last node are the same and there are at least two of them.
    pub fn is_closed(&self) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => self.len() > 1 && first.id == last.id,
            _ => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeRef> + 'a {
        let list = *self;
        (0..list.len()).filter_map(move |i| list.get(i))
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + 'a {
        self.iter().map(|n| n.id)
    }
}

impl fmt::Debug for NodeRefList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
