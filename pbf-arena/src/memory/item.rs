use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

use crate::osm::{Changeset, Entity, Node, Relation, Way};

/// All items in a buffer start at a multiple of this many bytes.
pub const ALIGN_BYTES: usize = 8;

/// Size of the fixed item header: `u32` byte size, `u16` type, `u8` flags
/// and one reserved byte.
pub const HEADER_SIZE: usize = 8;

const SIZE_AT: usize = 0;
const TYPE_AT: usize = 4;
const FLAGS_AT: usize = 6;

const FLAG_REMOVED: u8 = 0x01;

/// Round `length` up to the next multiple of [`ALIGN_BYTES`].
pub const fn padded_length(length: usize) -> usize {
    (length + ALIGN_BYTES - 1) & !(ALIGN_BYTES - 1)
}

/// Type tag stored in every item header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ItemType {
    Undefined = 0x00,
    Node = 0x01,
    Way = 0x02,
    Relation = 0x03,
    Changeset = 0x05,
    TagList = 0x11,
    WayNodeList = 0x12,
    RelationMemberList = 0x13,
    OuterRing = 0x40,
    InnerRing = 0x41,
    ChangesetDiscussion = 0x80,
    ChangesetComment = 0x81,
}

impl ItemType {
    pub fn from_u16(value: u16) -> Option<ItemType> {
        let item_type = match value {
            0x00 => ItemType::Undefined,
            0x01 => ItemType::Node,
            0x02 => ItemType::Way,
            0x03 => ItemType::Relation,
            0x05 => ItemType::Changeset,
            0x11 => ItemType::TagList,
            0x12 => ItemType::WayNodeList,
            0x13 => ItemType::RelationMemberList,
            0x40 => ItemType::OuterRing,
            0x41 => ItemType::InnerRing,
            0x80 => ItemType::ChangesetDiscussion,
            0x81 => ItemType::ChangesetComment,
            _ => return None,
        };
        Some(item_type)
    }

    /// Node, way and relation share the OSM object layout.
    pub fn is_osm_object(self) -> bool {
        matches!(self, ItemType::Node | ItemType::Way | ItemType::Relation)
    }

    /// Top-level entity types (anything that can stand alone in a buffer).
    pub fn is_entity(self) -> bool {
        self.is_osm_object() || self == ItemType::Changeset
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Undefined => "undefined",
            ItemType::Node => "node",
            ItemType::Way => "way",
            ItemType::Relation => "relation",
            ItemType::Changeset => "changeset",
            ItemType::TagList => "tag_list",
            ItemType::WayNodeList => "way_node_list",
            ItemType::RelationMemberList => "relation_member_list",
            ItemType::OuterRing => "outer_ring",
            ItemType::InnerRing => "inner_ring",
            ItemType::ChangesetDiscussion => "changeset_discussion",
            ItemType::ChangesetComment => "changeset_comment",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn read_u16(bytes: &[u8], at: usize) -> u16 {
    LittleEndian::read_u16(&bytes[at..at + 2])
}

pub(crate) fn read_u32(bytes: &[u8], at: usize) -> u32 {
    LittleEndian::read_u32(&bytes[at..at + 4])
}

pub(crate) fn read_i32(bytes: &[u8], at: usize) -> i32 {
    LittleEndian::read_i32(&bytes[at..at + 4])
}

pub(crate) fn read_i64(bytes: &[u8], at: usize) -> i64 {
    LittleEndian::read_i64(&bytes[at..at + 8])
}

pub(crate) fn write_u16(bytes: &mut [u8], at: usize, value: u16) {
    LittleEndian::write_u16(&mut bytes[at..at + 2], value)
}

pub(crate) fn write_u32(bytes: &mut [u8], at: usize, value: u32) {
    LittleEndian::write_u32(&mut bytes[at..at + 4], value)
}

pub(crate) fn write_i32(bytes: &mut [u8], at: usize, value: i32) {
    LittleEndian::write_i32(&mut bytes[at..at + 4], value)
}

pub(crate) fn write_i64(bytes: &mut [u8], at: usize, value: i64) {
    LittleEndian::write_i64(&mut bytes[at..at + 8], value)
}

/// Write a fresh item header at the start of `bytes`.
pub(crate) fn write_header(bytes: &mut [u8], item_type: ItemType, size: u32) {
    write_u32(bytes, SIZE_AT, size);
    write_u16(bytes, TYPE_AT, item_type as u16);
    bytes[FLAGS_AT] = 0;
    bytes[FLAGS_AT + 1] = 0;
}

pub(crate) fn header_size(bytes: &[u8], at: usize) -> usize {
    read_u32(bytes, at + SIZE_AT) as usize
}

pub(crate) fn add_to_size(bytes: &mut [u8], at: usize, amount: usize) {
    let size = read_u32(bytes, at + SIZE_AT) as usize + amount;
    write_u32(bytes, at + SIZE_AT, size as u32);
}

pub(crate) fn set_removed(bytes: &mut [u8], at: usize, removed: bool) {
    if removed {
        bytes[at + FLAGS_AT] |= FLAG_REMOVED;
    } else {
        bytes[at + FLAGS_AT] &= !FLAG_REMOVED;
    }
}

/// Read a string of `len` bytes that is stored with a trailing NUL.
pub(crate) fn read_str(bytes: &[u8], at: usize, len_with_nul: usize) -> &str {
    if len_with_nul == 0 {
        return "";
    }
    std::str::from_utf8(&bytes[at..at + len_with_nul - 1]).unwrap_or_default()
}

/// A non-owning view of one item inside a buffer.
///
/// The view remembers the offset it was read from so that external indexes
/// can refer back to it, but it only ever touches the bytes of the item
/// itself.
#[derive(Clone, Copy)]
pub struct Item<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Item<'a> {
    /// View the item starting at `offset` in `data`.
    pub(crate) fn at(data: &'a [u8], offset: usize) -> Item<'a> {
        let size = header_size(data, offset);
        assert!(
            size >= HEADER_SIZE && offset + size <= data.len(),
            "corrupt item header at offset {}",
            offset
        );
        Item {
            bytes: &data[offset..offset + size],
            offset,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Size of the item in bytes, including all sub-items but without the
    /// trailing alignment padding.
    pub fn byte_size(&self) -> usize {
        self.bytes.len()
    }

    pub fn padded_size(&self) -> usize {
        padded_length(self.bytes.len())
    }

    /// Offset of the item following this one.
    pub fn next_offset(&self) -> usize {
        self.offset + self.padded_size()
    }

    pub fn item_type(&self) -> ItemType {
        ItemType::from_u16(read_u16(self.bytes, TYPE_AT)).unwrap_or(ItemType::Undefined)
    }

    pub fn is_removed(&self) -> bool {
        self.bytes[FLAGS_AT] & FLAG_REMOVED != 0
    }

    /// The raw bytes of this item, header included.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn entity(&self) -> Option<Entity<'a>> {
        match self.item_type() {
            ItemType::Node => Some(Entity::Node(Node::new(*self))),
            ItemType::Way => Some(Entity::Way(Way::new(*self))),
            ItemType::Relation => Some(Entity::Relation(Relation::new(*self))),
            ItemType::Changeset => Some(Entity::Changeset(Changeset::new(*self))),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<Node<'a>> {
        (self.item_type() == ItemType::Node).then(|| Node::new(*self))
    }

    pub fn as_way(&self) -> Option<Way<'a>> {
        (self.item_type() == ItemType::Way).then(|| Way::new(*self))
    }

    pub fn as_relation(&self) -> Option<Relation<'a>> {
        (self.item_type() == ItemType::Relation).then(|| Relation::new(*self))
    }

    pub fn as_changeset(&self) -> Option<Changeset<'a>> {
        (self.item_type() == ItemType::Changeset).then(|| Changeset::new(*self))
    }

    /// Sub-items stored from byte `start` (relative to the item) to the end.
    pub(crate) fn sub_items(&self, start: usize) -> ItemIter<'a> {
        let begin = start.min(self.bytes.len());
        ItemIter::new(self.bytes, begin, self.bytes.len())
    }
}

impl fmt::Debug for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("type", &self.item_type())
            .field("offset", &self.offset)
            .field("size", &self.byte_size())
            .field("removed", &self.is_removed())
            .finish()
    }
}

/// Forward-only iteration over consecutive items in a byte range.
#[derive(Clone)]
pub struct ItemIter<'a> {
    data: &'a [u8],
    position: usize,
    end: usize,
}

impl<'a> ItemIter<'a> {
    pub(crate) fn new(data: &'a [u8], position: usize, end: usize) -> ItemIter<'a> {
        ItemIter {
            data,
            position,
            end,
        }
    }

    /// Restrict the iteration to items of one type.
    pub fn of_type(self, item_type: ItemType) -> impl Iterator<Item = Item<'a>> {
        self.filter(move |item| item.item_type() == item_type)
    }
}

impl<'a> Iterator for ItemIter<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.end {
            return None;
        }
        let item = Item::at(&self.data[..self.end], self.position);
        self.position = item.next_offset();
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_length() {
        assert_eq!(padded_length(0), 0);
        assert_eq!(padded_length(1), 8);
        assert_eq!(padded_length(7), 8);
        assert_eq!(padded_length(8), 8);
        assert_eq!(padded_length(9), 16);
        assert_eq!(padded_length(2147483647), 2147483648);
        assert_eq!(padded_length(4294967297), 4294967304);
        assert_eq!(padded_length(8000000001), 8000000008);
    }

    #[test]
    fn test_item_type_codes() {
        for t in [
            ItemType::Node,
            ItemType::Way,
            ItemType::Relation,
            ItemType::Changeset,
            ItemType::TagList,
            ItemType::WayNodeList,
            ItemType::RelationMemberList,
            ItemType::OuterRing,
            ItemType::InnerRing,
            ItemType::ChangesetDiscussion,
            ItemType::ChangesetComment,
        ] {
            assert_eq!(ItemType::from_u16(t as u16), Some(t));
        }
        assert_eq!(ItemType::from_u16(0x04), None);
        assert!(ItemType::Way.is_osm_object());
        assert!(!ItemType::Changeset.is_osm_object());
        assert!(ItemType::Changeset.is_entity());
        assert!(!ItemType::TagList.is_entity());
    }

    #[test]
    fn test_header_round_trip() {
        let mut bytes = vec![0u8; 16];
        write_header(&mut bytes, ItemType::TagList, 13);
        add_to_size(&mut bytes, 0, 3);
        set_removed(&mut bytes, 0, true);

        let item = Item::at(&bytes, 0);
        assert_eq!(item.item_type(), ItemType::TagList);
        assert_eq!(item.byte_size(), 16);
        assert!(item.is_removed());
        assert_eq!(item.next_offset(), 16);
    }
}
