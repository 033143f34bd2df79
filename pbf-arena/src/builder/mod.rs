//! Builders append well-formed items to a [`Buffer`].
//!
//! A builder for an entity opens the item and keeps it open until it is
//! dropped or committed. Sub-item builders (tags, way nodes, members, ...)
//! borrow their parent mutably, so the compiler enforces that only one child
//! is open at a time and that children close before their parent.
//!
//! Every byte appended is added to the recorded size of all open items.
//! Closing a sub-item pads it to the alignment boundary and adds the padding
//! to the items still open, so parents always cover their padded children.

mod changeset;
mod lists;
mod object;

pub use changeset::ChangesetBuilder;
pub use lists::{DiscussionBuilder, NodeRefListBuilder, RelationMemberListBuilder, TagListBuilder};
pub use object::{NodeBuilder, RelationBuilder, WayBuilder};

use crate::error::{FormatError, Result};
use crate::memory::item::{self, padded_length, ItemType, ALIGN_BYTES};
use crate::memory::Buffer;
use crate::osm::MAX_STRING_LENGTH;

/// The open items of one builder tree.
///
/// Offsets are relative to the committed watermark of the buffer. An
/// [`AutoGrow::Internal`](crate::memory::AutoGrow::Internal) buffer moves the
/// uncommitted bytes to the front of fresh memory when it runs full, and
/// relative offsets survive that move.
pub(crate) struct Frame<'b> {
    buffer: &'b mut Buffer,
    open: Vec<usize>,
}

impl<'b> Frame<'b> {
    pub(crate) fn new(buffer: &'b mut Buffer) -> Frame<'b> {
        Frame {
            buffer,
            open: Vec::with_capacity(4),
        }
    }

    fn absolute(&self, relative: usize) -> usize {
        self.buffer.committed() + relative
    }

    /// Open a new item with `fixed_size` zeroed bytes (header included) as
    /// a child of the innermost open item.
    pub(crate) fn open(&mut self, item_type: ItemType, fixed_size: usize) -> Result<usize> {
        assert!(
            self.buffer.written() % ALIGN_BYTES == 0,
            "item opened at unaligned position {}",
            self.buffer.written()
        );
        let absolute = self.buffer.reserve_space(fixed_size)?;
        let relative = absolute - self.buffer.committed();
        item::write_header(
            &mut self.buffer.bytes_mut()[absolute..],
            item_type,
            fixed_size as u32,
        );
        self.grow_open_items(fixed_size);
        self.open.push(relative);
        Ok(relative)
    }

    /// Append the concatenation of `parts` to the innermost open item and
    /// return the relative offset the data was written at.
    pub(crate) fn append(&mut self, parts: &[&[u8]]) -> Result<usize> {
        let total: usize = parts.iter().map(|p| p.len()).sum();
        let mut at = self.buffer.reserve_space(total)?;
        let relative = at - self.buffer.committed();
        let bytes = self.buffer.bytes_mut();
        for part in parts {
            bytes[at..at + part.len()].copy_from_slice(part);
            at += part.len();
        }
        self.grow_open_items(total);
        Ok(relative)
    }

    /// Append a string with its terminating NUL, padded to alignment.
    /// Returns the stored length including the NUL.
    pub(crate) fn append_padded_str(&mut self, what: &'static str, s: &str) -> Result<usize> {
        check_string(what, s)?;
        let stored = s.len() + 1;
        let zeros = [0u8; ALIGN_BYTES];
        let padding = padded_length(stored) - stored;
        self.append(&[s.as_bytes(), &zeros[..1 + padding]])?;
        Ok(stored)
    }

    /// Close the innermost open item, which must be `relative`.
    pub(crate) fn close(&mut self, relative: usize) {
        let top = self.open.pop();
        assert_eq!(top, Some(relative), "builders closed out of order");
        let padding = self.buffer.pad_to_alignment();
        self.grow_open_items(padding);
    }

    fn grow_open_items(&mut self, amount: usize) {
        if amount == 0 {
            return;
        }
        let base = self.buffer.committed();
        let bytes = self.buffer.bytes_mut();
        for relative in &self.open {
            item::add_to_size(bytes, base + relative, amount);
        }
    }

    /// Bytes of the item at `relative`, up to the write position.
    pub(crate) fn item_mut(&mut self, relative: usize) -> &mut [u8] {
        let absolute = self.absolute(relative);
        &mut self.buffer.bytes_mut()[absolute..]
    }

    pub(crate) fn item_size(&self, relative: usize) -> usize {
        item::header_size(self.buffer.bytes(), self.absolute(relative))
    }

    pub(crate) fn commit(&mut self) -> usize {
        assert!(self.open.is_empty(), "commit() with open items");
        self.buffer.commit()
    }
}

/// Strings are stored NUL-terminated, so they can not contain NUL.
pub(crate) fn check_string(what: &'static str, s: &str) -> Result<()> {
    if s.len() > MAX_STRING_LENGTH {
        return Err(FormatError::StringTooLong {
            what,
            max: MAX_STRING_LENGTH,
        }
        .into());
    }
    check_nul(what, s)
}

pub(crate) fn check_nul(what: &'static str, s: &str) -> Result<()> {
    if s.contains('\0') {
        return Err(FormatError::NulInString(what).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::memory::{AutoGrow, ItemType};
    use crate::osm::{Location, OsmObject, Timestamp};

    #[test]
    fn test_node_builder() {
        let mut buffer = Buffer::with_capacity(1024);
        let offset = {
            let mut builder = NodeBuilder::new(&mut buffer).unwrap();
            builder
                .set_id(17)
                .set_version(3)
                .set_changeset(333)
                .set_uid(21)
                .set_timestamp(Timestamp::new(123))
                .set_location(Location::from_degrees(3.5, 4.7));
            builder.set_user("foo").unwrap();
            builder.add_tags([("amenity", "pub"), ("name", "Kneipe")]).unwrap();
            builder.commit()
        };

        let node = buffer.get(offset).as_node().unwrap();
        assert_eq!(node.id(), 17);
        assert_eq!(node.version(), 3);
        assert_eq!(node.changeset(), 333);
        assert_eq!(node.uid(), 21);
        assert_eq!(node.timestamp().seconds(), 123);
        assert!(node.visible());
        assert_eq!(node.user(), "foo");
        assert_eq!(node.location(), Location::from_degrees(3.5, 4.7));
        assert_eq!(node.tags().len(), 2);
        assert_eq!(node.tags().get("amenity"), Some("pub"));
        assert_eq!(node.tags().get("name"), Some("Kneipe"));
        assert_eq!(node.tags().get("shop"), None);
        assert_eq!(buffer.get(offset).byte_size() % ALIGN_BYTES, 0);
    }

    #[test]
    fn test_empty_node() {
        let mut buffer = Buffer::with_capacity(1024);
        let offset = NodeBuilder::new(&mut buffer).unwrap().commit();
        let node = buffer.get(offset).as_node().unwrap();
        assert_eq!(node.id(), 0);
        assert_eq!(node.user(), "");
        assert!(node.tags().is_empty());
        assert!(!node.location().is_defined());
    }

    #[test]
    fn test_way_builder() {
        let mut buffer = Buffer::with_capacity(64);
        {
            let mut builder = WayBuilder::new(&mut buffer).unwrap();
            builder.set_id(42).set_visible(false);
            builder.set_user("somebody").unwrap();
            builder.add_tags([("highway", "primary")]).unwrap();
            builder.add_node_ids([1, 2, 3, 1]).unwrap();
            builder.commit();
        }
        let way = buffer.ways().next().unwrap();
        assert_eq!(way.id(), 42);
        assert!(way.deleted());
        assert_eq!(way.user(), "somebody");
        assert_eq!(way.tags().get("highway"), Some("primary"));
        assert_eq!(way.nodes().ids().collect::<Vec<_>>(), vec![1, 2, 3, 1]);
        assert!(way.is_closed());
        assert!(!way.nodes().get(0).unwrap().location.is_defined());
    }

    #[test]
    fn test_relation_builder() {
        let mut buffer = Buffer::with_capacity(64);
        {
            let mut builder = RelationBuilder::new(&mut buffer).unwrap();
            builder.set_id(7);
            {
                let mut members = builder.members().unwrap();
                members.add_member(ItemType::Way, 10, "outer").unwrap();
                members.add_member(ItemType::Node, 11, "").unwrap();
                members
                    .add_member(ItemType::Relation, 12, "a_role_longer_than_eight")
                    .unwrap();
            }
            builder.add_tags([("type", "multipolygon")]).unwrap();
            builder.commit();
        }
        let relation = buffer.relations().next().unwrap();
        let members: Vec<_> = relation.members().iter().collect();
        assert_eq!(members.len(), 3);
        assert_eq!(members[0].member_type, ItemType::Way);
        assert_eq!(members[0].id, 10);
        assert_eq!(members[0].role, "outer");
        assert_eq!(members[1].role, "");
        assert_eq!(members[2].member_type, ItemType::Relation);
        assert_eq!(members[2].role, "a_role_longer_than_eight");
        assert_eq!(relation.tags().get("type"), Some("multipolygon"));
    }

    #[test]
    fn test_items_follow_each_other() {
        let mut buffer = Buffer::with_capacity(64);
        for id in 1..=3 {
            let mut builder = NodeBuilder::new(&mut buffer).unwrap();
            builder.set_id(id);
            builder.add_tags([("k", "v")]).unwrap();
            builder.commit();
        }
        let ids: Vec<i64> = buffer.nodes().map(|n| n.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(buffer.is_aligned());
    }

    #[test]
    fn test_string_too_long() {
        let mut buffer = Buffer::with_capacity(64);
        let mut builder = NodeBuilder::new(&mut buffer).unwrap();
        let long = "x".repeat(MAX_STRING_LENGTH + 1);
        let err = builder.set_user(&long).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Format);
        let err = builder.add_tags([(long.as_str(), "v")]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_string_with_nul() {
        let mut buffer = Buffer::with_capacity(64);
        let mut builder = NodeBuilder::new(&mut buffer).unwrap();
        let err = builder.add_tags([("name\0x", "v")]).err().unwrap();
        assert_eq!(err.format_error(), Some(&FormatError::NulInString("tag key")));

        let mut buffer = Buffer::with_capacity(64);
        let mut builder = NodeBuilder::new(&mut buffer).unwrap();
        let err = builder.add_tags([("name", "a\0b")]).err().unwrap();
        assert_eq!(err.format_error(), Some(&FormatError::NulInString("tag value")));
    }

    #[test]
    #[should_panic(expected = "set_user")]
    fn test_user_after_tags_panics() {
        let mut buffer = Buffer::with_capacity(64);
        let mut builder = NodeBuilder::new(&mut buffer).unwrap();
        builder.add_tags([("k", "v")]).unwrap();
        let _ = builder.set_user("late");
    }

    #[test]
    fn test_uncommitted_is_invisible() {
        let mut buffer = Buffer::new(256, AutoGrow::No);
        {
            let mut builder = NodeBuilder::new(&mut buffer).unwrap();
            builder.set_id(5);
        }
        assert_eq!(buffer.items().count(), 0);
        assert!(buffer.written() > 0);
        buffer.rollback();
        assert_eq!(buffer.written(), 0);
    }

    #[test]
    fn test_builder_survives_internal_move() {
        let mut buffer = Buffer::new(128, AutoGrow::Internal);
        NodeBuilder::new(&mut buffer).unwrap().commit();
        NodeBuilder::new(&mut buffer).unwrap().commit();
        {
            let mut builder = WayBuilder::new(&mut buffer).unwrap();
            builder.set_id(99);
            builder.add_tags([("name", "moved along the way")]).unwrap();
            builder.add_node_ids(1..=8).unwrap();
            builder.commit();
        }
        assert!(buffer.has_nested_buffers());
        let nested = buffer.detach_nested().unwrap();
        assert_eq!(nested.nodes().count(), 2);
        let way = buffer.ways().next().unwrap();
        assert_eq!(way.id(), 99);
        assert_eq!(way.tags().get("name"), Some("moved along the way"));
        assert_eq!(way.nodes().len(), 8);
    }
}
