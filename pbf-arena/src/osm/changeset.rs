use std::fmt;

use super::layout;
use super::location::{BoundingBox, Location};
use super::object::sub_items;
use super::tag::TagList;
use super::timestamp::Timestamp;
use crate::memory::item::{read_i32, read_str, read_u16, read_u32, Item, ItemType, HEADER_SIZE};

/// View of a changeset item.
#[derive(Clone, Copy)]
pub struct Changeset<'a> {
    item: Item<'a>,
}

impl<'a> Changeset<'a> {
    pub(crate) fn new(item: Item<'a>) -> Changeset<'a> {
        Changeset { item }
    }

    pub fn item(&self) -> Item<'a> {
        self.item
    }

    pub fn offset(&self) -> usize {
        self.item.offset()
    }

    fn u32_at(&self, at: usize) -> u32 {
        read_u32(self.item.as_bytes(), at)
    }

    pub fn id(&self) -> u32 {
        self.u32_at(layout::CHANGESET_ID)
    }

    pub fn uid(&self) -> u32 {
        self.u32_at(layout::CHANGESET_UID)
    }

    pub fn created_at(&self) -> Timestamp {
        Timestamp::new(self.u32_at(layout::CHANGESET_CREATED))
    }

    pub fn closed_at(&self) -> Timestamp {
        Timestamp::new(self.u32_at(layout::CHANGESET_CLOSED))
    }

    /// A changeset without close date is still open.
    pub fn is_open(&self) -> bool {
        !self.closed_at().is_valid()
    }

    pub fn num_changes(&self) -> u32 {
        self.u32_at(layout::CHANGESET_NUM_CHANGES)
    }

    pub fn num_comments(&self) -> u32 {
        self.u32_at(layout::CHANGESET_NUM_COMMENTS)
    }

    pub fn bounds(&self) -> BoundingBox {
        let bytes = self.item.as_bytes();
        let at = layout::CHANGESET_BOUNDS;
        BoundingBox::new(
            Location::new(read_i32(bytes, at), read_i32(bytes, at + 4)),
            Location::new(read_i32(bytes, at + 8), read_i32(bytes, at + 12)),
        )
    }

    pub fn user(&self) -> &'a str {
        let bytes = self.item.as_bytes();
        let size = read_u16(bytes, layout::CHANGESET_USER_SIZE) as usize;
        read_str(bytes, layout::CHANGESET_FIXED, size)
    }

    pub fn tags(&self) -> TagList<'a> {
        TagList::new(sub_items(self.item).of_type(ItemType::TagList).next())
    }

    /// Comments, empty if the changeset carries no discussion.
    pub fn discussion(&self) -> ChangesetDiscussion<'a> {
        ChangesetDiscussion {
            item: sub_items(self.item)
                .of_type(ItemType::ChangesetDiscussion)
                .next(),
        }
    }
}

impl fmt::Debug for Changeset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Changeset")
            .field("id", &self.id())
            .field("user", &self.user())
            .field("created_at", &self.created_at())
            .field("num_changes", &self.num_changes())
            .field("tags", &self.tags())
            .finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChangesetDiscussion<'a> {
    item: Option<Item<'a>>,
}

impl<'a> ChangesetDiscussion<'a> {
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = ChangesetComment<'a>> + 'a {
        self.item
            .into_iter()
            .flat_map(|item| item.sub_items(HEADER_SIZE))
            .filter(|item| item.item_type() == ItemType::ChangesetComment)
            .map(|item| ChangesetComment { item })
    }
}

#[derive(Clone, Copy)]
pub struct ChangesetComment<'a> {
    item: Item<'a>,
}

impl<'a> ChangesetComment<'a> {
    pub fn date(&self) -> Timestamp {
        Timestamp::new(read_u32(self.item.as_bytes(), layout::COMMENT_DATE))
    }

    pub fn uid(&self) -> u32 {
        read_u32(self.item.as_bytes(), layout::COMMENT_UID)
    }

    fn user_size(&self) -> usize {
        read_u16(self.item.as_bytes(), layout::COMMENT_USER_SIZE) as usize
    }

    pub fn user(&self) -> &'a str {
        read_str(self.item.as_bytes(), layout::COMMENT_FIXED, self.user_size())
    }

    pub fn text(&self) -> &'a str {
        let bytes = self.item.as_bytes();
        let size = read_u32(bytes, layout::COMMENT_TEXT_SIZE) as usize;
        read_str(bytes, layout::COMMENT_FIXED + self.user_size(), size)
    }
}

impl fmt::Debug for ChangesetComment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangesetComment")
            .field("date", &self.date())
            .field("uid", &self.uid())
            .field("user", &self.user())
            .field("text", &self.text())
            .finish()
    }
}
