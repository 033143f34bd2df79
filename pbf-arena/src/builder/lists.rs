use super::{check_nul, check_string, Frame};
use crate::error::Result;
use crate::memory::item::{self, padded_length, ItemType, ALIGN_BYTES, HEADER_SIZE};
use crate::osm::layout;
use crate::osm::{NodeRef, Timestamp};

const NUL: &[u8] = b"\0";

macro_rules! close_on_drop {
    ($name:ident) => {
        impl Drop for $name<'_, '_> {
            fn drop(&mut self) {
                self.frame.close(self.item);
            }
        }
    };
}

/// Appends `key\0value\0` pairs to a tag list.
pub struct TagListBuilder<'f, 'b> {
    frame: &'f mut Frame<'b>,
    item: usize,
}

impl<'f, 'b> TagListBuilder<'f, 'b> {
    pub(crate) fn new(frame: &'f mut Frame<'b>) -> Result<TagListBuilder<'f, 'b>> {
        let item = frame.open(ItemType::TagList, HEADER_SIZE)?;
        Ok(TagListBuilder { frame, item })
    }

    pub fn add_tag(&mut self, key: &str, value: &str) -> Result<()> {
        check_string("tag key", key)?;
        check_string("tag value", value)?;
        self.frame
            .append(&[key.as_bytes(), NUL, value.as_bytes(), NUL])?;
        Ok(())
    }
}

close_on_drop!(TagListBuilder);

/// Builds way node lists and rings.
pub struct NodeRefListBuilder<'f, 'b> {
    frame: &'f mut Frame<'b>,
    item: usize,
}

impl<'f, 'b> NodeRefListBuilder<'f, 'b> {
    pub(crate) fn new(
        frame: &'f mut Frame<'b>,
        item_type: ItemType,
    ) -> Result<NodeRefListBuilder<'f, 'b>> {
        assert!(matches!(
            item_type,
            ItemType::WayNodeList | ItemType::OuterRing | ItemType::InnerRing
        ));
        let item = frame.open(item_type, HEADER_SIZE)?;
        Ok(NodeRefListBuilder { frame, item })
    }

    pub fn add_node_ref(&mut self, node_ref: NodeRef) -> Result<()> {
        let mut entry = [0u8; layout::NODE_REF_SIZE];
        item::write_i64(&mut entry, 0, node_ref.id);
        item::write_i32(&mut entry, 8, node_ref.location.x());
        item::write_i32(&mut entry, 12, node_ref.location.y());
        self.frame.append(&[&entry[..]])?;
        Ok(())
    }
}

close_on_drop!(NodeRefListBuilder);

pub struct RelationMemberListBuilder<'f, 'b> {
    frame: &'f mut Frame<'b>,
    item: usize,
}

impl<'f, 'b> RelationMemberListBuilder<'f, 'b> {
    pub(crate) fn new(frame: &'f mut Frame<'b>) -> Result<RelationMemberListBuilder<'f, 'b>> {
        let item = frame.open(ItemType::RelationMemberList, HEADER_SIZE)?;
        Ok(RelationMemberListBuilder { frame, item })
    }

    /// `member_type` must be node, way or relation.
    pub fn add_member(&mut self, member_type: ItemType, id: i64, role: &str) -> Result<()> {
        assert!(
            member_type.is_osm_object(),
            "{} can not be a relation member",
            member_type
        );
        check_string("role", role)?;
        let stored = role.len() + 1;
        let mut fixed = [0u8; layout::MEMBER_FIXED];
        item::write_i64(&mut fixed, layout::MEMBER_REF, id);
        item::write_u16(&mut fixed, layout::MEMBER_TYPE, member_type as u16);
        item::write_u16(&mut fixed, layout::MEMBER_ROLE_SIZE, stored as u16);
        let zeros = [0u8; ALIGN_BYTES];
        let padding = padded_length(stored) - stored;
        self.frame
            .append(&[&fixed[..], role.as_bytes(), &zeros[..1 + padding]])?;
        Ok(())
    }
}

close_on_drop!(RelationMemberListBuilder);

/// Appends comments to a changeset discussion.
pub struct DiscussionBuilder<'f, 'b> {
    frame: &'f mut Frame<'b>,
    item: usize,
}

impl<'f, 'b> DiscussionBuilder<'f, 'b> {
    pub(crate) fn new(frame: &'f mut Frame<'b>) -> Result<DiscussionBuilder<'f, 'b>> {
        let item = frame.open(ItemType::ChangesetDiscussion, HEADER_SIZE)?;
        Ok(DiscussionBuilder { frame, item })
    }

    pub fn add_comment(&mut self, date: Timestamp, uid: u32, user: &str, text: &str) -> Result<()> {
        check_string("user name", user)?;
        check_nul("comment text", text)?;
        let comment = self
            .frame
            .open(ItemType::ChangesetComment, layout::COMMENT_FIXED)?;
        let user_size = user.len() + 1;
        let text_size = text.len() + 1;
        {
            let bytes = self.frame.item_mut(comment);
            item::write_u32(bytes, layout::COMMENT_DATE, date.seconds());
            item::write_u32(bytes, layout::COMMENT_UID, uid);
            item::write_u16(bytes, layout::COMMENT_USER_SIZE, user_size as u16);
            item::write_u32(bytes, layout::COMMENT_TEXT_SIZE, text_size as u32);
        }
        let appended = self
            .frame
            .append(&[user.as_bytes(), NUL, text.as_bytes(), NUL]);
        self.frame.close(comment);
        appended.map(|_| ())
    }
}

close_on_drop!(DiscussionBuilder);
