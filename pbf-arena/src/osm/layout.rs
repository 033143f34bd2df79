//! Byte offsets of the fixed fields of each item type, relative to the start
//! of the item header. All multi-byte values are little endian.

use crate::memory::ItemType;

/// Strings stored in items (user names, tag keys and values, roles) are
/// limited to this many bytes.
pub const MAX_STRING_LENGTH: usize = 1024;

// Node, way and relation.
pub(crate) const OBJECT_ID: usize = 8;
pub(crate) const OBJECT_VERSION: usize = 16;
pub(crate) const OBJECT_CHANGESET: usize = 20;
pub(crate) const OBJECT_TIMESTAMP: usize = 24;
pub(crate) const OBJECT_UID: usize = 28;
pub(crate) const OBJECT_USER_SIZE: usize = 32;
pub(crate) const OBJECT_FLAGS: usize = 34;
pub(crate) const OBJECT_FIXED: usize = 40;

pub(crate) const NODE_LOCATION: usize = 40;
pub(crate) const NODE_FIXED: usize = 48;

pub(crate) const FLAG_VISIBLE: u8 = 0x01;

pub(crate) const CHANGESET_ID: usize = 8;
pub(crate) const CHANGESET_UID: usize = 12;
pub(crate) const CHANGESET_CREATED: usize = 16;
pub(crate) const CHANGESET_CLOSED: usize = 20;
pub(crate) const CHANGESET_NUM_CHANGES: usize = 24;
pub(crate) const CHANGESET_NUM_COMMENTS: usize = 28;
pub(crate) const CHANGESET_BOUNDS: usize = 32;
pub(crate) const CHANGESET_USER_SIZE: usize = 48;
pub(crate) const CHANGESET_FIXED: usize = 56;

// One way node: ref id, then x and y.
pub(crate) const NODE_REF_SIZE: usize = 16;

// Fixed part of one relation member; the role follows, padded.
pub(crate) const MEMBER_REF: usize = 0;
pub(crate) const MEMBER_TYPE: usize = 8;
pub(crate) const MEMBER_ROLE_SIZE: usize = 10;
pub(crate) const MEMBER_FIXED: usize = 16;

pub(crate) const COMMENT_DATE: usize = 8;
pub(crate) const COMMENT_UID: usize = 12;
pub(crate) const COMMENT_USER_SIZE: usize = 16;
pub(crate) const COMMENT_TEXT_SIZE: usize = 20;
pub(crate) const COMMENT_FIXED: usize = 24;

/// Size of the fixed part of a top-level entity, where its user name starts.
pub(crate) fn fixed_size(item_type: ItemType) -> usize {
    match item_type {
        ItemType::Node => NODE_FIXED,
        ItemType::Way | ItemType::Relation => OBJECT_FIXED,
        ItemType::Changeset => CHANGESET_FIXED,
        other => panic!("{} is not an entity", other),
    }
}

pub(crate) fn user_size_at(item_type: ItemType) -> usize {
    if item_type == ItemType::Changeset {
        CHANGESET_USER_SIZE
    } else {
        OBJECT_USER_SIZE
    }
}
