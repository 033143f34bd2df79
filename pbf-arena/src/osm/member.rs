use std::fmt;

use super::layout::{MEMBER_FIXED, MEMBER_REF, MEMBER_ROLE_SIZE, MEMBER_TYPE};
use crate::memory::item::{padded_length, read_i64, read_str, read_u16, Item, ItemType, HEADER_SIZE};

/// One relation member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member<'a> {
    pub id: i64,
    pub member_type: ItemType,
    pub role: &'a str,
}

#[derive(Clone, Copy)]
pub struct RelationMemberList<'a> {
    data: &'a [u8],
}

impl<'a> RelationMemberList<'a> {
    pub(crate) fn new(item: Option<Item<'a>>) -> RelationMemberList<'a> {
        let data = match item {
            Some(item) => &item.as_bytes()[HEADER_SIZE..],
            None => &[],
        };
        RelationMemberList { data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> MemberIter<'a> {
        MemberIter {
            data: self.data,
            position: 0,
        }
    }
}

impl<'a> IntoIterator for RelationMemberList<'a> {
    type Item = Member<'a>;
    type IntoIter = MemberIter<'a>;

    fn into_iter(self) -> MemberIter<'a> {
        self.iter()
    }
}

impl fmt::Debug for RelationMemberList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct MemberIter<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Iterator for MemberIter<'a> {
    type Item = Member<'a>;

    fn next(&mut self) -> Option<Member<'a>> {
        if self.position + MEMBER_FIXED > self.data.len() {
            return None;
        }
        let at = self.position;
        let role_size = read_u16(self.data, at + MEMBER_ROLE_SIZE) as usize;
        let member = Member {
            id: read_i64(self.data, at + MEMBER_REF),
            member_type: ItemType::from_u16(read_u16(self.data, at + MEMBER_TYPE))
                .unwrap_or(ItemType::Undefined),
            role: read_str(self.data, at + MEMBER_FIXED, role_size),
        };
        self.position += MEMBER_FIXED + padded_length(role_size);
        Some(member)
    }
}
