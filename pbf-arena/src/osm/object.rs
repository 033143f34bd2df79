use std::fmt;

use super::changeset::Changeset;
use super::layout::{self, FLAG_VISIBLE};
use super::location::Location;
use super::member::RelationMemberList;
use super::node_ref::NodeRefList;
use super::tag::TagList;
use super::timestamp::Timestamp;
use crate::memory::item::{padded_length, read_i32, read_i64, read_str, read_u16, read_u32, Item, ItemIter, ItemType};

/// Fields shared by nodes, ways and relations.
pub trait OsmObject<'a> {
    fn item(&self) -> Item<'a>;

    fn id(&self) -> i64 {
        read_i64(self.item().as_bytes(), layout::OBJECT_ID)
    }

    fn version(&self) -> u32 {
        read_u32(self.item().as_bytes(), layout::OBJECT_VERSION)
    }

    fn changeset(&self) -> u32 {
        read_u32(self.item().as_bytes(), layout::OBJECT_CHANGESET)
    }

    fn timestamp(&self) -> Timestamp {
        Timestamp::new(read_u32(self.item().as_bytes(), layout::OBJECT_TIMESTAMP))
    }

    fn uid(&self) -> u32 {
        read_u32(self.item().as_bytes(), layout::OBJECT_UID)
    }

    fn visible(&self) -> bool {
        self.item().as_bytes()[layout::OBJECT_FLAGS] & FLAG_VISIBLE != 0
    }

    fn deleted(&self) -> bool {
        !self.visible()
    }

    fn user(&self) -> &'a str {
        entity_user(self.item())
    }

    fn tags(&self) -> TagList<'a> {
        TagList::new(sub_items(self.item()).of_type(ItemType::TagList).next())
    }

    fn is_removed(&self) -> bool {
        self.item().is_removed()
    }
}

fn entity_user(item: Item<'_>) -> &str {
    let item_type = item.item_type();
    let bytes = item.as_bytes();
    let size = read_u16(bytes, layout::user_size_at(item_type)) as usize;
    read_str(bytes, layout::fixed_size(item_type), size)
}

/// Sub-items of an entity start after the fixed part and the padded user name.
pub(crate) fn sub_items(item: Item<'_>) -> ItemIter<'_> {
    let item_type = item.item_type();
    let user_size = read_u16(item.as_bytes(), layout::user_size_at(item_type)) as usize;
    item.sub_items(layout::fixed_size(item_type) + padded_length(user_size))
}

macro_rules! object_view {
    ($name:ident) => {
        #[derive(Clone, Copy)]
        pub struct $name<'a> {
            item: Item<'a>,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(item: Item<'a>) -> $name<'a> {
                $name { item }
            }

            pub fn offset(&self) -> usize {
                self.item.offset()
            }
        }

        impl<'a> OsmObject<'a> for $name<'a> {
            fn item(&self) -> Item<'a> {
                self.item
            }
        }
    };
}

object_view!(Node);
object_view!(Way);
object_view!(Relation);

impl<'a> Node<'a> {
    pub fn location(&self) -> Location {
        let bytes = self.item.as_bytes();
        Location::new(
            read_i32(bytes, layout::NODE_LOCATION),
            read_i32(bytes, layout::NODE_LOCATION + 4),
        )
    }
}

impl<'a> Way<'a> {
    pub fn nodes(&self) -> NodeRefList<'a> {
        NodeRefList::new(
            sub_items(self.item).of_type(ItemType::WayNodeList).next(),
            ItemType::WayNodeList,
        )
    }

    pub fn is_closed(&self) -> bool {
        self.nodes().is_closed()
    }
}

impl<'a> Relation<'a> {
    pub fn members(&self) -> RelationMemberList<'a> {
        RelationMemberList::new(
            sub_items(self.item)
                .of_type(ItemType::RelationMemberList)
                .next(),
        )
    }

    /// Outer and inner rings, in the order they were added.
    pub fn rings(&self) -> impl Iterator<Item = NodeRefList<'a>> + 'a {
        sub_items(self.item)
            .filter(|i| matches!(i.item_type(), ItemType::OuterRing | ItemType::InnerRing))
            .map(|i| NodeRefList::new(Some(i), i.item_type()))
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id())
            .field("version", &self.version())
            .field("location", &self.location())
            .field("tags", &self.tags())
            .finish()
    }
}

impl fmt::Debug for Way<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Way")
            .field("id", &self.id())
            .field("version", &self.version())
            .field("nodes", &self.nodes())
            .field("tags", &self.tags())
            .finish()
    }
}

impl fmt::Debug for Relation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("id", &self.id())
            .field("version", &self.version())
            .field("members", &self.members())
            .field("tags", &self.tags())
            .finish()
    }
}

/// Any top-level item a buffer can hold.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Node(Node<'a>),
    Way(Way<'a>),
    Relation(Relation<'a>),
    Changeset(Changeset<'a>),
}

impl<'a> Entity<'a> {
    pub fn item(&self) -> Item<'a> {
        match self {
            Entity::Node(n) => n.item(),
            Entity::Way(w) => w.item(),
            Entity::Relation(r) => r.item(),
            Entity::Changeset(c) => c.item(),
        }
    }

    pub fn item_type(&self) -> ItemType {
        self.item().item_type()
    }

    pub fn id(&self) -> i64 {
        match self {
            Entity::Node(n) => n.id(),
            Entity::Way(w) => w.id(),
            Entity::Relation(r) => r.id(),
            Entity::Changeset(c) => c.id() as i64,
        }
    }

    pub fn user(&self) -> &'a str {
        entity_user(self.item())
    }

    pub fn tags(&self) -> TagList<'a> {
        match self {
            Entity::Node(n) => n.tags(),
            Entity::Way(w) => w.tags(),
            Entity::Relation(r) => r.tags(),
            Entity::Changeset(c) => c.tags(),
        }
    }
}
