use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use serde::{Deserialize, Serialize};

use crate::memory::ItemType;

/// Set of entity types, used for read filters and iteration filters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityBits(u8);

impl EntityBits {
    pub const NOTHING: EntityBits = EntityBits(0x00);
    pub const NODE: EntityBits = EntityBits(0x01);
    pub const WAY: EntityBits = EntityBits(0x02);
    pub const RELATION: EntityBits = EntityBits(0x04);
    pub const NWR: EntityBits = EntityBits(0x07);
    pub const CHANGESET: EntityBits = EntityBits(0x10);
    pub const ALL: EntityBits = EntityBits(0x17);

    pub fn from_item_type(item_type: ItemType) -> EntityBits {
        match item_type {
            ItemType::Node => EntityBits::NODE,
            ItemType::Way => EntityBits::WAY,
            ItemType::Relation => EntityBits::RELATION,
            ItemType::Changeset => EntityBits::CHANGESET,
            _ => EntityBits::NOTHING,
        }
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: EntityBits) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(self, other: EntityBits) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for EntityBits {
    fn default() -> Self {
        EntityBits::ALL
    }
}

impl BitOr for EntityBits {
    type Output = EntityBits;

    fn bitor(self, rhs: EntityBits) -> EntityBits {
        EntityBits(self.0 | rhs.0)
    }
}

impl BitOrAssign for EntityBits {
    fn bitor_assign(&mut self, rhs: EntityBits) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for EntityBits {
    type Output = EntityBits;

    fn bitand(self, rhs: EntityBits) -> EntityBits {
        EntityBits(self.0 & rhs.0)
    }
}

impl Not for EntityBits {
    type Output = EntityBits;

    fn not(self) -> EntityBits {
        EntityBits(!self.0 & EntityBits::ALL.0)
    }
}

impl fmt::Debug for EntityBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (EntityBits::NODE, "node"),
            (EntityBits::WAY, "way"),
            (EntityBits::RELATION, "relation"),
            (EntityBits::CHANGESET, "changeset"),
        ]
        .iter()
        .filter(|(bit, _)| self.contains(*bit))
        .map(|(_, name)| *name)
        .collect();
        write!(f, "EntityBits({})", names.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ops() {
        let nw = EntityBits::NODE | EntityBits::WAY;
        assert!(nw.contains(EntityBits::NODE));
        assert!(!nw.contains(EntityBits::RELATION));
        assert!(EntityBits::NWR.contains(nw));
        assert_eq!(!EntityBits::NWR, EntityBits::CHANGESET);
        assert_eq!(nw & EntityBits::WAY, EntityBits::WAY);
        assert!((nw & EntityBits::CHANGESET).is_empty());
        assert_eq!(format!("{:?}", nw), "EntityBits(node|way)");
    }

    #[test]
    fn test_from_item_type() {
        assert_eq!(EntityBits::from_item_type(ItemType::Relation), EntityBits::RELATION);
        assert_eq!(EntityBits::from_item_type(ItemType::TagList), EntityBits::NOTHING);
    }
}
