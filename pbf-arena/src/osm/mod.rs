//! Zero-copy views of OSM entities stored in a [`Buffer`](crate::memory::Buffer).
//!
//! Views borrow the buffer. They are cheap to copy and can not outlive it.

mod changeset;
mod entity_bits;
pub(crate) mod layout;
mod location;
mod member;
mod node_ref;
mod object;
mod tag;
mod timestamp;

pub use changeset::{Changeset, ChangesetComment, ChangesetDiscussion};
pub use entity_bits::EntityBits;
pub use layout::MAX_STRING_LENGTH;
pub use location::{BoundingBox, Location, COORDINATE_PRECISION};
pub use member::{Member, MemberIter, RelationMemberList};
pub use node_ref::{NodeRef, NodeRefList};
pub use object::{Entity, Node, OsmObject, Relation, Way};
pub use tag::{TagIter, TagList};
pub use timestamp::Timestamp;
