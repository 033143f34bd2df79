use super::lists::{NodeRefListBuilder, RelationMemberListBuilder, TagListBuilder};
use super::Frame;
use crate::error::Result;
use crate::memory::item::{self, ItemType};
use crate::memory::Buffer;
use crate::osm::layout::{self, FLAG_VISIBLE};
use crate::osm::{Location, NodeRef, Timestamp};

/// Shared part of the node, way and relation builders.
struct ObjectCore<'b> {
    frame: Frame<'b>,
    item: usize,
    fixed: usize,
    closed: bool,
}

impl<'b> ObjectCore<'b> {
    fn new(buffer: &'b mut Buffer, item_type: ItemType) -> Result<ObjectCore<'b>> {
        let fixed = layout::fixed_size(item_type);
        let mut frame = Frame::new(buffer);
        let item = frame.open(item_type, fixed)?;
        frame.item_mut(item)[layout::OBJECT_FLAGS] = FLAG_VISIBLE;
        Ok(ObjectCore {
            frame,
            item,
            fixed,
            closed: false,
        })
    }

    fn bytes(&mut self) -> &mut [u8] {
        self.frame.item_mut(self.item)
    }

    fn set_id(&mut self, id: i64) {
        item::write_i64(self.bytes(), layout::OBJECT_ID, id);
    }

    fn set_version(&mut self, version: u32) {
        item::write_u32(self.bytes(), layout::OBJECT_VERSION, version);
    }

    fn set_changeset(&mut self, changeset: u32) {
        item::write_u32(self.bytes(), layout::OBJECT_CHANGESET, changeset);
    }

    fn set_timestamp(&mut self, timestamp: Timestamp) {
        item::write_u32(self.bytes(), layout::OBJECT_TIMESTAMP, timestamp.seconds());
    }

    fn set_uid(&mut self, uid: u32) {
        item::write_u32(self.bytes(), layout::OBJECT_UID, uid);
    }

    fn set_visible(&mut self, visible: bool) {
        let flags = &mut self.bytes()[layout::OBJECT_FLAGS];
        if visible {
            *flags |= FLAG_VISIBLE;
        } else {
            *flags &= !FLAG_VISIBLE;
        }
    }

    fn set_user(&mut self, user: &str) -> Result<()> {
        assert_eq!(
            self.frame.item_size(self.item),
            self.fixed,
            "set_user() must come before any tags, nodes or members and only once"
        );
        let stored = self.frame.append_padded_str("user name", user)?;
        item::write_u16(self.bytes(), layout::OBJECT_USER_SIZE, stored as u16);
        Ok(())
    }

    fn add_tags<'t, I>(&mut self, tags: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'t str, &'t str)>,
    {
        let mut builder = TagListBuilder::new(&mut self.frame)?;
        for (key, value) in tags {
            builder.add_tag(key, value)?;
        }
        Ok(())
    }

    fn commit(&mut self) -> usize {
        self.close();
        self.frame.commit()
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.frame.close(self.item);
        }
    }
}

impl Drop for ObjectCore<'_> {
    fn drop(&mut self) {
        self.close();
    }
}

macro_rules! object_builder_common {
    ($name:ident) => {
        impl<'b> $name<'b> {
            pub fn set_id(&mut self, id: i64) -> &mut Self {
                self.core.set_id(id);
                self
            }

            pub fn set_version(&mut self, version: u32) -> &mut Self {
                self.core.set_version(version);
                self
            }

            pub fn set_changeset(&mut self, changeset: u32) -> &mut Self {
                self.core.set_changeset(changeset);
                self
            }

            pub fn set_timestamp(&mut self, timestamp: Timestamp) -> &mut Self {
                self.core.set_timestamp(timestamp);
                self
            }

            pub fn set_uid(&mut self, uid: u32) -> &mut Self {
                self.core.set_uid(uid);
                self
            }

            pub fn set_visible(&mut self, visible: bool) -> &mut Self {
                self.core.set_visible(visible);
                self
            }

            /// Store the user name. Must be called before any sub-item is
            /// added, and at most once.
            pub fn set_user(&mut self, user: &str) -> Result<&mut Self> {
                self.core.set_user(user)?;
                Ok(self)
            }

            pub fn tags(&mut self) -> Result<TagListBuilder<'_, 'b>> {
                TagListBuilder::new(&mut self.core.frame)
            }

            /// Add a tag list holding all of `tags`.
            pub fn add_tags<'t, I>(&mut self, tags: I) -> Result<&mut Self>
            where
                I: IntoIterator<Item = (&'t str, &'t str)>,
            {
                self.core.add_tags(tags)?;
                Ok(self)
            }

            /// Close the item and commit everything written to the buffer.
            /// Returns the offset of the committed item.
            pub fn commit(mut self) -> usize {
                self.core.commit()
            }
        }
    };
}

pub struct NodeBuilder<'b> {
    core: ObjectCore<'b>,
}

impl<'b> NodeBuilder<'b> {
    pub fn new(buffer: &'b mut Buffer) -> Result<NodeBuilder<'b>> {
        let mut builder = NodeBuilder {
            core: ObjectCore::new(buffer, ItemType::Node)?,
        };
        builder.set_location(Location::undefined());
        Ok(builder)
    }

    pub fn set_location(&mut self, location: Location) -> &mut Self {
        let bytes = self.core.bytes();
        item::write_i32(bytes, layout::NODE_LOCATION, location.x());
        item::write_i32(bytes, layout::NODE_LOCATION + 4, location.y());
        self
    }
}

object_builder_common!(NodeBuilder);

pub struct WayBuilder<'b> {
    core: ObjectCore<'b>,
}

impl<'b> WayBuilder<'b> {
    pub fn new(buffer: &'b mut Buffer) -> Result<WayBuilder<'b>> {
        Ok(WayBuilder {
            core: ObjectCore::new(buffer, ItemType::Way)?,
        })
    }

    pub fn nodes(&mut self) -> Result<NodeRefListBuilder<'_, 'b>> {
        NodeRefListBuilder::new(&mut self.core.frame, ItemType::WayNodeList)
    }

    pub fn add_node_refs<I>(&mut self, refs: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = NodeRef>,
    {
        let mut builder = self.nodes()?;
        for node_ref in refs {
            builder.add_node_ref(node_ref)?;
        }
        drop(builder);
        Ok(self)
    }

    pub fn add_node_ids<I>(&mut self, ids: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = i64>,
    {
        self.add_node_refs(ids.into_iter().map(NodeRef::new))
    }
}

object_builder_common!(WayBuilder);

pub struct RelationBuilder<'b> {
    core: ObjectCore<'b>,
}

impl<'b> RelationBuilder<'b> {
    pub fn new(buffer: &'b mut Buffer) -> Result<RelationBuilder<'b>> {
        Ok(RelationBuilder {
            core: ObjectCore::new(buffer, ItemType::Relation)?,
        })
    }

    pub fn members(&mut self) -> Result<RelationMemberListBuilder<'_, 'b>> {
        RelationMemberListBuilder::new(&mut self.core.frame)
    }

    /// An assembled ring of a multipolygon relation.
    pub fn ring(&mut self, outer: bool) -> Result<NodeRefListBuilder<'_, 'b>> {
        let item_type = if outer {
            ItemType::OuterRing
        } else {
            ItemType::InnerRing
        };
        NodeRefListBuilder::new(&mut self.core.frame, item_type)
    }
}

object_builder_common!(RelationBuilder);
