use super::lists::{DiscussionBuilder, TagListBuilder};
use super::Frame;
use crate::error::Result;
use crate::memory::item::{self, ItemType};
use crate::memory::Buffer;
use crate::osm::layout;
use crate::osm::{BoundingBox, Timestamp};

pub struct ChangesetBuilder<'b> {
    frame: Frame<'b>,
    item: usize,
    closed: bool,
}

impl<'b> ChangesetBuilder<'b> {
    pub fn new(buffer: &'b mut Buffer) -> Result<ChangesetBuilder<'b>> {
        let mut frame = Frame::new(buffer);
        let item = frame.open(ItemType::Changeset, layout::CHANGESET_FIXED)?;
        let mut builder = ChangesetBuilder {
            frame,
            item,
            closed: false,
        };
        builder.set_bounds(BoundingBox::default());
        Ok(builder)
    }

    fn set_u32(&mut self, at: usize, value: u32) -> &mut Self {
        item::write_u32(self.frame.item_mut(self.item), at, value);
        self
    }

    pub fn set_id(&mut self, id: u32) -> &mut Self {
        self.set_u32(layout::CHANGESET_ID, id)
    }

    pub fn set_uid(&mut self, uid: u32) -> &mut Self {
        self.set_u32(layout::CHANGESET_UID, uid)
    }

    pub fn set_created_at(&mut self, timestamp: Timestamp) -> &mut Self {
        self.set_u32(layout::CHANGESET_CREATED, timestamp.seconds())
    }

    pub fn set_closed_at(&mut self, timestamp: Timestamp) -> &mut Self {
        self.set_u32(layout::CHANGESET_CLOSED, timestamp.seconds())
    }

    pub fn set_num_changes(&mut self, num_changes: u32) -> &mut Self {
        self.set_u32(layout::CHANGESET_NUM_CHANGES, num_changes)
    }

    pub fn set_num_comments(&mut self, num_comments: u32) -> &mut Self {
        self.set_u32(layout::CHANGESET_NUM_COMMENTS, num_comments)
    }

    pub fn set_bounds(&mut self, bounds: BoundingBox) -> &mut Self {
        let at = layout::CHANGESET_BOUNDS;
        let bytes = self.frame.item_mut(self.item);
        item::write_i32(bytes, at, bounds.bottom_left.x());
        item::write_i32(bytes, at + 4, bounds.bottom_left.y());
        item::write_i32(bytes, at + 8, bounds.top_right.x());
        item::write_i32(bytes, at + 12, bounds.top_right.y());
        self
    }

    /// Must be called before tags or discussion are added, and at most once.
    pub fn set_user(&mut self, user: &str) -> Result<&mut Self> {
        assert_eq!(
            self.frame.item_size(self.item),
            layout::CHANGESET_FIXED,
            "set_user() must come before tags or discussion and only once"
        );
        let stored = self.frame.append_padded_str("user name", user)?;
        item::write_u16(
            self.frame.item_mut(self.item),
            layout::CHANGESET_USER_SIZE,
            stored as u16,
        );
        Ok(self)
    }

    pub fn tags(&mut self) -> Result<TagListBuilder<'_, 'b>> {
        TagListBuilder::new(&mut self.frame)
    }

    pub fn add_tags<'t, I>(&mut self, tags: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (&'t str, &'t str)>,
    {
        let mut builder = self.tags()?;
        for (key, value) in tags {
            builder.add_tag(key, value)?;
        }
        drop(builder);
        Ok(self)
    }

    pub fn discussion(&mut self) -> Result<DiscussionBuilder<'_, 'b>> {
        DiscussionBuilder::new(&mut self.frame)
    }

    pub fn commit(mut self) -> usize {
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

impl Drop for ChangesetBuilder<'_> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::osm::Location;

    #[test]
    fn test_changeset_builder() {
        let mut buffer = Buffer::with_capacity(128);
        let offset = {
            let mut builder = ChangesetBuilder::new(&mut buffer).unwrap();
            builder
                .set_id(42)
                .set_uid(9)
                .set_created_at(Timestamp::new(100))
                .set_num_changes(7)
                .set_num_comments(2);
            let mut bounds = BoundingBox::default();
            bounds
                .extend(Location::new(1, 2))
                .extend(Location::new(3, 4));
            builder.set_bounds(bounds);
            builder.set_user("mapper").unwrap();
            builder.add_tags([("comment", "fix typo")]).unwrap();
            {
                let mut discussion = builder.discussion().unwrap();
                discussion
                    .add_comment(Timestamp::new(200), 10, "reviewer", "looks good")
                    .unwrap();
                discussion
                    .add_comment(Timestamp::new(300), 9, "mapper", "thanks")
                    .unwrap();
            }
            builder.commit()
        };

        let changeset = buffer.get(offset).as_changeset().unwrap();
        assert_eq!(changeset.id(), 42);
        assert_eq!(changeset.uid(), 9);
        assert_eq!(changeset.user(), "mapper");
        assert_eq!(changeset.created_at().seconds(), 100);
        assert!(changeset.is_open());
        assert_eq!(changeset.num_changes(), 7);
        assert_eq!(changeset.bounds().top_right, Location::new(3, 4));
        assert_eq!(changeset.tags().get("comment"), Some("fix typo"));

        let comments: Vec<_> = changeset.discussion().iter().collect();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].user(), "reviewer");
        assert_eq!(comments[0].text(), "looks good");
        assert_eq!(comments[1].date().seconds(), 300);
        assert_eq!(comments[1].text(), "thanks");
        assert!(buffer.is_aligned());
    }

    #[test]
    fn test_changeset_without_discussion() {
        let mut buffer = Buffer::with_capacity(128);
        ChangesetBuilder::new(&mut buffer).unwrap().commit();
        let changeset = buffer.changesets().next().unwrap();
        assert!(changeset.discussion().is_empty());
        assert!(!changeset.bounds().is_defined());
    }
}
