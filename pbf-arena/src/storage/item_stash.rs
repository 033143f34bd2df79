use std::fmt;

use log::debug;

use crate::error::Result;
use crate::memory::{AutoGrow, Buffer, Item};

const INITIAL_BUFFER_SIZE: usize = 1024 * 1024;
const REMOVED: usize = usize::MAX;

/// Opaque reference to an item in an [`ItemStash`]. The default handle is
/// invalid and refers to nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StashHandle(usize);

impl StashHandle {
    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for StashHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("-")
        }
    }
}

/// Keeps copies of items alive independent of the buffers they came from.
///
/// Items are addressed by handle. Removing an item only flags it; the
/// memory is reclaimed by [`ItemStash::garbage_collect`], which runs on its
/// own from [`ItemStash::add_item`] once enough items are removed. Handles
/// stay valid across collections.
pub struct ItemStash {
    buffer: Buffer,
    // Offset for handle `n` at `n - 1`, `REMOVED` once removed.
    index: Vec<usize>,
    count_items: usize,
    count_removed: usize,
}

impl Default for ItemStash {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStash {
    pub fn new() -> Self {
        Self {
            buffer: Buffer::new(INITIAL_BUFFER_SIZE, AutoGrow::Yes),
            index: Vec::new(),
            count_items: 0,
            count_removed: 0,
        }
    }

    /// Items added and not removed.
    pub fn len(&self) -> usize {
        self.count_items
    }

    pub fn is_empty(&self) -> bool {
        self.count_items == 0
    }

    /// Removed items still taking up memory.
    pub fn count_removed(&self) -> usize {
        self.count_removed
    }

    /// Estimate of the bytes held.
    pub fn used_memory(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.buffer.capacity()
            + self.index.capacity() * std::mem::size_of::<usize>()
    }

    /// Remove everything. All handles become invalid.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.index.clear();
        self.count_items = 0;
        self.count_removed = 0;
    }

    // Collect only with many removed items, and only if they are a fair
    // share of all items and the buffer is about to grow.
    fn should_gc(&self) -> bool {
        if self.count_removed < 10 * 1000 {
            return false;
        }
        if self.count_removed > 5 * 1000 * 1000 {
            return true;
        }
        if self.count_removed * 5 < self.count_items {
            return false;
        }
        self.buffer.capacity() - self.buffer.committed() < 10 * 1024
    }

    /// Copy `item` into the stash.
    pub fn add_item(&mut self, item: &Item<'_>) -> Result<StashHandle> {
        if self.should_gc() {
            self.garbage_collect();
        }
        self.buffer.add_item(item)?;
        let offset = self.buffer.commit();
        self.buffer.mark_removed(offset, false);
        self.index.push(offset);
        self.count_items += 1;
        Ok(StashHandle(self.index.len()))
    }

    fn offset(&self, handle: StashHandle) -> usize {
        assert!(handle.is_valid(), "invalid stash handle");
        let offset = self.index[handle.0 - 1];
        assert!(offset != REMOVED, "stash handle {} was removed", handle);
        offset
    }

    /// The item behind `handle`. Panics for invalid or removed handles.
    pub fn get_item(&self, handle: StashHandle) -> Item<'_> {
        self.buffer.get(self.offset(handle))
    }

    /// Remove the item behind `handle`. Panics for invalid or removed
    /// handles.
    pub fn remove_item(&mut self, handle: StashHandle) {
        let offset = self.offset(handle);
        self.buffer.mark_removed(offset, true);
        self.index[handle.0 - 1] = REMOVED;
        self.count_items -= 1;
        self.count_removed += 1;
    }

    /// Compact the stash, dropping the memory of removed items.
    pub fn garbage_collect(&mut self) {
        debug!(
            "stash garbage collection: {} items, {} removed",
            self.count_items, self.count_removed
        );
        // Surviving items keep their order, so the index is walked once.
        let index = &mut self.index;
        let mut position = 0;
        self.buffer.purge_removed(|old_offset, new_offset| {
            while index[position] != old_offset {
                position += 1;
            }
            index[position] = new_offset;
            position += 1;
        });
        self.count_removed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NodeBuilder;
    use crate::osm::OsmObject;

    fn nodes(count: i64) -> Buffer {
        let mut buffer = Buffer::new(1024, AutoGrow::Yes);
        for id in 1..=count {
            let mut node = NodeBuilder::new(&mut buffer).unwrap();
            node.set_id(id);
            node.add_tags([("n", "x")]).unwrap();
            node.commit();
        }
        buffer
    }

    #[test]
    fn test_handles() {
        assert!(!StashHandle::default().is_valid());
        assert_eq!(StashHandle::default().to_string(), "-");

        let source = nodes(3);
        let mut stash = ItemStash::new();
        let handles: Vec<StashHandle> = source.items().map(|i| stash.add_item(&i).unwrap()).collect();
        assert_eq!(stash.len(), 3);
        assert_eq!(handles[1].to_string(), "2");
        assert_eq!(stash.get_item(handles[2]).as_node().unwrap().id(), 3);
    }

    #[test]
    fn test_garbage_collect_keeps_handles() {
        let source = nodes(10);
        let mut stash = ItemStash::new();
        let handles: Vec<StashHandle> = source.items().map(|i| stash.add_item(&i).unwrap()).collect();
        for handle in handles.iter().step_by(2) {
            stash.remove_item(*handle);
        }
        assert_eq!(stash.len(), 5);
        assert_eq!(stash.count_removed(), 5);

        stash.garbage_collect();
        assert_eq!(stash.count_removed(), 0);
        for (i, handle) in handles.iter().enumerate().skip(1).step_by(2) {
            let node = stash.get_item(*handle).as_node().unwrap();
            assert_eq!(node.id(), i as i64 + 1);
            assert_eq!(node.tags().get("n"), Some("x"));
        }
    }

    #[test]
    #[should_panic(expected = "was removed")]
    fn test_removed_handle_panics() {
        let source = nodes(1);
        let mut stash = ItemStash::new();
        let handle = stash.add_item(&source.get(0)).unwrap();
        stash.remove_item(handle);
        stash.get_item(handle);
    }
}
