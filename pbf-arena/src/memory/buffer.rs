use std::collections::VecDeque;
use std::fmt;

use super::item::{self, padded_length, Item, ItemIter, ItemType, ALIGN_BYTES, HEADER_SIZE};
use crate::error::{Error, Result};
use crate::osm::{Changeset, Entity, EntityBits, Node, Relation, Way};

const MIN_CAPACITY: usize = 64;

/// What a buffer does when an append does not fit into its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoGrow {
    /// Fail with [`Error::BufferFull`].
    No,
    /// Reallocate the backing memory. Offsets stay valid, borrowed views
    /// can not be held across the append anyway.
    Yes,
    /// Move the committed data into a nested buffer and keep appending into
    /// fresh memory of the same capacity.
    Internal,
}

/// Append-only arena of aligned, type-tagged items.
///
/// Bytes become visible to readers only after [`Buffer::commit`]. Everything
/// between the committed watermark and the write position belongs to the
/// builder currently working on the buffer.
pub struct Buffer {
    memory: Vec<u8>,
    written: usize,
    committed: usize,
    auto_grow: AutoGrow,
    nested: VecDeque<Buffer>,
}

impl Buffer {
    pub fn new(capacity: usize, auto_grow: AutoGrow) -> Self {
        let capacity = padded_length(capacity.max(MIN_CAPACITY));
        Self {
            memory: vec![0; capacity],
            written: 0,
            committed: 0,
            auto_grow,
            nested: VecDeque::new(),
        }
    }

    /// An auto-growing buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity, AutoGrow::Yes)
    }

    fn from_parts(memory: Vec<u8>, committed: usize, auto_grow: AutoGrow) -> Self {
        Self {
            memory,
            written: committed,
            committed,
            auto_grow,
            nested: VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.memory.len()
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn committed(&self) -> usize {
        self.committed
    }

    pub fn auto_grow(&self) -> AutoGrow {
        self.auto_grow
    }

    /// True if no committed data is held, nested buffers included.
    pub fn is_empty(&self) -> bool {
        self.committed == 0 && self.nested.iter().all(Buffer::is_empty)
    }

    pub fn is_aligned(&self) -> bool {
        self.written % ALIGN_BYTES == 0 && self.committed % ALIGN_BYTES == 0
    }

    /// Reserve `size` bytes at the write position and return their offset.
    /// The reserved bytes are zeroed.
    pub fn reserve_space(&mut self, size: usize) -> Result<usize> {
        if self.written + size > self.capacity() {
            self.make_room(size)?;
        }
        let offset = self.written;
        self.written += size;
        self.memory[offset..self.written].fill(0);
        Ok(offset)
    }

    fn make_room(&mut self, size: usize) -> Result<()> {
        if self.auto_grow == AutoGrow::Internal && self.committed != 0 {
            self.move_committed_to_nested();
        }
        if self.written + size <= self.capacity() {
            return Ok(());
        }
        match self.auto_grow {
            AutoGrow::No => Err(Error::BufferFull {
                requested: size,
                capacity: self.capacity(),
            }),
            AutoGrow::Yes | AutoGrow::Internal => {
                let mut new_capacity = self.capacity() * 2;
                while self.written + size > new_capacity {
                    new_capacity *= 2;
                }
                self.memory.resize(new_capacity, 0);
                Ok(())
            }
        }
    }

    // Uncommitted bytes move to the start of fresh memory; builders address
    // their items relative to the committed watermark, so they keep working.
    fn move_committed_to_nested(&mut self) {
        let mut fresh = vec![0; self.capacity()];
        let pending = self.written - self.committed;
        fresh[..pending].copy_from_slice(&self.memory[self.committed..self.written]);

        let old_memory = std::mem::replace(&mut self.memory, fresh);
        let old = Buffer::from_parts(old_memory, self.committed, self.auto_grow);
        self.nested.push_back(old);

        self.written = pending;
        self.committed = 0;
    }

    /// Zero-pad the write position up to the next alignment boundary and
    /// return the number of bytes added. Capacity is always aligned, so this
    /// never has to grow.
    pub(crate) fn pad_to_alignment(&mut self) -> usize {
        let padded = padded_length(self.written);
        let padding = padded - self.written;
        self.memory[self.written..padded].fill(0);
        self.written = padded;
        padding
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.memory[..self.written]
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.memory[..self.written]
    }

    /// The committed bytes.
    pub fn data(&self) -> &[u8] {
        &self.memory[..self.committed]
    }

    /// Append a complete item with the given payload and return its offset.
    pub fn append_item(&mut self, item_type: ItemType, payload: &[u8]) -> Result<usize> {
        let size = HEADER_SIZE + payload.len();
        let offset = self.reserve_space(padded_length(size))?;
        let bytes = &mut self.memory[offset..offset + size];
        item::write_header(bytes, item_type, size as u32);
        bytes[HEADER_SIZE..].copy_from_slice(payload);
        Ok(offset)
    }

    /// Copy an item (usually from another buffer) into this one.
    pub fn add_item(&mut self, item: &Item<'_>) -> Result<usize> {
        let source = item.as_bytes();
        let offset = self.reserve_space(padded_length(source.len()))?;
        self.memory[offset..offset + source.len()].copy_from_slice(source);
        Ok(offset)
    }

    /// Make everything written so far visible to readers. Returns the offset
    /// where the newly committed data starts, which is the offset of the
    /// item just built.
    pub fn commit(&mut self) -> usize {
        assert!(
            self.written % ALIGN_BYTES == 0,
            "commit() on unaligned buffer, is a builder still open?"
        );
        let offset = self.committed;
        self.committed = self.written;
        offset
    }

    /// Throw away everything written since the last commit.
    pub fn rollback(&mut self) {
        self.written = self.committed;
    }

    /// Remove all items, nested buffers included. Capacity is kept.
    pub fn clear(&mut self) {
        self.written = 0;
        self.committed = 0;
        self.nested.clear();
    }

    pub fn get(&self, offset: usize) -> Item<'_> {
        assert!(offset < self.committed, "offset {} is not committed", offset);
        Item::at(self.data(), offset)
    }

    /// Set or clear the removed flag of a committed item.
    pub fn mark_removed(&mut self, offset: usize, removed: bool) {
        assert!(offset < self.committed, "offset {} is not committed", offset);
        item::set_removed(&mut self.memory, offset, removed);
    }

    fn assert_flat(&self) {
        assert!(
            self.nested.is_empty(),
            "buffer has nested buffers, detach them before iterating"
        );
    }

    /// Iterate over all committed top-level items.
    pub fn items(&self) -> ItemIter<'_> {
        self.assert_flat();
        ItemIter::new(self.data(), 0, self.committed)
    }

    /// Iterate from `offset` (which must be an item boundary) to the end.
    pub fn items_from(&self, offset: usize) -> ItemIter<'_> {
        self.assert_flat();
        assert!(offset <= self.committed && offset % ALIGN_BYTES == 0);
        ItemIter::new(self.data(), offset, self.committed)
    }

    /// Iterate over the entities whose type is in `types`.
    pub fn select(&self, types: EntityBits) -> impl Iterator<Item = Entity<'_>> {
        self.items()
            .filter(move |item| types.intersects(EntityBits::from_item_type(item.item_type())))
            .filter_map(|item| item.entity())
    }

    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> {
        self.select(EntityBits::ALL)
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node<'_>> {
        self.items().filter_map(|item| item.as_node())
    }

    pub fn ways(&self) -> impl Iterator<Item = Way<'_>> {
        self.items().filter_map(|item| item.as_way())
    }

    pub fn relations(&self) -> impl Iterator<Item = Relation<'_>> {
        self.items().filter_map(|item| item.as_relation())
    }

    pub fn changesets(&self) -> impl Iterator<Item = Changeset<'_>> {
        self.items().filter_map(|item| item.as_changeset())
    }

    pub fn has_nested_buffers(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Detach the oldest nested buffer. Repeated calls hand out the nested
    /// buffers in the order their data was written.
    pub fn detach_nested(&mut self) -> Option<Buffer> {
        self.nested.pop_front()
    }

    /// Split into flat buffers, oldest data first, this buffer last.
    pub fn into_chain(mut self) -> Vec<Buffer> {
        let mut chain: Vec<Buffer> = self.nested.drain(..).collect();
        chain.push(self);
        chain
    }

    /// Compact the buffer by dropping all items flagged as removed.
    ///
    /// `relocated(old_offset, new_offset)` is called for every surviving
    /// item, in buffer order, so that external indexes can follow the move.
    pub fn purge_removed<F>(&mut self, mut relocated: F)
    where
        F: FnMut(usize, usize),
    {
        self.assert_flat();
        assert_eq!(
            self.written, self.committed,
            "purge_removed() with uncommitted data"
        );

        let mut read = 0;
        let mut write = 0;
        while read < self.committed {
            let (size, removed) = {
                let item = Item::at(&self.memory[..self.committed], read);
                (item.padded_size(), item.is_removed())
            };
            if !removed {
                if read != write {
                    self.memory.copy_within(read..read + size, write);
                }
                relocated(read, write);
                write += size;
            }
            read += size;
        }

        self.written = write;
        self.committed = write;
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &self.capacity())
            .field("written", &self.written)
            .field("committed", &self.committed)
            .field("auto_grow", &self.auto_grow)
            .field("nested", &self.nested.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NodeBuilder;
    use crate::error::ErrorKind;
    use crate::osm::OsmObject;

    const LONG_USER: &str =
        "some_silly_long_username_that_eats_up_some_memory_more_quickly_than_a_bunch_of_numbers_would";

    fn commit_dummy_node(buffer: &mut Buffer, id: i64) {
        let mut builder = NodeBuilder::new(buffer).unwrap();
        builder.set_id(id);
        builder.set_user(LONG_USER).unwrap();
        builder.commit();
    }

    fn populated(nodes: usize, auto_grow: AutoGrow) -> Buffer {
        let mut buffer = Buffer::new(512, auto_grow);
        for id in 0..nodes {
            commit_dummy_node(&mut buffer, id as i64);
        }
        buffer
    }

    #[test]
    fn test_auto_grow_yes() {
        let buffer = populated(10, AutoGrow::Yes);
        assert!(buffer.is_aligned());
        assert_eq!(buffer.committed(), buffer.written());
        assert!(buffer.capacity() > buffer.written());
        assert!(!buffer.has_nested_buffers());
        assert_eq!(buffer.items().count(), 10);
        assert_eq!(buffer.nodes().count(), 10);
        assert_eq!(buffer.ways().count(), 0);
    }

    #[test]
    fn test_auto_grow_no() {
        let mut buffer = Buffer::new(512, AutoGrow::No);
        let mut failed = None;
        for id in 0..10 {
            let result = NodeBuilder::new(&mut buffer).and_then(|mut builder| {
                builder.set_id(id);
                builder.set_user(LONG_USER)?;
                builder.commit();
                Ok(())
            });
            if let Err(e) = result {
                failed = Some(e);
                break;
            }
        }
        let error = failed.expect("a 512 byte buffer can not hold 10 nodes");
        assert_eq!(error.kind(), ErrorKind::Resource);
        buffer.rollback();
        assert_eq!(buffer.capacity(), 512);
        assert!(buffer.nodes().count() > 0);
    }

    #[test]
    fn test_internal_unnested() {
        let buffer = populated(3, AutoGrow::Internal);
        assert_eq!(buffer.capacity(), 512);
        assert!(buffer.written() > 0 && buffer.written() < 512);
        assert!(!buffer.has_nested_buffers());
        assert_eq!(buffer.nodes().count(), 3);
    }

    #[test]
    fn test_internal_empty() {
        let buffer = populated(0, AutoGrow::Internal);
        assert_eq!(buffer.capacity(), 512);
        assert_eq!(buffer.written(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.items().count(), 0);
    }

    #[test]
    fn test_internal_nested_chain() {
        let mut buffer = populated(10, AutoGrow::Internal);
        assert_eq!(buffer.capacity(), 512);
        assert!(buffer.has_nested_buffers());

        let mut ids = Vec::new();
        while let Some(nested) = buffer.detach_nested() {
            assert!(!nested.has_nested_buffers());
            assert!(nested.committed() > 0);
            ids.extend(nested.nodes().map(|n| n.id()));
        }
        assert!(!buffer.has_nested_buffers());
        ids.extend(buffer.nodes().map(|n| n.id()));
        assert_eq!(ids, (0..10).collect::<Vec<i64>>());
    }

    #[test]
    #[should_panic(expected = "nested buffers")]
    fn test_iterate_nested_panics() {
        let buffer = populated(10, AutoGrow::Internal);
        let _ = buffer.items().count();
    }

    #[test]
    fn test_into_chain() {
        let buffer = populated(10, AutoGrow::Internal);
        let chain = buffer.into_chain();
        assert!(chain.len() > 1);
        let total: usize = chain.iter().map(|b| b.nodes().count()).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn test_append_and_rollback() {
        let mut buffer = Buffer::with_capacity(128);
        let offset = buffer.append_item(ItemType::TagList, b"a\0b\0").unwrap();
        assert_eq!(buffer.commit(), offset);
        buffer.append_item(ItemType::TagList, b"c\0d\0").unwrap();
        buffer.rollback();

        assert_eq!(buffer.items().count(), 1);
        let item = buffer.get(offset);
        assert_eq!(item.item_type(), ItemType::TagList);
        assert_eq!(item.byte_size(), HEADER_SIZE + 4);
    }

    #[test]
    fn test_add_item_copies() {
        let source = populated(2, AutoGrow::Yes);
        let mut target = Buffer::with_capacity(64);
        for item in source.items() {
            target.add_item(&item).unwrap();
            target.commit();
        }
        let ids: Vec<i64> = target.nodes().map(|n| n.id()).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(target.data(), source.data());
    }

    #[test]
    fn test_purge_removed() {
        let mut buffer = populated(5, AutoGrow::Yes);
        let offsets: Vec<usize> = buffer.items().map(|i| i.offset()).collect();
        buffer.mark_removed(offsets[1], true);
        buffer.mark_removed(offsets[3], true);

        let mut moves = Vec::new();
        buffer.purge_removed(|old, new| moves.push((old, new)));

        assert_eq!(moves.len(), 3);
        assert_eq!(moves[0], (offsets[0], offsets[0]));
        assert_eq!(moves[1], (offsets[2], offsets[1]));
        assert_eq!(moves[2].0, offsets[4]);

        let ids: Vec<i64> = buffer.nodes().map(|n| n.id()).collect();
        assert_eq!(ids, vec![0, 2, 4]);
        assert!(buffer.items().all(|i| !i.is_removed()));
    }
}
