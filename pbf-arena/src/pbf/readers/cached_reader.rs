use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::ops::Deref;
use std::path::Path;
use std::rc::Rc;

use log::trace;
use quick_cache::unsync::Cache;

use super::raw_reader::PbfReader;
use super::traits::PbfRandomRead;
use crate::error::Result;
use crate::memory::Buffer;

/// A [`PbfReader`] that keeps the most recently used decoded blocks.
pub struct CachedReader<R: Read + Seek> {
    reader: PbfReader<R>,
    blob_cache: Cache<u64, Rc<Buffer>>,
}

impl CachedReader<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P, cache_capacity: usize) -> Result<Self> {
        Ok(Self::new(PbfReader::from_path(path)?, cache_capacity))
    }
}

impl<R: Read + Seek> CachedReader<R> {
    /// `cache_capacity` counts blocks. A block holds up to 8000 entities.
    pub fn new(reader: PbfReader<R>, cache_capacity: usize) -> Self {
        Self {
            reader,
            blob_cache: Cache::new(cache_capacity.max(1)),
        }
    }

    pub fn cached_blocks(&self) -> usize {
        self.blob_cache.len()
    }
}

impl<R: Read + Seek> PbfRandomRead for CachedReader<R> {
    fn read_blob_by_offset(&mut self, offset: u64) -> Result<Rc<Buffer>> {
        if let Some(buffer) = self.blob_cache.get(&offset) {
            trace!("block cache hit at offset {}", offset);
            return Ok(Rc::clone(buffer));
        }
        let buffer = self.reader.read_blob_by_offset(offset)?;
        self.blob_cache.insert(offset, Rc::clone(&buffer));
        Ok(buffer)
    }
}

impl<R: Read + Seek> Deref for CachedReader<R> {
    type Target = PbfReader<R>;

    fn deref(&self) -> &Self::Target {
        &self.reader
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::builder::NodeBuilder;
    use crate::memory::AutoGrow;
    use crate::osm::OsmObject;
    use crate::pbf::readers::BufferSource;
    use crate::pbf::writers::PbfWriter;

    #[test]
    fn test_cache_hit() {
        let mut buffer = Buffer::new(1024, AutoGrow::Yes);
        let mut node = NodeBuilder::new(&mut buffer).unwrap();
        node.set_id(42);
        node.commit();
        let mut writer = PbfWriter::new(Vec::new(), true);
        writer.write_buffer(&buffer).unwrap();
        let bytes = writer.finish().unwrap();

        let mut reader = PbfReader::new(Cursor::new(bytes));
        reader.header().unwrap();
        let offset = reader.offset();

        let mut cached = CachedReader::new(reader, 4);
        let first = cached.read_blob_by_offset(offset).unwrap();
        let second = cached.read_blob_by_offset(offset).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cached.cached_blocks(), 1);
        assert_eq!(second.nodes().next().unwrap().id(), 42);
    }
}
