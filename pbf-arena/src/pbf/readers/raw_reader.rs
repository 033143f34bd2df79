use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use std::rc::Rc;

use log::debug;

use super::traits::{BufferSource, PbfRandomRead, ReaderStatus};
use crate::config::ReaderConfig;
use crate::error::{Error, FormatError, Result};
use crate::memory::Buffer;
use crate::osm::Entity;
use crate::pbf::codecs::blob::{BlobKind, BlobReader, RawBlob};
use crate::pbf::codecs::{decode_data_blob, decode_header, DecodeOptions, Decompressors, Header};

/// Single-threaded pull reader. Decodes one block per [`PbfReader::read`]
/// call on the calling thread.
///
/// ```no_run
/// use pbf_arena::memory::ItemType;
/// use pbf_arena::pbf::readers::PbfReader;
///
/// let mut reader = PbfReader::from_path("path/to/osm.pbf").unwrap();
/// let mut nodes = 0;
/// reader
///     .for_each_entity(|entity| {
///         if entity.item_type() == ItemType::Node {
///             nodes += 1;
///         }
///     })
///     .unwrap();
/// ```
pub struct PbfReader<R: Read> {
    blob_reader: BlobReader<R>,
    decompressors: Decompressors,
    config: ReaderConfig,
    header: Option<Header>,
    status: ReaderStatus,
}

impl PbfReader<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with_config(path, ReaderConfig::default())
    }

    pub fn from_path_with_config<P: AsRef<Path>>(path: P, config: ReaderConfig) -> Result<Self> {
        let f = File::open(path)?;
        Ok(Self::with_config(BufReader::new(f), config))
    }
}

impl<R: Read> PbfReader<R> {
    pub fn new(reader: R) -> PbfReader<R> {
        Self::with_config(reader, ReaderConfig::default())
    }

    pub fn with_config(reader: R, config: ReaderConfig) -> PbfReader<R> {
        Self {
            blob_reader: BlobReader::new(reader),
            decompressors: Decompressors::default(),
            config,
            header: None,
            status: ReaderStatus::Header,
        }
    }

    /// Replace the decompression backends, e.g. to add lz4 or zstd.
    pub fn with_decompressors(mut self, decompressors: Decompressors) -> Self {
        self.decompressors = decompressors;
        self
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Offset of the next unit in the input.
    pub fn offset(&self) -> u64 {
        self.blob_reader.offset()
    }

    fn fail<T>(&mut self, error: Error) -> Result<T> {
        debug!("reader failed at offset {}: {}", self.blob_reader.offset(), error);
        self.status = ReaderStatus::Error;
        Err(error)
    }

    fn ensure_header(&mut self) -> Result<()> {
        if self.header.is_some() {
            return Ok(());
        }
        self.status.check_readable()?;
        let header = match self.read_header_blob() {
            Ok(header) => header,
            Err(e) => return self.fail(e),
        };
        self.header = Some(header);
        self.status = ReaderStatus::Data;
        Ok(())
    }

    fn read_header_blob(&mut self) -> Result<Header> {
        let blob = self
            .blob_reader
            .next_blob()?
            .ok_or(FormatError::Truncated("OSMHeader"))?;
        decode_header(&blob.decode(&self.decompressors)?)
    }

    fn decode_options(&self) -> DecodeOptions {
        let history = self
            .header
            .as_ref()
            .map_or(false, |h| h.has_multiple_object_versions);
        self.config.decode_options(history)
    }

    fn finish(&mut self) -> Result<Option<Buffer>> {
        debug!("reached end of stream at offset {}", self.blob_reader.offset());
        self.status = ReaderStatus::Eof;
        Ok(None)
    }

    /// Decode the next data block. Blocks that hold nothing of the
    /// requested types are skipped.
    pub fn read(&mut self) -> Result<Option<Buffer>> {
        self.ensure_header()?;
        self.status.check_readable()?;
        if self.config.header_only() {
            return self.finish();
        }

        let options = self.decode_options();
        loop {
            let blob = match self.blob_reader.next_blob() {
                Ok(Some(blob)) => blob,
                Ok(None) => return self.finish(),
                Err(e) => return self.fail(e),
            };
            match decode_data_blob(&blob, &self.decompressors, options) {
                Ok(buffer) if buffer.is_empty() => continue,
                Ok(buffer) => return Ok(Some(buffer)),
                Err(e) => return self.fail(e),
            }
        }
    }

    /// Call `f` for every entity of the requested types, in file order.
    pub fn for_each_entity<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(Entity<'_>),
    {
        let read_types = self.config.read_types;
        while let Some(buffer) = self.read()? {
            buffer.select(read_types).for_each(&mut f);
        }
        Ok(())
    }

    pub fn into_inner(self) -> R {
        self.blob_reader.into_inner()
    }
}

impl<R: Read + Seek> PbfReader<R> {
    /// Read the raw unit starting at `offset`.
    pub fn read_raw_blob_at(&mut self, offset: u64) -> Result<RawBlob> {
        self.blob_reader.seek(offset)?;
        self.blob_reader
            .next_blob()?
            .ok_or_else(|| FormatError::Truncated("Blob").into())
    }
}

impl<R: Read + Seek> PbfRandomRead for PbfReader<R> {
    /// Decode the data block at `offset` with every entity type and all
    /// metadata, whatever the reader is configured to read.
    fn read_blob_by_offset(&mut self, offset: u64) -> Result<Rc<Buffer>> {
        let blob = self.read_raw_blob_at(offset)?;
        if blob.kind != BlobKind::Data {
            return Err(FormatError::UnexpectedBlobType {
                expected: BlobKind::Data.as_str(),
                found: blob.kind.as_str().to_owned(),
            }
            .into());
        }
        let buffer = decode_data_blob(&blob, &self.decompressors, DecodeOptions::default())?;
        Ok(Rc::new(buffer))
    }
}

impl<R: Read> BufferSource for PbfReader<R> {
    fn header(&mut self) -> Result<&Header> {
        self.ensure_header()?;
        self.header
            .as_ref()
            .ok_or(Error::InvalidState {
                action: "read header",
                status: self.status.as_str(),
            })
    }

    fn read(&mut self) -> Result<Option<Buffer>> {
        PbfReader::read(self)
    }

    fn close(&mut self) {
        if self.status != ReaderStatus::Closed {
            debug!("closing reader at offset {}", self.blob_reader.offset());
            self.status = ReaderStatus::Closed;
        }
    }

    fn status(&self) -> ReaderStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::builder::{NodeBuilder, WayBuilder};
    use crate::memory::AutoGrow;
    use crate::osm::{EntityBits, Location, OsmObject};
    use crate::pbf::writers::PbfWriter;

    fn sample_file() -> Vec<u8> {
        let mut buffer = Buffer::new(1024, AutoGrow::Yes);
        let mut node = NodeBuilder::new(&mut buffer).unwrap();
        node.set_id(1).set_location(Location::new(10, 20));
        node.add_tags([("name", "a")]).unwrap();
        node.commit();
        let mut way = WayBuilder::new(&mut buffer).unwrap();
        way.set_id(2);
        way.add_node_ids([1, 1]).unwrap();
        way.commit();

        let mut writer = PbfWriter::new(Vec::new(), true);
        writer.write_buffer(&buffer).unwrap();
        writer.finish().unwrap()
    }

    #[test]
    fn test_read_until_eof() {
        let mut reader = PbfReader::new(Cursor::new(sample_file()));
        assert_eq!(reader.status(), ReaderStatus::Header);
        assert!(reader.header().unwrap().required_features.len() >= 1);

        let buffer = reader.read().unwrap().unwrap();
        let ids: Vec<i64> = buffer.entities().map(|e| e.id()).collect();
        assert_eq!(ids, vec![1, 2]);

        assert!(reader.read().unwrap().is_none());
        assert_eq!(reader.status(), ReaderStatus::Eof);
        let err = reader.read().unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::State);
    }

    #[test]
    fn test_read_types() {
        let config = ReaderConfig::default().with_read_types(EntityBits::WAY);
        let mut reader = PbfReader::with_config(Cursor::new(sample_file()), config);
        let mut seen = Vec::new();
        reader.for_each_entity(|e| seen.push(e.item_type())).unwrap();
        assert_eq!(seen, vec![crate::memory::ItemType::Way]);
    }

    #[test]
    fn test_header_only() {
        let config = ReaderConfig::default().with_read_types(EntityBits::NOTHING);
        let mut reader = PbfReader::with_config(Cursor::new(sample_file()), config);
        assert!(reader.read().unwrap().is_none());
        assert!(reader.header().is_ok());
    }

    #[test]
    fn test_closed() {
        let mut reader = PbfReader::new(Cursor::new(sample_file()));
        reader.close();
        reader.close();
        assert!(reader.read().is_err());
    }

    #[test]
    fn test_random_read() {
        let bytes = sample_file();
        let mut reader = PbfReader::new(Cursor::new(bytes));
        reader.header().unwrap();
        let offset = reader.offset();
        reader.read().unwrap();

        let buffer = reader.read_blob_by_offset(offset).unwrap();
        assert_eq!(buffer.nodes().next().unwrap().tags().get("name"), Some("a"));
        assert!(reader.read_blob_by_offset(0).unwrap_err().is_format());
    }
}
