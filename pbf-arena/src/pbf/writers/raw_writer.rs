use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, warn};
use protobuf::Message as _;

use crate::error::Result;
use crate::memory::{AutoGrow, Buffer};
use crate::models::Element;
use crate::osm::Entity;
use crate::pbf::codecs::blob::{encode_blob, write_blob, BlobKind};
use crate::pbf::codecs::header::{
    encode_header, Header, FEATURE_DENSE_NODES, FEATURE_LOCATIONS_ON_WAYS, FEATURE_SCHEMA,
};
use crate::pbf::codecs::BlockBuilder;

/// Entities per `OSMData` block.
pub const MAX_BLOCK_ITEM_LENGTH: usize = 8000;

const PENDING_BUFFER_SIZE: usize = 1024 * 1024;
const WRITING_PROGRAM: &str = concat!("pbf-arena/", env!("CARGO_PKG_VERSION"));

/// Writes entities as a PBF stream.
///
/// Entities are collected in an internal buffer and written as one
/// zlib-compressed block every [`MAX_BLOCK_ITEM_LENGTH`] entities. The
/// header goes out in front of the first block. Call [`PbfWriter::finish`]
/// to write the last block; dropping the writer loses it.
///
/// ```no_run
/// use pbf_arena::models::{Element, Node};
/// use pbf_arena::pbf::writers::PbfWriter;
///
/// let mut writer = PbfWriter::from_path("out.osm.pbf", true).unwrap();
/// writer.write_element(&Element::Node(Node::default())).unwrap();
/// writer.finish().unwrap();
/// ```
pub struct PbfWriter<W: Write> {
    writer: W,
    header: Header,
    use_dense: bool,
    locations_on_ways: bool,
    pending: Buffer,
    pending_count: usize,
    has_written_header: bool,
    bytes_written: u64,
}

impl PbfWriter<BufWriter<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P, use_dense: bool) -> Result<Self> {
        let f = File::create(path)?;
        Ok(Self::new(BufWriter::new(f), use_dense))
    }
}

impl<W: Write> PbfWriter<W> {
    pub fn new(writer: W, use_dense: bool) -> PbfWriter<W> {
        Self {
            writer,
            header: Header::default(),
            use_dense,
            locations_on_ways: false,
            pending: Buffer::new(PENDING_BUFFER_SIZE, AutoGrow::Yes),
            pending_count: 0,
            has_written_header: false,
            bytes_written: 0,
        }
    }

    /// Header to write. Features this writer relies on are added to it.
    /// Has no effect once the first block is out.
    pub fn set_header(&mut self, header: Header) -> &mut Self {
        self.header = header;
        self
    }

    /// Write node locations into ways.
    pub fn set_locations_on_ways(&mut self, locations_on_ways: bool) -> &mut Self {
        self.locations_on_ways = locations_on_ways;
        self
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Queue an entity. Changesets can not be stored in PBF and are skipped.
    pub fn write(&mut self, entity: Entity<'_>) -> Result<()> {
        if let Entity::Changeset(changeset) = entity {
            warn!("skipping changeset {}: not supported in PBF", changeset.id());
            return Ok(());
        }
        self.pending.add_item(&entity.item())?;
        self.pending.commit();
        self.entity_added()
    }

    /// Queue every entity in `buffer`.
    pub fn write_buffer(&mut self, buffer: &Buffer) -> Result<()> {
        for entity in buffer.entities() {
            self.write(entity)?;
        }
        Ok(())
    }

    pub fn write_element(&mut self, element: &Element) -> Result<()> {
        if let Element::Changeset(changeset) = element {
            warn!("skipping changeset {}: not supported in PBF", changeset.id);
            return Ok(());
        }
        element.write_to(&mut self.pending)?;
        self.entity_added()
    }

    fn entity_added(&mut self) -> Result<()> {
        self.pending_count += 1;
        if self.pending_count >= MAX_BLOCK_ITEM_LENGTH {
            self.write_block()?;
        }
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        let mut header = self.header.clone();
        add_feature(&mut header.required_features, FEATURE_SCHEMA);
        if self.use_dense {
            add_feature(&mut header.required_features, FEATURE_DENSE_NODES);
        }
        if self.locations_on_ways {
            add_feature(&mut header.optional_features, FEATURE_LOCATIONS_ON_WAYS);
        }
        if header.writing_program.is_none() {
            header.writing_program = Some(WRITING_PROGRAM.to_owned());
        }

        let blob = encode_blob(&encode_header(&header)?)?;
        self.bytes_written += write_blob(&mut self.writer, BlobKind::Header, &blob)?;
        self.has_written_header = true;
        Ok(())
    }

    fn write_block(&mut self) -> Result<()> {
        if !self.has_written_header {
            self.write_header()?;
        }
        if self.pending_count == 0 {
            return Ok(());
        }

        let block = BlockBuilder::new(self.use_dense, self.locations_on_ways).build(&self.pending);
        let blob = encode_blob(&block.write_to_bytes()?)?;
        self.bytes_written += write_blob(&mut self.writer, BlobKind::Data, &blob)?;
        debug!("wrote block of {} entities", self.pending_count);

        self.pending.clear();
        self.pending_count = 0;
        Ok(())
    }

    /// Write the pending block, flush and return the inner writer. A stream
    /// without entities still gets its header.
    pub fn finish(mut self) -> Result<W> {
        self.write_block()?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn add_feature(features: &mut Vec<String>, feature: &str) {
    if !features.iter().any(|f| f == feature) {
        features.push(feature.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::builder::{ChangesetBuilder, NodeBuilder};
    use crate::osm::{Location, OsmObject};
    use crate::pbf::codecs::blob::BlobReader;
    use crate::pbf::codecs::header::decode_header;
    use crate::pbf::codecs::{decode_data_blob, DecodeOptions, Decompressors};

    fn read_back(bytes: Vec<u8>) -> (Header, Vec<Buffer>) {
        let decompressors = Decompressors::default();
        let mut blobs = BlobReader::new(Cursor::new(bytes));
        let header_blob = blobs.next_blob().unwrap().unwrap();
        let header = decode_header(&header_blob.decode(&decompressors).unwrap()).unwrap();
        let buffers = blobs
            .map(|blob| decode_data_blob(&blob.unwrap(), &decompressors, DecodeOptions::default()).unwrap())
            .collect();
        (header, buffers)
    }

    #[test]
    fn test_empty_stream_has_header() {
        let bytes = PbfWriter::new(Vec::new(), true).finish().unwrap();
        let (header, buffers) = read_back(bytes);
        assert_eq!(header.required_features, vec![FEATURE_SCHEMA, FEATURE_DENSE_NODES]);
        assert_eq!(header.writing_program.as_deref(), Some(WRITING_PROGRAM));
        assert!(buffers.is_empty());
    }

    #[test]
    fn test_blocks_are_split() {
        let mut source = Buffer::new(1024, AutoGrow::Yes);
        for id in 1..=(MAX_BLOCK_ITEM_LENGTH as i64 + 5) {
            let mut node = NodeBuilder::new(&mut source).unwrap();
            node.set_id(id).set_location(Location::new(id as i32, -(id as i32)));
            node.commit();
        }
        let mut changeset = ChangesetBuilder::new(&mut source).unwrap();
        changeset.set_id(3);
        changeset.commit();

        let mut writer = PbfWriter::new(Vec::new(), false);
        writer.set_locations_on_ways(true);
        writer.write_buffer(&source).unwrap();
        let bytes = writer.finish().unwrap();

        let (header, buffers) = read_back(bytes);
        assert!(header.has_locations_on_ways());
        assert_eq!(buffers.len(), 2);
        assert_eq!(buffers[0].nodes().count(), MAX_BLOCK_ITEM_LENGTH);
        let last: Vec<i64> = buffers[1].nodes().map(|n| n.id()).collect();
        assert_eq!(last.len(), 5);
        assert_eq!(last[4], MAX_BLOCK_ITEM_LENGTH as i64 + 5);
        assert_eq!(buffers[1].nodes().last().unwrap().location(), Location::new(8005, -8005));
        assert_eq!(buffers.iter().map(|b| b.changesets().count()).sum::<usize>(), 0);
    }
}
