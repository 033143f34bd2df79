use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use log::info;
use rayon::prelude::*;

use super::cached_reader::CachedReader;
use super::raw_reader::PbfReader;
use super::traits::PbfRandomRead;
use crate::error::{FormatError, Result};
use crate::memory::Buffer;
use crate::models::{Element, ElementType, Node, Relation, Way};
use crate::osm::{Entity, EntityBits};
use crate::pbf::codecs::blob::{BlobReader, RawBlob};
use crate::pbf::codecs::{decode_data_blob, decode_header, DecodeOptions, Decompressors, Header};

/// Id range of one entity type in one block.
#[derive(Debug, Clone, Copy)]
struct IdRange {
    min: i64,
    max: i64,
}

impl IdRange {
    fn extend(range: &mut Option<IdRange>, id: i64) {
        match range {
            Some(r) => {
                r.min = r.min.min(id);
                r.max = r.max.max(id);
            }
            None => *range = Some(IdRange { min: id, max: id }),
        }
    }
}

#[derive(Debug)]
struct BlockSummary {
    offset: u64,
    nodes: Option<IdRange>,
    ways: Option<IdRange>,
    relations: Option<IdRange>,
}

impl BlockSummary {
    fn of(offset: u64, buffer: &Buffer) -> Self {
        let mut summary = BlockSummary {
            offset,
            nodes: None,
            ways: None,
            relations: None,
        };
        for entity in buffer.entities() {
            let range = match entity {
                Entity::Node(_) => &mut summary.nodes,
                Entity::Way(_) => &mut summary.ways,
                Entity::Relation(_) => &mut summary.relations,
                Entity::Changeset(_) => continue,
            };
            IdRange::extend(range, entity.id());
        }
        summary
    }
}

/// Per-type map of `(max id, block offset)` to the min id of that block.
#[derive(Debug, Default)]
struct PbfIndex {
    node_index: BTreeMap<(i64, u64), i64>,
    way_index: BTreeMap<(i64, u64), i64>,
    relation_index: BTreeMap<(i64, u64), i64>,
    blocks: usize,
}

impl PbfIndex {
    /// Decode every data block of `blobs` in parallel and record its id
    /// ranges. The header unit must have been consumed already.
    fn build<R: Read + Send>(blobs: &mut BlobReader<R>, decompressors: &Decompressors) -> Result<PbfIndex> {
        let options = DecodeOptions {
            read_types: EntityBits::NWR,
            read_metadata: false,
        };
        let summaries = blobs
            .par_bridge()
            .map(|blob: Result<RawBlob>| {
                let blob = blob?;
                let buffer = decode_data_blob(&blob, decompressors, options)?;
                Ok(BlockSummary::of(blob.offset, &buffer))
            })
            .collect::<Result<Vec<BlockSummary>>>()?;

        let mut index = PbfIndex::default();
        for summary in summaries {
            index.insert(summary);
        }
        info!(
            "indexed {} blocks: {} node, {} way, {} relation ranges",
            index.blocks,
            index.node_index.len(),
            index.way_index.len(),
            index.relation_index.len()
        );
        Ok(index)
    }

    fn insert(&mut self, summary: BlockSummary) {
        let offset = summary.offset;
        for (range, map) in [
            (summary.nodes, &mut self.node_index),
            (summary.ways, &mut self.way_index),
            (summary.relations, &mut self.relation_index),
        ] {
            if let Some(range) = range {
                map.insert((range.max, offset), range.min);
            }
        }
        self.blocks += 1;
    }

    fn map(&self, element_type: ElementType) -> Option<&BTreeMap<(i64, u64), i64>> {
        match element_type {
            ElementType::Node => Some(&self.node_index),
            ElementType::Way => Some(&self.way_index),
            ElementType::Relation => Some(&self.relation_index),
            ElementType::Changeset => None,
        }
    }

    /// Offsets of the blocks whose id range covers `id`.
    fn offsets(&self, element_type: ElementType, id: i64) -> impl Iterator<Item = u64> + '_ {
        self.map(element_type)
            .into_iter()
            .flat_map(move |map| map.range((id, 0)..))
            .filter(move |(_, min)| **min <= id)
            .map(|((_, offset), _)| *offset)
    }
}

fn index_source<R: Read + Seek + Send>(source: R) -> Result<(Header, PbfIndex, R)> {
    let decompressors = Decompressors::default();
    let mut blobs = BlobReader::new(source);
    let header_blob = blobs
        .next_blob()?
        .ok_or(FormatError::Truncated("OSMHeader"))?;
    let header = decode_header(&header_blob.decode(&decompressors)?)?;
    let index = PbfIndex::build(&mut blobs, &decompressors)?;
    Ok((header, index, blobs.into_inner()))
}

/// Random access to the entities of a PBF file by type and id.
///
/// Opening the reader scans the file once and records the id range of
/// every block. Lookups decode only the blocks whose range covers the id.
/// Use the cached variant when many lookups hit the same blocks.
///
/// ```no_run
/// use pbf_arena::models::ElementType;
/// use pbf_arena::pbf::readers::IndexedReader;
///
/// let mut reader = IndexedReader::from_path_with_cache("path/to/osm.pbf", 1000).unwrap();
/// let elements = reader.get_with_deps(ElementType::Way, 1055523837).unwrap();
/// ```
pub struct IndexedReader<T: PbfRandomRead> {
    pbf_reader: T,
    pbf_index: PbfIndex,
    header: Header,
}

impl IndexedReader<PbfReader<BufReader<File>>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(BufReader::new(File::open(path)?))
    }
}

impl IndexedReader<CachedReader<BufReader<File>>> {
    /// `cache_capacity` is the number of decoded blocks to keep.
    pub fn from_path_with_cache<P: AsRef<Path>>(path: P, cache_capacity: usize) -> Result<Self> {
        Self::with_cache(BufReader::new(File::open(path)?), cache_capacity)
    }
}

impl<R: Read + Seek + Send> IndexedReader<PbfReader<R>> {
    pub fn new(source: R) -> Result<Self> {
        let (header, pbf_index, source) = index_source(source)?;
        Ok(IndexedReader {
            pbf_reader: PbfReader::new(source),
            pbf_index,
            header,
        })
    }
}

impl<R: Read + Seek + Send> IndexedReader<CachedReader<R>> {
    pub fn with_cache(source: R, cache_capacity: usize) -> Result<Self> {
        let (header, pbf_index, source) = index_source(source)?;
        Ok(IndexedReader {
            pbf_reader: CachedReader::new(PbfReader::new(source), cache_capacity),
            pbf_index,
            header,
        })
    }
}

impl<T: PbfRandomRead> IndexedReader<T> {
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn block_count(&self) -> usize {
        self.pbf_index.blocks
    }

    /// All elements of `element_type` with an id in `ids`, each id once,
    /// in file order.
    fn find_elements(&mut self, element_type: ElementType, ids: &[i64]) -> Result<Vec<Element>> {
        let offsets: BTreeSet<u64> = ids
            .iter()
            .flat_map(|id| self.pbf_index.offsets(element_type, *id))
            .collect();
        let mut wanted: HashSet<i64> = ids.iter().copied().collect();
        let bits = EntityBits::from_item_type(element_type.item_type());

        let mut result = Vec::new();
        for offset in offsets {
            if wanted.is_empty() {
                break;
            }
            let buffer = self.pbf_reader.read_blob_by_offset(offset)?;
            for entity in buffer.select(bits) {
                if wanted.remove(&entity.id()) {
                    result.push(Element::from(entity));
                }
            }
        }
        Ok(result)
    }

    pub fn find_node(&mut self, node_id: i64) -> Result<Option<Node>> {
        Ok(self.find_nodes(&[node_id])?.pop())
    }

    /// Look up a batch of nodes, decoding every candidate block once.
    pub fn find_nodes(&mut self, node_ids: &[i64]) -> Result<Vec<Node>> {
        let elements = self.find_elements(ElementType::Node, node_ids)?;
        Ok(elements
            .into_iter()
            .filter_map(|element| match element {
                Element::Node(node) => Some(node),
                _ => None,
            })
            .collect())
    }

    pub fn find_way(&mut self, way_id: i64) -> Result<Option<Way>> {
        Ok(self.find_ways(&[way_id])?.pop())
    }

    pub fn find_ways(&mut self, way_ids: &[i64]) -> Result<Vec<Way>> {
        let elements = self.find_elements(ElementType::Way, way_ids)?;
        Ok(elements
            .into_iter()
            .filter_map(|element| match element {
                Element::Way(way) => Some(way),
                _ => None,
            })
            .collect())
    }

    pub fn find_relation(&mut self, relation_id: i64) -> Result<Option<Relation>> {
        Ok(self.find_relations(&[relation_id])?.pop())
    }

    pub fn find_relations(&mut self, relation_ids: &[i64]) -> Result<Vec<Relation>> {
        let elements = self.find_elements(ElementType::Relation, relation_ids)?;
        Ok(elements
            .into_iter()
            .filter_map(|element| match element {
                Element::Relation(relation) => Some(relation),
                _ => None,
            })
            .collect())
    }

    /// Changesets are not indexed and never found.
    pub fn find(&mut self, element_type: ElementType, element_id: i64) -> Result<Option<Element>> {
        Ok(self.find_elements(element_type, &[element_id])?.pop())
    }

    /// The element and everything it references: the nodes of a way; the
    /// member nodes, ways (with their nodes) and relations (recursively) of
    /// a relation. Every element appears once, even for relations that
    /// contain themselves. Missing members are left out.
    pub fn get_with_deps(&mut self, element_type: ElementType, element_id: i64) -> Result<Vec<Element>> {
        let mut result = Vec::new();
        let mut seen = HashSet::new();
        self.collect_with_deps(element_type, element_id, &mut seen, &mut result)?;
        Ok(result)
    }

    fn collect_with_deps(
        &mut self,
        element_type: ElementType,
        element_id: i64,
        seen: &mut HashSet<(ElementType, i64)>,
        result: &mut Vec<Element>,
    ) -> Result<()> {
        if !seen.insert((element_type, element_id)) {
            return Ok(());
        }
        let Some(element) = self.find(element_type, element_id)? else {
            return Ok(());
        };

        let mut node_ids = Vec::new();
        let mut children = Vec::new();
        match &element {
            Element::Way(way) => node_ids.extend(way.way_nodes.iter().map(|n| n.id)),
            Element::Relation(relation) => {
                for member in &relation.members {
                    match member.member_type {
                        ElementType::Node => node_ids.push(member.member_id),
                        ElementType::Way | ElementType::Relation => {
                            children.push((member.member_type, member.member_id))
                        }
                        ElementType::Changeset => {}
                    }
                }
            }
            Element::Node(_) | Element::Changeset(_) => {}
        }
        result.push(element);

        node_ids.retain(|id| seen.insert((ElementType::Node, *id)));
        result.extend(
            self.find_nodes(&node_ids)?
                .into_iter()
                .map(Element::Node),
        );
        for (child_type, child_id) in children {
            self.collect_with_deps(child_type, child_id, seen, result)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::models::{RelationMember, WayNode};
    use crate::osm::Location;
    use crate::pbf::writers::{PbfWriter, MAX_BLOCK_ITEM_LENGTH};

    fn member(member_type: ElementType, member_id: i64) -> RelationMember {
        RelationMember {
            member_id,
            member_type,
            role: String::new(),
        }
    }

    fn sample_file() -> Vec<u8> {
        let mut writer = PbfWriter::new(Vec::new(), true);
        let node_count = MAX_BLOCK_ITEM_LENGTH as i64 + 100;
        for id in 1..=node_count {
            let node = Node {
                id,
                location: Location::new(id as i32, 0),
                ..Default::default()
            };
            writer.write_element(&Element::Node(node)).unwrap();
        }
        let way = Way {
            id: 10,
            way_nodes: vec![
                WayNode::new_without_coords(1),
                WayNode::new_without_coords(node_count),
                WayNode::new_without_coords(1),
            ],
            ..Default::default()
        };
        writer.write_element(&Element::Way(way)).unwrap();
        let relations = [
            Relation {
                id: 20,
                members: vec![
                    member(ElementType::Way, 10),
                    member(ElementType::Node, 5),
                    member(ElementType::Relation, 21),
                    member(ElementType::Node, 999_999),
                ],
                ..Default::default()
            },
            Relation {
                id: 21,
                members: vec![member(ElementType::Relation, 20)],
                ..Default::default()
            },
        ];
        for relation in relations {
            writer.write_element(&Element::Relation(relation)).unwrap();
        }
        writer.finish().unwrap()
    }

    #[test]
    fn test_find() {
        let mut reader = IndexedReader::new(Cursor::new(sample_file())).unwrap();
        assert_eq!(reader.block_count(), 2);

        let node = reader.find_node(MAX_BLOCK_ITEM_LENGTH as i64 + 3).unwrap().unwrap();
        assert_eq!(node.location, Location::new(MAX_BLOCK_ITEM_LENGTH as i32 + 3, 0));
        assert!(reader.find_node(0).unwrap().is_none());
        assert_eq!(reader.find_way(10).unwrap().unwrap().way_nodes.len(), 3);
        assert!(reader.find(ElementType::Changeset, 1).unwrap().is_none());

        let mut ids: Vec<i64> = reader
            .find_nodes(&[2, 8001, 8050, 2])
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![2, 8001, 8050]);
    }

    #[test]
    fn test_get_with_deps() {
        let mut reader = IndexedReader::with_cache(Cursor::new(sample_file()), 8).unwrap();

        let way = reader.get_with_deps(ElementType::Way, 10).unwrap();
        let meta: Vec<(ElementType, i64)> = way.iter().map(Element::get_meta).collect();
        assert_eq!(meta[0], (ElementType::Way, 10));
        assert_eq!(meta.len(), 3);

        let relation = reader.get_with_deps(ElementType::Relation, 20).unwrap();
        let meta: HashSet<(ElementType, i64)> = relation.iter().map(Element::get_meta).collect();
        assert_eq!(relation.len(), meta.len());
        assert!(meta.contains(&(ElementType::Relation, 21)));
        assert!(meta.contains(&(ElementType::Node, 5)));
        assert!(meta.contains(&(ElementType::Node, MAX_BLOCK_ITEM_LENGTH as i64 + 100)));
        assert!(!meta.contains(&(ElementType::Node, 999_999)));
        // relation, way, 3 nodes, relation 21
        assert_eq!(relation.len(), 6);
    }
}
