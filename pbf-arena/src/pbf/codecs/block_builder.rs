use std::collections::HashMap;

use protobuf::RepeatedField;

use super::field::FieldCodec;
use super::varint::DeltaEncoder;
use crate::memory::{Buffer, ItemType};
use crate::osm::{Entity, Node, OsmObject, Relation, TagList, Way};
use crate::pbf::proto::osmformat;

/// Block-local string table. Index 0 is the empty string, which dense
/// nodes use as the tag separator.
struct StringTableBuilder {
    strings: Vec<String>,
    id_map: HashMap<String, u32>,
}

impl StringTableBuilder {
    fn new() -> Self {
        let mut builder = Self {
            strings: Vec::new(),
            id_map: HashMap::new(),
        };
        builder.add("");
        builder
    }

    fn add(&mut self, string: &str) -> u32 {
        if let Some(id) = self.id_map.get(string) {
            return *id;
        }
        let id = self.strings.len() as u32;
        self.strings.push(string.to_owned());
        self.id_map.insert(string.to_owned(), id);
        id
    }

    fn into_string_table(self) -> osmformat::StringTable {
        let bytes: Vec<Vec<u8>> = self.strings.into_iter().map(String::into_bytes).collect();
        let mut table = osmformat::StringTable::new();
        table.set_s(RepeatedField::from_vec(bytes));
        table
    }
}

/// Encodes the entities of a buffer as one `PrimitiveBlock`.
pub struct BlockBuilder {
    block: osmformat::PrimitiveBlock,
    codec: FieldCodec,
    strings: StringTableBuilder,
    use_dense: bool,
    locations_on_ways: bool,
}

impl BlockBuilder {
    pub fn new(use_dense: bool, locations_on_ways: bool) -> Self {
        Self {
            block: osmformat::PrimitiveBlock::new(),
            codec: FieldCodec::default(),
            strings: StringTableBuilder::new(),
            use_dense,
            locations_on_ways,
        }
    }

    fn encode_tags(&mut self, tags: TagList<'_>) -> (Vec<u32>, Vec<u32>) {
        tags.iter()
            .map(|(key, value)| (self.strings.add(key), self.strings.add(value)))
            .unzip()
    }

    fn encode_info<'a>(&mut self, object: &impl OsmObject<'a>) -> osmformat::Info {
        let mut info = osmformat::Info::new();
        info.set_version(object.version() as i32);
        info.set_timestamp(self.codec.encode_timestamp(object.timestamp()));
        info.set_changeset(object.changeset() as i64);
        info.set_uid(object.uid() as i32);
        info.set_user_sid(self.strings.add(object.user()));
        info.set_visible(object.visible());
        info
    }

    fn encode_dense_nodes(&mut self, nodes: &[Node<'_>]) -> osmformat::DenseNodes {
        let mut dense = osmformat::DenseNodes::new();
        let mut dense_info = osmformat::DenseInfo::new();

        let mut id = DeltaEncoder::new();
        let mut lat = DeltaEncoder::new();
        let mut lon = DeltaEncoder::new();
        let mut timestamp = DeltaEncoder::new();
        let mut changeset = DeltaEncoder::new();
        let mut uid = DeltaEncoder::new();
        let mut user_sid = DeltaEncoder::new();

        for node in nodes {
            let location = node.location();
            dense.id.push(id.update(node.id()));
            dense.lat.push(lat.update(self.codec.encode_lat(location.y())));
            dense.lon.push(lon.update(self.codec.encode_lon(location.x())));

            dense_info.version.push(node.version() as i32);
            dense_info
                .timestamp
                .push(timestamp.update(self.codec.encode_timestamp(node.timestamp())));
            dense_info
                .changeset
                .push(changeset.update(node.changeset() as i64));
            dense_info.uid.push(uid.update(node.uid() as i64) as i32);
            let sid = self.strings.add(node.user());
            dense_info.user_sid.push(user_sid.update(sid as i64) as i32);
            dense_info.visible.push(node.visible());

            for (key, value) in node.tags() {
                dense.keys_vals.push(self.strings.add(key) as i32);
                dense.keys_vals.push(self.strings.add(value) as i32);
            }
            dense.keys_vals.push(0);
        }
        dense.set_denseinfo(dense_info);
        dense
    }

    fn encode_nodes(&mut self, nodes: &[Node<'_>]) -> Vec<osmformat::Node> {
        nodes
            .iter()
            .map(|node| {
                let mut osm_node = osmformat::Node::new();
                osm_node.set_id(node.id());
                let location = node.location();
                osm_node.set_lat(self.codec.encode_lat(location.y()));
                osm_node.set_lon(self.codec.encode_lon(location.x()));
                let (keys, vals) = self.encode_tags(node.tags());
                osm_node.set_keys(keys);
                osm_node.set_vals(vals);
                osm_node.set_info(self.encode_info(node));
                osm_node
            })
            .collect()
    }

    fn encode_way(&mut self, way: &Way<'_>) -> osmformat::Way {
        let mut osm_way = osmformat::Way::new();
        osm_way.set_id(way.id());

        let mut node_id = DeltaEncoder::new();
        let mut lat = DeltaEncoder::new();
        let mut lon = DeltaEncoder::new();
        for node_ref in way.nodes().iter() {
            osm_way.refs.push(node_id.update(node_ref.id));
            if self.locations_on_ways {
                osm_way
                    .lat
                    .push(lat.update(self.codec.encode_lat(node_ref.location.y())));
                osm_way
                    .lon
                    .push(lon.update(self.codec.encode_lon(node_ref.location.x())));
            }
        }

        let (keys, vals) = self.encode_tags(way.tags());
        osm_way.set_keys(keys);
        osm_way.set_vals(vals);
        osm_way.set_info(self.encode_info(way));
        osm_way
    }

    fn encode_relation(&mut self, relation: &Relation<'_>) -> osmformat::Relation {
        let mut osm_relation = osmformat::Relation::new();
        osm_relation.set_id(relation.id());

        let mut member_id = DeltaEncoder::new();
        for member in relation.members().iter() {
            let member_type = match member.member_type {
                ItemType::Node => osmformat::Relation_MemberType::NODE,
                ItemType::Way => osmformat::Relation_MemberType::WAY,
                ItemType::Relation => osmformat::Relation_MemberType::RELATION,
                _ => continue,
            };
            osm_relation.memids.push(member_id.update(member.id));
            osm_relation
                .roles_sid
                .push(self.strings.add(member.role) as i32);
            osm_relation.types.push(member_type);
        }

        let (keys, vals) = self.encode_tags(relation.tags());
        osm_relation.set_keys(keys);
        osm_relation.set_vals(vals);
        osm_relation.set_info(self.encode_info(relation));
        osm_relation
    }

    fn push_group(&mut self, group: osmformat::PrimitiveGroup) {
        self.block.primitivegroup.push(group);
    }

    /// Encode every node, way and relation in `buffer`. Each entity type
    /// gets its own group; changesets have no representation and are left
    /// out.
    pub fn build(mut self, buffer: &Buffer) -> osmformat::PrimitiveBlock {
        let mut nodes = Vec::new();
        let mut ways = Vec::new();
        let mut relations = Vec::new();
        for entity in buffer.entities() {
            match entity {
                Entity::Node(node) => nodes.push(node),
                Entity::Way(way) => ways.push(way),
                Entity::Relation(relation) => relations.push(relation),
                Entity::Changeset(_) => {}
            }
        }

        if !nodes.is_empty() {
            let mut group = osmformat::PrimitiveGroup::new();
            if self.use_dense {
                group.set_dense(self.encode_dense_nodes(&nodes));
            } else {
                group.set_nodes(RepeatedField::from_vec(self.encode_nodes(&nodes)));
            }
            self.push_group(group);
        }
        if !ways.is_empty() {
            let encoded: Vec<osmformat::Way> = ways.iter().map(|w| self.encode_way(w)).collect();
            let mut group = osmformat::PrimitiveGroup::new();
            group.set_ways(RepeatedField::from_vec(encoded));
            self.push_group(group);
        }
        if !relations.is_empty() {
            let encoded: Vec<osmformat::Relation> =
                relations.iter().map(|r| self.encode_relation(r)).collect();
            let mut group = osmformat::PrimitiveGroup::new();
            group.set_relations(RepeatedField::from_vec(encoded));
            self.push_group(group);
        }

        self.block
            .set_stringtable(self.strings.into_string_table());
        self.block
    }
}

#[cfg(test)]
mod tests {
    use protobuf::Message as _;

    use super::*;
    use crate::builder::{NodeBuilder, RelationBuilder, WayBuilder};
    use crate::memory::AutoGrow;
    use crate::osm::{Location, NodeRef, Timestamp};
    use crate::pbf::codecs::primitive::{DecodeOptions, PrimitiveBlockDecoder};

    fn sample() -> Buffer {
        let mut buffer = Buffer::new(4096, AutoGrow::Yes);
        for (id, lon, lat) in [(1, 1.0, 2.0), (2, 1.5, 2.5)] {
            let mut node = NodeBuilder::new(&mut buffer).unwrap();
            node.set_id(id)
                .set_version(2)
                .set_changeset(10)
                .set_timestamp(Timestamp::new(1_600_000_000))
                .set_uid(5)
                .set_location(Location::from_degrees(lon, lat));
            node.set_user("dora").unwrap();
            if id == 2 {
                node.add_tags([("shop", "bakery"), ("name", "Crumbs")]).unwrap();
            }
            node.commit();
        }

        let mut way = WayBuilder::new(&mut buffer).unwrap();
        way.set_id(20).set_version(1);
        way.set_user("erin").unwrap();
        way.add_node_refs([
            NodeRef::with_location(1, Location::from_degrees(1.0, 2.0)),
            NodeRef::with_location(2, Location::from_degrees(1.5, 2.5)),
        ])
        .unwrap();
        way.add_tags([("highway", "path")]).unwrap();
        way.commit();

        let mut relation = RelationBuilder::new(&mut buffer).unwrap();
        relation.set_id(30).set_visible(false);
        {
            let mut members = relation.members().unwrap();
            members.add_member(ItemType::Way, 20, "outer").unwrap();
            members.add_member(ItemType::Node, 1, "").unwrap();
        }
        relation.commit();
        buffer
    }

    fn round_trip(use_dense: bool) -> Buffer {
        let block = BlockBuilder::new(use_dense, true).build(&sample());
        let bytes = block.write_to_bytes().unwrap();
        PrimitiveBlockDecoder::new(&bytes, DecodeOptions::default())
            .decode()
            .unwrap()
    }

    fn assert_same(decoded: &Buffer) {
        let original = sample();
        let nodes: Vec<_> = decoded.nodes().collect();
        for (node, expected) in nodes.iter().zip(original.nodes()) {
            assert_eq!(node.id(), expected.id());
            assert_eq!(node.version(), expected.version());
            assert_eq!(node.changeset(), expected.changeset());
            assert_eq!(node.timestamp(), expected.timestamp());
            assert_eq!(node.uid(), expected.uid());
            assert_eq!(node.user(), expected.user());
            assert_eq!(node.location(), expected.location());
            assert_eq!(
                node.tags().iter().collect::<Vec<_>>(),
                expected.tags().iter().collect::<Vec<_>>()
            );
        }
        assert_eq!(nodes.len(), 2);

        let way = decoded.ways().next().unwrap();
        assert_eq!(way.id(), 20);
        assert_eq!(way.user(), "erin");
        assert_eq!(
            way.nodes().iter().collect::<Vec<_>>(),
            original.ways().next().unwrap().nodes().iter().collect::<Vec<_>>()
        );
        assert_eq!(way.tags().get("highway"), Some("path"));

        let relation = decoded.relations().next().unwrap();
        assert_eq!(relation.id(), 30);
        assert!(!relation.visible());
        let members: Vec<_> = relation.members().iter().collect();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].member_type, ItemType::Way);
        assert_eq!(members[0].role, "outer");
        assert_eq!(members[1].id, 1);
    }

    #[test]
    fn test_dense_round_trip() {
        assert_same(&round_trip(true));
    }

    #[test]
    fn test_plain_round_trip() {
        assert_same(&round_trip(false));
    }

    #[test]
    fn test_string_table() {
        let mut strings = StringTableBuilder::new();
        assert_eq!(strings.add("a"), 1);
        assert_eq!(strings.add("b"), 2);
        assert_eq!(strings.add("a"), 1);
        assert_eq!(strings.add(""), 0);
        assert_eq!(strings.into_string_table().get_s().len(), 3);
    }
}
