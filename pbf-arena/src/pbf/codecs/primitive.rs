//! Decoding of `PrimitiveBlock`s into buffers.
//!
//! Entities are written with the builders straight into the target buffer
//! and committed one at a time. Groups of types that were not asked for are
//! skipped without looking inside them.

use log::trace;

use super::blob::RawBlob;
use super::compression::Decompressors;
use super::field::{FieldCodec, StringTable, DEFAULT_DATE_GRANULARITY, DEFAULT_GRANULARITY};
use super::message::{Message, Packed};
use super::varint::DeltaDecoder;
use crate::builder::{NodeBuilder, RelationBuilder, TagListBuilder, WayBuilder};
use crate::error::{FormatError, Result};
use crate::memory::{AutoGrow, Buffer, ItemType};
use crate::osm::{EntityBits, NodeRef, Timestamp};

/// Starting capacity of the buffer a block is decoded into.
pub const INITIAL_BUFFER_SIZE: usize = 2 * 1024 * 1024;

/// What to decode from each data block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub read_types: EntityBits,
    /// Version, timestamp, changeset, uid, user and visibility.
    pub read_metadata: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            read_types: EntityBits::NWR,
            read_metadata: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Info<'a> {
    version: u32,
    timestamp: Timestamp,
    changeset: u32,
    uid: u32,
    user: &'a str,
    visible: bool,
}

impl Default for Info<'_> {
    fn default() -> Self {
        Self {
            version: 0,
            timestamp: Timestamp::default(),
            changeset: 0,
            uid: 0,
            user: "",
            visible: true,
        }
    }
}

macro_rules! set_info {
    ($builder:expr, $info:expr) => {{
        let info = $info;
        $builder
            .set_version(info.version)
            .set_changeset(info.changeset)
            .set_timestamp(info.timestamp)
            .set_uid(info.uid)
            .set_visible(info.visible);
        $builder.set_user(info.user)?;
    }};
}

fn object_version(value: i32) -> std::result::Result<u32, FormatError> {
    u32::try_from(value).map_err(|_| FormatError::Negative {
        what: "object version",
        value: value as i64,
    })
}

fn changeset_id(value: i64) -> std::result::Result<u32, FormatError> {
    if value < 0 {
        return Err(FormatError::Negative {
            what: "changeset id",
            value,
        });
    }
    u32::try_from(value).map_err(|_| FormatError::OutOfRange {
        what: "changeset id",
        value,
    })
}

// Anonymous edits carry a negative uid.
fn user_id(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

fn member_type(code: i32) -> std::result::Result<ItemType, FormatError> {
    match code {
        0 => Ok(ItemType::Node),
        1 => Ok(ItemType::Way),
        2 => Ok(ItemType::Relation),
        other => Err(FormatError::UnknownMemberType(other as i64)),
    }
}

fn check_tag_lengths(keys: &Packed<'_, u32>, vals: &Packed<'_, u32>) -> Result<()> {
    if keys.len() != vals.len() {
        return Err(FormatError::LengthMismatch("tag keys/vals").into());
    }
    Ok(())
}

fn add_tag_pairs(
    tags: &mut TagListBuilder<'_, '_>,
    strings: &StringTable<'_>,
    keys: Packed<'_, u32>,
    mut vals: Packed<'_, u32>,
) -> Result<()> {
    for key in keys {
        let value = vals.next_required("tag keys/vals")?;
        tags.add_tag(strings.get(key?)?, strings.get(value)?)?;
    }
    Ok(())
}

/// Decodes one uncompressed `PrimitiveBlock`.
pub struct PrimitiveBlockDecoder<'a> {
    data: &'a [u8],
    options: DecodeOptions,
    strings: StringTable<'a>,
    codec: FieldCodec,
    buffer: Buffer,
}

impl<'a> PrimitiveBlockDecoder<'a> {
    pub fn new(data: &'a [u8], options: DecodeOptions) -> PrimitiveBlockDecoder<'a> {
        Self {
            data,
            options,
            strings: StringTable::default(),
            codec: FieldCodec::default(),
            buffer: Buffer::new(INITIAL_BUFFER_SIZE, AutoGrow::Yes),
        }
    }

    /// Decode the whole block. Any format fault discards everything decoded
    /// so far.
    pub fn decode(mut self) -> Result<Buffer> {
        if !self.options.read_types.intersects(EntityBits::NWR) {
            return Ok(self.buffer);
        }
        self.decode_metadata()?;
        self.decode_groups()?;
        Ok(self.buffer)
    }

    fn decode_metadata(&mut self) -> Result<()> {
        let mut granularity = DEFAULT_GRANULARITY;
        let mut date_granularity = DEFAULT_DATE_GRANULARITY;
        let mut lat_offset = 0;
        let mut lon_offset = 0;
        let mut has_strings = false;

        let mut message = Message::new(self.data);
        while message.next()? {
            match message.tag() {
                1 => {
                    if has_strings {
                        return Err(FormatError::DuplicateStringTable.into());
                    }
                    self.strings = StringTable::decode(message.get_message()?)?;
                    has_strings = true;
                }
                17 => granularity = message.get_int32()?,
                18 => date_granularity = message.get_int32()?,
                19 => lat_offset = message.get_int64()?,
                20 => lon_offset = message.get_int64()?,
                _ => message.skip()?,
            }
        }

        if granularity <= 0 {
            return Err(FormatError::OutOfRange {
                what: "granularity",
                value: granularity as i64,
            }
            .into());
        }
        if date_granularity <= 0 {
            return Err(FormatError::OutOfRange {
                what: "date granularity",
                value: date_granularity as i64,
            }
            .into());
        }
        self.codec = FieldCodec::new(granularity, date_granularity).with_offsets(lat_offset, lon_offset);
        trace!(
            "block: {} strings, granularity {}, date granularity {}",
            self.strings.len(),
            granularity,
            date_granularity
        );
        Ok(())
    }

    fn decode_groups(&mut self) -> Result<()> {
        let mut message = Message::new(self.data);
        while message.next()? {
            match message.tag() {
                2 => self.decode_group(message.get_message()?)?,
                _ => message.skip()?,
            }
        }
        Ok(())
    }

    fn decode_group(&mut self, mut group: Message<'a>) -> Result<()> {
        let read_types = self.options.read_types;
        while group.next()? {
            match group.tag() {
                1 if read_types.contains(EntityBits::NODE) => self.decode_node(group.get_message()?)?,
                2 if read_types.contains(EntityBits::NODE) => {
                    self.decode_dense_nodes(group.get_message()?)?
                }
                3 if read_types.contains(EntityBits::WAY) => self.decode_way(group.get_message()?)?,
                4 if read_types.contains(EntityBits::RELATION) => {
                    self.decode_relation(group.get_message()?)?
                }
                _ => group.skip()?,
            }
        }
        Ok(())
    }

    fn decode_info(&self, mut message: Message<'a>) -> Result<Info<'a>> {
        let mut info = Info::default();
        while message.next()? {
            match message.tag() {
                1 => info.version = object_version(message.get_int32()?)?,
                2 => info.timestamp = self.codec.decode_timestamp(message.get_int64()?)?,
                3 => info.changeset = changeset_id(message.get_int64()?)?,
                4 => info.uid = user_id(message.get_int32()? as i64),
                5 => info.user = self.strings.get(message.get_uint32()?)?,
                6 => info.visible = message.get_bool()?,
                _ => message.skip()?,
            }
        }
        Ok(info)
    }

    fn decode_node(&mut self, mut message: Message<'a>) -> Result<()> {
        let mut id = 0;
        let mut keys = Packed::empty();
        let mut vals = Packed::empty();
        let mut info = Info::default();
        let mut lat = None;
        let mut lon = None;

        while message.next()? {
            match message.tag() {
                1 => id = message.get_sint64()?,
                2 => keys = message.get_packed_uint32()?,
                3 => vals = message.get_packed_uint32()?,
                4 if self.options.read_metadata => info = self.decode_info(message.get_message()?)?,
                8 => lat = Some(message.get_sint64()?),
                9 => lon = Some(message.get_sint64()?),
                _ => message.skip()?,
            }
        }
        check_tag_lengths(&keys, &vals)?;
        // Without both coordinates the location stays undefined.
        let location = match (lon, lat) {
            (Some(lon), Some(lat)) if info.visible => Some(self.codec.decode_location(lon, lat)?),
            _ => None,
        };

        let mut builder = NodeBuilder::new(&mut self.buffer)?;
        builder.set_id(id);
        set_info!(builder, info);
        if let Some(location) = location {
            builder.set_location(location);
        }
        if !keys.is_empty() {
            add_tag_pairs(&mut builder.tags()?, &self.strings, keys, vals)?;
        }
        builder.commit();
        Ok(())
    }

    fn decode_dense_nodes(&mut self, mut message: Message<'a>) -> Result<()> {
        let mut ids = Packed::empty();
        let mut lats = Packed::empty();
        let mut lons = Packed::empty();
        let mut keys_vals = Packed::empty();
        let mut dense_info = None;

        while message.next()? {
            match message.tag() {
                1 => ids = message.get_packed_sint64()?,
                5 => dense_info = Some(message.get_message()?),
                8 => lats = message.get_packed_sint64()?,
                9 => lons = message.get_packed_sint64()?,
                10 => keys_vals = message.get_packed_int32()?,
                _ => message.skip()?,
            }
        }

        let mut versions = Packed::empty();
        let mut timestamps = Packed::empty();
        let mut changesets = Packed::empty();
        let mut uids = Packed::empty();
        let mut user_sids = Packed::empty();
        let mut visibles = Packed::empty();
        let mut has_info = false;
        if let Some(mut info) = dense_info.filter(|_| self.options.read_metadata) {
            has_info = true;
            while info.next()? {
                match info.tag() {
                    1 => versions = info.get_packed_int32()?,
                    2 => timestamps = info.get_packed_sint64()?,
                    3 => changesets = info.get_packed_sint64()?,
                    4 => uids = info.get_packed_sint32()?,
                    5 => user_sids = info.get_packed_sint32()?,
                    6 => visibles = info.get_packed_bool()?,
                    _ => info.skip()?,
                }
            }
        }
        let has_visible = !visibles.is_empty();

        // One accumulator per delta-coded column.
        let mut id = DeltaDecoder::new();
        let mut lat = DeltaDecoder::new();
        let mut lon = DeltaDecoder::new();
        let mut timestamp = DeltaDecoder::new();
        let mut changeset = DeltaDecoder::new();
        let mut uid = DeltaDecoder::new();
        let mut user_sid = DeltaDecoder::new();

        for delta in ids {
            let node_id = id.update(delta?);
            let node_lat = lat.update(lats.next_required("dense node id/lat/lon")?);
            let node_lon = lon.update(lons.next_required("dense node id/lat/lon")?);

            let mut info = Info::default();
            if has_info {
                info.version = object_version(versions.next_required("dense info version")?)?;
                info.timestamp = self
                    .codec
                    .decode_timestamp(timestamp.update(timestamps.next_required("dense info timestamp")?))?;
                info.changeset =
                    changeset_id(changeset.update(changesets.next_required("dense info changeset")?))?;
                info.uid = user_id(uid.update(uids.next_required("dense info uid")? as i64));
                info.user = self
                    .strings
                    .get(user_sid.update(user_sids.next_required("dense info user_sid")? as i64))?;
                if has_visible {
                    info.visible = visibles.next_required("dense info visible")?;
                }
            }
            let location = if info.visible {
                Some(self.codec.decode_location(node_lon, node_lat)?)
            } else {
                None
            };

            let mut builder = NodeBuilder::new(&mut self.buffer)?;
            builder.set_id(node_id);
            set_info!(builder, info);
            if let Some(location) = location {
                builder.set_location(location);
            }

            // Tags of consecutive nodes are separated by a single 0.
            let mut key = match keys_vals.next().transpose()? {
                None | Some(0) => None,
                Some(key) => Some(key),
            };
            if key.is_some() {
                let mut tags = builder.tags()?;
                while let Some(k) = key {
                    let value = keys_vals.next().transpose()?.ok_or(FormatError::DanglingKey)?;
                    tags.add_tag(self.strings.get(k)?, self.strings.get(value)?)?;
                    key = match keys_vals.next().transpose()? {
                        None | Some(0) => None,
                        Some(next) => Some(next),
                    };
                }
            }
            builder.commit();
        }

        if lats.next().is_some() || lons.next().is_some() {
            return Err(FormatError::LengthMismatch("dense node id/lat/lon").into());
        }
        if keys_vals.next().is_some() {
            return Err(FormatError::LengthMismatch("dense node keys_vals").into());
        }
        if versions.next().is_some()
            || timestamps.next().is_some()
            || changesets.next().is_some()
            || uids.next().is_some()
            || user_sids.next().is_some()
            || visibles.next().is_some()
        {
            return Err(FormatError::LengthMismatch("dense info").into());
        }
        Ok(())
    }

    fn decode_way(&mut self, mut message: Message<'a>) -> Result<()> {
        let mut id = 0;
        let mut keys = Packed::empty();
        let mut vals = Packed::empty();
        let mut info = Info::default();
        let mut refs = Packed::empty();
        let mut lats = Packed::empty();
        let mut lons = Packed::empty();

        while message.next()? {
            match message.tag() {
                1 => id = message.get_int64()?,
                2 => keys = message.get_packed_uint32()?,
                3 => vals = message.get_packed_uint32()?,
                4 if self.options.read_metadata => info = self.decode_info(message.get_message()?)?,
                8 => refs = message.get_packed_sint64()?,
                9 => lats = message.get_packed_sint64()?,
                10 => lons = message.get_packed_sint64()?,
                _ => message.skip()?,
            }
        }
        check_tag_lengths(&keys, &vals)?;
        let with_locations = !lats.is_empty() || !lons.is_empty();
        if with_locations && (lats.len() != refs.len() || lons.len() != refs.len()) {
            return Err(FormatError::LengthMismatch("way refs/lat/lon").into());
        }

        let mut builder = WayBuilder::new(&mut self.buffer)?;
        builder.set_id(id);
        set_info!(builder, info);
        if !keys.is_empty() {
            add_tag_pairs(&mut builder.tags()?, &self.strings, keys, vals)?;
        }
        if !refs.is_empty() {
            let mut nodes = builder.nodes()?;
            let mut node_id = DeltaDecoder::new();
            let mut lat = DeltaDecoder::new();
            let mut lon = DeltaDecoder::new();
            for delta in refs {
                let id = node_id.update(delta?);
                let node_ref = if with_locations {
                    let y = lat.update(lats.next_required("way refs/lat/lon")?);
                    let x = lon.update(lons.next_required("way refs/lat/lon")?);
                    NodeRef::with_location(id, self.codec.decode_location(x, y)?)
                } else {
                    NodeRef::new(id)
                };
                nodes.add_node_ref(node_ref)?;
            }
        }
        builder.commit();
        Ok(())
    }

    fn decode_relation(&mut self, mut message: Message<'a>) -> Result<()> {
        let mut id = 0;
        let mut keys = Packed::empty();
        let mut vals = Packed::empty();
        let mut info = Info::default();
        let mut roles = Packed::empty();
        let mut memids = Packed::empty();
        let mut types = Packed::empty();

        while message.next()? {
            match message.tag() {
                1 => id = message.get_int64()?,
                2 => keys = message.get_packed_uint32()?,
                3 => vals = message.get_packed_uint32()?,
                4 if self.options.read_metadata => info = self.decode_info(message.get_message()?)?,
                8 => roles = message.get_packed_int32()?,
                9 => memids = message.get_packed_sint64()?,
                10 => types = message.get_packed_int32()?,
                _ => message.skip()?,
            }
        }
        check_tag_lengths(&keys, &vals)?;
        if roles.len() != memids.len() || roles.len() != types.len() {
            return Err(FormatError::LengthMismatch("relation roles/memids/types").into());
        }

        let mut builder = RelationBuilder::new(&mut self.buffer)?;
        builder.set_id(id);
        set_info!(builder, info);
        if !keys.is_empty() {
            add_tag_pairs(&mut builder.tags()?, &self.strings, keys, vals)?;
        }
        if !roles.is_empty() {
            let mut members = builder.members()?;
            let mut member_id = DeltaDecoder::new();
            for role in roles {
                let role = self.strings.get(role?)?;
                let id = member_id.update(memids.next_required("relation roles/memids/types")?);
                let member_type = member_type(types.next_required("relation roles/memids/types")?)?;
                members.add_member(member_type, id, role)?;
            }
        }
        builder.commit();
        Ok(())
    }
}

/// Decompress and decode one `OSMData` blob.
pub fn decode_data_blob(
    blob: &RawBlob,
    decompressors: &Decompressors,
    options: DecodeOptions,
) -> Result<Buffer> {
    let data = blob.decode(decompressors)?;
    PrimitiveBlockDecoder::new(&data, options).decode()
}

#[cfg(test)]
mod tests {
    use protobuf::{Message as _, RepeatedField};

    use super::*;
    use crate::osm::{Location, OsmObject};
    use crate::pbf::proto::osmformat;

    fn block(strings: &[&str], groups: Vec<osmformat::PrimitiveGroup>) -> osmformat::PrimitiveBlock {
        let mut block = osmformat::PrimitiveBlock::new();
        let mut table = osmformat::StringTable::new();
        table.set_s(RepeatedField::from_vec(
            strings.iter().map(|s| s.as_bytes().to_vec()).collect(),
        ));
        block.set_stringtable(table);
        block.set_primitivegroup(RepeatedField::from_vec(groups));
        block
    }

    fn decode(block: &osmformat::PrimitiveBlock) -> Result<Buffer> {
        decode_with(block, DecodeOptions::default())
    }

    fn decode_with(block: &osmformat::PrimitiveBlock, options: DecodeOptions) -> Result<Buffer> {
        let bytes = block.write_to_bytes().unwrap();
        PrimitiveBlockDecoder::new(&bytes, options).decode()
    }

    fn info(version: i32, timestamp: i64, changeset: i64, uid: i32, user_sid: u32) -> osmformat::Info {
        let mut info = osmformat::Info::new();
        info.set_version(version);
        info.set_timestamp(timestamp);
        info.set_changeset(changeset);
        info.set_uid(uid);
        info.set_user_sid(user_sid);
        info
    }

    fn node_group(nodes: Vec<osmformat::Node>) -> osmformat::PrimitiveGroup {
        let mut group = osmformat::PrimitiveGroup::new();
        group.set_nodes(RepeatedField::from_vec(nodes));
        group
    }

    fn dense_group(dense: osmformat::DenseNodes) -> osmformat::PrimitiveGroup {
        let mut group = osmformat::PrimitiveGroup::new();
        group.set_dense(dense);
        group
    }

    #[test]
    fn test_single_node() {
        let mut node = osmformat::Node::new();
        node.set_id(17);
        node.set_lon(35_000_000);
        node.set_lat(47_000_000);
        node.set_keys(vec![1]);
        node.set_vals(vec![2]);
        node.set_info(info(3, 1_500_000_000, 99, 7, 3));
        let block = block(&["", "amenity", "pub", "alice"], vec![node_group(vec![node])]);

        let buffer = decode(&block).unwrap();
        let nodes: Vec<_> = buffer.nodes().collect();
        assert_eq!(nodes.len(), 1);
        let node = nodes[0];
        assert_eq!(node.id(), 17);
        assert!((node.location().lon() - 3.5).abs() < 1e-7);
        assert!((node.location().lat() - 4.7).abs() < 1e-7);
        assert_eq!(node.tags().get("amenity"), Some("pub"));
        assert_eq!(node.version(), 3);
        assert_eq!(node.timestamp().seconds(), 1_500_000_000);
        assert_eq!(node.changeset(), 99);
        assert_eq!(node.uid(), 7);
        assert_eq!(node.user(), "alice");
        assert!(node.visible());
    }

    #[test]
    fn test_node_without_coordinates() {
        // stringtable { "" }, primitivegroup { nodes { id: 5 } }
        let bytes = [0x0a, 0x02, 0x0a, 0x00, 0x12, 0x04, 0x0a, 0x02, 0x08, 0x0a];
        let buffer = PrimitiveBlockDecoder::new(&bytes, DecodeOptions::default())
            .decode()
            .unwrap();
        let node = buffer.nodes().next().unwrap();
        assert_eq!(node.id(), 5);
        assert!(!node.location().is_defined());
    }

    #[test]
    fn test_dense_tag_boundaries() {
        let mut dense = osmformat::DenseNodes::new();
        dense.set_id(vec![1, 1, 1]);
        dense.set_lat(vec![0, 10, 10]);
        dense.set_lon(vec![0, 20, 20]);
        dense.set_keys_vals(vec![0, 1, 2, 3, 4, 0, 0]);
        let block = block(&["", "highway", "bus_stop", "name", "Main St"], vec![dense_group(dense)]);

        let buffer = decode(&block).unwrap();
        let nodes: Vec<_> = buffer.nodes().collect();
        let ids: Vec<i64> = nodes.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let tag_counts: Vec<usize> = nodes.iter().map(|n| n.tags().len()).collect();
        assert_eq!(tag_counts, vec![0, 2, 0]);
        assert_eq!(nodes[1].tags().get("name"), Some("Main St"));
        assert_eq!(nodes[2].location(), Location::new(40, 20));
    }

    #[test]
    fn test_dense_without_trailing_separator() {
        let mut dense = osmformat::DenseNodes::new();
        dense.set_id(vec![5, 1]);
        dense.set_lat(vec![0, 0]);
        dense.set_lon(vec![0, 0]);
        dense.set_keys_vals(vec![1, 2, 0, 1, 2]);
        let block = block(&["", "a", "b"], vec![dense_group(dense)]);

        let buffer = decode(&block).unwrap();
        let counts: Vec<usize> = buffer.nodes().map(|n| n.tags().len()).collect();
        assert_eq!(counts, vec![1, 1]);
    }

    #[test]
    fn test_dense_info_columns() {
        let mut dense = osmformat::DenseNodes::new();
        dense.set_id(vec![100, 5]);
        dense.set_lat(vec![0, 0]);
        dense.set_lon(vec![0, 0]);
        let mut info = osmformat::DenseInfo::new();
        info.set_version(vec![1, 4]);
        info.set_timestamp(vec![1_000_000, 60]);
        info.set_changeset(vec![50, -10]);
        info.set_uid(vec![-1, 43]);
        info.set_user_sid(vec![1, 1]);
        info.set_visible(vec![true, false]);
        dense.set_denseinfo(info);
        let block = block(&["", "anon", "bob"], vec![dense_group(dense)]);

        let buffer = decode(&block).unwrap();
        let nodes: Vec<_> = buffer.nodes().collect();
        assert_eq!(nodes[0].id(), 100);
        assert_eq!(nodes[0].uid(), 0);
        assert_eq!(nodes[0].user(), "anon");
        assert_eq!(nodes[1].id(), 105);
        assert_eq!(nodes[1].version(), 4);
        assert_eq!(nodes[1].timestamp().seconds(), 1_000_060);
        assert_eq!(nodes[1].changeset(), 40);
        assert_eq!(nodes[1].uid(), 42);
        assert_eq!(nodes[1].user(), "bob");
        assert!(!nodes[1].visible());
        assert!(!nodes[1].location().is_defined());
    }

    #[test]
    fn test_dense_errors() {
        let mut dense = osmformat::DenseNodes::new();
        dense.set_id(vec![1]);
        dense.set_lat(vec![0]);
        dense.set_lon(vec![0]);
        dense.set_keys_vals(vec![1]);
        let err = decode(&block(&["", "a"], vec![dense_group(dense)])).unwrap_err();
        assert_eq!(err.format_error(), Some(&FormatError::DanglingKey));

        let mut dense = osmformat::DenseNodes::new();
        dense.set_id(vec![1]);
        dense.set_lat(vec![0, 1]);
        dense.set_lon(vec![0]);
        let err = decode(&block(&[""], vec![dense_group(dense)])).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::LengthMismatch("dense node id/lat/lon"))
        );

        let mut dense = osmformat::DenseNodes::new();
        dense.set_id(vec![1, 1]);
        dense.set_lat(vec![0]);
        dense.set_lon(vec![0]);
        let err = decode(&block(&[""], vec![dense_group(dense)])).unwrap_err();
        assert!(matches!(err.format_error(), Some(FormatError::LengthMismatch(_))));

        let mut dense = osmformat::DenseNodes::new();
        dense.set_id(vec![1]);
        dense.set_lat(vec![0]);
        dense.set_lon(vec![0]);
        dense.set_keys_vals(vec![0, 1, 2, 0]);
        let err = decode(&block(&["", "a", "b"], vec![dense_group(dense)])).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::LengthMismatch("dense node keys_vals"))
        );

        let mut dense = osmformat::DenseNodes::new();
        dense.set_id(vec![1]);
        dense.set_lat(vec![0]);
        dense.set_lon(vec![0]);
        let mut info = osmformat::DenseInfo::new();
        info.set_version(vec![1, 2]);
        info.set_timestamp(vec![0]);
        info.set_changeset(vec![1]);
        info.set_uid(vec![1]);
        info.set_user_sid(vec![0]);
        dense.set_denseinfo(info);
        let err = decode(&block(&[""], vec![dense_group(dense)])).unwrap_err();
        assert_eq!(err.format_error(), Some(&FormatError::LengthMismatch("dense info")));
    }

    #[test]
    fn test_way() {
        let mut way = osmformat::Way::new();
        way.set_id(42);
        way.set_refs(vec![10, 1, 1, -2]);
        way.set_keys(vec![1]);
        way.set_vals(vec![2]);
        let mut group = osmformat::PrimitiveGroup::new();
        group.set_ways(RepeatedField::from_vec(vec![way]));
        let buffer = decode(&block(&["", "highway", "residential"], vec![group])).unwrap();

        let way = buffer.ways().next().unwrap();
        assert_eq!(way.id(), 42);
        assert_eq!(way.nodes().ids().collect::<Vec<_>>(), vec![10, 11, 12, 10]);
        assert!(way.is_closed());
        assert!(!way.nodes().first().unwrap().location.is_defined());
        assert_eq!(way.tags().get("highway"), Some("residential"));
    }

    #[test]
    fn test_way_with_locations() {
        let mut way = osmformat::Way::new();
        way.set_id(1);
        way.set_refs(vec![1, 1]);
        way.set_lat(vec![100, 10]);
        way.set_lon(vec![200, -20]);
        let mut group = osmformat::PrimitiveGroup::new();
        group.set_ways(RepeatedField::from_vec(vec![way.clone()]));
        let buffer = decode(&block(&[""], vec![group])).unwrap();
        let refs: Vec<NodeRef> = buffer.ways().next().unwrap().nodes().iter().collect();
        assert_eq!(refs[0], NodeRef::with_location(1, Location::new(200, 100)));
        assert_eq!(refs[1], NodeRef::with_location(2, Location::new(180, 110)));

        way.set_lat(vec![100]);
        let mut group = osmformat::PrimitiveGroup::new();
        group.set_ways(RepeatedField::from_vec(vec![way]));
        let err = decode(&block(&[""], vec![group])).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::LengthMismatch("way refs/lat/lon"))
        );
    }

    fn relation(types: Vec<osmformat::Relation_MemberType>) -> osmformat::Relation {
        let mut relation = osmformat::Relation::new();
        relation.set_id(7);
        relation.set_roles_sid(vec![1, 2, 0]);
        relation.set_memids(vec![5, 5, -3]);
        relation.set_types(types);
        relation.set_info(info(2, 0, 1, 1, 0));
        relation
    }

    fn relation_group(relation: osmformat::Relation) -> osmformat::PrimitiveGroup {
        let mut group = osmformat::PrimitiveGroup::new();
        group.set_relations(RepeatedField::from_vec(vec![relation]));
        group
    }

    #[test]
    fn test_relation() {
        use osmformat::Relation_MemberType::*;
        let relation = relation(vec![NODE, WAY, RELATION]);
        let buffer = decode(&block(&["", "outer", "inner"], vec![relation_group(relation)])).unwrap();

        let relation = buffer.relations().next().unwrap();
        assert_eq!(relation.id(), 7);
        assert_eq!(relation.version(), 2);
        let members: Vec<_> = relation.members().iter().collect();
        assert_eq!(members.len(), 3);
        assert_eq!((members[0].member_type, members[0].id, members[0].role), (ItemType::Node, 5, "outer"));
        assert_eq!((members[1].member_type, members[1].id, members[1].role), (ItemType::Way, 10, "inner"));
        assert_eq!((members[2].member_type, members[2].id, members[2].role), (ItemType::Relation, 7, ""));
    }

    #[test]
    fn test_relation_length_mismatch() {
        use osmformat::Relation_MemberType::*;
        let relation = relation(vec![NODE, WAY]);
        let err = decode(&block(&["", "outer", "inner"], vec![relation_group(relation)])).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::LengthMismatch("relation roles/memids/types"))
        );
    }

    #[test]
    fn test_negative_version_and_changeset() {
        let mut node = osmformat::Node::new();
        node.set_id(1);
        node.set_lat(0);
        node.set_lon(0);
        node.set_info(info(-2, 0, 1, 1, 0));
        let err = decode(&block(&[""], vec![node_group(vec![node.clone()])])).unwrap_err();
        assert!(matches!(
            err.format_error(),
            Some(FormatError::Negative { what: "object version", .. })
        ));

        node.set_info(info(1, 0, -1, 1, 0));
        let err = decode(&block(&[""], vec![node_group(vec![node])])).unwrap_err();
        assert!(matches!(
            err.format_error(),
            Some(FormatError::Negative { what: "changeset id", .. })
        ));
    }

    #[test]
    fn test_string_index_out_of_range() {
        let mut node = osmformat::Node::new();
        node.set_id(1);
        node.set_lat(0);
        node.set_lon(0);
        node.set_keys(vec![1]);
        node.set_vals(vec![9]);
        let err = decode(&block(&["", "a"], vec![node_group(vec![node])])).unwrap_err();
        assert_eq!(err.format_error(), Some(&FormatError::StringIndexOutOfRange(9)));
    }

    #[test]
    fn test_read_types_skip_groups() {
        // The dense group is malformed, but nodes are not requested.
        let mut dense = osmformat::DenseNodes::new();
        dense.set_id(vec![1]);
        dense.set_keys_vals(vec![1]);
        let mut way = osmformat::Way::new();
        way.set_id(3);
        let mut ways = osmformat::PrimitiveGroup::new();
        ways.set_ways(RepeatedField::from_vec(vec![way]));
        let block = block(&["", "a"], vec![dense_group(dense), ways]);

        let options = DecodeOptions {
            read_types: EntityBits::WAY,
            read_metadata: true,
        };
        let buffer = decode_with(&block, options).unwrap();
        assert_eq!(buffer.entities().count(), 1);
        assert_eq!(buffer.ways().next().unwrap().id(), 3);

        assert!(decode(&block).is_err());

        let nothing = DecodeOptions {
            read_types: EntityBits::NOTHING,
            read_metadata: true,
        };
        assert!(decode_with(&block, nothing).unwrap().is_empty());
    }

    #[test]
    fn test_skip_metadata() {
        let mut node = osmformat::Node::new();
        node.set_id(1);
        node.set_lat(0);
        node.set_lon(0);
        node.set_info(info(5, 1_000, 2, 3, 1));
        let block = block(&["", "carol"], vec![node_group(vec![node])]);
        let options = DecodeOptions {
            read_types: EntityBits::ALL,
            read_metadata: false,
        };
        let buffer = decode_with(&block, options).unwrap();
        let node = buffer.nodes().next().unwrap();
        assert_eq!(node.version(), 0);
        assert_eq!(node.user(), "");
        assert!(node.visible());
        assert!(node.location().is_defined());
    }

    #[test]
    fn test_granularity_and_offsets() {
        let mut node = osmformat::Node::new();
        node.set_id(1);
        node.set_lat(10);
        node.set_lon(20);
        node.set_info(info(1, 5, 1, 1, 0));
        let mut block = block(&[""], vec![node_group(vec![node])]);
        block.set_granularity(1000);
        block.set_lat_offset(500);
        block.set_lon_offset(1_000);
        block.set_date_granularity(2000);

        let buffer = decode(&block).unwrap();
        let node = buffer.nodes().next().unwrap();
        assert_eq!(node.location(), Location::new(210, 105));
        assert_eq!(node.timestamp().seconds(), 10);
    }

    #[test]
    fn test_duplicate_string_table() {
        let block = block(&["", "a"], vec![]);
        let mut bytes = block.write_to_bytes().unwrap();
        let again = bytes.clone();
        bytes.extend_from_slice(&again);
        let err = PrimitiveBlockDecoder::new(&bytes, DecodeOptions::default())
            .decode()
            .unwrap_err();
        assert_eq!(err.format_error(), Some(&FormatError::DuplicateStringTable));
    }
}
