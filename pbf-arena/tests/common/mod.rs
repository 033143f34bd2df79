#![allow(dead_code)]

use pbf_arena::pbf::codecs::blob::{encode_blob, write_blob};
use pbf_arena::pbf::codecs::{encode_header, BlobKind, Header};
use pbf_arena::pbf::proto::{fileformat, osmformat};
use protobuf::Message;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A framed unit with an arbitrary type string and serialized `Blob`.
pub fn frame(blob_type: &str, blob: &[u8]) -> Vec<u8> {
    let mut header = fileformat::BlobHeader::new();
    header.set_field_type(blob_type.to_owned());
    header.set_datasize(blob.len() as i32);
    let header_bytes = header.write_to_bytes().unwrap();

    let mut bytes = (header_bytes.len() as u32).to_be_bytes().to_vec();
    bytes.extend_from_slice(&header_bytes);
    bytes.extend_from_slice(blob);
    bytes
}

/// A `Blob` carrying `block` uncompressed.
pub fn raw_blob(block: &[u8]) -> Vec<u8> {
    let mut blob = fileformat::Blob::new();
    blob.set_raw(block.to_vec());
    blob.write_to_bytes().unwrap()
}

pub fn header_frame() -> Vec<u8> {
    let header = Header {
        required_features: vec!["OsmSchema-V0.6".to_owned(), "DenseNodes".to_owned()],
        ..Default::default()
    };
    let mut bytes = Vec::new();
    let blob = encode_blob(&encode_header(&header).unwrap()).unwrap();
    write_blob(&mut bytes, BlobKind::Header, &blob).unwrap();
    bytes
}

pub fn data_frame(block: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    write_blob(&mut bytes, BlobKind::Data, &encode_blob(block).unwrap()).unwrap();
    bytes
}

/// A block of plain (not dense) nodes with ids `first..first + count` and
/// no tags.
pub fn node_block(first: i64, count: i64) -> Vec<u8> {
    let mut block = osmformat::PrimitiveBlock::new();
    block.mut_stringtable().mut_s().push(Vec::new());
    let mut group = osmformat::PrimitiveGroup::new();
    for id in first..first + count {
        let mut node = osmformat::Node::new();
        node.set_id(id);
        node.set_lat(id * 10);
        node.set_lon(id * 20);
        group.mut_nodes().push(node);
    }
    block.mut_primitivegroup().push(group);
    block.write_to_bytes().unwrap()
}

/// Node 17 at 3.5/4.7 tagged `amenity=pub`, default granularity.
pub fn pub_node_block() -> Vec<u8> {
    let mut block = osmformat::PrimitiveBlock::new();
    let strings = block.mut_stringtable().mut_s();
    strings.push(Vec::new());
    strings.push(b"amenity".to_vec());
    strings.push(b"pub".to_vec());

    let mut node = osmformat::Node::new();
    node.set_id(17);
    node.set_lon(35_000_000);
    node.set_lat(47_000_000);
    node.mut_keys().push(1);
    node.mut_vals().push(2);

    let mut group = osmformat::PrimitiveGroup::new();
    group.mut_nodes().push(node);
    block.mut_primitivegroup().push(group);
    block.write_to_bytes().unwrap()
}

pub fn single_node_file() -> Vec<u8> {
    let mut bytes = header_frame();
    bytes.extend(data_frame(&pub_node_block()));
    bytes
}

/// `blocks` data blocks of `per_block` nodes, ids counting up from 1.
pub fn node_file(blocks: i64, per_block: i64) -> Vec<u8> {
    let mut bytes = header_frame();
    for i in 0..blocks {
        bytes.extend(data_frame(&node_block(1 + i * per_block, per_block)));
    }
    bytes
}
