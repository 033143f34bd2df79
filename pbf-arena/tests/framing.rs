mod common;

use std::io::Cursor;
use std::sync::Arc;

use pbf_arena::osm::OsmObject;
use pbf_arena::pbf::codecs::{Decompressor, Decompressors};
use pbf_arena::pbf::proto::fileformat;
use pbf_arena::pbf::readers::{BufferSource, PbfReader, ReaderStatus};
use pbf_arena::{Error, FormatError, Result};
use protobuf::Message;

fn first_error(bytes: Vec<u8>) -> Error {
    let mut reader = PbfReader::new(Cursor::new(bytes));
    loop {
        match reader.read() {
            Ok(Some(_)) => continue,
            Ok(None) => panic!("stream ended without an error"),
            Err(e) => {
                assert_eq!(reader.status(), ReaderStatus::Error);
                return e;
            }
        }
    }
}

#[test]
fn test_header_size_limit() {
    common::init_logger();
    let err = first_error(0x8000_0000u32.to_be_bytes().to_vec());
    assert_eq!(err.format_error(), Some(&FormatError::HeaderTooLarge(0x8000_0000)));
}

#[test]
fn test_lzma_is_unsupported() {
    let mut blob = fileformat::Blob::new();
    blob.set_raw_size(10);
    blob.set_lzma_data(vec![1, 2, 3]);
    let mut bytes = common::header_frame();
    bytes.extend(common::frame("OSMData", &blob.write_to_bytes().unwrap()));

    let err = first_error(bytes);
    assert_eq!(
        err.format_error(),
        Some(&FormatError::UnsupportedCompression("lzma".to_owned()))
    );
}

#[test]
fn test_truncated_unit() {
    let mut bytes = common::header_frame();
    let data = common::data_frame(&common::pub_node_block());
    bytes.extend_from_slice(&data[..data.len() - 3]);

    let err = first_error(bytes);
    assert_eq!(err.format_error(), Some(&FormatError::Truncated("Blob")));
}

#[test]
fn test_truncated_length_prefix() {
    let mut bytes = common::single_node_file();
    bytes.extend_from_slice(&[0, 0]);
    let mut reader = PbfReader::new(Cursor::new(bytes));
    assert!(reader.read().unwrap().is_some());
    let err = reader.read().unwrap_err();
    assert_eq!(err.format_error(), Some(&FormatError::Truncated("blob header length")));
}

#[test]
fn test_zero_length_prefix_ends_stream() {
    let mut bytes = common::single_node_file();
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes.extend_from_slice(b"trailing garbage");

    let mut reader = PbfReader::new(Cursor::new(bytes));
    assert_eq!(reader.read().unwrap().unwrap().nodes().count(), 1);
    assert!(reader.read().unwrap().is_none());
    assert_eq!(reader.status(), ReaderStatus::Eof);
}

#[test]
fn test_data_before_header() {
    let bytes = common::data_frame(&common::pub_node_block());
    let err = first_error(bytes);
    assert_eq!(
        err.format_error(),
        Some(&FormatError::UnexpectedBlobType {
            expected: "OSMHeader",
            found: "OSMData".to_owned(),
        })
    );
}

#[test]
fn test_unknown_blob_type() {
    let mut bytes = common::header_frame();
    bytes.extend(common::frame("OSMIndex", &common::raw_blob(&common::pub_node_block())));
    let err = first_error(bytes);
    assert!(matches!(
        err.format_error(),
        Some(FormatError::UnexpectedBlobType { expected: "OSMData", .. })
    ));
}

#[test]
fn test_raw_size_mismatch() {
    let mut blob = fileformat::Blob::new();
    let block = common::pub_node_block();
    let mut compressed = Vec::new();
    {
        use std::io::Write;
        let mut encoder = flate2::write::ZlibEncoder::new(&mut compressed, flate2::Compression::fast());
        encoder.write_all(&block).unwrap();
        encoder.finish().unwrap();
    }
    blob.set_zlib_data(compressed);
    blob.set_raw_size(block.len() as i32 + 1);
    let mut bytes = common::header_frame();
    bytes.extend(common::frame("OSMData", &blob.write_to_bytes().unwrap()));

    let err = first_error(bytes);
    assert_eq!(
        err.format_error(),
        Some(&FormatError::RawSizeMismatch {
            expected: block.len() + 1,
            actual: block.len(),
        })
    );
}

#[test]
fn test_uncompressed_blob() {
    let mut bytes = common::header_frame();
    bytes.extend(common::frame("OSMData", &common::raw_blob(&common::pub_node_block())));
    let mut reader = PbfReader::new(Cursor::new(bytes));
    let buffer = reader.read().unwrap().unwrap();
    assert_eq!(buffer.nodes().next().unwrap().id(), 17);
}

/// Stands in for a real zstd backend: the "compressed" bytes are the
/// block itself.
struct StoredDecompressor;

impl Decompressor for StoredDecompressor {
    fn decompress(&self, input: &[u8], raw_size: usize) -> Result<Vec<u8>> {
        assert_eq!(input.len(), raw_size);
        Ok(input.to_vec())
    }
}

fn zstd_file() -> Vec<u8> {
    let block = common::pub_node_block();
    let mut blob = fileformat::Blob::new();
    blob.set_raw_size(block.len() as i32);
    blob.set_zstd_data(block);
    let mut bytes = common::header_frame();
    bytes.extend(common::frame("OSMData", &blob.write_to_bytes().unwrap()));
    bytes
}

#[test]
fn test_registered_decompressor() {
    let err = first_error(zstd_file());
    assert_eq!(
        err.format_error(),
        Some(&FormatError::UnsupportedCompression("zstd".to_owned()))
    );

    let mut decompressors = Decompressors::default();
    decompressors.register(Decompressors::ZSTD, Arc::new(StoredDecompressor));
    let mut reader = PbfReader::new(Cursor::new(zstd_file())).with_decompressors(decompressors);
    let buffer = reader.read().unwrap().unwrap();
    assert_eq!(buffer.nodes().next().unwrap().tags().get("amenity"), Some("pub"));
}
