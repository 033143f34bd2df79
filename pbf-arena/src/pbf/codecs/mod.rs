//! The PBF wire format: framing, compression, protobuf primitives and the
//! block codecs on top of them.

pub mod blob;
pub mod block_builder;
pub mod compression;
pub mod field;
pub mod header;
pub mod message;
pub mod primitive;
pub mod varint;

pub use blob::{BlobKind, BlobReader, RawBlob, MAX_BLOB_HEADER_SIZE, MAX_UNCOMPRESSED_BLOB_SIZE};
pub use block_builder::BlockBuilder;
pub use compression::{Decompressor, Decompressors, ZlibDecompressor};
pub use header::{decode_header, encode_header, Header};
pub use primitive::{decode_data_blob, DecodeOptions, PrimitiveBlockDecoder};
