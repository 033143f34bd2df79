use std::fmt;
use std::io::{self, Read, Seek, SeekFrom, Write};

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::trace;
use protobuf::Message as _;

use super::compression::Decompressors;
use super::message::Message;
use crate::error::{FormatError, Result};
use crate::pbf::proto::fileformat;

/// Upper bound for the serialized `BlobHeader`.
pub const MAX_BLOB_HEADER_SIZE: u32 = 64 * 1024;

/// Upper bound for a blob, both as stored and after decompression.
pub const MAX_UNCOMPRESSED_BLOB_SIZE: usize = 32 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobKind {
    Header,
    Data,
}

impl BlobKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BlobKind::Header => "OSMHeader",
            BlobKind::Data => "OSMData",
        }
    }
}

impl fmt::Display for BlobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One framed unit of the stream, still in its stored (possibly
/// compressed) form.
#[derive(Clone)]
pub struct RawBlob {
    pub kind: BlobKind,
    /// Offset of the length prefix of this unit in the stream.
    pub offset: u64,
    pub data: Vec<u8>,
}

impl RawBlob {
    /// The uncompressed block bytes.
    pub fn decode(&self, decompressors: &Decompressors) -> Result<Vec<u8>> {
        decode_blob(&self.data, decompressors)
    }
}

impl fmt::Debug for RawBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBlob")
            .field("kind", &self.kind)
            .field("offset", &self.offset)
            .field("size", &self.data.len())
            .finish()
    }
}

fn check_raw_size(raw_size: i32) -> Result<usize> {
    if raw_size <= 0 || raw_size as usize > MAX_UNCOMPRESSED_BLOB_SIZE {
        return Err(FormatError::BlobSize(raw_size as i64).into());
    }
    Ok(raw_size as usize)
}

/// Decode a serialized `Blob` message into the block bytes it carries.
pub fn decode_blob(data: &[u8], decompressors: &Decompressors) -> Result<Vec<u8>> {
    let mut message = Message::new(data);
    let mut raw_size = 0;
    let mut compressed: Option<(&'static str, &[u8])> = None;

    while message.next()? {
        match message.tag() {
            1 => {
                let raw = message.get_bytes()?;
                if raw.len() > MAX_UNCOMPRESSED_BLOB_SIZE {
                    return Err(FormatError::BlobSize(raw.len() as i64).into());
                }
                return Ok(raw.to_vec());
            }
            2 => raw_size = message.get_int32()?,
            3 => compressed = Some((Decompressors::ZLIB, message.get_bytes()?)),
            4 => return Err(FormatError::UnsupportedCompression("lzma".to_owned()).into()),
            5 => return Err(FormatError::UnsupportedCompression("bzip2".to_owned()).into()),
            6 => compressed = Some((Decompressors::LZ4, message.get_bytes()?)),
            7 => compressed = Some((Decompressors::ZSTD, message.get_bytes()?)),
            tag => {
                return Err(FormatError::UnsupportedCompression(format!("unknown (field {})", tag)).into())
            }
        }
    }

    match compressed {
        Some((algorithm, input)) => {
            let raw_size = check_raw_size(raw_size)?;
            decompressors.decompress(algorithm, input, raw_size)
        }
        None => Err(FormatError::EmptyBlob.into()),
    }
}

struct BlobHeader<'a> {
    blob_type: &'a str,
    datasize: i32,
}

fn decode_blob_header(data: &[u8]) -> Result<BlobHeader<'_>> {
    let mut message = Message::new(data);
    let mut header = BlobHeader {
        blob_type: "",
        datasize: 0,
    };
    while message.next()? {
        match message.tag() {
            1 => header.blob_type = message.get_string()?,
            3 => header.datasize = message.get_int32()?,
            _ => message.skip()?,
        }
    }
    Ok(header)
}

/// Splits a byte stream into its framed units.
///
/// The first unit must be an `OSMHeader` blob, every following unit an
/// `OSMData` blob. Iteration ends at a clean end of input or at a zero
/// length prefix.
pub struct BlobReader<R: Read> {
    reader: R,
    offset: u64,
    blobs_read: u64,
    eof: bool,
}

impl<R: Read> BlobReader<R> {
    pub fn new(reader: R) -> BlobReader<R> {
        Self {
            reader,
            offset: 0,
            blobs_read: 0,
            eof: false,
        }
    }

    /// Stream offset of the next unit.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn is_eof(&self) -> bool {
        self.eof
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read the length prefix, telling a clean end of input apart from one
    /// that cuts the prefix short.
    fn read_prefix(&mut self) -> Result<Option<u32>> {
        let mut prefix = [0u8; 4];
        let mut filled = 0;
        while filled < prefix.len() {
            match self.reader.read(&mut prefix[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        match filled {
            0 => Ok(None),
            4 => Ok(Some(BigEndian::read_u32(&prefix))),
            _ => Err(FormatError::Truncated("blob header length").into()),
        }
    }

    fn read_exact(&mut self, size: usize, what: &'static str) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(size);
        self.reader.by_ref().take(size as u64).read_to_end(&mut bytes)?;
        if bytes.len() < size {
            return Err(FormatError::Truncated(what).into());
        }
        Ok(bytes)
    }

    pub fn next_blob(&mut self) -> Result<Option<RawBlob>> {
        if self.eof {
            return Ok(None);
        }
        let offset = self.offset;
        let header_size = match self.read_prefix()? {
            None | Some(0) => {
                trace!("end of blob stream at offset {}", offset);
                self.eof = true;
                return Ok(None);
            }
            Some(size) => size,
        };
        if header_size > MAX_BLOB_HEADER_SIZE {
            return Err(FormatError::HeaderTooLarge(header_size).into());
        }

        let header_bytes = self.read_exact(header_size as usize, "BlobHeader")?;
        let header = decode_blob_header(&header_bytes)?;
        if header.datasize == 0 {
            return Err(FormatError::MissingDataSize.into());
        }
        if header.datasize < 0 || header.datasize as usize > MAX_UNCOMPRESSED_BLOB_SIZE {
            return Err(FormatError::BlobSize(header.datasize as i64).into());
        }

        let kind = if self.blobs_read == 0 {
            BlobKind::Header
        } else {
            BlobKind::Data
        };
        if header.blob_type != kind.as_str() {
            return Err(FormatError::UnexpectedBlobType {
                expected: kind.as_str(),
                found: header.blob_type.to_owned(),
            }
            .into());
        }

        let data = self.read_exact(header.datasize as usize, "Blob")?;
        self.offset += 4 + header_size as u64 + data.len() as u64;
        self.blobs_read += 1;
        trace!("read {} blob of {} bytes at offset {}", kind, data.len(), offset);
        Ok(Some(RawBlob { kind, offset, data }))
    }
}

impl<R: Read + Seek> BlobReader<R> {
    /// Continue reading at a unit boundary, as recorded in
    /// [`RawBlob::offset`].
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        self.reader.seek(SeekFrom::Start(offset))?;
        self.offset = offset;
        self.blobs_read = if offset == 0 { 0 } else { 1 };
        self.eof = false;
        Ok(())
    }

    pub fn rewind(&mut self) -> Result<()> {
        self.seek(0)
    }
}

impl<R: Read> Iterator for BlobReader<R> {
    type Item = Result<RawBlob>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_blob() {
            Ok(blob) => blob.map(Ok),
            Err(err) => {
                self.eof = true;
                Some(Err(err))
            }
        }
    }
}

/// Wrap `block` into a zlib-compressed `Blob` message.
pub fn encode_blob(block: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(block)?;
    let compressed = encoder.finish()?;

    let mut blob = fileformat::Blob::new();
    blob.set_zlib_data(compressed);
    blob.set_raw_size(block.len() as i32);
    Ok(blob.write_to_bytes()?)
}

/// Write one framed unit and return the number of bytes written.
pub fn write_blob<W: Write>(writer: &mut W, kind: BlobKind, blob: &[u8]) -> Result<u64> {
    let mut header = fileformat::BlobHeader::new();
    header.set_datasize(blob.len() as i32);
    header.set_field_type(kind.as_str().to_owned());
    let header_bytes = header.write_to_bytes()?;

    writer.write_u32::<BigEndian>(header_bytes.len() as u32)?;
    writer.write_all(&header_bytes)?;
    writer.write_all(blob)?;
    Ok(4 + header_bytes.len() as u64 + blob.len() as u64)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn raw_blob(payload: &[u8]) -> Vec<u8> {
        let mut blob = fileformat::Blob::new();
        blob.set_raw(payload.to_vec());
        blob.write_to_bytes().unwrap()
    }

    fn stream(units: &[(BlobKind, Vec<u8>)]) -> Vec<u8> {
        let mut out = Vec::new();
        for (kind, blob) in units {
            write_blob(&mut out, *kind, blob).unwrap();
        }
        out
    }

    #[test]
    fn test_read_units() {
        let data = stream(&[
            (BlobKind::Header, raw_blob(b"header")),
            (BlobKind::Data, encode_blob(b"first block").unwrap()),
            (BlobKind::Data, raw_blob(b"second block")),
        ]);
        let decompressors = Decompressors::default();
        let blobs: Vec<RawBlob> = BlobReader::new(Cursor::new(data))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(blobs.len(), 3);
        assert_eq!(blobs[0].kind, BlobKind::Header);
        assert_eq!(blobs[0].offset, 0);
        assert_eq!(blobs[1].kind, BlobKind::Data);
        assert_eq!(blobs[1].decode(&decompressors).unwrap(), b"first block");
        assert_eq!(blobs[2].decode(&decompressors).unwrap(), b"second block");
    }

    #[test]
    fn test_zero_prefix_ends_stream() {
        let mut data = stream(&[(BlobKind::Header, raw_blob(b"header"))]);
        data.extend_from_slice(&[0, 0, 0, 0, 0xde, 0xad]);
        let mut reader = BlobReader::new(Cursor::new(data));
        assert!(reader.next_blob().unwrap().is_some());
        assert!(reader.next_blob().unwrap().is_none());
        assert!(reader.is_eof());
    }

    #[test]
    fn test_truncated_prefix() {
        let mut data = stream(&[(BlobKind::Header, raw_blob(b"header"))]);
        data.extend_from_slice(&[0, 0]);
        let mut reader = BlobReader::new(Cursor::new(data));
        reader.next_blob().unwrap();
        let err = reader.next_blob().unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::Truncated("blob header length"))
        );
    }

    #[test]
    fn test_truncated_body() {
        let mut data = stream(&[(BlobKind::Header, raw_blob(b"header"))]);
        data.truncate(data.len() - 3);
        let err = BlobReader::new(Cursor::new(data)).next_blob().unwrap_err();
        assert_eq!(err.format_error(), Some(&FormatError::Truncated("Blob")));
    }

    #[test]
    fn test_header_too_large() {
        // 2^31 claimed bytes followed by nothing: must fail before reading.
        let data = vec![0x80, 0, 0, 0];
        let err = BlobReader::new(Cursor::new(data)).next_blob().unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::HeaderTooLarge(1 << 31))
        );
    }

    #[test]
    fn test_unexpected_type() {
        let data = stream(&[(BlobKind::Data, raw_blob(b"data"))]);
        let err = BlobReader::new(Cursor::new(data)).next_blob().unwrap_err();
        assert!(matches!(
            err.format_error(),
            Some(FormatError::UnexpectedBlobType { expected: "OSMHeader", .. })
        ));
    }

    #[test]
    fn test_oversized_datasize() {
        let mut header = fileformat::BlobHeader::new();
        header.set_field_type("OSMHeader".to_owned());
        header.set_datasize(i32::MAX);
        let header_bytes = header.write_to_bytes().unwrap();
        let mut data = (header_bytes.len() as u32).to_be_bytes().to_vec();
        data.extend_from_slice(&header_bytes);
        let err = BlobReader::new(Cursor::new(data)).next_blob().unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::BlobSize(i32::MAX as i64))
        );
    }

    #[test]
    fn test_seek() {
        let data = stream(&[
            (BlobKind::Header, raw_blob(b"header")),
            (BlobKind::Data, raw_blob(b"one")),
            (BlobKind::Data, raw_blob(b"two")),
        ]);
        let mut reader = BlobReader::new(Cursor::new(data));
        let offsets: Vec<u64> = reader.by_ref().map(|b| b.unwrap().offset).collect();
        reader.seek(offsets[2]).unwrap();
        let blob = reader.next_blob().unwrap().unwrap();
        assert_eq!(blob.decode(&Decompressors::default()).unwrap(), b"two");
        reader.rewind().unwrap();
        assert_eq!(reader.next_blob().unwrap().unwrap().kind, BlobKind::Header);
    }

    #[test]
    fn test_blob_payloads() {
        let decompressors = Decompressors::default();

        let mut blob = fileformat::Blob::new();
        blob.set_lzma_data(vec![1, 2, 3]);
        blob.set_raw_size(3);
        let err = decode_blob(&blob.write_to_bytes().unwrap(), &decompressors).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::UnsupportedCompression("lzma".to_owned()))
        );

        let mut blob = fileformat::Blob::new();
        blob.set_zstd_data(vec![1, 2, 3]);
        blob.set_raw_size(3);
        let err = decode_blob(&blob.write_to_bytes().unwrap(), &decompressors).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::UnsupportedCompression("zstd".to_owned()))
        );

        let err = decode_blob(&[], &decompressors).unwrap_err();
        assert_eq!(err.format_error(), Some(&FormatError::EmptyBlob));

        let mut blob = fileformat::Blob::new();
        blob.set_zlib_data(vec![1, 2, 3]);
        blob.set_raw_size(-1);
        let err = decode_blob(&blob.write_to_bytes().unwrap(), &decompressors).unwrap_err();
        assert_eq!(err.format_error(), Some(&FormatError::BlobSize(-1)));
    }
}
