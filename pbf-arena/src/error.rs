use std::io;

use thiserror::Error;

/// Faults in the PBF wire format. Any of these aborts decoding of the
/// current block (or the whole stream, for framing faults).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("varint is longer than 10 bytes")]
    VarintTooLong,

    #[error("unexpected end of buffer while decoding {0}")]
    EndOfBuffer(&'static str),

    #[error("unknown protobuf wire type {0}")]
    UnknownWireType(u8),

    #[error("field {tag} has wire type {found}, expected {expected}")]
    WireTypeMismatch { tag: u32, expected: u8, found: u8 },

    #[error("parallel arrays of different length: {0}")]
    LengthMismatch(&'static str),

    #[error("dense node tag list has a key without a value")]
    DanglingKey,

    #[error("string id {0} out of range")]
    StringIndexOutOfRange(u64),

    #[error("more than one stringtable in block")]
    DuplicateStringTable,

    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    #[error("{what} must not be negative (got {value})")]
    Negative { what: &'static str, value: i64 },

    #[error("{what} out of range (got {value})")]
    OutOfRange { what: &'static str, value: i64 },

    #[error("unknown relation member type {0}")]
    UnknownMemberType(i64),

    #[error("unsupported compression: {0}")]
    UnsupportedCompression(String),

    #[error("{algorithm} decompression failed: {message}")]
    Decompression {
        algorithm: &'static str,
        message: String,
    },

    #[error("blob contains no data")]
    EmptyBlob,

    #[error("invalid BlobHeader size {0} (> max_blob_header_size)")]
    HeaderTooLarge(u32),

    #[error("invalid blob size {0}")]
    BlobSize(i64),

    #[error("decompressed size {actual} does not match announced raw_size {expected}")]
    RawSizeMismatch { expected: usize, actual: usize },

    #[error("blob has type {found:?}, expected {expected:?}")]
    UnexpectedBlobType {
        expected: &'static str,
        found: String,
    },

    #[error("BlobHeader.datasize missing or zero")]
    MissingDataSize,

    #[error("truncated data (EOF encountered) while reading {0}")]
    Truncated(&'static str),

    #[error("required feature not supported: {0}")]
    UnsupportedFeature(String),

    #[error("{what} exceeds maximum length of {max} bytes")]
    StringTooLong { what: &'static str, max: usize },

    #[error("{0} contains a NUL byte")]
    NulInString(&'static str),
}

/// Coarse classification of [`Error`], for branching without matching on
/// individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or unsupported input data.
    Format,
    /// Memory, I/O or thread resources failed.
    Resource,
    /// The reader was used in a state that does not allow the call.
    State,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("PBF format error: {0}")]
    Format(#[from] FormatError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("buffer is full: need {requested} bytes, capacity {capacity}")]
    BufferFull { requested: usize, capacity: usize },

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("decode task failed: {0}")]
    Task(String),

    #[error("protobuf encoding failed: {0}")]
    Encode(#[from] protobuf::ProtobufError),

    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),

    #[error("illegal element type: {0}")]
    InvalidElementType(String),

    #[error("can not {action} while reader is {status}")]
    InvalidState {
        action: &'static str,
        status: &'static str,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format(_) | Error::InvalidTimestamp(_) | Error::InvalidElementType(_) => {
                ErrorKind::Format
            }
            Error::Io(_)
            | Error::BufferFull { .. }
            | Error::Pool(_)
            | Error::Task(_)
            | Error::Encode(_) => ErrorKind::Resource,
            Error::InvalidState { .. } => ErrorKind::State,
        }
    }

    pub fn is_format(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    /// The wire-format fault behind this error, if there is one.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Error::Format(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let e: Error = FormatError::VarintTooLong.into();
        assert_eq!(e.kind(), ErrorKind::Format);
        assert_eq!(e.format_error(), Some(&FormatError::VarintTooLong));

        let e: Error = io::Error::new(io::ErrorKind::Other, "disk on fire").into();
        assert_eq!(e.kind(), ErrorKind::Resource);
        assert!(e.format_error().is_none());

        let e = Error::InvalidState {
            action: "read",
            status: "eof",
        };
        assert_eq!(e.kind(), ErrorKind::State);
        assert_eq!(e.to_string(), "can not read while reader is eof");
    }
}
