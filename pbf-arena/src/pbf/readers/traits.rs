use std::rc::Rc;

use crate::error::{Error, Result};
use crate::memory::Buffer;
use crate::pbf::codecs::Header;

/// Where a reader is in its stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderStatus {
    /// The header has not been decoded yet.
    Header,
    /// Data blocks are being delivered.
    Data,
    /// End of stream was reported.
    Eof,
    /// Reading failed. The error was returned to the caller.
    Error,
    Closed,
}

impl ReaderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReaderStatus::Header => "reading header",
            ReaderStatus::Data => "reading data",
            ReaderStatus::Eof => "at eof",
            ReaderStatus::Error => "failed",
            ReaderStatus::Closed => "closed",
        }
    }

    /// Fail unless reading can go on.
    pub(crate) fn check_readable(self) -> Result<()> {
        match self {
            ReaderStatus::Header | ReaderStatus::Data => Ok(()),
            status => Err(Error::InvalidState {
                action: "read",
                status: status.as_str(),
            }),
        }
    }
}

/// A stream of decoded buffers in file order.
pub trait BufferSource {
    fn header(&mut self) -> Result<&Header>;

    /// The next non-empty buffer. `Ok(None)` is returned once at the end of
    /// the stream, reading on after that is an error.
    fn read(&mut self) -> Result<Option<Buffer>>;

    /// Stop reading and release the input. Calling it again does nothing.
    fn close(&mut self);

    fn status(&self) -> ReaderStatus;
}

/// Random access to the data blocks of a file by their offset.
pub trait PbfRandomRead {
    fn read_blob_by_offset(&mut self, offset: u64) -> Result<Rc<Buffer>>;
}
