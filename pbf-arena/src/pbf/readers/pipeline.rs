//! The threads behind [`ParallelReader`](super::ParallelReader).
//!
//! ```text
//! input thread --RawBlob--> parser thread --TaskHandle--> consumer
//!                              |    ^
//!                              v    |
//!                            worker pool
//! ```
//!
//! The input thread frames blobs off the source. The parser thread decodes
//! the header inline, then submits every data blob to the pool and queues
//! the task handle right away, so handles leave the output queue in file
//! order no matter which worker finishes first. Both queues are bounded.
//! A stage stops as soon as the queue it feeds has no receiver left.

use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam::channel::{Receiver, Sender};
use log::{debug, trace};

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::memory::Buffer;
use crate::pbf::codecs::blob::{BlobReader, RawBlob};
use crate::pbf::codecs::{decode_data_blob, decode_header, DecodeOptions, Decompressors, Header};
use crate::thread::{TaskHandle, WorkerPool};

/// Turns one data blob into a buffer. Runs on the worker pool.
pub trait BlockDecoder: Send + Sync + 'static {
    fn decode(&self, blob: &RawBlob, options: DecodeOptions) -> Result<Buffer>;

    fn decompressors(&self) -> &Decompressors;
}

/// Decodes blobs with [`decode_data_blob`].
#[derive(Debug, Clone, Default)]
pub struct PrimitiveDecoder {
    decompressors: Decompressors,
}

impl PrimitiveDecoder {
    pub fn new(decompressors: Decompressors) -> Self {
        Self { decompressors }
    }
}

impl BlockDecoder for PrimitiveDecoder {
    fn decode(&self, blob: &RawBlob, options: DecodeOptions) -> Result<Buffer> {
        decode_data_blob(blob, &self.decompressors, options)
    }

    fn decompressors(&self) -> &Decompressors {
        &self.decompressors
    }
}

pub(crate) type DecodeTask = TaskHandle<Result<Buffer>>;

/// Read framed blobs until the input ends, an error occurs, or nobody
/// listens any more. Framing errors are forwarded and end the thread.
pub(crate) fn run_input<R: Read>(
    reader: R,
    input: Sender<Result<RawBlob>>,
    stop: Arc<AtomicBool>,
) {
    let mut blobs = BlobReader::new(reader);
    while !stop.load(Ordering::Relaxed) {
        let (message, done) = match blobs.next_blob() {
            Ok(Some(blob)) => (Ok(blob), false),
            Ok(None) => break,
            Err(e) => (Err(e), true),
        };
        if input.send(message).is_err() || done {
            break;
        }
    }
    trace!("input thread done at offset {}", blobs.offset());
}

pub(crate) struct ParserContext {
    pub pool: Arc<WorkerPool>,
    pub decoder: Arc<dyn BlockDecoder>,
    pub config: ReaderConfig,
    pub stop: Arc<AtomicBool>,
}

fn parse_header(blob: Result<RawBlob>, decompressors: &Decompressors) -> Result<Header> {
    let blob = blob?;
    decode_header(&blob.decode(decompressors)?)
}

/// Decode the header, then fan data blobs out to the pool.
pub(crate) fn run_parser(
    context: ParserContext,
    input: Receiver<Result<RawBlob>>,
    header_sender: Sender<Result<Header>>,
    output: Sender<Result<DecodeTask>>,
) {
    let header = match input.recv() {
        Ok(blob) => parse_header(blob, context.decoder.decompressors()),
        // The input ended before the first unit.
        Err(_) => Err(crate::error::FormatError::Truncated("OSMHeader").into()),
    };
    let options = match &header {
        Ok(header) => context.config.decode_options(header.has_multiple_object_versions),
        Err(_) => DecodeOptions::default(),
    };
    let header_ok = header.is_ok();
    if header_sender.send(header).is_err() || !header_ok {
        return;
    }
    if context.config.header_only() {
        debug!("header only, not reading data blocks");
        return;
    }

    let mut submitted = 0usize;
    for blob in input.iter() {
        if context.stop.load(Ordering::Relaxed) {
            break;
        }
        let message = match blob {
            Ok(blob) => {
                let decoder = Arc::clone(&context.decoder);
                Ok(context.pool.submit(move || decoder.decode(&blob, options)))
            }
            Err(e) => Err(e),
        };
        let failed = message.is_err();
        if output.send(message).is_err() || failed {
            break;
        }
        submitted += 1;
    }
    debug!("parser thread done after {} data blocks", submitted);
}
