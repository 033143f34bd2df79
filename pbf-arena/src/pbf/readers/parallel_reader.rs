use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{bounded, Receiver};
use log::{debug, warn};

use super::pipeline::{self, BlockDecoder, DecodeTask, ParserContext, PrimitiveDecoder};
use super::traits::{BufferSource, ReaderStatus};
use crate::config::ReaderConfig;
use crate::error::{Error, Result};
use crate::memory::Buffer;
use crate::pbf::codecs::Header;
use crate::thread::WorkerPool;

/// Reader that decodes data blocks on a worker pool and hands out the
/// buffers in file order.
///
/// ```no_run
/// use std::sync::Arc;
///
/// use pbf_arena::config::ReaderConfig;
/// use pbf_arena::pbf::readers::ParallelReader;
/// use pbf_arena::thread::WorkerPool;
///
/// let pool = Arc::new(WorkerPool::new(0).unwrap());
/// let mut reader = ParallelReader::from_path("path/to/osm.pbf", pool, ReaderConfig::default()).unwrap();
/// while let Some(buffer) = reader.read().unwrap() {
///     println!("{} ways", buffer.ways().count());
/// }
/// ```
pub struct ParallelReader {
    header: Option<Header>,
    header_receiver: Option<Receiver<Result<Header>>>,
    output: Option<Receiver<Result<DecodeTask>>>,
    ready: VecDeque<Buffer>,
    stop: Arc<AtomicBool>,
    threads: Vec<JoinHandle<()>>,
    status: ReaderStatus,
}

impl ParallelReader {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        pool: Arc<WorkerPool>,
        config: ReaderConfig,
    ) -> Result<Self> {
        let f = File::open(path)?;
        Self::new(BufReader::new(f), pool, config)
    }

    /// Read from memory.
    pub fn from_bytes(bytes: Vec<u8>, pool: Arc<WorkerPool>, config: ReaderConfig) -> Result<Self> {
        Self::new(Cursor::new(bytes), pool, config)
    }

    pub fn new<R>(source: R, pool: Arc<WorkerPool>, config: ReaderConfig) -> Result<Self>
    where
        R: Read + Send + 'static,
    {
        Self::with_decoder(source, pool, config, Arc::new(PrimitiveDecoder::default()))
    }

    /// Start the pipeline with a custom block decoder.
    pub fn with_decoder<R>(
        source: R,
        pool: Arc<WorkerPool>,
        config: ReaderConfig,
        decoder: Arc<dyn BlockDecoder>,
    ) -> Result<Self>
    where
        R: Read + Send + 'static,
    {
        let (input_sender, input_receiver) = bounded(config.input_queue_size);
        let (output_sender, output_receiver) = bounded(config.output_queue_size);
        let (header_sender, header_receiver) = bounded(1);
        let stop = Arc::new(AtomicBool::new(false));

        let mut reader = ParallelReader {
            header: None,
            header_receiver: Some(header_receiver),
            output: Some(output_receiver),
            ready: VecDeque::new(),
            stop: Arc::clone(&stop),
            threads: Vec::with_capacity(2),
            status: ReaderStatus::Header,
        };

        let input_stop = Arc::clone(&stop);
        let input = thread::Builder::new()
            .name("pbf-arena-input".to_owned())
            .spawn(move || pipeline::run_input(source, input_sender, input_stop))?;
        reader.threads.push(input);

        let context = ParserContext {
            pool,
            decoder,
            config,
            stop,
        };
        let parser = thread::Builder::new()
            .name("pbf-arena-parser".to_owned())
            .spawn(move || {
                pipeline::run_parser(context, input_receiver, header_sender, output_sender)
            })?;
        reader.threads.push(parser);

        debug!("started parallel reader");
        Ok(reader)
    }

    fn fail<T>(&mut self, error: Error) -> Result<T> {
        debug!("parallel reader failed: {}", error);
        self.status = ReaderStatus::Error;
        self.shutdown();
        Err(error)
    }

    fn ensure_header(&mut self) -> Result<()> {
        if self.header.is_some() {
            return Ok(());
        }
        self.status.check_readable()?;
        let received = match self.header_receiver.take() {
            Some(receiver) => receiver.recv(),
            None => return self.fail(Error::Task("header is gone".to_owned())),
        };
        match received {
            Ok(Ok(header)) => {
                self.header = Some(header);
                self.status = ReaderStatus::Data;
                Ok(())
            }
            Ok(Err(e)) => self.fail(e),
            Err(_) => self.fail(Error::Task("parser thread ended without a header".to_owned())),
        }
    }

    /// The next decoded buffer in file order. Blocks until its task is
    /// done. A buffer that grew nested buffers is handed out as its chain,
    /// oldest data first.
    pub fn read(&mut self) -> Result<Option<Buffer>> {
        self.ensure_header()?;
        self.status.check_readable()?;
        loop {
            if let Some(buffer) = self.ready.pop_front() {
                return Ok(Some(buffer));
            }
            let task = match self.output.as_ref().map(Receiver::recv) {
                Some(Ok(Ok(task))) => task,
                Some(Ok(Err(e))) => return self.fail(e),
                None => return self.fail(Error::Task("output queue is gone".to_owned())),
                Some(Err(_)) => {
                    debug!("parallel reader reached end of stream");
                    self.status = ReaderStatus::Eof;
                    self.shutdown();
                    return Ok(None);
                }
            };
            match task.wait().and_then(|decoded| decoded) {
                Ok(buffer) => self
                    .ready
                    .extend(buffer.into_chain().into_iter().filter(|b| !b.is_empty())),
                Err(e) => return self.fail(e),
            }
        }
    }

    /// Stop the threads. Queued tasks are dropped, running tasks finish and
    /// their results are thrown away.
    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        // Dropping the receivers unblocks stages waiting on a full queue.
        self.output = None;
        self.header_receiver = None;
        self.ready.clear();
        for handle in self.threads.drain(..) {
            if handle.join().is_err() {
                warn!("pipeline thread panicked");
            }
        }
    }
}

impl BufferSource for ParallelReader {
    fn header(&mut self) -> Result<&Header> {
        self.ensure_header()?;
        self.header.as_ref().ok_or(Error::InvalidState {
            action: "read header",
            status: self.status.as_str(),
        })
    }

    fn read(&mut self) -> Result<Option<Buffer>> {
        ParallelReader::read(self)
    }

    fn close(&mut self) {
        if self.status == ReaderStatus::Closed {
            return;
        }
        if matches!(self.status, ReaderStatus::Header | ReaderStatus::Data) {
            debug!("closing parallel reader before end of stream");
        }
        self.status = ReaderStatus::Closed;
        self.shutdown();
    }

    fn status(&self) -> ReaderStatus {
        self.status
    }
}

impl Drop for ParallelReader {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NodeBuilder;
    use crate::memory::AutoGrow;
    use crate::osm::OsmObject;
    use crate::pbf::writers::{PbfWriter, MAX_BLOCK_ITEM_LENGTH};

    fn file_with_nodes(count: i64) -> Vec<u8> {
        let mut buffer = Buffer::new(1024, AutoGrow::Yes);
        for id in 1..=count {
            let mut node = NodeBuilder::new(&mut buffer).unwrap();
            node.set_id(id);
            node.commit();
        }
        let mut writer = PbfWriter::new(Vec::new(), true);
        writer.write_buffer(&buffer).unwrap();
        writer.finish().unwrap()
    }

    #[test]
    fn test_reads_in_order() {
        let pool = Arc::new(WorkerPool::new(3).unwrap());
        let total = MAX_BLOCK_ITEM_LENGTH as i64 * 3 + 10;
        let mut reader =
            ParallelReader::from_bytes(file_with_nodes(total), pool, ReaderConfig::default()).unwrap();
        assert!(!reader.header().unwrap().has_multiple_object_versions);

        let mut ids = Vec::new();
        while let Some(buffer) = reader.read().unwrap() {
            ids.extend(buffer.nodes().map(|n| n.id()));
        }
        assert_eq!(ids, (1..=total).collect::<Vec<_>>());
        assert_eq!(reader.status(), ReaderStatus::Eof);
        assert!(reader.read().is_err());
    }

    #[test]
    fn test_close_mid_stream() {
        let pool = Arc::new(WorkerPool::new(2).unwrap());
        let config = ReaderConfig {
            input_queue_size: 2,
            output_queue_size: 2,
            ..ReaderConfig::default()
        };
        let total = MAX_BLOCK_ITEM_LENGTH as i64 * 6;
        let mut reader = ParallelReader::from_bytes(file_with_nodes(total), pool, config).unwrap();
        assert!(reader.read().unwrap().is_some());
        reader.close();
        reader.close();
        assert_eq!(reader.status(), ReaderStatus::Closed);
        assert!(reader.read().is_err());
    }

    #[test]
    fn test_bad_header() {
        let pool = Arc::new(WorkerPool::new(1).unwrap());
        let mut reader =
            ParallelReader::from_bytes(vec![0, 0, 0, 3, 1, 2, 3], pool, ReaderConfig::default()).unwrap();
        assert!(reader.read().unwrap_err().is_format());
        assert_eq!(reader.status(), ReaderStatus::Error);
        assert!(reader.read().is_err());
    }
}
