mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pbf_arena::config::ReaderConfig;
use pbf_arena::memory::Buffer;
use pbf_arena::osm::{EntityBits, OsmObject};
use pbf_arena::pbf::codecs::{DecodeOptions, Decompressors, RawBlob};
use pbf_arena::pbf::readers::{BlockDecoder, BufferSource, ParallelReader, PrimitiveDecoder, ReaderStatus};
use pbf_arena::thread::WorkerPool;
use pbf_arena::{ErrorKind, Result};
use rand::Rng;

/// Decodes like the default decoder after a random delay, so that blocks
/// finish out of order.
#[derive(Default)]
struct SlowDecoder {
    inner: PrimitiveDecoder,
    decoded: AtomicUsize,
}

impl BlockDecoder for SlowDecoder {
    fn decode(&self, blob: &RawBlob, options: DecodeOptions) -> Result<Buffer> {
        let delay = rand::thread_rng().gen_range(0..15);
        thread::sleep(Duration::from_millis(delay));
        self.decoded.fetch_add(1, Ordering::SeqCst);
        self.inner.decode(blob, options)
    }

    fn decompressors(&self) -> &Decompressors {
        self.inner.decompressors()
    }
}

fn node_ids<S: BufferSource>(source: &mut S) -> Vec<i64> {
    let mut ids = Vec::new();
    while let Some(buffer) = source.read().unwrap() {
        ids.extend(buffer.nodes().map(|n| n.id()));
    }
    ids
}

#[test]
fn test_blocks_arrive_in_file_order() {
    common::init_logger();
    let pool = Arc::new(WorkerPool::new(4).unwrap());
    let decoder = Arc::new(SlowDecoder::default());
    let mut reader = ParallelReader::with_decoder(
        std::io::Cursor::new(common::node_file(24, 10)),
        pool,
        ReaderConfig::default(),
        decoder.clone(),
    )
    .unwrap();

    assert_eq!(node_ids(&mut reader), (1..=240).collect::<Vec<i64>>());
    assert_eq!(decoder.decoded.load(Ordering::SeqCst), 24);
    assert_eq!(reader.status(), ReaderStatus::Eof);
}

#[test]
fn test_small_queues() {
    let pool = Arc::new(WorkerPool::new(3).unwrap());
    let config = ReaderConfig {
        input_queue_size: 2,
        output_queue_size: 2,
        ..Default::default()
    };
    let mut reader = ParallelReader::with_decoder(
        std::io::Cursor::new(common::node_file(16, 5)),
        pool,
        config,
        Arc::new(SlowDecoder::default()),
    )
    .unwrap();
    assert_eq!(node_ids(&mut reader), (1..=80).collect::<Vec<i64>>());
}

#[test]
fn test_error_after_good_blocks() {
    common::init_logger();
    let mut bytes = common::node_file(3, 4);
    bytes.extend(common::frame("OSMData", &common::raw_blob(&[0x0a, 0xff])));
    bytes.extend(common::data_frame(&common::node_block(100, 4)));

    let pool = Arc::new(WorkerPool::new(2).unwrap());
    let mut reader = ParallelReader::from_bytes(bytes, pool, ReaderConfig::default()).unwrap();

    let mut ids = Vec::new();
    let err = loop {
        match reader.read() {
            Ok(Some(buffer)) => ids.extend(buffer.nodes().map(|n| n.id())),
            Ok(None) => panic!("expected a decode error"),
            Err(e) => break e,
        }
    };
    assert_eq!(ids, (1..=12).collect::<Vec<i64>>());
    assert_eq!(err.kind(), ErrorKind::Format);
    assert_eq!(reader.status(), ReaderStatus::Error);
    assert_eq!(reader.read().unwrap_err().kind(), ErrorKind::State);
}

#[test]
fn test_header_only() {
    let pool = Arc::new(WorkerPool::new(2).unwrap());
    let config = ReaderConfig::default().with_read_types(EntityBits::NOTHING);
    let mut reader = ParallelReader::from_bytes(common::node_file(5, 5), pool, config).unwrap();
    assert!(reader.header().is_ok());
    assert!(reader.read().unwrap().is_none());
}

#[test]
fn test_close_stops_pipeline() {
    let pool = Arc::new(WorkerPool::new(2).unwrap());
    let config = ReaderConfig {
        input_queue_size: 2,
        output_queue_size: 2,
        ..Default::default()
    };
    let mut reader = ParallelReader::from_bytes(common::node_file(50, 100), pool, config).unwrap();
    assert!(reader.read().unwrap().is_some());

    reader.close();
    assert_eq!(reader.status(), ReaderStatus::Closed);
    assert_eq!(reader.read().unwrap_err().kind(), ErrorKind::State);
    reader.close();
}

#[test]
fn test_drop_mid_stream() {
    let pool = Arc::new(WorkerPool::new(2).unwrap());
    for _ in 0..5 {
        let mut reader =
            ParallelReader::from_bytes(common::node_file(30, 50), Arc::clone(&pool), ReaderConfig::default())
                .unwrap();
        reader.read().unwrap();
    }
}

#[test]
fn test_shared_pool() {
    let pool = Arc::new(WorkerPool::new(3).unwrap());
    let mut first =
        ParallelReader::from_bytes(common::node_file(8, 3), Arc::clone(&pool), ReaderConfig::default()).unwrap();
    let mut second =
        ParallelReader::from_bytes(common::node_file(6, 2), Arc::clone(&pool), ReaderConfig::default()).unwrap();

    assert_eq!(node_ids(&mut second), (1..=12).collect::<Vec<i64>>());
    assert_eq!(node_ids(&mut first), (1..=24).collect::<Vec<i64>>());
}
