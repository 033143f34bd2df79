use std::any::Any;
use std::env;
use std::panic::{self, AssertUnwindSafe};

use crossbeam::channel::{bounded, Receiver};
use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Error, Result};

pub const ENV_POOL_THREADS: &str = "PBF_ARENA_POOL_THREADS";

/// Fixed-size pool that runs decode tasks.
///
/// Readers get the pool handed in as `Arc<WorkerPool>`, several readers may
/// share one.
pub struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {
    /// A pool of `num_threads` workers, or one per CPU for 0.
    pub fn new(num_threads: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|index| format!("pbf-arena-worker-{}", index))
            .build()?;
        debug!("started worker pool with {} threads", pool.current_num_threads());
        Ok(Self { pool })
    }

    /// Thread count from `PBF_ARENA_POOL_THREADS`, one per CPU if unset.
    pub fn from_env() -> Result<Self> {
        let num_threads = env::var(ENV_POOL_THREADS)
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0);
        Self::new(num_threads)
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Queue `task` and return a handle to its result. Handles can be waited
    /// on in any order, independent of which task finishes first.
    pub fn submit<T, F>(&self, task: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (sender, receiver) = bounded(1);
        self.pool.spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(task)).map_err(panic_message);
            // The handle may have been dropped by a closed reader.
            let _ = sender.send(result);
        });
        TaskHandle { receiver }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "task panicked".to_owned()
    }
}

/// The pending result of a submitted task.
pub struct TaskHandle<T> {
    receiver: Receiver<std::result::Result<T, String>>,
}

impl<T> TaskHandle<T> {
    /// Block until the task finished. A panic in the task is reported as
    /// [`Error::Task`].
    pub fn wait(self) -> Result<T> {
        match self.receiver.recv() {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(message)) => Err(Error::Task(message)),
            Err(_) => Err(Error::Task("task was dropped by the pool".to_owned())),
        }
    }

    pub fn is_finished(&self) -> bool {
        !self.receiver.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_results_in_submission_order() {
        let pool = WorkerPool::new(4).unwrap();
        assert_eq!(pool.num_threads(), 4);

        let handles: Vec<TaskHandle<usize>> = (0..32)
            .map(|i| {
                pool.submit(move || {
                    thread::sleep(Duration::from_millis(((32 - i) % 5) as u64));
                    i * 2
                })
            })
            .collect();
        let results: Vec<usize> = handles.into_iter().map(|h| h.wait().unwrap()).collect();
        assert_eq!(results, (0..32).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_panic_becomes_error() {
        let pool = WorkerPool::new(1).unwrap();
        let handle = pool.submit(|| -> u32 { panic!("bad block") });
        let err = handle.wait().unwrap_err();
        assert!(matches!(err, Error::Task(ref message) if message == "bad block"));

        // The worker survives the panic.
        assert_eq!(pool.submit(|| 7).wait().unwrap(), 7);
    }
}
