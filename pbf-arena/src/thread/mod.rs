mod pool;

pub use pool::{TaskHandle, WorkerPool, ENV_POOL_THREADS};
