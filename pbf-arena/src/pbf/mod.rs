pub mod codecs;
pub mod proto;
pub mod readers;
pub mod writers;
