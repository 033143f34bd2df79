use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::sync::Arc;

use flate2::read::ZlibDecoder;

use crate::error::{FormatError, Result};

/// A decompression backend for one blob compression algorithm.
pub trait Decompressor: Send + Sync {
    /// Decompress `input`, which must expand to exactly `raw_size` bytes.
    fn decompress(&self, input: &[u8], raw_size: usize) -> Result<Vec<u8>>;
}

pub struct ZlibDecompressor;

impl Decompressor for ZlibDecompressor {
    fn decompress(&self, input: &[u8], raw_size: usize) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(raw_size);
        // One byte more than announced so that oversized output is detected
        // without inflating all of it.
        ZlibDecoder::new(input)
            .take(raw_size as u64 + 1)
            .read_to_end(&mut output)
            .map_err(|e| FormatError::Decompression {
                algorithm: "zlib",
                message: e.to_string(),
            })?;
        if output.len() != raw_size {
            return Err(FormatError::RawSizeMismatch {
                expected: raw_size,
                actual: output.len(),
            }
            .into());
        }
        Ok(output)
    }
}

/// Decompressors by algorithm name. zlib is always available; `lz4` and
/// `zstd` blobs can be read once a backend is registered under that name.
#[derive(Clone)]
pub struct Decompressors {
    backends: HashMap<String, Arc<dyn Decompressor>>,
}

impl Decompressors {
    pub const ZLIB: &'static str = "zlib";
    pub const LZ4: &'static str = "lz4";
    pub const ZSTD: &'static str = "zstd";

    /// A registry with no backends at all, not even zlib.
    pub fn empty() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, backend: Arc<dyn Decompressor>) -> &mut Self {
        self.backends.insert(name.to_owned(), backend);
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Decompressor> {
        self.backends.get(name).map(|b| b.as_ref())
    }

    pub fn decompress(&self, name: &str, input: &[u8], raw_size: usize) -> Result<Vec<u8>> {
        match self.get(name) {
            Some(backend) => backend.decompress(input, raw_size),
            None => Err(FormatError::UnsupportedCompression(name.to_owned()).into()),
        }
    }
}

impl Default for Decompressors {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Self::ZLIB, Arc::new(ZlibDecompressor));
        registry
    }
}

impl fmt::Debug for Decompressors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.backends.keys().collect();
        names.sort();
        f.debug_struct("Decompressors").field("backends", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    use super::*;

    fn deflate(data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_zlib() {
        let registry = Decompressors::default();
        let compressed = deflate(b"hello hello hello");
        let output = registry.decompress("zlib", &compressed, 17).unwrap();
        assert_eq!(output, b"hello hello hello");
    }

    #[test]
    fn test_zlib_size_mismatch() {
        let registry = Decompressors::default();
        let compressed = deflate(b"hello hello hello");
        let err = registry.decompress("zlib", &compressed, 5).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::RawSizeMismatch {
                expected: 5,
                actual: 6
            })
        );
        let err = registry.decompress("zlib", &compressed, 100).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_zlib_garbage() {
        let err = Decompressors::default()
            .decompress("zlib", b"definitely not zlib", 10)
            .unwrap_err();
        assert!(matches!(
            err.format_error(),
            Some(FormatError::Decompression { algorithm: "zlib", .. })
        ));
    }

    struct Identity;

    impl Decompressor for Identity {
        fn decompress(&self, input: &[u8], _raw_size: usize) -> Result<Vec<u8>> {
            Ok(input.to_vec())
        }
    }

    #[test]
    fn test_pluggable() {
        let mut registry = Decompressors::default();
        assert!(registry.decompress("zstd", b"x", 1).is_err());
        registry.register(Decompressors::ZSTD, Arc::new(Identity));
        assert_eq!(registry.decompress("zstd", b"x", 1).unwrap(), b"x");
    }
}
