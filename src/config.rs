//! Configuration for building and dumping an index.
//!
//! Compile-time defaults live here as constants. Runtime settings are carried
//! by [`IndexConfig`], which the CLI fills from arguments and environment
//! variables.

use std::path::{Path, PathBuf};

use crate::types::{IndexError, IndexResult};

/// Collection file read when none is given.
pub const DEFAULT_COLLECTION_FILE: &str = "collection.txt";

/// File the index dump is written to when none is given.
pub const DEFAULT_DUMP_FILE: &str = "invertedIndex.txt";

/// Characters stripped from the end of a token (at most one).
pub const TRAILING_PUNCTUATION: &[char] = &['.', ',', '?', ';'];

/// Decimal places for term frequencies in the dump.
pub const DUMP_PRECISION: usize = 6;

/// Runtime settings for building an index from a collection file.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexConfig {
    /// File listing the document paths to index.
    pub collection_file: PathBuf,
    /// Directory relative document paths are resolved against.
    /// `None` resolves them against the current directory.
    pub base_dir: Option<PathBuf>,
    /// Destination of the index dump.
    pub dump_file: PathBuf,
    /// Skip documents that cannot be read instead of failing the build.
    pub skip_unreadable: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            collection_file: PathBuf::from(DEFAULT_COLLECTION_FILE),
            base_dir: None,
            dump_file: PathBuf::from(DEFAULT_DUMP_FILE),
            skip_unreadable: false,
        }
    }
}

impl IndexConfig {
    /// Config reading the given collection file, other settings default.
    pub fn with_collection(collection_file: impl Into<PathBuf>) -> Self {
        Self {
            collection_file: collection_file.into(),
            ..Self::default()
        }
    }

    /// Check that the paths are usable.
    pub fn validate(&self) -> IndexResult<()> {
        if self.collection_file.as_os_str().is_empty() {
            return Err(IndexError::InvalidConfig(
                "collection file path is empty".to_string(),
            ));
        }
        if self.dump_file.as_os_str().is_empty() {
            return Err(IndexError::InvalidConfig(
                "dump file path is empty".to_string(),
            ));
        }
        if let Some(dir) = &self.base_dir {
            if !dir.is_dir() {
                return Err(IndexError::InvalidConfig(format!(
                    "base directory {} does not exist",
                    dir.display()
                )));
            }
        }
        Ok(())
    }

    /// Resolve a document path from the collection file.
    pub fn resolve(&self, document: &str) -> PathBuf {
        let path = Path::new(document);
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}
