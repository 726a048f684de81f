//! Document collections: which documents to index and where their text lives.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::IndexConfig;
use crate::types::{IndexError, IndexResult};

/// Supplies the raw text of a document by identifier.
pub trait DocumentSource {
    fn read(&self, document: &str) -> IndexResult<String>;
}

/// Ordered list of document identifiers to index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    documents: Vec<String>,
}

impl Collection {
    /// Build a collection from identifiers, keeping the first of any repeats.
    pub fn new<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for document in documents {
            let document = document.into();
            if seen.insert(document.clone()) {
                unique.push(document);
            } else {
                log::warn!("Document {} listed more than once, indexing it once", document);
            }
        }
        Self { documents: unique }
    }

    /// Parse collection file contents: whitespace-separated document paths.
    pub fn parse(text: &str) -> Self {
        Self::new(text.split_whitespace())
    }

    /// Read and parse a collection file.
    pub fn load(path: &Path) -> IndexResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| IndexError::io(path, e))?;
        let collection = Self::parse(&text);
        log::debug!(
            "Loaded {} document paths from {}",
            collection.len(),
            path.display()
        );
        Ok(collection)
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Reads documents from the filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    config: IndexConfig,
}

impl FileSource {
    pub fn new(config: &IndexConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Where `document` is read from.
    pub fn path_of(&self, document: &str) -> PathBuf {
        self.config.resolve(document)
    }
}

impl DocumentSource for FileSource {
    fn read(&self, document: &str) -> IndexResult<String> {
        let path = self.path_of(document);
        let bytes = fs::read(&path).map_err(|e| IndexError::io(&path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Documents held in memory, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    texts: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a document.
    pub fn with_document(mut self, document: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(document, text);
        self
    }

    pub fn insert(&mut self, document: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(document.into(), text.into());
    }

    /// Identifiers of all held documents, sorted.
    pub fn collection(&self) -> Collection {
        let mut documents: Vec<&String> = self.texts.keys().collect();
        documents.sort();
        Collection::new(documents.into_iter().cloned())
    }
}

impl DocumentSource for MemorySource {
    fn read(&self, document: &str) -> IndexResult<String> {
        self.texts.get(document).cloned().ok_or_else(|| {
            IndexError::io(
                document,
                io::Error::new(io::ErrorKind::NotFound, "document not in memory source"),
            )
        })
    }
}
