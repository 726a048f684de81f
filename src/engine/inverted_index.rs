//! The built index: word tree plus collection metadata.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::builder::IndexBuilder;
use super::retriever::retrieve;
use super::scorer::{inverse_document_frequency, score};
use super::tokenizer::Tokenizer;
use crate::collection::{Collection, DocumentSource, FileSource};
use crate::config::IndexConfig;
use crate::index::{dump, IndexTree};
use crate::types::{IndexResult, RankedList};

/// Summary numbers for a built index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
    /// Documents counted toward IDF.
    pub documents: usize,
    /// Distinct indexed words.
    pub words: usize,
    /// Total (word, document) postings.
    pub postings: usize,
    /// Longest root-to-leaf path in the word tree.
    pub tree_height: usize,
}

/// A word-to-document index over a fixed collection, ready for queries.
///
/// The index is immutable once built.
#[derive(Debug)]
pub struct InvertedIndex {
    tree: IndexTree,
    documents: Vec<String>,
    tokenizer: Tokenizer,
}

impl InvertedIndex {
    /// Build from the collection file named in `config`.
    pub fn from_config(config: &IndexConfig) -> IndexResult<Self> {
        config.validate()?;
        let collection = Collection::load(&config.collection_file)?;
        let source = FileSource::new(config);
        IndexBuilder::new(&source)
            .skip_unreadable(config.skip_unreadable)
            .build(&collection)
    }

    /// Build from a collection whose texts come from `source`.
    pub fn build(collection: &Collection, source: &dyn DocumentSource) -> IndexResult<Self> {
        IndexBuilder::new(source).build(collection)
    }

    pub(crate) fn from_parts(tree: IndexTree, documents: Vec<String>, tokenizer: Tokenizer) -> Self {
        Self {
            tree,
            documents,
            tokenizer,
        }
    }

    pub fn tree(&self) -> &IndexTree {
        &self.tree
    }

    /// Indexed documents in ingestion order.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Collection size `D` used for IDF.
    pub fn doc_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct indexed words.
    pub fn term_count(&self) -> usize {
        self.tree.len()
    }

    /// Stored term frequency of a normalized word in a document.
    pub fn term_frequency(&self, word: &str, document: &str) -> Option<f64> {
        self.tree.postings(word)?.get(document)
    }

    /// IDF of a normalized word, or `None` if it was never indexed.
    pub fn idf(&self, word: &str) -> Option<f64> {
        let postings = self.tree.postings(word)?;
        Some(inverse_document_frequency(self.doc_count(), postings.len()))
    }

    /// Rank documents for a single normalized word.
    pub fn score(&self, word: &str) -> RankedList {
        score(&self.tree, word, self.doc_count())
    }

    /// Rank documents for normalized query words.
    pub fn retrieve<S: AsRef<str>>(&self, words: &[S]) -> RankedList {
        retrieve(&self.tree, words, self.doc_count())
    }

    /// Normalize a raw query string the way documents were, then retrieve.
    pub fn search(&self, query: &str) -> RankedList {
        let words = self.tokenizer.tokenize(query);
        let ranked = self.retrieve(&words);
        log::debug!(
            "Query {:?} -> {:?}: {} documents",
            query,
            words,
            ranked.len()
        );
        ranked
    }

    /// Write the human-readable dump to `out`.
    pub fn write_dump<W: Write>(&self, out: &mut W) -> IndexResult<()> {
        dump::write_dump(&self.tree, out)
    }

    /// Write the human-readable dump to a file.
    pub fn dump_to_file(&self, path: &Path) -> IndexResult<()> {
        dump::dump_to_file(&self.tree, path)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.doc_count(),
            words: self.tree.len(),
            postings: self.tree.iter().map(|node| node.documents().len()).sum(),
            tree_height: self.tree.height(),
        }
    }
}
