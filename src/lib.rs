//! tfidf-index — a word-to-document index with TF-IDF ranked retrieval.
//!
//! Documents are tokenized on whitespace, normalized, and inserted into a
//! binary search tree keyed by word. Each word node keeps the documents it
//! occurs in with their term frequencies. Queries score every word by
//! `tf * log10(D / df)` and merge the per-word rankings into one list.
//!
//! ```no_run
//! use tfidf_index::{IndexConfig, InvertedIndex};
//!
//! let index = InvertedIndex::from_config(&IndexConfig::default())?;
//! for hit in &index.search("mars planet") {
//!     println!("{} {:.6}", hit.document, hit.score);
//! }
//! # Ok::<(), tfidf_index::IndexError>(())
//! ```

pub mod collection;
pub mod config;
pub mod engine;
pub mod index;
pub mod types;

pub use collection::{Collection, DocumentSource, FileSource, MemorySource};
pub use config::IndexConfig;
pub use engine::{
    inverse_document_frequency, retrieve, score, IndexBuilder, IndexStats, InvertedIndex,
    Tokenizer,
};
pub use index::{FrequencyList, IndexTree, Posting, WordNode};
pub use types::{IndexError, IndexResult, RankedList, ScoredDocument};
