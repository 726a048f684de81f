//! Index building, scoring and retrieval.

pub mod builder;
pub mod inverted_index;
pub mod retriever;
pub mod scorer;
pub mod tokenizer;

pub use builder::{ingest_document, IndexBuilder};
pub use inverted_index::{IndexStats, InvertedIndex};
pub use retriever::retrieve;
pub use scorer::{inverse_document_frequency, score};
pub use tokenizer::Tokenizer;
