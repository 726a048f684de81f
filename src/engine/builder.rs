//! Index construction from a document collection.

use std::time::Instant;

use crate::collection::{Collection, DocumentSource};
use crate::engine::inverted_index::InvertedIndex;
use crate::engine::tokenizer::Tokenizer;
use crate::index::IndexTree;
use crate::types::IndexResult;

/// Builds an [`InvertedIndex`] by reading every document of a collection.
pub struct IndexBuilder<'a> {
    source: &'a dyn DocumentSource,
    tokenizer: Tokenizer,
    skip_unreadable: bool,
}

impl<'a> IndexBuilder<'a> {
    /// Create a builder reading documents from `source`.
    pub fn new(source: &'a dyn DocumentSource) -> Self {
        Self {
            source,
            tokenizer: Tokenizer::new(),
            skip_unreadable: false,
        }
    }

    /// Builder: skip documents the source cannot read instead of failing.
    /// Skipped documents do not count toward the collection size.
    pub fn skip_unreadable(mut self, skip: bool) -> Self {
        self.skip_unreadable = skip;
        self
    }

    /// Builder: tokenize with `tokenizer` instead of the default.
    pub fn tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Ingest every document in collection order.
    pub fn build(self, collection: &Collection) -> IndexResult<InvertedIndex> {
        let started = Instant::now();
        let mut tree = IndexTree::new();
        let mut documents = Vec::with_capacity(collection.len());

        for document in collection.documents() {
            let text = match self.source.read(document) {
                Ok(text) => text,
                Err(err) if self.skip_unreadable => {
                    log::warn!("Skipping unreadable document {}: {}", document, err);
                    continue;
                }
                Err(err) => return Err(err),
            };

            let total_words = ingest_document(&mut tree, &self.tokenizer, document, &text)?;
            log::debug!("Indexed {} ({} words)", document, total_words);
            documents.push(document.clone());
        }

        log::info!(
            "Built index: {} documents, {} distinct words in {:?}",
            documents.len(),
            tree.len(),
            started.elapsed()
        );

        Ok(InvertedIndex::from_parts(tree, documents, self.tokenizer))
    }
}

/// Add one document's words to `tree` and return its raw token count.
///
/// The token count is taken first so every occurrence can add `1 / count` to
/// the word's term frequency. Tokens that normalize to nothing still count.
pub fn ingest_document(
    tree: &mut IndexTree,
    tokenizer: &Tokenizer,
    document: &str,
    text: &str,
) -> IndexResult<usize> {
    let total_words = tokenizer.raw_tokens(text).count();
    if total_words == 0 {
        return Ok(0);
    }

    let increment = 1.0 / total_words as f64;
    for token in tokenizer.raw_tokens(text) {
        if let Some(word) = tokenizer.normalize(token) {
            tree.insert(&word, document, increment)?;
        }
    }

    Ok(total_words)
}
