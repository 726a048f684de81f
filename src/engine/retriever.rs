//! Multi-term retrieval: merges per-term rankings into one.

use super::scorer::score;
use crate::index::IndexTree;
use crate::types::RankedList;

/// Rank documents for all `words`, summing each document's per-term scores.
///
/// Words that were never indexed contribute nothing. An empty query gives an
/// empty ranking.
pub fn retrieve<S: AsRef<str>>(tree: &IndexTree, words: &[S], doc_count: usize) -> RankedList {
    words.iter().fold(RankedList::new(), |ranked, word| {
        let term = score(tree, word.as_ref(), doc_count);
        log::trace!("Term {:?} matched {} documents", word.as_ref(), term.len());
        term.merge(ranked)
    })
}
