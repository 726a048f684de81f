//! Per-term TF-IDF scoring.

use crate::index::IndexTree;
use crate::types::RankedList;

/// `log10(D / df)`.
pub fn inverse_document_frequency(doc_count: usize, doc_frequency: usize) -> f64 {
    (doc_count as f64 / doc_frequency as f64).log10()
}

/// Rank the documents containing `word` by `tf * idf`.
///
/// A word that was never indexed yields an empty list. Documents with equal
/// scores keep the posting order, which is ascending by identifier.
pub fn score(tree: &IndexTree, word: &str, doc_count: usize) -> RankedList {
    let mut ranked = RankedList::new();
    if doc_count == 0 {
        return ranked;
    }
    let Some(postings) = tree.postings(word) else {
        return ranked;
    };

    let idf = inverse_document_frequency(doc_count, postings.len());
    for posting in postings {
        ranked.insert_descending(posting.document.as_str(), posting.term_frequency * idf);
    }
    ranked
}
