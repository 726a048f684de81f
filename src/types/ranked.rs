//! Ranked result lists produced by the scorer and the retriever.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

/// One document and its accumulated TF-IDF score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub document: String,
    pub score: f64,
}

/// A list of documents ordered by descending score.
///
/// Document identifiers are unique within a list. Equal scores are ordered
/// by ascending document identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedList {
    entries: Vec<ScoredDocument>,
}

impl RankedList {
    /// Create an empty ranked list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert before the first entry whose score is strictly smaller.
    ///
    /// Entries with an equal score stay ahead of the new one, so callers that
    /// feed documents in ascending identifier order get ascending ties.
    pub fn insert_descending(&mut self, document: impl Into<String>, score: f64) {
        let pos = self
            .entries
            .iter()
            .position(|entry| entry.score < score)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            pos,
            ScoredDocument {
                document: document.into(),
                score,
            },
        );
    }

    /// Merge two ranked lists into one, consuming both.
    ///
    /// Entries for the same document are summed into a single entry and the
    /// result is re-sorted by descending score.
    pub fn merge(self, other: RankedList) -> RankedList {
        let capacity = self.entries.len() + other.entries.len();
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(capacity);
        let mut merged: Vec<ScoredDocument> = Vec::with_capacity(capacity);

        for entry in self.entries.into_iter().chain(other.entries) {
            match positions.get(&entry.document) {
                Some(&idx) => merged[idx].score += entry.score,
                None => {
                    positions.insert(entry.document.clone(), merged.len());
                    merged.push(entry);
                }
            }
        }

        merged.sort_by(rank_order);
        RankedList { entries: merged }
    }

    /// Number of ranked documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no document is ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries from best to worst.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredDocument> {
        self.entries.iter()
    }

    /// Score of a document, if it is ranked.
    pub fn score_of(&self, document: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.document == document)
            .map(|entry| entry.score)
    }

    /// Document identifiers from best to worst.
    pub fn documents(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.document.as_str())
    }

    /// Keep only the first `n` entries.
    pub fn truncate(&mut self, n: usize) {
        self.entries.truncate(n);
    }

    /// Drop entries scoring below `min_score`.
    pub fn retain_min_score(&mut self, min_score: f64) {
        self.entries.retain(|entry| entry.score >= min_score);
    }

    pub fn as_slice(&self) -> &[ScoredDocument] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<ScoredDocument> {
        self.entries
    }
}

impl IntoIterator for RankedList {
    type Item = ScoredDocument;
    type IntoIter = std::vec::IntoIter<ScoredDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a ScoredDocument;
    type IntoIter = std::slice::Iter<'a, ScoredDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Descending score, then ascending document identifier.
fn rank_order(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.document.cmp(&b.document))
}
