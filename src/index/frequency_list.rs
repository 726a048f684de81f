//! Per-word posting list of (document, term frequency) pairs.

/// One document a word occurs in, with its normalized term frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Posting {
    pub document: String,
    /// Running sum of `1 / total_words` per occurrence, i.e. `k / W`.
    pub term_frequency: f64,
}

/// Postings for a single word, sorted ascending by document identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyList {
    postings: Vec<Posting>,
}

impl FrequencyList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            postings: Vec::new(),
        }
    }

    /// Create a list holding a single posting.
    pub fn with_posting(document: &str, term_frequency: f64) -> Self {
        Self {
            postings: vec![Posting {
                document: document.to_string(),
                term_frequency,
            }],
        }
    }

    /// Record one more occurrence of the word in `document`.
    ///
    /// An existing posting accumulates `increment`; otherwise a new posting is
    /// inserted where it keeps the list sorted.
    pub fn record(&mut self, document: &str, increment: f64) {
        match self
            .postings
            .binary_search_by(|posting| posting.document.as_str().cmp(document))
        {
            Ok(pos) => self.postings[pos].term_frequency += increment,
            Err(pos) => self.postings.insert(
                pos,
                Posting {
                    document: document.to_string(),
                    term_frequency: increment,
                },
            ),
        }
    }

    /// Term frequency of the word in `document`, if it occurs there.
    pub fn get(&self, document: &str) -> Option<f64> {
        self.postings
            .binary_search_by(|posting| posting.document.as_str().cmp(document))
            .ok()
            .map(|pos| self.postings[pos].term_frequency)
    }

    /// Document frequency: number of distinct documents containing the word.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Posting> {
        self.postings.iter()
    }

    pub fn as_slice(&self) -> &[Posting] {
        &self.postings
    }
}

impl<'a> IntoIterator for &'a FrequencyList {
    type Item = &'a Posting;
    type IntoIter = std::slice::Iter<'a, Posting>;

    fn into_iter(self) -> Self::IntoIter {
        self.postings.iter()
    }
}
