//! Word-keyed binary search tree. Each node owns the postings for its word.
//!
//! The tree is never rebalanced: words inserted in sorted order produce a
//! list-shaped tree. Descent, traversal and drop are all iterative so depth is
//! bounded only by memory, not by the call stack.

use std::cmp::Ordering;

use super::frequency_list::FrequencyList;
use crate::types::{IndexError, IndexResult};

/// A single indexed word and the documents it occurs in.
#[derive(Debug)]
pub struct WordNode {
    word: String,
    documents: FrequencyList,
    left: Option<Box<WordNode>>,
    right: Option<Box<WordNode>>,
}

impl WordNode {
    fn new(word: &str, document: &str, increment: f64) -> Self {
        Self {
            word: word.to_string(),
            documents: FrequencyList::with_posting(document, increment),
            left: None,
            right: None,
        }
    }

    /// The normalized word this node is keyed by.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Postings for this word, ascending by document.
    pub fn documents(&self) -> &FrequencyList {
        &self.documents
    }
}

/// Binary search tree from normalized word to its frequency list.
#[derive(Debug, Default)]
pub struct IndexTree {
    root: Option<Box<WordNode>>,
    /// Number of distinct words.
    len: usize,
}

impl IndexTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Record one occurrence of `word` in `document`.
    ///
    /// A new word gets a fresh node; a known word has its posting for
    /// `document` created or incremented by `increment`.
    pub fn insert(&mut self, word: &str, document: &str, increment: f64) -> IndexResult<()> {
        if word.is_empty() {
            return Err(IndexError::EmptyKey);
        }

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match word.cmp(node.word.as_str()) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => {
                    node.documents.record(document, increment);
                    return Ok(());
                }
            }
        }

        *slot = Some(Box::new(WordNode::new(word, document, increment)));
        self.len += 1;
        Ok(())
    }

    /// Find the node for `word`.
    pub fn get(&self, word: &str) -> Option<&WordNode> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match word.cmp(node.word.as_str()) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Postings for `word`, if it has been indexed.
    pub fn postings(&self, word: &str) -> Option<&FrequencyList> {
        self.get(word).map(WordNode::documents)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&WordNode, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// In-order traversal: nodes ascending by word.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }
}

impl Drop for IndexTree {
    fn drop(&mut self) {
        // Unlink nodes one at a time; the default recursive drop would follow
        // the full depth of a skewed tree.
        let mut pending: Vec<Box<WordNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a IndexTree {
    type Item = &'a WordNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`IndexTree`].
pub struct Iter<'a> {
    stack: Vec<&'a WordNode>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a WordNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut cursor: Option<&'a WordNode>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a WordNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node)
    }
}
