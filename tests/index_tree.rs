//! Structural invariants of the word tree and its frequency lists under
//! randomized insertion sequences.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use tfidf_index::{IndexError, IndexTree, WordNode};

// ==================== Helpers ====================

const VOCABULARY: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
    "kilo", "lima", "mike", "november", "oscar", "papa", "quebec", "romeo", "sierra", "tango",
];

const DOCUMENTS: &[&str] = &["d0.txt", "d1.txt", "d2.txt", "d3.txt", "d4.txt", "d5.txt"];

fn random_tree(seed: u64, inserts: usize) -> (IndexTree, Vec<(String, String)>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree = IndexTree::new();
    let mut log = Vec::with_capacity(inserts);
    for _ in 0..inserts {
        let word = VOCABULARY.choose(&mut rng).unwrap();
        let document = DOCUMENTS.choose(&mut rng).unwrap();
        let increment = rng.gen_range(0.01..1.0);
        tree.insert(word, document, increment).unwrap();
        log.push((word.to_string(), document.to_string()));
    }
    (tree, log)
}

// ==================== BST Invariant ====================

#[test]
fn test_in_order_traversal_strictly_ascending() {
    for seed in 0..20 {
        let (tree, _) = random_tree(seed, 300);
        let words: Vec<&str> = tree.iter().map(WordNode::word).collect();
        assert!(
            words.windows(2).all(|pair| pair[0] < pair[1]),
            "seed {seed}: words out of order: {words:?}"
        );
        assert_eq!(words.len(), tree.len());
    }
}

#[test]
fn test_every_inserted_word_is_found() {
    let (tree, log) = random_tree(7, 500);
    for (word, document) in &log {
        let node = tree.get(word).expect("inserted word must be present");
        assert_eq!(node.word(), word);
        assert!(node.documents().get(document).is_some());
    }
    assert!(tree.get("zulu").is_none());
}

#[test]
fn test_sorted_input_builds_degenerate_tree() {
    let mut tree = IndexTree::new();
    for word in VOCABULARY {
        tree.insert(word, "d.txt", 1.0).unwrap();
    }
    assert_eq!(tree.height(), VOCABULARY.len());
    let words: Vec<&str> = tree.iter().map(WordNode::word).collect();
    assert_eq!(words, VOCABULARY);
}

#[test]
fn test_empty_word_is_rejected() {
    let mut tree = IndexTree::new();
    tree.insert("word", "d.txt", 1.0).unwrap();
    let err = tree.insert("", "d.txt", 1.0).unwrap_err();
    assert!(matches!(err, IndexError::EmptyKey));
    assert_eq!(tree.len(), 1);
}

// ==================== Frequency Lists ====================

#[test]
fn test_frequency_lists_unique_and_ascending() {
    for seed in 0..20 {
        let (tree, _) = random_tree(seed, 400);
        for node in &tree {
            let docs: Vec<&str> = node
                .documents()
                .iter()
                .map(|posting| posting.document.as_str())
                .collect();
            assert!(
                docs.windows(2).all(|pair| pair[0] < pair[1]),
                "seed {seed}: postings for {} not strictly ascending: {docs:?}",
                node.word()
            );
            assert!(!docs.is_empty());
        }
    }
}

#[test]
fn test_increments_accumulate_per_document() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tree = IndexTree::new();
    let mut expected = [0.0f64; 6];

    for _ in 0..200 {
        let idx = rng.gen_range(0..DOCUMENTS.len());
        tree.insert("word", DOCUMENTS[idx], 0.125).unwrap();
        expected[idx] += 0.125;
    }

    let postings = tree.postings("word").unwrap();
    for (idx, document) in DOCUMENTS.iter().enumerate() {
        match postings.get(document) {
            Some(tf) => assert!((tf - expected[idx]).abs() < 1e-9),
            None => assert_eq!(expected[idx], 0.0),
        }
    }
}
