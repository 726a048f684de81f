//! TF-IDF scoring and multi-term retrieval through the public API.

use std::collections::HashMap;

use tfidf_index::{
    inverse_document_frequency, retrieve, score, Collection, IndexBuilder, InvertedIndex,
    MemorySource, RankedList,
};

// ==================== Helpers ====================

const EPS: f64 = 1e-9;

fn cat_dog_index() -> InvertedIndex {
    let source = MemorySource::new()
        .with_document("docA", "cat dog cat")
        .with_document("docB", "dog dog");
    InvertedIndex::build(&source.collection(), &source).unwrap()
}

fn planets_index() -> InvertedIndex {
    let source = MemorySource::new()
        .with_document("mercury.txt", "Mercury is the closest planet to the sun.")
        .with_document("venus.txt", "Venus is hot. Venus has clouds, thick clouds.")
        .with_document("earth.txt", "Earth has water and life; the moon orbits Earth.")
        .with_document("mars.txt", "Mars is red. Mars has two moons, and dust.")
        .with_document("jupiter.txt", "Jupiter is the largest planet; it has many moons.");
    InvertedIndex::build(&source.collection(), &source).unwrap()
}

fn assert_non_increasing(ranked: &RankedList) {
    let scores: Vec<f64> = ranked.iter().map(|hit| hit.score).collect();
    assert!(
        scores.windows(2).all(|pair| pair[0] >= pair[1]),
        "scores not descending: {scores:?}"
    );
}

// ==================== Term Frequency ====================

#[test]
fn test_term_frequency_is_occurrences_over_length() {
    let index = planets_index();
    // "Venus is hot. Venus has clouds, thick clouds." has 8 tokens.
    let venus = index.term_frequency("venus", "venus.txt").unwrap();
    let clouds = index.term_frequency("clouds", "venus.txt").unwrap();
    let hot = index.term_frequency("hot", "venus.txt").unwrap();
    assert!((venus - 2.0 / 8.0).abs() < EPS);
    assert!((clouds - 2.0 / 8.0).abs() < EPS);
    assert!((hot - 1.0 / 8.0).abs() < EPS);
}

#[test]
fn test_case_and_punctuation_fold_into_one_word() {
    let index = planets_index();
    // "Earth" and "Earth." are the same word.
    let earth = index.term_frequency("earth", "earth.txt").unwrap();
    assert!((earth - 2.0 / 9.0).abs() < EPS);
    assert_eq!(index.term_frequency("earth.", "earth.txt"), None);
}

// ==================== IDF ====================

#[test]
fn test_idf_uses_distinct_document_count() {
    let index = planets_index();
    // "has" appears in venus, earth, mars, jupiter.
    let idf = index.idf("has").unwrap();
    assert!((idf - (5.0f64 / 4.0).log10()).abs() < EPS);
    assert!((inverse_document_frequency(5, 4) - idf).abs() < EPS);
    // "planet" appears in mercury and jupiter.
    assert!((index.idf("planet").unwrap() - (5.0f64 / 2.0).log10()).abs() < EPS);
}

// ==================== Scenario ====================

#[test]
fn test_scenario_single_words() {
    let index = cat_dog_index();
    assert_eq!(index.doc_count(), 2);

    let cat = index.score("cat");
    assert_eq!(cat.len(), 1);
    let expected = 2.0 / 3.0 * 2.0f64.log10();
    assert!((cat.score_of("docA").unwrap() - expected).abs() < EPS);
    assert!((cat.score_of("docA").unwrap() - 0.2007).abs() < 1e-4);

    let dog = index.score("dog");
    assert_eq!(dog.len(), 2);
    assert!(dog.iter().all(|hit| hit.score == 0.0));
}

#[test]
fn test_scenario_two_words() {
    let index = cat_dog_index();
    let ranked = index.retrieve(&["cat", "dog"]);

    let docs: Vec<&str> = ranked.documents().collect();
    assert_eq!(docs, vec!["docA", "docB"]);
    assert!((ranked.score_of("docA").unwrap() - 2.0 / 3.0 * 2.0f64.log10()).abs() < EPS);
    assert_eq!(ranked.score_of("docB"), Some(0.0));
}

// ==================== Ordering ====================

#[test]
fn test_rankings_are_descending() {
    let index = planets_index();
    for query in [
        vec!["venus"],
        vec!["moons", "planet"],
        vec!["has", "the", "mars", "clouds"],
        vec!["is", "has", "the"],
    ] {
        for word in &query {
            assert_non_increasing(&index.score(word));
        }
        assert_non_increasing(&index.retrieve(&query));
    }
}

#[test]
fn test_equal_scores_ordered_by_document() {
    let source = MemorySource::new()
        .with_document("c.txt", "shared x")
        .with_document("a.txt", "shared y")
        .with_document("b.txt", "shared z");
    let index = InvertedIndex::build(&source.collection(), &source).unwrap();

    let ranked = index.retrieve(&["shared"]);
    let docs: Vec<&str> = ranked.documents().collect();
    assert_eq!(docs, vec!["a.txt", "b.txt", "c.txt"]);
}

// ==================== Merge ====================

#[test]
fn test_merge_sums_per_term_scores() {
    let index = planets_index();
    let words = ["moons", "has", "mars", "planet", "the"];
    let ranked = index.retrieve(&words);

    let mut expected: HashMap<String, f64> = HashMap::new();
    for word in words {
        for hit in index.score(word) {
            *expected.entry(hit.document).or_insert(0.0) += hit.score;
        }
    }

    assert_eq!(ranked.len(), expected.len());
    let mut seen = std::collections::HashSet::new();
    for hit in &ranked {
        assert!(seen.insert(hit.document.clone()), "duplicate {}", hit.document);
        assert!((hit.score - expected[&hit.document]).abs() < EPS);
    }
}

#[test]
fn test_repeated_query_word_doubles_scores() {
    let index = planets_index();
    let once = index.retrieve(&["mars"]);
    let twice = index.retrieve(&["mars", "mars"]);
    assert_eq!(once.len(), twice.len());
    for hit in &twice {
        assert!((hit.score - 2.0 * once.score_of(&hit.document).unwrap()).abs() < EPS);
    }
}

// ==================== Absent Words ====================

#[test]
fn test_absent_word() {
    let index = planets_index();
    assert!(index.score("pluto").is_empty());
    assert!(index.retrieve(&["pluto"]).is_empty());
    assert_eq!(
        index.retrieve(&["pluto", "venus"]),
        index.retrieve(&["venus"])
    );
    assert_eq!(
        index.retrieve(&["venus", "pluto"]),
        index.retrieve(&["venus"])
    );
}

#[test]
fn test_empty_query() {
    let index = planets_index();
    let words: Vec<String> = Vec::new();
    assert!(index.retrieve(&words).is_empty());
    assert!(index.search("").is_empty());
}

// ==================== Free Functions ====================

#[test]
fn test_free_functions_match_index_methods() {
    let source = MemorySource::new()
        .with_document("one", "red green blue")
        .with_document("two", "red red yellow");
    let collection = Collection::new(["one", "two"]);
    let index = IndexBuilder::new(&source).build(&collection).unwrap();

    assert_eq!(score(index.tree(), "red", 2), index.score("red"));
    assert_eq!(
        retrieve(index.tree(), &["green", "yellow"], 2),
        index.retrieve(&["green", "yellow"])
    );
}
