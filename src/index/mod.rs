//! Index structures: the word tree, its per-word frequency lists, and the dump.

pub mod dump;
pub mod frequency_list;
pub mod word_tree;

pub use dump::{dump_to_file, write_dump};
pub use frequency_list::{FrequencyList, Posting};
pub use word_tree::{IndexTree, WordNode};
