//! Shared data types: errors and ranked result lists.

pub mod error;
pub mod ranked;

pub use error::{IndexError, IndexResult};
pub use ranked::{RankedList, ScoredDocument};
