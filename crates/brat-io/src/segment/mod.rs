//! Sentence segmentation and annotation distribution.

mod distribute;
mod splitter;

pub use distribute::distribute;
pub use splitter::split_sentences;
