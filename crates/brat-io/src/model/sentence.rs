//! Sentence views over a document.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, is_within};
use super::event::Event;
use super::relation::Relation;

/// A contiguous span of a document together with the annotations inside it.
///
/// `start` and `end` are offsets into the source document, not into `text`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sentence {
    pub id: String,
    pub text: String,
    pub start: usize,
    pub end: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
}

impl Sentence {
    /// Create an empty sentence over `start..end` of its document.
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Whether `start..end` lies inside this sentence (closed on both ends).
    pub fn contains(&self, start: usize, end: usize) -> bool {
        is_within(start, end, self.start, self.end)
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
