//! Text-bound entities and the key index used to resolve references to them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::annotation::{AnnotationKind, BratRecord};

/// Stable handle to an entity within one document.
///
/// Relations and events refer to entities by key, never by ownership, so the
/// same entity can be reached from any container regardless of where it lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityKey(pub u32);

/// A labeled span of the document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    key: EntityKey,
    id: String,
    /// Entity type, e.g. `Person`.
    #[serde(rename = "type")]
    pub entity_type: String,
    /// The covered text.
    pub text: String,
    start: usize,
    end: usize,
}

impl Entity {
    /// Create an entity spanning character offsets `start..end`.
    pub fn new(
        key: EntityKey,
        id: impl Into<String>,
        entity_type: impl Into<String>,
        text: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            key,
            id: id.into(),
            entity_type: entity_type.into(),
            text: text.into(),
            start,
            end,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn key(&self) -> EntityKey {
        self.key
    }

    pub(crate) fn set_key(&mut self, key: EntityKey) {
        self.key = key;
    }

    /// Start offset (characters).
    pub fn start(&self) -> usize {
        self.start
    }

    /// End offset (characters).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Numeric suffix of the id, if it is a `T` id.
    pub fn id_number(&self) -> Option<u32> {
        AnnotationKind::Entity.id_number(&self.id)
    }

    /// Replace the id with `T{number}`.
    pub fn set_id_number(&mut self, number: u32) {
        self.id = AnnotationKind::Entity.format_id(number);
    }

    /// Move the span to new offsets.
    pub fn set_span(&mut self, start: usize, end: usize) {
        self.start = start;
        self.end = end;
    }

    /// Translate the span from a coordinate system starting at `from` into
    /// one starting at `to`.
    pub fn rebase(&mut self, from: usize, to: usize) {
        self.start = self.start.saturating_add(to).saturating_sub(from);
        self.end = self.end.saturating_add(to).saturating_sub(from);
    }

    /// Whether the span lies inside `start..=end` on both ends.
    pub fn is_within(&self, start: usize, end: usize) -> bool {
        is_within(self.start, self.end, start, end)
    }
}

/// Closed-interval containment used for every distribution decision.
pub(crate) fn is_within(inner_start: usize, inner_end: usize, outer_start: usize, outer_end: usize) -> bool {
    inner_start >= outer_start && inner_end <= outer_end
}

impl BratRecord for Entity {
    fn kind(&self) -> AnnotationKind {
        AnnotationKind::Entity
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_brat_line(&self, _entities: &EntityIndex<'_>) -> String {
        format!(
            "{}\t{} {} {}\t{}",
            self.id, self.entity_type, self.start, self.end, self.text
        )
    }

    fn embed_json(&self, _entities: &EntityIndex<'_>) -> Value {
        json!([self.id, self.entity_type, [[self.start, self.end]]])
    }
}

/// Lookup from entity key to the entity, built over a document's containers.
#[derive(Debug, Clone, Default)]
pub struct EntityIndex<'a> {
    entities: HashMap<EntityKey, &'a Entity>,
}

impl<'a> EntityIndex<'a> {
    /// Index the given entities by key.
    pub fn new(entities: impl IntoIterator<Item = &'a Entity>) -> Self {
        Self {
            entities: entities.into_iter().map(|e| (e.key, e)).collect(),
        }
    }

    pub fn get(&self, key: EntityKey) -> Option<&'a Entity> {
        self.entities.get(&key).copied()
    }

    /// Current id of the referenced entity; dangling keys render empty.
    pub fn id_of(&self, key: EntityKey) -> &'a str {
        self.get(key).map(|e| e.id.as_str()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
