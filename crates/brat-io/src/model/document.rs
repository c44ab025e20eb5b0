//! Documents: text plus annotations, optionally split into sentences.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityIndex};
use super::event::Event;
use super::relation::Relation;
use super::sentence::Sentence;

/// An annotated document.
///
/// When `sentences` is present, the document-level containers only hold
/// annotations that could not be placed in any sentence. The `all_*`
/// accessors always see the union of both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentences: Option<Vec<Sentence>>,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            entities: Vec::new(),
            relations: Vec::new(),
            events: Vec::new(),
            sentences: None,
        }
    }

    /// Sentences of the document, empty when it was never split.
    pub fn sentences(&self) -> &[Sentence] {
        self.sentences.as_deref().unwrap_or_default()
    }

    /// Document-level entities followed by each sentence's entities.
    pub fn all_entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities
            .iter()
            .chain(self.sentences().iter().flat_map(|s| s.entities.iter()))
    }

    /// Document-level events followed by each sentence's events.
    pub fn all_events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events
            .iter()
            .chain(self.sentences().iter().flat_map(|s| s.events.iter()))
    }

    /// Document-level relations followed by each sentence's relations.
    pub fn all_relations(&self) -> impl Iterator<Item = &Relation> + '_ {
        self.relations
            .iter()
            .chain(self.sentences().iter().flat_map(|s| s.relations.iter()))
    }

    /// Index over every entity of the document.
    pub fn entity_index(&self) -> EntityIndex<'_> {
        EntityIndex::new(self.all_entities())
    }

    /// Derived span of an event, resolved against this document's entities.
    pub fn event_span(&self, event: &Event) -> Option<(usize, usize)> {
        event.span(&self.entity_index())
    }

    /// Number of entities held by sentences.
    pub fn sentence_entity_count(&self) -> usize {
        self.sentences().iter().map(|s| s.entities.len()).sum()
    }

    /// Whether annotations remain at document level next to sentences.
    pub fn has_undistributed(&self) -> bool {
        !self.entities.is_empty() || !self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityKey;

    #[test]
    fn test_all_entities_spans_containers() {
        let mut document = Document::new("doc", "John met Mary.\n-\nThey left.\n");
        document
            .entities
            .push(Entity::new(EntityKey(2), "T3", "Person", "-\nTh", 15, 19));

        let mut first = Sentence::new("John met Mary.", 0, 14);
        first.entities.push(Entity::new(EntityKey(0), "T1", "Person", "John", 0, 4));
        first.entities.push(Entity::new(EntityKey(1), "T2", "Person", "Mary", 9, 13));
        document.sentences = Some(vec![first]);

        let ids: Vec<&str> = document.all_entities().map(Entity::id).collect();
        assert_eq!(ids, vec!["T3", "T1", "T2"]);
        assert_eq!(document.sentence_entity_count(), 2);
        assert!(document.has_undistributed());
    }

    #[test]
    fn test_event_span_uses_all_entities() {
        let mut document = Document::new("doc", "Acme bought Widgets");
        let mut sentence = Sentence::new("Acme bought Widgets", 0, 19);
        sentence.entities.push(Entity::new(EntityKey(0), "T1", "Company", "Acme", 0, 4));
        sentence.entities.push(Entity::new(EntityKey(1), "T2", "Acquisition", "bought", 5, 11));
        document.sentences = Some(vec![sentence]);

        let event = Event::new("E1", "Acquisition", EntityKey(1)).with_argument("Buyer", EntityKey(0));
        assert_eq!(document.event_span(&event), Some((0, 11)));
    }

    #[test]
    fn test_unsplit_document_has_no_sentences() {
        let document = Document::new("doc", "text");
        assert!(document.sentences().is_empty());
        assert_eq!(document.all_entities().count(), 0);
    }
}
