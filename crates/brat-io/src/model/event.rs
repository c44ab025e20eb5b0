//! Events: typed nodes anchored on a trigger entity.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::annotation::{AnnotationKind, BratRecord};
use super::entity::{EntityIndex, EntityKey};

/// An event with a trigger, named arguments and attribute flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: String,
    /// Event type, e.g. `Acquisition`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The trigger entity.
    pub trigger: EntityKey,
    /// Role name to argument entity, in insertion order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub arguments: IndexMap<String, EntityKey>,
    /// Attribute names attached to this event.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub attributes: BTreeSet<String>,
    /// Id of the document the event was read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotator: Option<String>,
}

impl Event {
    pub fn new(id: impl Into<String>, event_type: impl Into<String>, trigger: EntityKey) -> Self {
        Self {
            id: id.into(),
            event_type: event_type.into(),
            trigger,
            arguments: IndexMap::new(),
            attributes: BTreeSet::new(),
            doc_id: None,
            annotator: None,
        }
    }

    /// Add an argument, replacing any earlier argument with the same role.
    pub fn with_argument(mut self, role: impl Into<String>, entity: EntityKey) -> Self {
        self.arguments.insert(role.into(), entity);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn id_number(&self) -> Option<u32> {
        AnnotationKind::Event.id_number(&self.id)
    }

    /// Replace the id with `E{number}`.
    pub fn set_id_number(&mut self, number: u32) {
        self.id = AnnotationKind::Event.format_id(number);
    }

    /// Trigger followed by every argument.
    pub fn entity_keys(&self) -> impl Iterator<Item = EntityKey> + '_ {
        std::iter::once(self.trigger).chain(self.arguments.values().copied())
    }

    /// Span covering the trigger and all arguments.
    ///
    /// Computed on every call so it follows the entities through rebasing.
    /// Unresolvable keys are ignored; `None` when nothing resolves.
    pub fn span(&self, entities: &EntityIndex<'_>) -> Option<(usize, usize)> {
        self.entity_keys()
            .filter_map(|key| entities.get(key))
            .map(|e| (e.start(), e.end()))
            .reduce(|(s1, e1), (s2, e2)| (s1.min(s2), e1.max(e2)))
    }

    pub fn start_position(&self, entities: &EntityIndex<'_>) -> Option<usize> {
        self.span(entities).map(|(start, _)| start)
    }

    pub fn end_position(&self, entities: &EntityIndex<'_>) -> Option<usize> {
        self.span(entities).map(|(_, end)| end)
    }
}

impl BratRecord for Event {
    fn kind(&self) -> AnnotationKind {
        AnnotationKind::Event
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_brat_line(&self, entities: &EntityIndex<'_>) -> String {
        let arguments: Vec<String> = self
            .arguments
            .iter()
            .map(|(role, &key)| format!("{}:{}", role, entities.id_of(key)))
            .collect();
        format!(
            "{}\t{}:{} {}",
            self.id,
            self.event_type,
            entities.id_of(self.trigger),
            arguments.join(" ")
        )
    }

    fn embed_json(&self, _entities: &EntityIndex<'_>) -> Value {
        // No structured form for events yet.
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entity;

    fn entities() -> Vec<Entity> {
        vec![
            Entity::new(EntityKey(0), "T1", "Company", "Acme", 0, 4),
            Entity::new(EntityKey(1), "T2", "Acquisition", "bought", 5, 11),
            Entity::new(EntityKey(2), "T3", "Company", "Widgets", 12, 19),
        ]
    }

    fn acquisition() -> Event {
        Event::new("E1", "Acquisition", EntityKey(1))
            .with_argument("Buyer", EntityKey(0))
            .with_argument("Target", EntityKey(2))
    }

    #[test]
    fn test_event_line_keeps_argument_order() {
        let entities = entities();
        let index = EntityIndex::new(&entities);
        assert_eq!(
            acquisition().to_brat_line(&index),
            "E1\tAcquisition:T2 Buyer:T1 Target:T3"
        );
    }

    #[test]
    fn test_event_line_without_arguments() {
        let entities = entities();
        let index = EntityIndex::new(&entities);
        let event = Event::new("E2", "Acquisition", EntityKey(1));
        assert_eq!(event.to_brat_line(&index), "E2\tAcquisition:T2 ");
    }

    #[test]
    fn test_span_is_derived() {
        let mut entities = entities();
        let event = acquisition();
        {
            let index = EntityIndex::new(&entities);
            assert_eq!(event.span(&index), Some((0, 19)));
        }

        for entity in &mut entities {
            entity.rebase(0, 100);
        }
        let index = EntityIndex::new(&entities);
        assert_eq!(event.start_position(&index), Some(100));
        assert_eq!(event.end_position(&index), Some(119));
    }

    #[test]
    fn test_span_of_unresolved_event() {
        let event = Event::new("E1", "Acquisition", EntityKey(42));
        assert_eq!(event.span(&EntityIndex::default()), None);
    }

    #[test]
    fn test_duplicate_role_replaces() {
        let event = acquisition().with_argument("Buyer", EntityKey(2));
        assert_eq!(event.arguments.len(), 2);
        assert_eq!(event.arguments["Buyer"], EntityKey(2));
    }
}
