//! Annotation kinds, identifiers and the shared record contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entity::{Entity, EntityIndex};
use super::event::Event;
use super::relation::Relation;

/// The closed set of annotation kinds in the line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    /// Text-bound annotation (`T`).
    Entity,
    /// Event annotation (`E`).
    Event,
    /// Relation annotation (`R`, or `*` for the symmetric form).
    Relation,
    /// Attribute annotation (`A`).
    Attribute,
}

impl AnnotationKind {
    /// The one-letter id prefix for this kind.
    pub const fn prefix(self) -> char {
        match self {
            AnnotationKind::Entity => 'T',
            AnnotationKind::Event => 'E',
            AnnotationKind::Relation => 'R',
            AnnotationKind::Attribute => 'A',
        }
    }

    /// Classify a raw annotation line by its first character.
    pub fn of_line(line: &str) -> Option<Self> {
        match line.chars().next()? {
            'T' => Some(AnnotationKind::Entity),
            'E' => Some(AnnotationKind::Event),
            'R' | '*' => Some(AnnotationKind::Relation),
            'A' => Some(AnnotationKind::Attribute),
            _ => None,
        }
    }

    /// Build an id such as `T3` from a number.
    pub fn format_id(self, number: u32) -> String {
        format!("{}{}", self.prefix(), number)
    }

    /// Numeric suffix of an id carrying this kind's prefix.
    pub fn id_number(self, id: &str) -> Option<u32> {
        id.strip_prefix(self.prefix())?.parse().ok()
    }
}

/// Shared contract of every concrete annotation record.
///
/// Records referring to entities (events, relations) resolve their
/// references through the index.
pub trait BratRecord {
    /// The kind of this record.
    fn kind(&self) -> AnnotationKind;

    /// The record's id as it appears in the line format.
    fn id(&self) -> &str;

    /// Render the record as one annotation line.
    fn to_brat_line(&self, entities: &EntityIndex<'_>) -> String;

    /// Structured form for embedding in JSON payloads.
    fn embed_json(&self, entities: &EntityIndex<'_>) -> Value;
}

/// An attribute line: a flag name attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    id: String,
    /// Attribute name, e.g. `Negation`.
    pub name: String,
    /// Id of the annotation the attribute applies to.
    pub target: String,
}

impl Attribute {
    /// Create an attribute numbered `A{number}`.
    pub fn new(number: u32, name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: AnnotationKind::Attribute.format_id(number),
            name: name.into(),
            target: target.into(),
        }
    }
}

impl BratRecord for Attribute {
    fn kind(&self) -> AnnotationKind {
        AnnotationKind::Attribute
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_brat_line(&self, _entities: &EntityIndex<'_>) -> String {
        format!("{}\t{} {}", self.id, self.name, self.target)
    }

    fn embed_json(&self, _entities: &EntityIndex<'_>) -> Value {
        // No structured form for attributes yet.
        Value::Null
    }
}

/// One record of a document in serialization order.
#[derive(Debug, Clone)]
pub enum Annotation<'a> {
    Entity(&'a Entity),
    Event(&'a Event),
    Relation(&'a Relation),
    Attribute(Attribute),
}

impl Annotation<'_> {
    /// Borrow the record behind the variant.
    pub fn record(&self) -> &dyn BratRecord {
        match self {
            Annotation::Entity(e) => *e,
            Annotation::Event(e) => *e,
            Annotation::Relation(r) => *r,
            Annotation::Attribute(a) => a,
        }
    }

    /// The kind of the wrapped record.
    pub fn kind(&self) -> AnnotationKind {
        self.record().kind()
    }

    /// Render the wrapped record as one annotation line.
    pub fn to_brat_line(&self, entities: &EntityIndex<'_>) -> String {
        self.record().to_brat_line(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_line() {
        assert_eq!(AnnotationKind::of_line("T1\tPerson 0 4\tJohn"), Some(AnnotationKind::Entity));
        assert_eq!(AnnotationKind::of_line("E1\tMeet:T3"), Some(AnnotationKind::Event));
        assert_eq!(AnnotationKind::of_line("R1\tKnows Arg1:T1 Arg2:T2"), Some(AnnotationKind::Relation));
        assert_eq!(AnnotationKind::of_line("*\tEquiv T1 T2"), Some(AnnotationKind::Relation));
        assert_eq!(AnnotationKind::of_line("A1\tNegation E1"), Some(AnnotationKind::Attribute));
        assert_eq!(AnnotationKind::of_line("#1\tAnnotatorNotes T1\tnote"), None);
        assert_eq!(AnnotationKind::of_line(""), None);
    }

    #[test]
    fn test_id_numbers() {
        assert_eq!(AnnotationKind::Entity.format_id(12), "T12");
        assert_eq!(AnnotationKind::Entity.id_number("T12"), Some(12));
        assert_eq!(AnnotationKind::Event.id_number("T12"), None);
        assert_eq!(AnnotationKind::Relation.id_number("*"), None);
    }

    #[test]
    fn test_attribute_line() {
        let attribute = Attribute::new(2, "Negation", "E4");
        let index = EntityIndex::default();
        assert_eq!(attribute.to_brat_line(&index), "A2\tNegation E4");
        assert_eq!(attribute.embed_json(&index), Value::Null);
    }
}
