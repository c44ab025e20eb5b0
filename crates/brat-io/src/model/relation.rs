//! Typed groupings of entities.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::annotation::{AnnotationKind, BratRecord};
use super::entity::{EntityIndex, EntityKey};

/// Id shared by every relation in the symmetric (`*`) encoding.
pub const STAR_ID: &str = "*";

/// Prefix of positional argument names in the canonical encoding.
pub const DEFAULT_ARG: &str = "Arg";

/// A relation between two or more entities.
///
/// Canonical relations (`R` ids) have ordered, named arguments `Arg1`,
/// `Arg2`. Star relations (id `*`) are unordered groupings of any arity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    id: String,
    /// Relation type, e.g. `Equiv`.
    #[serde(rename = "type")]
    pub relation_type: String,
    /// Referenced entities in argument order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<EntityKey>,
}

impl Relation {
    /// Create a canonical relation.
    pub fn new(id: impl Into<String>, relation_type: impl Into<String>, arguments: Vec<EntityKey>) -> Self {
        Self {
            id: id.into(),
            relation_type: relation_type.into(),
            arguments,
        }
    }

    /// Create a symmetric relation with the `*` id.
    pub fn star(relation_type: impl Into<String>, arguments: Vec<EntityKey>) -> Self {
        Self::new(STAR_ID, relation_type, arguments)
    }

    /// Name of the argument at `index` (zero-based), e.g. `Arg1`.
    pub fn arg_name(index: usize) -> String {
        format!("{}{}", DEFAULT_ARG, index + 1)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this relation uses the symmetric encoding.
    pub fn is_star(&self) -> bool {
        self.id.starts_with('*')
    }

    pub fn id_number(&self) -> Option<u32> {
        AnnotationKind::Relation.id_number(&self.id)
    }

    /// Replace the id with `R{number}`.
    pub fn set_id_number(&mut self, number: u32) {
        self.id = AnnotationKind::Relation.format_id(number);
    }
}

impl BratRecord for Relation {
    fn kind(&self) -> AnnotationKind {
        AnnotationKind::Relation
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_brat_line(&self, entities: &EntityIndex<'_>) -> String {
        let arguments: Vec<String> = if self.is_star() {
            self.arguments
                .iter()
                .map(|&key| entities.id_of(key).to_string())
                .collect()
        } else {
            self.arguments
                .iter()
                .enumerate()
                .map(|(i, &key)| format!("{}:{}", Self::arg_name(i), entities.id_of(key)))
                .collect()
        };

        let id = if self.is_star() { STAR_ID } else { self.id.as_str() };
        format!("{}\t{} {}", id, self.relation_type, arguments.join(" "))
    }

    fn embed_json(&self, entities: &EntityIndex<'_>) -> Value {
        let arguments: Vec<Value> = self
            .arguments
            .iter()
            .enumerate()
            .map(|(i, &key)| json!([Self::arg_name(i), entities.id_of(key)]))
            .collect();
        json!([self.id, self.relation_type, arguments])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entity;

    fn entities() -> Vec<Entity> {
        vec![
            Entity::new(EntityKey(0), "T1", "Person", "John", 0, 4),
            Entity::new(EntityKey(1), "T2", "Person", "Mary", 9, 13),
            Entity::new(EntityKey(2), "T5", "Person", "him", 30, 33),
        ]
    }

    #[test]
    fn test_canonical_line() {
        let entities = entities();
        let index = EntityIndex::new(&entities);
        let relation = Relation::new("R1", "Knows", vec![EntityKey(0), EntityKey(1)]);

        assert!(!relation.is_star());
        assert_eq!(relation.to_brat_line(&index), "R1\tKnows Arg1:T1 Arg2:T2");
    }

    #[test]
    fn test_star_line() {
        let entities = entities();
        let index = EntityIndex::new(&entities);
        let relation = Relation::star("Equiv", vec![EntityKey(0), EntityKey(2), EntityKey(1)]);

        assert!(relation.is_star());
        assert_eq!(relation.id_number(), None);
        assert_eq!(relation.to_brat_line(&index), "*\tEquiv T1 T5 T2");
    }

    #[test]
    fn test_embed_json_names_arguments() {
        let entities = entities();
        let index = EntityIndex::new(&entities);
        let relation = Relation::new("R4", "Knows", vec![EntityKey(1), EntityKey(0)]);

        assert_eq!(
            relation.embed_json(&index),
            json!(["R4", "Knows", [["Arg1", "T2"], ["Arg2", "T1"]]])
        );
    }

    #[test]
    fn test_set_id_number() {
        let mut relation = Relation::new("R7", "Knows", vec![]);
        relation.set_id_number(2);
        assert_eq!(relation.id(), "R2");
        assert_eq!(relation.id_number(), Some(2));
    }
}
