//! Type grammar inferred from annotated documents.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::model::{Document, Relation};

/// Entity, event and relation types observed in a corpus, in the shape of
/// an `annotation.conf` file.
///
/// Building a schema is a commutative, associative merge of per-document
/// observations, so documents can be observed in any order or in parallel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSchema {
    /// Every entity type seen, including event triggers.
    pub entity_types: BTreeSet<String>,
    /// Event type to role to argument entity types.
    pub events: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>,
    /// Relation type to per-position argument entity types.
    pub relations: BTreeMap<String, Vec<BTreeSet<String>>>,
}

impl AnnotationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schema of a single document.
    pub fn of_document(document: &Document) -> Self {
        let mut schema = Self::new();
        schema.observe(document);
        schema
    }

    /// Schema of a corpus.
    pub fn infer<'a>(documents: impl IntoIterator<Item = &'a Document>) -> Self {
        documents.into_iter().fold(Self::new(), |mut schema, document| {
            schema.observe(document);
            schema
        })
    }

    /// Schema of a corpus, observing documents in parallel when enabled.
    pub fn infer_all(documents: &[Document]) -> Self {
        #[cfg(feature = "parallel")]
        let schema = documents
            .par_iter()
            .map(Self::of_document)
            .reduce(Self::new, Self::merge);

        #[cfg(not(feature = "parallel"))]
        let schema = Self::infer(documents);

        debug!(
            "Inferred schema from {} documents: {} entity, {} event, {} relation types",
            documents.len(),
            schema.plain_entity_types().len(),
            schema.events.len(),
            schema.relations.len()
        );
        schema
    }

    /// Add the types used in `document`.
    pub fn observe(&mut self, document: &Document) {
        let index = document.entity_index();

        self.entity_types
            .extend(document.all_entities().map(|e| e.entity_type.clone()));

        for event in document.all_events() {
            let roles = self.events.entry(event.event_type.clone()).or_default();
            for (role, &key) in &event.arguments {
                let types = roles.entry(role.clone()).or_default();
                if let Some(entity) = index.get(key) {
                    types.insert(entity.entity_type.clone());
                }
            }
        }

        for relation in document.all_relations() {
            let observed: Vec<BTreeSet<String>> = relation
                .arguments
                .iter()
                .map(|&key| {
                    index
                        .get(key)
                        .map(|e| BTreeSet::from([e.entity_type.clone()]))
                        .unwrap_or_default()
                })
                .collect();
            let positions = self.relations.entry(relation.relation_type.clone()).or_default();
            merge_argument_types(positions, observed);
        }
    }

    /// Union of two schemas.
    pub fn merge(mut self, other: Self) -> Self {
        self.entity_types.extend(other.entity_types);

        for (event_type, roles) in other.events {
            let merged = self.events.entry(event_type).or_default();
            for (role, types) in roles {
                merged.entry(role).or_default().extend(types);
            }
        }

        for (relation_type, positions) in other.relations {
            merge_argument_types(self.relations.entry(relation_type).or_default(), positions);
        }
        self
    }

    /// Entity types that are not also event types.
    pub fn plain_entity_types(&self) -> Vec<&str> {
        self.entity_types
            .iter()
            .filter(|t| !self.events.contains_key(*t))
            .map(String::as_str)
            .collect()
    }

    /// Render as an `annotation.conf` file.
    pub fn to_config_string(&self) -> String {
        let mut out = String::from("\n\n[entities]\n\n");
        for entity_type in self.plain_entity_types() {
            out.push_str(entity_type);
            out.push('\n');
        }

        out.push_str("\n\n[events]\n\n");
        for (event_type, roles) in &self.events {
            let roles: Vec<String> = roles
                .iter()
                .map(|(role, types)| format!("{}?:{}", role, join_types(types)))
                .collect();
            out.push_str(&format!("{}\t{}\n", event_type, roles.join(", ")));
        }

        out.push_str("\n\n[relations]\n\n");
        for (relation_type, positions) in &self.relations {
            // Arg1-based, like the relation lines themselves.
            let arguments: Vec<String> = positions
                .iter()
                .enumerate()
                .map(|(i, types)| format!("{}:{}", Relation::arg_name(i), join_types(types)))
                .collect();
            out.push_str(&format!("{}\t{}\n", relation_type, arguments.join(", ")));
        }

        out.push_str("\n\n[attributes]\n\n");
        out
    }
}

fn join_types(types: &BTreeSet<String>) -> String {
    types.iter().map(String::as_str).collect::<Vec<_>>().join("|")
}

/// Positional union of argument type lists.
///
/// Positions present in both are unioned; the longer list's extra positions
/// are appended unchanged.
pub fn merge_argument_types(into: &mut Vec<BTreeSet<String>>, other: Vec<BTreeSet<String>>) {
    for (i, types) in other.into_iter().enumerate() {
        match into.get_mut(i) {
            Some(existing) => existing.extend(types),
            None => into.push(types),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Parser;

    fn set(types: &[&str]) -> BTreeSet<String> {
        types.iter().map(|t| t.to_string()).collect()
    }

    fn corpus() -> Vec<Document> {
        let parser = Parser::new();
        vec![
            parser
                .parse_str(
                    "a",
                    "Acme bought Widgets.",
                    "T1\tCompany 0 4\tAcme\n\
                     T2\tAcquisition 5 11\tbought\n\
                     T3\tProduct 12 19\tWidgets\n\
                     E1\tAcquisition:T2 Buyer:T1 Target:T3\n\
                     R1\tMakes Arg1:T1 Arg2:T3",
                )
                .unwrap(),
            parser
                .parse_str(
                    "b",
                    "Mary joined Acme and Bob.",
                    "T1\tPerson 0 4\tMary\n\
                     T2\tCompany 12 16\tAcme\n\
                     T3\tPerson 21 24\tBob\n\
                     R1\tMakes Arg1:T2 Arg2:T1\n\
                     *\tKnows T1 T2 T3",
                )
                .unwrap(),
        ]
    }

    #[test]
    fn test_merge_argument_types() {
        let mut into = vec![set(&["A"])];
        merge_argument_types(&mut into, vec![set(&["B"]), set(&["C"])]);
        assert_eq!(into, vec![set(&["A", "B"]), set(&["C"])]);

        merge_argument_types(&mut into, vec![set(&["D"])]);
        assert_eq!(into, vec![set(&["A", "B", "D"]), set(&["C"])]);
    }

    #[test]
    fn test_infer() {
        let schema = AnnotationSchema::infer(&corpus());

        assert_eq!(schema.plain_entity_types(), vec!["Company", "Person", "Product"]);
        assert_eq!(schema.events["Acquisition"]["Buyer"], set(&["Company"]));
        assert_eq!(
            schema.relations["Makes"],
            vec![set(&["Company"]), set(&["Person", "Product"])]
        );
        assert_eq!(schema.relations["Knows"].len(), 3);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let corpus = corpus();
        assert_eq!(AnnotationSchema::infer_all(&corpus), AnnotationSchema::infer(&corpus));
        let reversed: Vec<Document> = corpus.iter().rev().cloned().collect();
        assert_eq!(AnnotationSchema::infer(&reversed), AnnotationSchema::infer(&corpus));
    }

    #[test]
    fn test_config_string() {
        let schema = AnnotationSchema::infer(&corpus());
        let expected = "\n\n[entities]\n\n\
            Company\nPerson\nProduct\n\
            \n\n[events]\n\n\
            Acquisition\tBuyer?:Company, Target?:Product\n\
            \n\n[relations]\n\n\
            Knows\tArg1:Person, Arg2:Company, Arg3:Person\n\
            Makes\tArg1:Company, Arg2:Person|Product\n\
            \n\n[attributes]\n\n";
        assert_eq!(schema.to_config_string(), expected);
    }

    #[test]
    fn test_empty_schema() {
        let schema = AnnotationSchema::new();
        assert_eq!(
            schema.to_config_string(),
            "\n\n[entities]\n\n\n\n[events]\n\n\n\n[relations]\n\n\n\n[attributes]\n\n"
        );
    }
}
