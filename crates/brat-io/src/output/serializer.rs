//! Rendering documents back into the line format.

use serde_json::{Value, json};

use crate::model::{Annotation, Attribute, BratRecord, Document};

impl Document {
    /// Every record of the document in serialization order: entities, events,
    /// relations, then the synthesized attributes.
    pub fn annotations(&self) -> Vec<Annotation<'_>> {
        let mut annotations: Vec<Annotation<'_>> = Vec::new();
        annotations.extend(self.all_entities().map(Annotation::Entity));
        annotations.extend(self.all_events().map(Annotation::Event));
        annotations.extend(self.all_relations().map(Annotation::Relation));
        annotations.extend(self.attributes().into_iter().map(Annotation::Attribute));
        annotations
    }

    /// Attribute lines synthesized from the events.
    ///
    /// `name eventId` pairs are sorted as strings and numbered from `A1`.
    pub fn attributes(&self) -> Vec<Attribute> {
        let mut pairs: Vec<(String, &str, &str)> = self
            .all_events()
            .flat_map(|event| {
                event
                    .attributes
                    .iter()
                    .map(move |name| (format!("{} {}", name, event.id()), name.as_str(), event.id()))
            })
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (_, name, target))| Attribute::new(i as u32 + 1, name, target))
            .collect()
    }

    /// The annotation file contents, newline-joined without a trailing newline.
    pub fn to_brat_string(&self) -> String {
        let index = self.entity_index();
        self.annotations()
            .iter()
            .map(|annotation| annotation.to_brat_line(&index))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Structured form: `{"text", "entities", "relations"}`.
    pub fn embed_json(&self) -> Value {
        let index = self.entity_index();
        let entities: Vec<Value> = self.all_entities().map(|e| e.embed_json(&index)).collect();
        let relations: Vec<Value> = self.all_relations().map(|r| r.embed_json(&index)).collect();
        json!({
            "text": self.text,
            "entities": entities,
            "relations": relations,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::input::{Parser, ParserConfig};
    use crate::model::{AnnotationKind, Document};
    use serde_json::json;

    const TEXT: &str = "Acme bought Widgets.\nIt paid cash.";
    const ANNOTATIONS: &str = "T1\tCompany 0 4\tAcme\n\
        T2\tAcquisition 5 11\tbought\n\
        T3\tCompany 12 19\tWidgets\n\
        T4\tCompany 21 23\tIt\n\
        E1\tAcquisition:T2 Buyer:T1 Target:T3\n\
        R1\tOwns Arg1:T1 Arg2:T3\n\
        *\tEquiv T1 T4\n\
        A1\tSpeculation E1\n\
        A2\tNegation E1";

    fn parse(config: ParserConfig) -> Document {
        Parser::with_config(config)
            .parse_str("doc", TEXT, ANNOTATIONS)
            .unwrap()
    }

    #[test]
    fn test_serialization_order() {
        let document = parse(ParserConfig::without_sentences());
        let kinds: Vec<AnnotationKind> = document.annotations().iter().map(|a| a.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                AnnotationKind::Entity,
                AnnotationKind::Entity,
                AnnotationKind::Entity,
                AnnotationKind::Entity,
                AnnotationKind::Event,
                AnnotationKind::Relation,
                AnnotationKind::Relation,
                AnnotationKind::Attribute,
                AnnotationKind::Attribute,
            ]
        );
    }

    #[test]
    fn test_to_brat_string() {
        let document = parse(ParserConfig::without_sentences());
        let expected = "T1\tCompany 0 4\tAcme\n\
            T2\tAcquisition 5 11\tbought\n\
            T3\tCompany 12 19\tWidgets\n\
            T4\tCompany 21 23\tIt\n\
            E1\tAcquisition:T2 Buyer:T1 Target:T3\n\
            R1\tOwns Arg1:T1 Arg2:T3\n\
            *\tEquiv T1 T4\n\
            A1\tNegation E1\n\
            A2\tSpeculation E1";
        assert_eq!(document.to_brat_string(), expected);
    }

    #[test]
    fn test_split_document_lists_document_level_first() {
        let document = parse(ParserConfig::default());
        let serialized = document.to_brat_string();
        let ids: Vec<&str> = serialized
            .lines()
            .map(|line| line.split('\t').next().unwrap_or_default())
            .collect();
        // Only the star relation crosses the sentence boundary.
        assert_eq!(ids, vec!["T1", "T2", "T3", "T4", "E1", "*", "R1", "A1", "A2"]);
    }

    #[test]
    fn test_reparse_is_stable() {
        let first = parse(ParserConfig::default()).to_brat_string();
        let second = Parser::new()
            .parse_str("doc", TEXT, &first)
            .unwrap()
            .to_brat_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_embed_json() {
        let document = parse(ParserConfig::without_sentences());
        let value = document.embed_json();
        assert_eq!(value["text"], json!(TEXT));
        assert_eq!(value["entities"][0], json!(["T1", "Company", [[0, 4]]]));
        assert_eq!(value["relations"][1], json!(["*", "Equiv", [["Arg1", "T1"], ["Arg2", "T4"]]]));
        assert_eq!(value["entities"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_empty_document() {
        let document = Document::new("doc", "");
        assert_eq!(document.to_brat_string(), "");
        assert!(document.attributes().is_empty());
    }
}
