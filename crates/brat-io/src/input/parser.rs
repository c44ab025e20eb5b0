//! Line parser for the standoff annotation format.
//!
//! Lines are processed kind by kind (entities first, since every other kind
//! refers to them). A malformed line is dropped with a warning and never
//! aborts the parse.

use std::collections::{BTreeSet, HashMap};

use log::{debug, trace, warn};

use crate::error::{BratError, LineError, Result};
use crate::model::{AnnotationKind, Document, Entity, EntityKey, Event, Relation, STAR_ID};
use crate::segment::{distribute, split_sentences};

use super::source::RawDocument;

/// Sentence delimiter used when none is configured.
pub const DEFAULT_SENTENCE_DELIMITER: &str = "\n";

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter separating sentences in the text (None = keep annotations
    /// at document level).
    pub sentence_delimiter: Option<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            sentence_delimiter: Some(DEFAULT_SENTENCE_DELIMITER.to_string()),
        }
    }
}

impl ParserConfig {
    /// Configuration that does not split documents into sentences.
    pub fn without_sentences() -> Self {
        Self {
            sentence_delimiter: None,
        }
    }

    /// Configuration splitting sentences on `delimiter`.
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            sentence_delimiter: Some(delimiter.into()),
        }
    }
}

/// Parses annotation lines into a [`Document`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a raw text/annotation pair.
    pub fn parse_raw(&self, raw: &RawDocument) -> Result<Document> {
        self.parse(&raw.id, &raw.text, &raw.lines)
    }

    /// Parse annotations given as one newline-separated string.
    pub fn parse_str(&self, id: &str, text: &str, annotations: &str) -> Result<Document> {
        let lines: Vec<&str> = annotations.lines().collect();
        self.parse(id, text, &lines)
    }

    /// Parse annotation lines for the document `id` with the given text.
    pub fn parse<S: AsRef<str>>(&self, id: &str, text: &str, lines: &[S]) -> Result<Document> {
        if id.is_empty() {
            return Err(BratError::InvalidArgument("document id must not be empty".to_string()));
        }
        if let Some(delimiter) = &self.config.sentence_delimiter {
            if delimiter.is_empty() {
                return Err(BratError::InvalidArgument(
                    "sentence delimiter must not be empty".to_string(),
                ));
            }
        }

        let lines = ClassifiedLines::new(lines);
        let mut document = Document::new(id, text);

        let table = read_entities(&lines.entities);
        let entity_count = table.entities.len();

        let mut events = read_events(&lines.events, &table.keys);
        for event in &mut events {
            event.doc_id = Some(id.to_string());
        }

        let mut relations = read_canonical_relations(&lines.relations, &table.keys);
        relations.extend(read_star_relations(&lines.star_relations, &table.keys));

        let attributes = read_attributes(&lines.attributes);
        for event in &mut events {
            if let Some(names) = attributes.get(event.id()) {
                event.attributes.extend(names.iter().cloned());
            }
        }

        document.entities = table.entities;
        document.events = events;
        document.relations = relations;

        if let Some(delimiter) = &self.config.sentence_delimiter {
            let mut sentences = split_sentences(text, delimiter)?;
            for sentence in &mut sentences {
                sentence.id = format!("{}_{}", id, sentence.start);
            }
            distribute(&mut document, sentences);

            let distributed = document.sentence_entity_count();
            if distributed != entity_count {
                warn!(
                    "Document '{}': {} of {} entities could not be mapped into sentences",
                    id,
                    entity_count - distributed,
                    entity_count
                );
            }
        }

        debug!(
            "Parsed document '{}': {} entities, {} events, {} relations, {} sentences",
            id,
            entity_count,
            document.all_events().count(),
            document.all_relations().count(),
            document.sentences().len()
        );

        Ok(document)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// A raw line with its zero-based position in the annotation file.
type NumberedLine<'a> = (usize, &'a str);

/// Annotation lines grouped by kind, in file order.
#[derive(Default)]
struct ClassifiedLines<'a> {
    entities: Vec<NumberedLine<'a>>,
    events: Vec<NumberedLine<'a>>,
    relations: Vec<NumberedLine<'a>>,
    star_relations: Vec<NumberedLine<'a>>,
    attributes: Vec<NumberedLine<'a>>,
}

impl<'a> ClassifiedLines<'a> {
    fn new<S: AsRef<str>>(lines: &'a [S]) -> Self {
        let mut classified = Self::default();
        for (n, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let bucket = match AnnotationKind::of_line(line) {
                Some(AnnotationKind::Entity) => &mut classified.entities,
                Some(AnnotationKind::Event) => &mut classified.events,
                Some(AnnotationKind::Relation) if line.starts_with(STAR_ID) => {
                    &mut classified.star_relations
                }
                Some(AnnotationKind::Relation) => &mut classified.relations,
                Some(AnnotationKind::Attribute) => &mut classified.attributes,
                None => {
                    if !line.is_empty() {
                        trace!("Ignoring line {}: {:?}", n + 1, line);
                    }
                    continue;
                }
            };
            bucket.push((n, line));
        }
        classified
    }
}

/// Split on `separator`, dropping trailing empty pieces.
fn split_trimmed(s: &str, separator: char) -> Vec<&str> {
    let mut pieces: Vec<&str> = s.split(separator).collect();
    while pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Split a line into exactly `[id, body]`.
fn id_and_body(line: &str) -> std::result::Result<(&str, &str), LineError> {
    match split_trimmed(line, '\t').as_slice() {
        [id, body] => Ok((*id, *body)),
        fields => Err(LineError::FieldCount {
            expected: 2,
            found: fields.len(),
        }),
    }
}

/// Split a `key:value` token.
fn key_value(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.split_once(':')?;
    if key.is_empty() || value.is_empty() || value.contains(':') {
        return None;
    }
    Some((key, value))
}

fn drop_line(kind: &str, (n, line): NumberedLine<'_>, error: &LineError) {
    warn!("Dropping {} on line {}: {} ({:?})", kind, n + 1, error, line);
}

/// Entities read from a file and their raw-id lookup.
struct EntityTable {
    entities: Vec<Entity>,
    keys: HashMap<String, EntityKey>,
}

fn read_entities(lines: &[NumberedLine<'_>]) -> EntityTable {
    let mut table = EntityTable {
        entities: Vec::new(),
        keys: HashMap::new(),
    };

    for &numbered in lines {
        let key = EntityKey(table.entities.len() as u32);
        let parsed = parse_entity(numbered.1, key).and_then(|entity| {
            if table.keys.contains_key(entity.id()) {
                Err(LineError::DuplicateId(entity.id().to_string()))
            } else {
                Ok(entity)
            }
        });

        match parsed {
            Ok(entity) => {
                table.keys.insert(entity.id().to_string(), key);
                table.entities.push(entity);
            }
            Err(e) => drop_line("entity", numbered, &e),
        }
    }
    table
}

/// Parse `T1<TAB>Type start end<TAB>text`.
fn parse_entity(line: &str, key: EntityKey) -> std::result::Result<Entity, LineError> {
    let fields: Vec<&str> = line.splitn(3, '\t').collect();
    let [id, span, text] = fields.as_slice() else {
        return Err(LineError::FieldCount {
            expected: 3,
            found: fields.len(),
        });
    };

    let tokens = split_trimmed(span, ' ');
    if tokens.len() < 3 {
        return Err(LineError::TokenCount {
            expected: "at least 3",
            found: tokens.len(),
        });
    }
    if let Some(fragment) = tokens[1..].iter().find(|t| t.contains(';')) {
        return Err(LineError::Discontinuous(fragment.to_string()));
    }

    let start = parse_offset(tokens[1])?;
    let end = parse_offset(tokens[tokens.len() - 1])?;
    if end < start {
        return Err(LineError::InvertedSpan { start, end });
    }

    Ok(Entity::new(key, *id, tokens[0], *text, start, end))
}

fn parse_offset(token: &str) -> std::result::Result<usize, LineError> {
    token
        .parse()
        .map_err(|_| LineError::InvalidOffset(token.to_string()))
}

fn read_events(lines: &[NumberedLine<'_>], keys: &HashMap<String, EntityKey>) -> Vec<Event> {
    lines
        .iter()
        .filter_map(|&numbered| match parse_event(numbered.1, keys) {
            Ok(event) => Some(event),
            Err(e) => {
                drop_line("event", numbered, &e);
                None
            }
        })
        .collect()
}

/// Parse `E1<TAB>Type:T1 Role:T2 ...`.
///
/// Arguments that are malformed or unresolved are skipped; only a bad
/// trigger drops the event.
fn parse_event(line: &str, keys: &HashMap<String, EntityKey>) -> std::result::Result<Event, LineError> {
    let (id, body) = id_and_body(line)?;
    let tokens = split_trimmed(body, ' ');
    let Some(first) = tokens.first() else {
        return Err(LineError::TokenCount {
            expected: "at least 1",
            found: 0,
        });
    };

    let (event_type, trigger_id) =
        key_value(first).ok_or_else(|| LineError::MalformedArgument(first.to_string()))?;
    let trigger = *keys
        .get(trigger_id)
        .ok_or_else(|| LineError::Unresolved(trigger_id.to_string()))?;

    let mut event = Event::new(id, event_type, trigger);
    for token in &tokens[1..] {
        match key_value(token) {
            Some((role, entity_id)) => match keys.get(entity_id) {
                Some(&key) => {
                    event.arguments.insert(role.to_string(), key);
                }
                None => trace!("Skipping unresolved event argument {:?} in {}", token, id),
            },
            None => trace!("Skipping malformed event argument {:?} in {}", token, id),
        }
    }
    Ok(event)
}

fn read_canonical_relations(
    lines: &[NumberedLine<'_>],
    keys: &HashMap<String, EntityKey>,
) -> Vec<Relation> {
    lines
        .iter()
        .filter_map(|&numbered| match parse_canonical_relation(numbered.1, keys) {
            Ok(relation) => Some(relation),
            Err(e) => {
                drop_line("relation", numbered, &e);
                None
            }
        })
        .collect()
}

/// Parse `R1<TAB>Type Arg1:T1 Arg2:T2`.
fn parse_canonical_relation(
    line: &str,
    keys: &HashMap<String, EntityKey>,
) -> std::result::Result<Relation, LineError> {
    let (id, body) = id_and_body(line)?;
    let tokens = split_trimmed(body, ' ');
    let [relation_type, first, second] = tokens.as_slice() else {
        return Err(LineError::TokenCount {
            expected: "exactly 3",
            found: tokens.len(),
        });
    };

    let arg1 = first.strip_prefix("Arg1:").ok_or_else(|| LineError::ArgumentPrefix {
        expected: "Arg1:",
        token: first.to_string(),
    })?;
    let arg2 = second.strip_prefix("Arg2:").ok_or_else(|| LineError::ArgumentPrefix {
        expected: "Arg2:",
        token: second.to_string(),
    })?;

    let resolve = |entity_id: &str| {
        keys.get(entity_id)
            .copied()
            .ok_or_else(|| LineError::Unresolved(entity_id.to_string()))
    };
    Ok(Relation::new(id, *relation_type, vec![resolve(arg1)?, resolve(arg2)?]))
}

fn read_star_relations(
    lines: &[NumberedLine<'_>],
    keys: &HashMap<String, EntityKey>,
) -> Vec<Relation> {
    lines
        .iter()
        .filter_map(|&numbered| match parse_star_relation(numbered.1, keys) {
            Ok(relation) => Some(relation),
            Err(e) => {
                drop_line("star relation", numbered, &e);
                None
            }
        })
        .collect()
}

/// Parse `*<TAB>Type T1 T2 ...`; unresolved ids are filtered out.
fn parse_star_relation(
    line: &str,
    keys: &HashMap<String, EntityKey>,
) -> std::result::Result<Relation, LineError> {
    let (_, body) = id_and_body(line)?;
    let tokens = split_trimmed(body, ' ');
    if tokens.len() < 3 {
        return Err(LineError::TokenCount {
            expected: "at least 3",
            found: tokens.len(),
        });
    }

    let arguments: Vec<EntityKey> = tokens[1..]
        .iter()
        .filter_map(|entity_id| keys.get(*entity_id).copied())
        .collect();
    if arguments.len() < 2 {
        return Err(LineError::TooFewArguments(arguments.len()));
    }
    Ok(Relation::star(tokens[0], arguments))
}

/// Attribute names grouped by target id.
fn read_attributes(lines: &[NumberedLine<'_>]) -> HashMap<String, BTreeSet<String>> {
    let mut attributes: HashMap<String, BTreeSet<String>> = HashMap::new();
    for &numbered in lines {
        match parse_attribute(numbered.1) {
            Ok((name, target)) => {
                attributes
                    .entry(target.to_string())
                    .or_default()
                    .insert(name.to_string());
            }
            Err(e) => drop_line("attribute", numbered, &e),
        }
    }
    attributes
}

/// Parse `A1<TAB>Name Target` into `(name, target)`.
fn parse_attribute(line: &str) -> std::result::Result<(&str, &str), LineError> {
    let (_, body) = id_and_body(line)?;
    match split_trimmed(body, ' ').as_slice() {
        [name, target] => Ok((*name, *target)),
        tokens => Err(LineError::TokenCount {
            expected: "exactly 2",
            found: tokens.len(),
        }),
    }
}
