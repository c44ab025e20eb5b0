//! Re-chunking: joining sentences into new documents.

use std::collections::HashMap;

use log::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{BratError, Result};
use crate::model::{Document, EntityKey, Sentence};

/// Sentences per chunk when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// How a flat sentence list is cut into documents.
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// Sentences per output document.
    pub size: usize,
    /// Prefix of chunk ids (`{prefix}_{first}-{last}`).
    pub prefix: Option<String>,
    /// Text placed between joined sentences.
    pub delimiter: String,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_CHUNK_SIZE,
            prefix: None,
            delimiter: "\n".to_string(),
        }
    }
}

impl ChunkConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

/// Id of the chunk covering sentences `start..end` (zero-based, exclusive),
/// e.g. `news_1-10`.
pub fn chunk_id(prefix: Option<&str>, start: usize, end: usize) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}_{}-{}", prefix, start + 1, end),
        _ => format!("{}-{}", start + 1, end),
    }
}

/// Join `sentences` into one document with fresh ids and rebased offsets.
///
/// Entities, events and relations are numbered from 1 in sentence order.
/// Star relations get an `R` id too, so they are written in the canonical
/// form afterwards. The sources are left untouched.
pub fn assemble_document<'a>(
    sentences: impl IntoIterator<Item = &'a Sentence>,
    id: &str,
    delimiter: &str,
) -> Document {
    let delimiter_chars = delimiter.chars().count();
    let mut document = Document::new(id, "");
    let mut texts: Vec<&str> = Vec::new();

    let mut pos = 0;
    let mut entity_count: u32 = 0;
    let mut relation_count: u32 = 0;
    let mut event_count: u32 = 0;

    for sentence in sentences {
        // Keys are only unique per source document, so every sentence gets
        // its own mapping into the new document's key space.
        let mut keys: HashMap<EntityKey, EntityKey> = HashMap::new();

        for entity in &sentence.entities {
            let mut entity = entity.clone();
            let key = EntityKey(entity_count);
            entity_count += 1;

            keys.insert(entity.key(), key);
            entity.set_key(key);
            entity.set_id_number(entity_count);
            entity.rebase(sentence.start, pos);
            document.entities.push(entity);
        }

        for relation in &sentence.relations {
            let arguments: Option<Vec<EntityKey>> =
                relation.arguments.iter().map(|key| keys.get(key).copied()).collect();
            let Some(arguments) = arguments else {
                trace!("Dropping relation {} with dangling arguments", relation.id());
                continue;
            };

            let mut relation = relation.clone();
            relation.arguments = arguments;
            relation_count += 1;
            relation.set_id_number(relation_count);
            document.relations.push(relation);
        }

        for event in &sentence.events {
            let Some(&trigger) = keys.get(&event.trigger) else {
                trace!("Dropping event {} with dangling trigger", event.id());
                continue;
            };

            let mut event = event.clone();
            event.trigger = trigger;
            event.arguments = event
                .arguments
                .into_iter()
                .filter_map(|(role, key)| keys.get(&key).map(|&key| (role, key)))
                .collect();
            event_count += 1;
            event.set_id_number(event_count);
            document.events.push(event);
        }

        texts.push(&sentence.text);
        pos += sentence.char_len() + delimiter_chars;
    }

    document.text = texts.join(delimiter);
    document
}

/// Cut `sentences` into documents of `config.size` sentences each.
///
/// The last chunk may be shorter. Output order follows input order, also
/// when chunks are assembled in parallel.
pub fn assemble_chunks(sentences: &[Sentence], config: &ChunkConfig) -> Result<Vec<Document>> {
    if config.size == 0 {
        return Err(BratError::InvalidArgument("chunk size must be positive".to_string()));
    }

    let prefix = config.prefix.as_deref();
    let build = |(i, chunk): (usize, &[Sentence])| {
        let start = i * config.size;
        let id = chunk_id(prefix, start, start + chunk.len());
        assemble_document(chunk, &id, &config.delimiter)
    };

    #[cfg(feature = "parallel")]
    let documents: Vec<Document> = sentences
        .par_chunks(config.size)
        .enumerate()
        .map(build)
        .collect();

    #[cfg(not(feature = "parallel"))]
    let documents: Vec<Document> = sentences.chunks(config.size).enumerate().map(build).collect();

    debug!(
        "Assembled {} sentences into {} documents of up to {}",
        sentences.len(),
        documents.len(),
        config.size
    );
    Ok(documents)
}
