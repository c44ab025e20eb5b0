//! Moving document-level annotations into the sentences that contain them.

use std::collections::HashMap;

use crate::model::{Document, Entity, EntityKey, Event, Relation, Sentence, is_within};

/// Distribute the document-level annotations of `document` into `sentences`
/// and attach the sentences to the document.
///
/// `sentences` must be ordered and disjoint, as [`split_sentences`] returns
/// them, so each annotation has at most one containing sentence. Entities
/// move by their own span, events by their derived span, relations only
/// when every argument lies in the same sentence. Whatever fits nowhere
/// stays at document level.
///
/// [`split_sentences`]: crate::segment::split_sentences
pub fn distribute(document: &mut Document, mut sentences: Vec<Sentence>) {
    if sentences.is_empty() {
        return;
    }

    let bounds: Vec<(usize, usize)> = sentences.iter().map(|s| (s.start, s.end)).collect();
    let locate = |(start, end): (usize, usize)| -> Option<usize> {
        let index = bounds.partition_point(|&(s, _)| s <= start).checked_sub(1)?;
        let (sentence_start, sentence_end) = bounds[index];
        is_within(start, end, sentence_start, sentence_end).then_some(index)
    };

    let spans: HashMap<EntityKey, (usize, usize)> = document
        .all_entities()
        .map(|e| (e.key(), (e.start(), e.end())))
        .collect();

    document.entities = place(
        std::mem::take(&mut document.entities),
        &mut sentences,
        |entity: &Entity| locate((entity.start(), entity.end())),
        |sentence| &mut sentence.entities,
    );

    document.events = place(
        std::mem::take(&mut document.events),
        &mut sentences,
        |event: &Event| {
            event
                .entity_keys()
                .filter_map(|key| spans.get(&key).copied())
                .reduce(|(s1, e1), (s2, e2)| (s1.min(s2), e1.max(e2)))
                .and_then(locate)
        },
        |sentence| &mut sentence.events,
    );

    document.relations = place(
        std::mem::take(&mut document.relations),
        &mut sentences,
        |relation: &Relation| {
            let mut indices = relation
                .arguments
                .iter()
                .map(|key| spans.get(key).copied().and_then(locate));
            let first = indices.next()??;
            indices.all(|index| index == Some(first)).then_some(first)
        },
        |sentence| &mut sentence.relations,
    );

    match &mut document.sentences {
        Some(existing) => existing.extend(sentences),
        None => document.sentences = Some(sentences),
    }
}

/// Move each item into the sentence `locate` picks and return the rest in
/// their original order.
fn place<T>(
    items: Vec<T>,
    sentences: &mut [Sentence],
    locate: impl Fn(&T) -> Option<usize>,
    container: fn(&mut Sentence) -> &mut Vec<T>,
) -> Vec<T> {
    let mut rest = Vec::new();
    for item in items {
        match locate(&item) {
            Some(index) => container(&mut sentences[index]).push(item),
            None => rest.push(item),
        }
    }
    rest
}
