//! Delimiter-based sentence splitting.

use crate::error::{BratError, Result};
use crate::model::Sentence;

/// Split `text` into sentences separated by `delimiter`.
///
/// Offsets are character offsets into `text`; the delimiter itself belongs
/// to no sentence. Returns an empty list when the delimiter never occurs,
/// so that annotations stay at document level.
pub fn split_sentences(text: &str, delimiter: &str) -> Result<Vec<Sentence>> {
    if delimiter.is_empty() {
        return Err(BratError::InvalidArgument(
            "sentence delimiter must not be empty".to_string(),
        ));
    }
    if !text.contains(delimiter) {
        return Ok(Vec::new());
    }

    let delimiter_chars = delimiter.chars().count();
    let mut sentences = Vec::new();
    // Byte cursor and its character offset advance together.
    let mut cursor = 0;
    let mut char_cursor = 0;

    while let Some(found) = text[cursor..].find(delimiter) {
        let piece = &text[cursor..cursor + found];
        let len = piece.chars().count();
        sentences.push(Sentence::new(piece, char_cursor, char_cursor + len));

        cursor += found + delimiter.len();
        char_cursor += len + delimiter_chars;
    }

    if cursor < text.len() {
        let rest = &text[cursor..];
        let len = rest.chars().count();
        sentences.push(Sentence::new(rest, char_cursor, char_cursor + len));
    }

    Ok(sentences)
}
