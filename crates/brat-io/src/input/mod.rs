//! Reading annotation files and parsing them into documents.

mod parser;
mod source;

pub use parser::{DEFAULT_SENTENCE_DELIMITER, Parser, ParserConfig};
pub use source::{RawDocument, document_id, list_directories, list_files, swap_extension};
