//! brat-io: reading, re-chunking and writing brat standoff annotations.
//!
//! Documents are parsed from a text file and its `.ann` companion, split into
//! sentences, and can be re-assembled into fixed-size chunks with fresh ids
//! and rebased offsets. A type grammar (`annotation.conf`) is inferred from
//! any set of documents.
//!
//! # Core Principles
//!
//! - **Lenient parsing**: malformed lines are dropped with a warning, never fatal
//! - **Non-destructive**: source text is never modified
//! - **Deterministic output**: the same documents always serialize to the same bytes
//!
//! # Example
//!
//! ```no_run
//! use brat_io::{BratIo, ChunkConfig};
//! use std::path::Path;
//!
//! let io = BratIo::new();
//! let documents = io.read_directory(Path::new("corpus")).unwrap();
//!
//! let sentences: Vec<_> = documents
//!     .iter()
//!     .flat_map(|d| d.sentences().iter().cloned())
//!     .collect();
//! let mut sink = io.directory_sink(Path::new("chunks"));
//! io.save_chunks(&sentences, &ChunkConfig::default(), &mut sink, true)
//!     .unwrap();
//! ```

pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod schema;
pub mod segment;

mod brat;

pub use crate::brat::{BratIo, BratIoConfig};
pub use error::{BratError, LineError, Result};
pub use input::{Parser, ParserConfig, RawDocument};
pub use model::{
    Annotation, AnnotationKind, Attribute, BratRecord, Document, Entity, EntityIndex, EntityKey,
    Event, Relation, Sentence,
};
pub use output::{
    AnnotationSink, ChunkConfig, DirectorySink, MemorySink, assemble_chunks, assemble_document,
    chunk_id,
};
pub use schema::{AnnotationSchema, merge_argument_types, pastel_color, render_visual_config};
pub use segment::{distribute, split_sentences};
