//! Serialization, re-chunking and output sinks.

mod assemble;
mod serializer;
mod sink;

pub use assemble::{ChunkConfig, DEFAULT_CHUNK_SIZE, assemble_chunks, assemble_document, chunk_id};
pub use sink::{AnnotationSink, DirectorySink, MemorySink};
