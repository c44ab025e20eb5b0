//! Main BratIo struct: directory-level reading and writing.

use std::path::Path;

use log::{debug, warn};

use crate::error::{BratError, Result};
use crate::input::{
    DEFAULT_SENTENCE_DELIMITER, Parser, ParserConfig, RawDocument, document_id, list_directories,
    list_files, swap_extension,
};
use crate::model::{Document, Sentence};
use crate::output::{AnnotationSink, ChunkConfig, DirectorySink, assemble_chunks};
use crate::schema::{AnnotationSchema, render_visual_config};

/// Configuration for reading and writing annotation directories.
#[derive(Debug, Clone)]
pub struct BratIoConfig {
    /// Extension of text files, including the dot.
    pub text_extension: String,
    /// Extension of annotation files, including the dot.
    pub annotation_extension: String,
    /// Sentence delimiter used when parsing (None = no sentence split).
    pub sentence_delimiter: Option<String>,
    /// File name of the generated type grammar.
    pub config_file: String,
    /// File name of the generated colour configuration.
    pub visual_config_file: String,
}

impl Default for BratIoConfig {
    fn default() -> Self {
        Self {
            text_extension: ".txt".to_string(),
            annotation_extension: ".ann".to_string(),
            sentence_delimiter: Some(DEFAULT_SENTENCE_DELIMITER.to_string()),
            config_file: "annotation.conf".to_string(),
            visual_config_file: "visual.conf".to_string(),
        }
    }
}

impl BratIoConfig {
    pub fn with_sentence_delimiter(mut self, delimiter: Option<String>) -> Self {
        self.sentence_delimiter = delimiter;
        self
    }

    pub fn with_extensions(mut self, text: impl Into<String>, annotation: impl Into<String>) -> Self {
        self.text_extension = text.into();
        self.annotation_extension = annotation.into();
        self
    }

    pub fn with_config_file(mut self, name: impl Into<String>) -> Self {
        self.config_file = name.into();
        self
    }

    pub fn with_visual_config_file(mut self, name: impl Into<String>) -> Self {
        self.visual_config_file = name.into();
        self
    }

    /// Parser configuration derived from this configuration.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            sentence_delimiter: self.sentence_delimiter.clone(),
        }
    }
}

/// Reads annotation directories into documents and writes documents back.
pub struct BratIo {
    config: BratIoConfig,
    parser: Parser,
}

impl BratIo {
    /// Create a new instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(BratIoConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: BratIoConfig) -> Self {
        let parser = Parser::with_config(config.parser_config());
        Self { config, parser }
    }

    pub fn config(&self) -> &BratIoConfig {
        &self.config
    }

    /// Annotation file name belonging to a text file name.
    pub fn annotation_path_for(&self, text_file_name: &str) -> String {
        swap_extension(
            text_file_name,
            &self.config.text_extension,
            &self.config.annotation_extension,
        )
    }

    /// Read one text/annotation pair without parsing it.
    pub fn read_raw(&self, text_path: &Path, annotation_path: &Path) -> Result<RawDocument> {
        RawDocument::load(text_path, annotation_path, &self.config.text_extension)
    }

    /// Read and parse one text/annotation pair.
    pub fn read_document(&self, text_path: &Path, annotation_path: &Path) -> Result<Document> {
        let raw = self.read_raw(text_path, annotation_path)?;
        self.parser.parse_raw(&raw)
    }

    /// Read every annotation file in `dir` together with its text file.
    ///
    /// Annotation files without a text file, and pairs that cannot be read,
    /// are skipped with a warning. Only invalid configuration fails the call.
    pub fn read_directory(&self, dir: &Path) -> Result<Vec<Document>> {
        let mut documents = Vec::new();

        for annotation_path in list_files(dir, &self.config.annotation_extension)? {
            let file_name = annotation_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let text_path = dir.join(swap_extension(
                &file_name,
                &self.config.annotation_extension,
                &self.config.text_extension,
            ));

            if !text_path.is_file() {
                let error = BratError::MissingTextFile {
                    annotation: annotation_path.clone(),
                    expected: text_path,
                };
                warn!("Skipping document: {}", error);
                continue;
            }

            let document = match self.read_document(&text_path, &annotation_path) {
                Ok(document) => document,
                Err(error @ BratError::InvalidArgument(_)) => return Err(error),
                Err(error) => {
                    warn!("Skipping document: {}", error);
                    continue;
                }
            };
            if self.config.sentence_delimiter.is_some() && document.has_undistributed() {
                warn!(
                    "Document '{}' keeps {} entities and {} events outside of any sentence",
                    document.id,
                    document.entities.len(),
                    document.events.len()
                );
            }
            documents.push(document);
        }

        debug!("Read {} documents from {}", documents.len(), dir.display());
        Ok(documents)
    }

    /// Read `dir` and each of its immediate subdirectories.
    pub fn read_directory_recursive(&self, dir: &Path) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for dir in list_directories(dir)? {
            documents.extend(self.read_directory(&dir)?);
        }
        Ok(documents)
    }

    /// Write `document` into `sink` under its own id.
    pub fn write_document(&self, document: &Document, sink: &mut dyn AnnotationSink) -> Result<()> {
        sink.write_document(&document.id, &document.text, &document.to_brat_string())
    }

    /// Write `document` as a text/annotation pair into `dir`.
    pub fn write_document_to(&self, document: &Document, dir: &Path) -> Result<()> {
        self.write_document(document, &mut self.directory_sink(dir))
    }

    /// Write the inferred `annotation.conf` for `documents`.
    pub fn write_schema(&self, documents: &[Document], sink: &mut dyn AnnotationSink) -> Result<AnnotationSchema> {
        let schema = AnnotationSchema::infer_all(documents);
        sink.write_artifact(&self.config.config_file, &schema.to_config_string())?;
        Ok(schema)
    }

    /// Write a `visual.conf` with one colour per type of `schema`.
    pub fn write_visual_config(&self, schema: &AnnotationSchema, sink: &mut dyn AnnotationSink) -> Result<()> {
        sink.write_artifact(&self.config.visual_config_file, &render_visual_config(schema))
    }

    /// Re-chunk `sentences`, write every chunk, and optionally the schema of
    /// the written chunks.
    pub fn save_chunks(
        &self,
        sentences: &[Sentence],
        chunks: &ChunkConfig,
        sink: &mut dyn AnnotationSink,
        write_config: bool,
    ) -> Result<Vec<Document>> {
        let documents = assemble_chunks(sentences, chunks)?;
        for document in &documents {
            self.write_document(document, sink)?;
        }
        if write_config {
            self.write_schema(&documents, sink)?;
        }
        Ok(documents)
    }

    /// Sink writing into `dir` with the configured extensions.
    pub fn directory_sink(&self, dir: &Path) -> DirectorySink {
        DirectorySink::with_extensions(
            dir,
            self.config.text_extension.clone(),
            self.config.annotation_extension.clone(),
        )
    }

    /// Id a text file would get as a document.
    pub fn document_id(&self, text_path: &Path) -> String {
        document_id(text_path, &self.config.text_extension)
    }
}

impl Default for BratIo {
    fn default() -> Self {
        Self::new()
    }
}
