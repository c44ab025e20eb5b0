//! Consumers of serialized documents.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::error::{BratError, Result};

/// Receives serialized documents and companion artifacts.
pub trait AnnotationSink {
    /// Store one document's text and annotation string.
    fn write_document(&mut self, id: &str, text: &str, annotations: &str) -> Result<()>;

    /// Store a named artifact such as `annotation.conf`.
    fn write_artifact(&mut self, name: &str, contents: &str) -> Result<()>;
}

/// Writes `{id}.txt` / `{id}.ann` pairs into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    text_extension: String,
    annotation_extension: String,
}

impl DirectorySink {
    /// Sink using the `.txt` / `.ann` extensions.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_extensions(dir, ".txt", ".ann")
    }

    pub fn with_extensions(
        dir: impl Into<PathBuf>,
        text_extension: impl Into<String>,
        annotation_extension: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            text_extension: text_extension.into(),
            annotation_extension: annotation_extension.into(),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| BratError::io(&self.dir, e))
    }

    fn write_file(&self, name: &str, contents: &str) -> Result<()> {
        let path = self.dir.join(name);
        fs::write(&path, contents).map_err(|e| BratError::io(&path, e))
    }
}

impl AnnotationSink for DirectorySink {
    fn write_document(&mut self, id: &str, text: &str, annotations: &str) -> Result<()> {
        self.ensure_dir()?;
        self.write_file(&format!("{}{}", id, self.text_extension), &format!("{}\n", text))?;
        self.write_file(
            &format!("{}{}", id, self.annotation_extension),
            &format!("{}\n", annotations),
        )?;
        debug!("Wrote '{}' to {}", id, self.dir.display());
        Ok(())
    }

    fn write_artifact(&mut self, name: &str, contents: &str) -> Result<()> {
        self.ensure_dir()?;
        self.write_file(name, contents)
    }
}

/// Keeps everything in memory; useful for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Document id to `(text, annotations)`.
    pub documents: BTreeMap<String, (String, String)>,
    pub artifacts: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnnotationSink for MemorySink {
    fn write_document(&mut self, id: &str, text: &str, annotations: &str) -> Result<()> {
        self.documents
            .insert(id.to_string(), (text.to_string(), annotations.to_string()));
        Ok(())
    }

    fn write_artifact(&mut self, name: &str, contents: &str) -> Result<()> {
        self.artifacts.insert(name.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_sink_creates_directory() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested").join("out");
        let mut sink = DirectorySink::new(&out);

        sink.write_document("1-2", "Hello.", "T1\tGreeting 0 5\tHello").unwrap();
        sink.write_artifact("annotation.conf", "[entities]\n").unwrap();

        assert_eq!(fs::read_to_string(out.join("1-2.txt")).unwrap(), "Hello.\n");
        assert_eq!(
            fs::read_to_string(out.join("1-2.ann")).unwrap(),
            "T1\tGreeting 0 5\tHello\n"
        );
        assert!(out.join("annotation.conf").exists());
    }

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::new();
        sink.write_document("a", "text", "").unwrap();
        assert_eq!(sink.documents["a"], ("text".to_string(), String::new()));
        assert!(sink.artifacts.is_empty());
    }
}
