//! Raw text/annotation pairs read from disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{BratError, Result};

/// The unparsed form of one document: its text and annotation lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    /// Document id (text file name without extension).
    pub id: String,
    pub text: String,
    /// Annotation lines in file order.
    pub lines: Vec<String>,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            lines,
        }
    }

    /// Read a text file and its annotation file.
    ///
    /// The id is the text file's name with `text_extension` removed.
    pub fn load(text_path: &Path, annotation_path: &Path, text_extension: &str) -> Result<Self> {
        let text = fs::read_to_string(text_path).map_err(|e| BratError::io(text_path, e))?;
        let annotations =
            fs::read_to_string(annotation_path).map_err(|e| BratError::io(annotation_path, e))?;

        let id = document_id(text_path, text_extension);
        let lines = annotations.lines().map(str::to_string).collect();
        debug!("Loaded '{}' from {}", id, text_path.display());

        Ok(Self::new(id, text, lines))
    }
}

/// File name of `path` without `extension` (`a.raw.txt` with `.raw.txt`
/// gives `a`).
pub fn document_id(path: &Path, extension: &str) -> String {
    path.file_name()
        .map(|name| swap_extension(&name.to_string_lossy(), extension, ""))
        .unwrap_or_default()
}

/// Swap the `from` extension of `file_name` for `to` (`a.txt` -> `a.ann`).
///
/// Names not ending in `from` get `to` appended.
pub fn swap_extension(file_name: &str, from: &str, to: &str) -> String {
    let base = file_name.strip_suffix(from).unwrap_or(file_name);
    format!("{}{}", base, to)
}

/// Files in `dir` whose name ends with `extension`, sorted by name.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| BratError::io(dir, e))? {
        let path = entry.map_err(|e| BratError::io(dir, e))?.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(extension));
        if path.is_file() && matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// `dir` followed by its immediate subdirectories, sorted by name.
pub fn list_directories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| BratError::io(dir, e))? {
        let path = entry.map_err(|e| BratError::io(dir, e))?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    dirs.insert(0, dir.to_path_buf());
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_pair() {
        let dir = TempDir::new().unwrap();
        let text_path = dir.path().join("news.txt");
        let ann_path = dir.path().join("news.ann");
        fs::write(&text_path, "Acme bought Widgets.\n").unwrap();
        fs::write(&ann_path, "T1\tCompany 0 4\tAcme\n\nT2\tCompany 12 19\tWidgets\n").unwrap();

        let raw = RawDocument::load(&text_path, &ann_path, ".txt").unwrap();
        assert_eq!(raw.id, "news");
        assert_eq!(raw.text, "Acme bought Widgets.\n");
        assert_eq!(raw.lines.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = RawDocument::load(&dir.path().join("a.txt"), &dir.path().join("a.ann"), ".txt");
        assert!(matches!(result, Err(BratError::Io { .. })));
    }

    #[test]
    fn test_document_id_strips_configured_extension() {
        assert_eq!(document_id(Path::new("dir/news.raw.txt"), ".raw.txt"), "news");
        assert_eq!(document_id(Path::new("dir/news.raw.txt"), ".txt"), "news.raw");
        assert_eq!(document_id(Path::new("v1.2.text"), ".text"), "v1.2");
    }

    #[test]
    fn test_swap_extension() {
        assert_eq!(swap_extension("doc.txt", ".txt", ".ann"), "doc.ann");
        assert_eq!(swap_extension("doc.ann", ".ann", ".txt"), "doc.txt");
        assert_eq!(swap_extension("doc", ".txt", ".ann"), "doc.ann");
    }

    #[test]
    fn test_listing_is_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["b.ann", "a.ann", "a.txt", "c.ann.bak"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("sub")).unwrap();

        let files = list_files(dir.path(), ".ann").unwrap();
        let names: Vec<String> = files.iter().map(|p| document_id(p, ".ann")).collect();
        assert_eq!(names, vec!["a", "b"]);

        let dirs = list_directories(dir.path()).unwrap();
        assert_eq!(dirs, vec![dir.path().to_path_buf(), dir.path().join("sub")]);
    }
}
