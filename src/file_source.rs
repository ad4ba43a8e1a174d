use std::collections::HashMap;

use crate::error::{Result, SourceError};

pub trait FileSource: Send + Sync {
    /// Whether a file is present under this source
    fn exists(&self, path: &str) -> bool;

    /// Read the entire file as text
    fn read_all(&self, path: &str) -> Result<String>;
}

/// In-memory backend: a fixed set of named files. Used as the test
/// double throughout and as the embedding-facing source.
#[derive(Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn insert(&mut self, path: &str, contents: &str) {
        self.files.insert(path.to_string(), contents.to_string());
    }
}

impl FileSource for MemorySource {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn read_all(&self, path: &str) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or(SourceError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_lookup() {
        let mut source = MemorySource::new();
        source.insert("notes.txt", "alpha\nbeta");

        assert!(source.exists("notes.txt"));
        assert!(!source.exists("other.txt"));
        assert_eq!(source.read_all("notes.txt").unwrap(), "alpha\nbeta");
    }

    #[test]
    fn test_memory_source_missing_file() {
        let source = MemorySource::new();
        let err = source.read_all("ghost.txt").unwrap_err();
        assert_eq!(err.to_string(), "No such file or directory");
    }
}
