use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::file_source::FileSource;

/// Disk backend. Files are memory-mapped and decoded lossily, so a
/// stray invalid byte degrades to U+FFFD instead of failing the read.
pub struct DiskSource;

impl FileSource for DiskSource {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn read_all(&self, path: &str) -> Result<String> {
        let file = File::open(path)?;
        // mmap rejects zero-length files
        if file.metadata()?.len() == 0 {
            return Ok(String::new());
        }
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(String::from_utf8_lossy(&mmap[..]).into_owned())
    }
}
