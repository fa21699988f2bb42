//! File system utility functions
//!
//! Provides in-place file updates with proper error handling.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Open an existing file for combined read and update access
    #[instrument(skip(self))]
    pub fn open_for_update<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<File> {
        let path = path.as_ref();
        debug!("Opening file for update: {}", path.display());
        OpenOptions::new().read(true).write(true).open(path)
    }

    /// Read the remaining contents of an open file as a string
    pub fn read_open_file(&self, file: &mut File) -> io::Result<String> {
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        debug!("Read {} bytes", content.len());
        Ok(content)
    }

    /// Replace the whole content of an open file.
    ///
    /// Rewinds, writes, then truncates to the new length so a shorter
    /// document leaves no stale tail behind.
    #[instrument(skip(self, file, contents))]
    pub fn rewrite_open_file<C: AsRef<[u8]>>(&self, file: &mut File, contents: C) -> io::Result<()> {
        let contents = contents.as_ref();

        file.seek(SeekFrom::Start(0))?;
        file.write_all(contents)?;
        file.set_len(contents.len() as u64)?;
        file.flush()?;

        debug!("Rewrote file with {} bytes", contents.len());
        Ok(())
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
