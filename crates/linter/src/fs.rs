//! Filesystem collaborator used by `enforce-styling`

use std::io;
use std::path::Path;

/// Probe for files next to the file being linted
pub trait FileSystem: Send + Sync {
    /// Whether `name` exists in the same directory as `file`.
    ///
    /// A missing file is `Ok(false)`; other I/O failures are errors.
    fn sibling_exists(&self, file: &Path, name: &str) -> io::Result<bool>;
}

/// [`FileSystem`] backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn sibling_exists(&self, file: &Path, name: &str) -> io::Result<bool> {
        let directory = file.parent().unwrap_or_else(|| Path::new(""));
        directory.join(name).try_exists()
    }
}
