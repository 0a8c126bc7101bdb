//! Lint context for rule execution

use std::path::Path;

use crate::fs::{FileSystem, OsFileSystem};
use crate::type_info::TypeProvider;
use crate::Diagnostic;

static OS_FILE_SYSTEM: OsFileSystem = OsFileSystem;

/// Context passed to rules during linting
pub struct LintContext<'a> {
    /// Source code being linted
    source_text: &'a str,
    /// Path of the file being linted
    path: &'a Path,
    /// Sibling-file probe
    file_system: &'a dyn FileSystem,
    /// Static type information, when the host supplies it
    type_provider: Option<&'a dyn TypeProvider>,
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(source_text: &'a str, path: &'a Path) -> Self {
        Self {
            source_text,
            path,
            file_system: &OS_FILE_SYSTEM,
            type_provider: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_file_system(mut self, file_system: &'a dyn FileSystem) -> Self {
        self.file_system = file_system;
        self
    }

    pub fn with_type_provider(mut self, type_provider: &'a dyn TypeProvider) -> Self {
        self.type_provider = Some(type_provider);
        self
    }

    /// Get the source text
    pub fn source_text(&self) -> &'a str {
        self.source_text
    }

    /// Path of the file being linted
    pub fn path(&self) -> &'a Path {
        self.path
    }

    /// Path as a string, with `/` separators regardless of platform
    pub fn filename(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }

    /// Check if the file's name is exactly `name`
    pub fn file_name_is(&self, name: &str) -> bool {
        self.path.file_name().is_some_and(|file| file == name)
    }

    pub fn file_system(&self) -> &'a dyn FileSystem {
        self.file_system
    }

    /// Get type information if available
    pub fn type_provider(&self) -> Option<&'a dyn TypeProvider> {
        self.type_provider
    }

    /// Report a diagnostic
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Consume the context and return all diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Move out the diagnostics reported so far
    pub(crate) fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
