//! Loaded scene files.

use std::path::Path;
use std::sync::Arc;

use crate::error::{SourceMapError, SourceMapResult};

/// A scene file held in memory.
///
/// # Examples
///
/// ```
/// use povc_util::span::SourceFile;
///
/// let file = SourceFile::new("scene.pov", "sphere {\n  <0,0,0>, 1\n}");
/// assert_eq!(file.name(), "scene.pov");
/// assert_eq!(file.line_count(), 3);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    name: String,
    content: Arc<str>,
}

impl SourceFile {
    /// Wrap already-loaded text.
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read a file from disk.
    ///
    /// The file must be valid UTF-8.
    pub fn load(path: &Path) -> SourceMapResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SourceMapError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(path.display().to_string(), content))
    }

    /// Display name, usually the path it was loaded from.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full text of the file.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines, counting a trailing empty line after a final `\n`.
    pub fn line_count(&self) -> usize {
        self.content.matches('\n').count() + 1
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
