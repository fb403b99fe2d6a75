//! Loading documents and exporting them as markdown or HTML.
//!
//! Exports are byte-for-byte: HTML is exactly the renderer output and
//! markdown is exactly the source.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::render::{RenderOptions, render_with};

/// Errors from reading or writing documents.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Output format of an export.
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Html,
    #[value(name = "md")]
    Markdown,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Markdown => "text/markdown",
        }
    }

    /// File name used when the caller does not choose one.
    pub fn default_file_name(self) -> String {
        format!("file.{}", self.extension())
    }

    /// Guess the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "html" | "htm" => Some(Self::Html),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// Produce the export payload for `markdown`.
pub fn export(markdown: &str, format: ExportFormat, options: &RenderOptions) -> String {
    match format {
        ExportFormat::Html => render_with(markdown, options),
        ExportFormat::Markdown => markdown.to_string(),
    }
}

/// Read a markdown document.
///
/// # Errors
/// Returns [`ExportError::Read`] if the file cannot be read as UTF-8 text.
pub fn load(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Export `markdown` to `path`.
///
/// # Errors
/// Returns [`ExportError::Write`] if the file cannot be written.
pub fn save(
    path: &Path,
    markdown: &str,
    format: ExportFormat,
    options: &RenderOptions,
) -> Result<()> {
    let payload = export(markdown, format, options);
    fs::write(path, payload).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?format, "exported document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_extensions_and_mime_types() {
        assert_eq!(ExportFormat::Html.extension(), "html");
        assert_eq!(ExportFormat::Markdown.extension(), "md");
        assert_eq!(ExportFormat::Html.mime_type(), "text/html");
        assert_eq!(ExportFormat::Markdown.mime_type(), "text/markdown");
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(ExportFormat::Html.default_file_name(), "file.html");
        assert_eq!(ExportFormat::Markdown.default_file_name(), "file.md");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("a.HTML")), Some(ExportFormat::Html));
        assert_eq!(ExportFormat::from_path(Path::new("a.md")), Some(ExportFormat::Markdown));
        assert_eq!(ExportFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(ExportFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_markdown_export_is_passthrough() {
        let md = "# Title\n**x**\n";
        assert_eq!(export(md, ExportFormat::Markdown, &RenderOptions::default()), md);
    }

    #[test]
    fn test_html_export_is_renderer_output() {
        let md = "# Title\nbody";
        assert_eq!(
            export(md, ExportFormat::Html, &RenderOptions::default()),
            crate::render::render(md)
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let md_path = dir.path().join("doc.md");
        let html_path = dir.path().join("doc.html");
        let options = RenderOptions::default();

        save(&md_path, "# Hi", ExportFormat::Markdown, &options).unwrap();
        save(&html_path, "# Hi", ExportFormat::Html, &options).unwrap();

        assert_eq!(load(&md_path).unwrap(), "# Hi");
        assert_eq!(load(&html_path).unwrap(), "<h1>Hi</h1>");
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.md");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, ExportError::Read { .. }));
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("out.html");
        let err = save(&path, "x", ExportFormat::Html, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
    }
}
