use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest and dump loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check the paths configured in pxdgen.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pxdgen.toml")]
    #[diagnostic(code(pxdgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse AST dump")]
    #[diagnostic(
        code(pxdgen::dump_error),
        help("regenerate the dump with the clang front end")
    )]
    Dump {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(pxdgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io { path: path.to_path_buf(), source })
    }

    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a dump error from a serde_json error with source context
    pub fn dump(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = span_at(src, source.line(), source.column());
        Box::new(Error::Dump {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span: None,
            message: message.into(),
        })
    }
}

/// Byte offset of the 1-based (line, column) position reported by
/// serde_json.
fn span_at(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (index, text) in src.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let column = column.saturating_sub(1).min(text.len());
            return Some(SourceSpan::from(offset + column));
        }
        offset += text.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_at_points_into_line() {
        let src = "line one\nline two\n";
        let span = span_at(src, 2, 6).unwrap();
        assert_eq!(span.offset(), 14);
    }

    #[test]
    fn test_span_at_out_of_range() {
        assert!(span_at("short\n", 9, 1).is_none());
        assert!(span_at("short\n", 0, 0).is_none());
    }
}
