//! Structured diagnostics for the rendering pass.
//!
//! Malformed nodes degrade output to placeholders instead of aborting the
//! render; each degradation is recorded as a [`Diagnostic`] so callers can
//! inspect or assert on them.

use serde::Serialize;

/// Severity level for a rendering diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A placeholder was emitted; the declaration is unusable as written.
    Error,
    /// The declaration rendered, but something about it looks wrong.
    Warning,
    /// Informational message about the render.
    Info,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A message produced while rendering declarations.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The diagnostic message.
    pub message: String,
    /// Enclosing declaration (e.g., "struct Point, field x").
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            location: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            location: None,
        }
    }

    /// Create a new info diagnostic.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {})", location)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("unhandled typedef target");
        assert!(diag.severity.is_error());
        assert!(diag.location.is_none());
    }

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::warning("anonymous struct").at("typedef Point");
        assert!(diag.severity.is_warning());
        assert_eq!(diag.location.as_deref(), Some("typedef Point"));
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::error("unhandled field type `x`").at("struct S, field f");
        assert_eq!(
            diag.to_string(),
            "error: unhandled field type `x` (at struct S, field f)"
        );
    }
}
