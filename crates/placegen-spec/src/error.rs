//! Error types for sprite manifest validation.

use thiserror::Error;

/// Error codes for sprite and manifest validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Manifest contains no sprites
    EmptyManifest,
    /// E002: Sprite width or height is zero
    ZeroDimension,
    /// E003: Two sprites target the same output path
    DuplicateOutputPath,
    /// E004: Unsafe output path (absolute, traversal, backslashes)
    UnsafeOutputPath,
    /// E005: Output path extension is not `.png`
    PathFormatMismatch,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::EmptyManifest => "E001",
            ErrorCode::ZeroDimension => "E002",
            ErrorCode::DuplicateOutputPath => "E003",
            ErrorCode::UnsafeOutputPath => "E004",
            ErrorCode::PathFormatMismatch => "E005",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Path to the problematic field (e.g., "sprites\[3\].path").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a field path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors surfaced to callers of the spec crate.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Validation failed with one or more errors.
    #[error("sprite validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result of sprite or manifest validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self::default()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if any error carries `code`.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Converts to a Result, returning `SpecError::Validation` if there are errors.
    pub fn into_result(self) -> Result<(), SpecError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(SpecError::Validation(self.errors))
        }
    }
}
