//! Error types for registrar-core.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A required field named in a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Id,
    CourseCode,
    CourseName,
    MaxStudents,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Email => write!(f, "email"),
            Field::Id => write!(f, "id"),
            Field::CourseCode => write!(f, "course code"),
            Field::CourseName => write!(f, "course name"),
            Field::MaxStudents => write!(f, "maximum students"),
        }
    }
}

/// A malformed or missing required field.
///
/// The only hard failure in the registrar model: raised by constructors and
/// validating setters. Business-rule conflicts (duplicates, full courses,
/// unknown keys) are reported as `bool` / `Option` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field was empty or whitespace-only.
    #[error("{field} cannot be empty")]
    Empty { field: Field },

    /// Email does not look like `local@domain.tld`.
    #[error("invalid email format: '{value}'")]
    InvalidEmail { value: String },

    /// Course code is not 2-4 letters followed by 3-4 digits.
    #[error(
        "invalid course code format '{value}': expected 2-4 letters followed by 3-4 digits (e.g. CS101, MATH200)"
    )]
    InvalidCourseCode { value: String },

    /// Capacity of zero or below.
    #[error("maximum students must be greater than 0 (got {value})")]
    NonPositiveCapacity { value: i64 },
}

impl ValidationError {
    /// The field whose rule was violated.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Empty { field } => *field,
            ValidationError::InvalidEmail { .. } => Field::Email,
            ValidationError::InvalidCourseCode { .. } => Field::CourseCode,
            ValidationError::NonPositiveCapacity { .. } => Field::MaxStudents,
        }
    }
}

/// Errors from loading or building a roster file.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Underlying I/O failure (permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse roster at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The roster file did not exist at the given path.
    #[error("roster not found at {path}")]
    RosterNotFound { path: PathBuf },

    /// A roster entry failed entity validation.
    #[error("invalid {entity}: {source}")]
    Invalid {
        entity: String,
        #[source]
        source: ValidationError,
    },
}
