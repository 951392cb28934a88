//! Field format rules.
//!
//! Every rule trims its input first and returns the normalized value on
//! success, so constructors can store exactly what was validated.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Field, ValidationError};

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
const COURSE_CODE_PATTERN: &str = r"^[A-Z]{2,4}[0-9]{3,4}$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static COURSE_CODE_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn course_code_re() -> &'static Regex {
    COURSE_CODE_RE
        .get_or_init(|| Regex::new(COURSE_CODE_PATTERN).expect("course code pattern compiles"))
}

/// Strip leading and trailing ASCII control characters and spaces
/// (everything up to U+0020). Other Unicode whitespace is kept.
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

fn required(field: Field, value: &str) -> Result<String, ValidationError> {
    let trimmed = trim_field(value);
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

/// Person name: non-empty after trim.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    required(Field::Name, name)
}

/// Course title: non-empty after trim.
pub fn validate_course_name(name: &str) -> Result<String, ValidationError> {
    required(Field::CourseName, name)
}

/// Email: non-empty after trim and shaped like `local@domain.tld`.
///
/// Only surrounding whitespace is removed; case and content are preserved.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = required(Field::Email, email)?;
    if !email_re().is_match(&email) {
        return Err(ValidationError::InvalidEmail { value: email });
    }
    Ok(email)
}

/// Student or instructor id: non-empty after trim.
pub fn validate_id(id: &str) -> Result<String, ValidationError> {
    required(Field::Id, id)
}

/// Course code: trimmed, uppercased, then 2-4 letters followed by 3-4 digits.
pub fn validate_course_code(code: &str) -> Result<String, ValidationError> {
    let code = required(Field::CourseCode, code)?.to_uppercase();
    if !course_code_re().is_match(&code) {
        return Err(ValidationError::InvalidCourseCode { value: code });
    }
    Ok(code)
}

/// Course capacity: strictly positive.
pub fn validate_capacity(max_students: i64) -> Result<usize, ValidationError> {
    if max_students <= 0 {
        return Err(ValidationError::NonPositiveCapacity { value: max_students });
    }
    usize::try_from(max_students)
        .map_err(|_| ValidationError::NonPositiveCapacity { value: max_students })
}
