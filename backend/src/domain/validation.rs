//! Field-level validation shared by the entity drafts.
//!
//! Every draft (pet, booking, account, status change) reports the first
//! offending field through [`FieldValidationError`], which converts into an
//! `invalid_request` [`Error`] carrying `{ "field", "code" }` details.

use serde_json::json;

use super::Error;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldValidationError {
    /// A required field was absent.
    #[error("missing required field: {field}")]
    Missing { field: &'static str },
    /// A required field was blank once trimmed.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    /// A field exceeded its length limit.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    /// A field failed a domain rule.
    #[error("{field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl FieldValidationError {
    /// Name of the rejected field as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::Invalid { field, .. } => field,
        }
    }

    /// Stable machine-readable validation code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing_field",
            Self::Empty { .. } => "empty_field",
            Self::TooLong { .. } => "too_long",
            Self::Invalid { .. } => "invalid_value",
        }
    }
}

impl From<FieldValidationError> for Error {
    fn from(value: FieldValidationError) -> Self {
        Error::invalid_request(value.to_string()).with_details(json!({
            "field": value.field(),
            "code": value.code(),
        }))
    }
}

/// Trim `value` and enforce presence and a maximum length.
pub(crate) fn required_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<String, FieldValidationError> {
    let value = value.ok_or(FieldValidationError::Missing { field })?;
    non_blank_text(field, value, max)
}

/// Trim `value`, rejecting blanks and overlong input.
pub(crate) fn non_blank_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, FieldValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldValidationError::Empty { field });
    }
    if trimmed.chars().count() > max {
        return Err(FieldValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_owned())
}

/// Trim an optional value; blank input collapses to `None`.
pub(crate) fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, FieldValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(trimmed) => non_blank_text(field, trimmed, max).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(None, Err(FieldValidationError::Missing { field: "name" }))]
    #[case(Some("   "), Err(FieldValidationError::Empty { field: "name" }))]
    #[case(Some(" Rex "), Ok("Rex".to_owned()))]
    #[case(Some("abcdefghijk"), Err(FieldValidationError::TooLong { field: "name", max: 10 }))]
    fn required_text_rules(
        #[case] input: Option<&str>,
        #[case] expected: Result<String, FieldValidationError>,
    ) {
        assert_eq!(required_text("name", input, 10), expected);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("  "), None)]
    #[case(Some(" tabby "), Some("tabby"))]
    fn optional_text_collapses_blanks(#[case] input: Option<&str>, #[case] expected: Option<&str>) {
        let value = optional_text("breed", input, 20).expect("valid optional text");
        assert_eq!(value.as_deref(), expected);
    }

    #[rstest]
    fn converts_into_invalid_request_with_details() {
        let err: Error = FieldValidationError::Missing { field: "location" }.into();
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "missing required field: location");
        assert_eq!(
            err.details(),
            Some(&serde_json::json!({ "field": "location", "code": "missing_field" }))
        );
    }
}
