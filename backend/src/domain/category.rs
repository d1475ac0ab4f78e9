//! Pet categories.
//!
//! Pets refer to a category by name only; there is no foreign key between the
//! two tables, so renaming or removing a category never touches pets.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CategoryId;
use super::validation::{FieldValidationError, non_blank_text};

/// Longest accepted category name.
pub const CATEGORY_NAME_MAX: usize = 64;

/// Validated category name.
///
/// ## Invariants
/// - Trimmed, non-empty, at most [`CATEGORY_NAME_MAX`] characters.
/// - Comparison is exact; uniqueness is enforced by the store.
///
/// # Examples
/// ```
/// use petfinder::domain::CategoryName;
///
/// let name = CategoryName::new("  Cats ").expect("valid name");
/// assert_eq!(name.as_ref(), "Cats");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "Dogs")]
pub struct CategoryName(String);

impl CategoryName {
    /// Validate and normalise a raw category name.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, FieldValidationError> {
        non_blank_text("categoryName", raw.as_ref(), CATEGORY_NAME_MAX).map(Self)
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CategoryName {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

/// A stored category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub category_name: CategoryName,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "empty_field")]
    #[case("    ", "empty_field")]
    fn rejects_blank_names(#[case] raw: &str, #[case] code: &str) {
        let err = CategoryName::new(raw).expect_err("blank names are rejected");
        assert_eq!(err.code(), code);
        assert_eq!(err.field(), "categoryName");
    }

    #[rstest]
    fn rejects_overlong_names() {
        let raw = "x".repeat(CATEGORY_NAME_MAX + 1);
        let err = CategoryName::new(raw).expect_err("overlong names are rejected");
        assert_eq!(err.code(), "too_long");
    }

    #[rstest]
    fn deserialises_through_validation() {
        let parsed: Result<CategoryName, _> = serde_json::from_str("\"  \"");
        assert!(parsed.is_err());
        let parsed: CategoryName = serde_json::from_str("\" Birds \"").expect("valid name");
        assert_eq!(parsed.as_ref(), "Birds");
    }
}
