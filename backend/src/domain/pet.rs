//! Pet listings and the field sets used to create and edit them.
//!
//! A pet's `status` is never written through [`PetChanges`]; it only moves
//! through the status transition coordinator so that the change log and the
//! pet row stay in step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{FieldValidationError, non_blank_text, optional_text, required_text};
use super::{AccountId, CategoryName, PetId};

const NAME_MAX: usize = 100;
const LOCATION_MAX: usize = 200;
const BREED_MAX: usize = 100;
const DESCRIPTION_MAX: usize = 2000;
const IMAGE_URL_MAX: usize = 500;
const STATUS_MAX: usize = 32;

/// Adoption status label.
///
/// The set of labels is open; `Available`, `Pending` and `Adopted` are the
/// well-known ones.
///
/// # Examples
/// ```
/// use petfinder::domain::PetStatus;
///
/// let status = PetStatus::new(" Pending ").expect("valid status");
/// assert_eq!(status, PetStatus::pending());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "Available")]
pub struct PetStatus(String);

impl PetStatus {
    /// Validate a raw status label.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, FieldValidationError> {
        non_blank_text("status", raw.as_ref(), STATUS_MAX).map(Self)
    }

    /// The `Available` label.
    #[must_use]
    pub fn available() -> Self {
        Self("Available".to_owned())
    }

    /// The `Pending` label.
    #[must_use]
    pub fn pending() -> Self {
        Self("Pending".to_owned())
    }

    /// The `Adopted` label.
    #[must_use]
    pub fn adopted() -> Self {
        Self("Adopted".to_owned())
    }
}

impl AsRef<str> for PetStatus {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for PetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PetStatus {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PetStatus> for String {
    fn from(value: PetStatus) -> Self {
        value.0
    }
}

/// A stored pet listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub category_name: CategoryName,
    pub breed: Option<String>,
    pub age_months: Option<i32>,
    pub location: String,
    pub status: PetStatus,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub vendor_id: Option<AccountId>,
    pub created_at: DateTime<Utc>,
}

/// Raw pet attributes as supplied by a client.
///
/// Used for both creation and partial updates; each conversion applies its
/// own presence rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetFields {
    pub name: Option<String>,
    pub category_name: Option<String>,
    pub breed: Option<String>,
    pub age_months: Option<i32>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub vendor_id: Option<AccountId>,
}

fn validate_age(age_months: Option<i32>) -> Result<Option<i32>, FieldValidationError> {
    match age_months {
        Some(age) if age < 0 => Err(FieldValidationError::Invalid {
            field: "ageMonths",
            reason: "must not be negative",
        }),
        other => Ok(other),
    }
}

/// Validated attributes for a pet about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    name: String,
    category_name: CategoryName,
    breed: Option<String>,
    age_months: Option<i32>,
    location: String,
    status: PetStatus,
    description: Option<String>,
    image_url: Option<String>,
    vendor_id: Option<AccountId>,
}

impl TryFrom<PetFields> for NewPet {
    type Error = FieldValidationError;

    /// `name`, `categoryName` and `location` are required; `status` defaults
    /// to `Available`.
    fn try_from(fields: PetFields) -> Result<Self, Self::Error> {
        let name = required_text("name", fields.name.as_deref(), NAME_MAX)?;
        let category_name = fields
            .category_name
            .as_deref()
            .ok_or(FieldValidationError::Missing {
                field: "categoryName",
            })
            .and_then(CategoryName::new)?;
        let location = required_text("location", fields.location.as_deref(), LOCATION_MAX)?;
        let status = match fields.status.as_deref() {
            Some(raw) => PetStatus::new(raw)?,
            None => PetStatus::available(),
        };

        Ok(Self {
            name,
            category_name,
            breed: optional_text("breed", fields.breed.as_deref(), BREED_MAX)?,
            age_months: validate_age(fields.age_months)?,
            location,
            status,
            description: optional_text(
                "description",
                fields.description.as_deref(),
                DESCRIPTION_MAX,
            )?,
            image_url: optional_text("imageUrl", fields.image_url.as_deref(), IMAGE_URL_MAX)?,
            vendor_id: fields.vendor_id,
        })
    }
}

impl NewPet {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category_name(&self) -> &CategoryName {
        &self.category_name
    }

    pub fn breed(&self) -> Option<&str> {
        self.breed.as_deref()
    }

    pub fn age_months(&self) -> Option<i32> {
        self.age_months
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Initial status written with the row; no log entry accompanies it.
    pub fn status(&self) -> &PetStatus {
        &self.status
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn vendor_id(&self) -> Option<AccountId> {
        self.vendor_id
    }
}

/// Validated partial update of a pet's descriptive attributes.
///
/// ## Invariants
/// - Holds at least one field.
/// - Never carries a status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetChanges {
    name: Option<String>,
    category_name: Option<CategoryName>,
    breed: Option<String>,
    age_months: Option<i32>,
    location: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
    vendor_id: Option<AccountId>,
}

impl TryFrom<PetFields> for PetChanges {
    type Error = FieldValidationError;

    fn try_from(fields: PetFields) -> Result<Self, Self::Error> {
        if fields.status.is_some() {
            return Err(FieldValidationError::Invalid {
                field: "status",
                reason: "must be changed through the status change log",
            });
        }

        let changes = Self {
            name: fields
                .name
                .as_deref()
                .map(|raw| non_blank_text("name", raw, NAME_MAX))
                .transpose()?,
            category_name: fields
                .category_name
                .as_deref()
                .map(CategoryName::new)
                .transpose()?,
            breed: optional_text("breed", fields.breed.as_deref(), BREED_MAX)?,
            age_months: validate_age(fields.age_months)?,
            location: fields
                .location
                .as_deref()
                .map(|raw| non_blank_text("location", raw, LOCATION_MAX))
                .transpose()?,
            description: optional_text(
                "description",
                fields.description.as_deref(),
                DESCRIPTION_MAX,
            )?,
            image_url: optional_text("imageUrl", fields.image_url.as_deref(), IMAGE_URL_MAX)?,
            vendor_id: fields.vendor_id,
        };

        if changes == Self::default() {
            return Err(FieldValidationError::Invalid {
                field: "body",
                reason: "must contain at least one updatable field",
            });
        }
        Ok(changes)
    }
}

impl PetChanges {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn category_name(&self) -> Option<&CategoryName> {
        self.category_name.as_ref()
    }

    pub fn breed(&self) -> Option<&str> {
        self.breed.as_deref()
    }

    pub fn age_months(&self) -> Option<i32> {
        self.age_months
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn vendor_id(&self) -> Option<AccountId> {
        self.vendor_id
    }

    /// Apply the change set to an in-memory pet.
    pub fn apply_to(&self, pet: &mut Pet) {
        if let Some(name) = &self.name {
            pet.name.clone_from(name);
        }
        if let Some(category_name) = &self.category_name {
            pet.category_name = category_name.clone();
        }
        if let Some(breed) = &self.breed {
            pet.breed = Some(breed.clone());
        }
        if let Some(age_months) = self.age_months {
            pet.age_months = Some(age_months);
        }
        if let Some(location) = &self.location {
            pet.location.clone_from(location);
        }
        if let Some(description) = &self.description {
            pet.description = Some(description.clone());
        }
        if let Some(image_url) = &self.image_url {
            pet.image_url = Some(image_url.clone());
        }
        if let Some(vendor_id) = self.vendor_id {
            pet.vendor_id = Some(vendor_id);
        }
    }
}
