//! Append-only history of pet status changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{FieldValidationError, optional_text};
use super::{LogId, PetId, PetStatus};

const CHANGED_BY_MAX: usize = 100;
const NOTES_MAX: usize = 2000;

/// A committed status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeLogEntry {
    pub id: LogId,
    pub pet_id: PetId,
    pub new_status: PetStatus,
    pub changed_by: Option<String>,
    pub notes: Option<String>,
    pub changed_at: DateTime<Utc>,
}

/// Validated request to move a pet to a new status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChangeRequest {
    pet_id: PetId,
    new_status: PetStatus,
    changed_by: Option<String>,
    notes: Option<String>,
}

impl StatusChangeRequest {
    /// Validate raw inputs. `pet_id` and `new_status` are required.
    pub fn try_from_parts(
        pet_id: Option<PetId>,
        new_status: Option<&str>,
        changed_by: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Self, FieldValidationError> {
        let pet_id = pet_id.ok_or(FieldValidationError::Missing { field: "petId" })?;
        let new_status = new_status
            .ok_or(FieldValidationError::Missing { field: "newStatus" })
            .and_then(|raw| {
                PetStatus::new(raw).map_err(|err| match err {
                    FieldValidationError::Empty { .. } => {
                        FieldValidationError::Empty { field: "newStatus" }
                    }
                    FieldValidationError::TooLong { max, .. } => FieldValidationError::TooLong {
                        field: "newStatus",
                        max,
                    },
                    other => other,
                })
            })?;

        Ok(Self {
            pet_id,
            new_status,
            changed_by: optional_text("changedBy", changed_by, CHANGED_BY_MAX)?,
            notes: optional_text("notes", notes, NOTES_MAX)?,
        })
    }

    pub fn pet_id(&self) -> PetId {
        self.pet_id
    }

    /// Stamp the request, producing the row to insert.
    pub fn stamped(self, changed_at: DateTime<Utc>) -> NewStatusChange {
        NewStatusChange {
            pet_id: self.pet_id,
            new_status: self.new_status,
            changed_by: self.changed_by,
            notes: self.notes,
            changed_at,
        }
    }
}

/// A log row about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStatusChange {
    pub pet_id: PetId,
    pub new_status: PetStatus,
    pub changed_by: Option<String>,
    pub notes: Option<String>,
    pub changed_at: DateTime<Utc>,
}
