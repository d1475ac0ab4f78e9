//! Driving ports for pet status changes and their history.

use async_trait::async_trait;

use crate::domain::{Error, PetId, StatusChangeLogEntry, StatusChangeRequest};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetStatusCommand: Send + Sync {
    /// Log the change and move the pet to the new status.
    ///
    /// Returns the committed log entry. On failure no log entry for this
    /// attempt survives unless compensation itself failed, which is reported
    /// in the error details.
    async fn record_status_change(
        &self,
        request: StatusChangeRequest,
    ) -> Result<StatusChangeLogEntry, Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetStatusQuery: Send + Sync {
    /// Log entries newest first, optionally for one pet.
    async fn list_status_changes(
        &self,
        pet_id: Option<PetId>,
    ) -> Result<Vec<StatusChangeLogEntry>, Error>;
}
