//! Port abstraction for the pet status change log.

use async_trait::async_trait;

use crate::domain::{LogId, NewStatusChange, PetId, StatusChangeLogEntry};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by status log adapters.
    pub enum StatusLogRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "status log connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "status log query failed: {message}",
    }
}

/// Port for the append-only status log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusLogRepository: Send + Sync {
    /// Append an entry and return it with its store-assigned id.
    async fn insert(
        &self,
        change: &NewStatusChange,
    ) -> Result<StatusChangeLogEntry, StatusLogRepositoryError>;

    /// Remove one entry. Only used to compensate a failed status write.
    async fn delete(&self, id: LogId) -> Result<usize, StatusLogRepositoryError>;

    /// Remove every entry for a pet. Returns the number removed.
    async fn delete_for_pet(&self, pet_id: PetId) -> Result<usize, StatusLogRepositoryError>;

    /// Entries newest first, optionally restricted to one pet.
    async fn list(
        &self,
        pet_id: Option<PetId>,
    ) -> Result<Vec<StatusChangeLogEntry>, StatusLogRepositoryError>;
}
