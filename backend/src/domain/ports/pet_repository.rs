//! Port abstraction for pet persistence adapters and their errors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{NewPet, Pet, PetChanges, PetId, PetPredicate, PetStatus};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by pet repository adapters.
    pub enum PetRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "pet repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "pet repository query failed: {message}",
    }
}

/// Port for reading and writing pet rows.
///
/// Mutations report affected-row counts; callers decide what zero means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Pets matching `predicate`, ordered by id.
    async fn list(&self, predicate: &PetPredicate) -> Result<Vec<Pet>, PetRepositoryError>;

    async fn find_by_id(&self, id: PetId) -> Result<Option<Pet>, PetRepositoryError>;

    /// Insert a pet and return it with its store-assigned id.
    async fn insert(
        &self,
        pet: &NewPet,
        created_at: DateTime<Utc>,
    ) -> Result<Pet, PetRepositoryError>;

    /// Apply descriptive changes. Returns the affected row count.
    async fn update(&self, id: PetId, changes: &PetChanges) -> Result<usize, PetRepositoryError>;

    /// Overwrite the status column. Returns the affected row count.
    async fn update_status(
        &self,
        id: PetId,
        status: &PetStatus,
    ) -> Result<usize, PetRepositoryError>;

    /// Delete the pet row only. Returns the affected row count.
    async fn delete(&self, id: PetId) -> Result<usize, PetRepositoryError>;
}
