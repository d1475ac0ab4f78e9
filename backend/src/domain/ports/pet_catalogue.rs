//! Driving ports for pet listings.
//!
//! Reads and descriptive edits go through the catalogue; status changes and
//! deletion have their own coordinators because they touch dependent rows.

use async_trait::async_trait;

use crate::domain::{Error, NewPet, Pet, PetChanges, PetId, PetSearchFilter};

/// Read side of the pet catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetCatalogueQuery: Send + Sync {
    /// Pets matching the optional criteria.
    async fn list_pets(&self, filter: &PetSearchFilter) -> Result<Vec<Pet>, Error>;

    /// A single pet, or `not_found`.
    async fn get_pet(&self, id: PetId) -> Result<Pet, Error>;
}

/// Write side of the pet catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetCatalogueCommand: Send + Sync {
    async fn create_pet(&self, pet: NewPet) -> Result<Pet, Error>;

    /// Apply a partial update; `not_found` when no row matched.
    async fn update_pet(&self, id: PetId, changes: PetChanges) -> Result<(), Error>;
}

/// Removal of a pet together with its dependent records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRemoval: Send + Sync {
    async fn delete_pet(&self, id: PetId) -> Result<(), Error>;
}
