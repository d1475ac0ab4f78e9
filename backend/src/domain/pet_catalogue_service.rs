//! Pet catalogue service: search, lookup, creation and descriptive edits.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use super::ports::{PetCatalogueCommand, PetCatalogueQuery, PetRepository};
use super::store_failure::{StoreStep, store_failure};
use super::{Error, NewPet, Pet, PetChanges, PetId, PetSearchFilter};

/// Catalogue service implementing the pet query and command driving ports.
#[derive(Clone)]
pub struct PetCatalogueService<P> {
    pets: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<P> PetCatalogueService<P> {
    pub fn new(pets: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self { pets, clock }
    }
}

#[async_trait]
impl<P> PetCatalogueQuery for PetCatalogueService<P>
where
    P: PetRepository,
{
    async fn list_pets(&self, filter: &PetSearchFilter) -> Result<Vec<Pet>, Error> {
        let predicate = filter.build();
        debug!(statement = %predicate.statement(), "searching pets");
        self.pets
            .list(&predicate)
            .await
            .map_err(|err| store_failure(StoreStep::ListPets, &err))
    }

    async fn get_pet(&self, id: PetId) -> Result<Pet, Error> {
        self.pets
            .find_by_id(id)
            .await
            .map_err(|err| store_failure(StoreStep::FindPet, &err))?
            .ok_or_else(|| Error::not_found(format!("pet {id} not found")))
    }
}

#[async_trait]
impl<P> PetCatalogueCommand for PetCatalogueService<P>
where
    P: PetRepository,
{
    async fn create_pet(&self, pet: NewPet) -> Result<Pet, Error> {
        let created = self
            .pets
            .insert(&pet, self.clock.utc())
            .await
            .map_err(|err| store_failure(StoreStep::InsertPet, &err))?;
        debug!(pet_id = %created.id, "pet created");
        Ok(created)
    }

    async fn update_pet(&self, id: PetId, changes: PetChanges) -> Result<(), Error> {
        let affected = self
            .pets
            .update(id, &changes)
            .await
            .map_err(|err| store_failure(StoreStep::UpdatePet, &err))?;
        if affected == 0 {
            return Err(Error::not_found(format!("pet {id} not found")));
        }
        Ok(())
    }
}
