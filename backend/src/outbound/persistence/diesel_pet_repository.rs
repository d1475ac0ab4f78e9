//! PostgreSQL-backed `PetRepository` using Diesel.
//!
//! Search predicates are folded into a boxed query, so criteria only ever
//! reach PostgreSQL as bound parameters.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PetRepository, PetRepositoryError};
use crate::domain::{NewPet, Pet, PetChanges, PetClause, PetId, PetPredicate, PetStatus};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewPetRow, PetChangeset, PetRow};
use super::pool::{DbPool, PoolError};
use super::schema::pets;

/// Diesel-backed implementation of the pet repository port.
#[derive(Clone)]
pub struct DieselPetRepository {
    pool: DbPool,
}

impl DieselPetRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PetRepositoryError {
    map_basic_pool_error(error, PetRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> PetRepositoryError {
    map_basic_diesel_error(
        error,
        PetRepositoryError::query,
        PetRepositoryError::connection,
    )
}

fn row_to_pet(row: PetRow) -> Result<Pet, PetRepositoryError> {
    let id = row.id;
    Pet::try_from(row)
        .map_err(|err| PetRepositoryError::query(format!("stored pet {id} is invalid: {err}")))
}

#[async_trait]
impl PetRepository for DieselPetRepository {
    async fn list(&self, predicate: &PetPredicate) -> Result<Vec<Pet>, PetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = pets::table
            .select(PetRow::as_select())
            .order(pets::id.asc())
            .into_boxed();
        for clause in predicate.clauses() {
            query = match clause {
                PetClause::CategoryEquals(name) => {
                    query.filter(pets::category_name.eq(name.as_str()))
                }
                PetClause::LocationContains(pattern) => {
                    query.filter(pets::location.ilike(pattern.as_str()))
                }
            };
        }

        let rows: Vec<PetRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_pet).collect()
    }

    async fn find_by_id(&self, id: PetId) -> Result<Option<Pet>, PetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<PetRow> = pets::table
            .find(id.get())
            .select(PetRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_pet).transpose()
    }

    async fn insert(
        &self,
        pet: &NewPet,
        created_at: DateTime<Utc>,
    ) -> Result<Pet, PetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewPetRow {
            name: pet.name(),
            category_name: pet.category_name().as_ref(),
            breed: pet.breed(),
            age_months: pet.age_months(),
            location: pet.location(),
            status: pet.status().as_ref(),
            description: pet.description(),
            image_url: pet.image_url(),
            vendor_id: pet.vendor_id().map(|id| id.get()),
            created_at,
        };

        let row: PetRow = diesel::insert_into(pets::table)
            .values(&new_row)
            .returning(PetRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_pet(row)
    }

    async fn update(&self, id: PetId, changes: &PetChanges) -> Result<usize, PetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = PetChangeset {
            name: changes.name(),
            category_name: changes.category_name().map(|name| name.as_ref()),
            breed: changes.breed(),
            age_months: changes.age_months(),
            location: changes.location(),
            description: changes.description(),
            image_url: changes.image_url(),
            vendor_id: changes.vendor_id().map(|id| id.get()),
        };

        diesel::update(pets::table.find(id.get()))
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn update_status(
        &self,
        id: PetId,
        status: &PetStatus,
    ) -> Result<usize, PetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(pets::table.find(id.get()))
            .set(pets::status.eq(status.as_ref()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: PetId) -> Result<usize, PetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(pets::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
