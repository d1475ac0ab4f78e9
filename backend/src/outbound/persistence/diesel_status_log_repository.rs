//! PostgreSQL-backed `StatusLogRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StatusLogRepository, StatusLogRepositoryError};
use crate::domain::{LogId, NewStatusChange, PetId, StatusChangeLogEntry};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewStatusLogRow, StatusLogRow};
use super::pool::{DbPool, PoolError};
use super::schema::pet_status_change_log;

#[derive(Clone)]
pub struct DieselStatusLogRepository {
    pool: DbPool,
}

impl DieselStatusLogRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> StatusLogRepositoryError {
    map_basic_pool_error(error, StatusLogRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> StatusLogRepositoryError {
    map_basic_diesel_error(
        error,
        StatusLogRepositoryError::query,
        StatusLogRepositoryError::connection,
    )
}

fn row_to_entry(row: StatusLogRow) -> Result<StatusChangeLogEntry, StatusLogRepositoryError> {
    let id = row.id;
    StatusChangeLogEntry::try_from(row).map_err(|err| {
        StatusLogRepositoryError::query(format!("stored log entry {id} is invalid: {err}"))
    })
}

#[async_trait]
impl StatusLogRepository for DieselStatusLogRepository {
    async fn insert(
        &self,
        change: &NewStatusChange,
    ) -> Result<StatusChangeLogEntry, StatusLogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewStatusLogRow {
            pet_id: change.pet_id.get(),
            new_status: change.new_status.as_ref(),
            changed_by: change.changed_by.as_deref(),
            notes: change.notes.as_deref(),
            changed_at: change.changed_at,
        };

        let row: StatusLogRow = diesel::insert_into(pet_status_change_log::table)
            .values(&new_row)
            .returning(StatusLogRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_entry(row)
    }

    async fn delete(&self, id: LogId) -> Result<usize, StatusLogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(pet_status_change_log::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete_for_pet(&self, pet_id: PetId) -> Result<usize, StatusLogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(
            pet_status_change_log::table.filter(pet_status_change_log::pet_id.eq(pet_id.get())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn list(
        &self,
        pet_id: Option<PetId>,
    ) -> Result<Vec<StatusChangeLogEntry>, StatusLogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = pet_status_change_log::table
            .select(StatusLogRow::as_select())
            .order(pet_status_change_log::id.desc())
            .into_boxed();
        if let Some(pet_id) = pet_id {
            query = query.filter(pet_status_change_log::pet_id.eq(pet_id.get()));
        }

        let rows: Vec<StatusLogRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_entry).collect()
    }
}
