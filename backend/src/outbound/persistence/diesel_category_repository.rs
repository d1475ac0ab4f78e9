//! PostgreSQL-backed `CategoryRepository` using Diesel.
//!
//! Name uniqueness is the table's constraint; a violation comes back as
//! `DuplicateName` rather than a generic query error.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};
use crate::domain::{Category, CategoryName};

use super::diesel_basic_error_mapping::{
    DieselFailure, classify_diesel_error, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{CategoryRow, NewCategoryRow};
use super::pool::{DbPool, PoolError};
use super::schema::categories;

#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CategoryRepositoryError {
    map_basic_pool_error(error, CategoryRepositoryError::connection)
}

fn map_insert_error(error: diesel::result::Error, name: &CategoryName) -> CategoryRepositoryError {
    match classify_diesel_error(&error) {
        DieselFailure::UniqueViolation => CategoryRepositoryError::duplicate_name(name.as_ref()),
        DieselFailure::Connection(message) => CategoryRepositoryError::connection(message),
        DieselFailure::Query(message) => CategoryRepositoryError::query(message),
    }
}

fn row_to_category(row: CategoryRow) -> Result<Category, CategoryRepositoryError> {
    let id = row.id;
    Category::try_from(row).map_err(|err| {
        CategoryRepositoryError::query(format!("stored category {id} is invalid: {err}"))
    })
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CategoryRow> = categories::table
            .select(CategoryRow::as_select())
            .order(categories::id.asc())
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    CategoryRepositoryError::query,
                    CategoryRepositoryError::connection,
                )
            })?;
        rows.into_iter().map(row_to_category).collect()
    }

    async fn insert(&self, name: &CategoryName) -> Result<Category, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: CategoryRow = diesel::insert_into(categories::table)
            .values(&NewCategoryRow {
                category_name: name.as_ref(),
            })
            .returning(CategoryRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, name))?;
        row_to_category(row)
    }
}
