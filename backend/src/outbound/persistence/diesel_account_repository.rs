//! PostgreSQL-backed `AccountRepository` using Diesel.
//!
//! Users and vendors live in two tables with identical columns; each query is
//! written once and expanded against the table selected by `AccountKind`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, AccountId, AccountKind, LoginCredentials, NewAccount};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::AccountRow;
use super::pool::{DbPool, PoolError};

/// Run `$body` with `$table` bound to the schema module for `$kind`.
macro_rules! with_account_table {
    ($kind:expr, $table:ident => $body:expr) => {
        match $kind {
            AccountKind::User => {
                use super::schema::users as $table;
                $body
            }
            AccountKind::Vendor => {
                use super::schema::vendors as $table;
                $body
            }
        }
    };
}

/// Public columns, in `AccountRow` order. The password is never selected.
macro_rules! account_columns {
    ($table:ident) => {
        (
            $table::id,
            $table::name,
            $table::email,
            $table::phone,
            $table::address,
            $table::created_at,
        )
    };
}

#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AccountRepositoryError {
    map_basic_pool_error(error, AccountRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AccountRepositoryError {
    map_basic_diesel_error(
        error,
        AccountRepositoryError::query,
        AccountRepositoryError::connection,
    )
}

fn row_to_account(kind: AccountKind, row: AccountRow) -> Account {
    Account {
        id: AccountId::new(row.id),
        kind,
        name: row.name,
        email: row.email,
        phone: row.phone,
        address: row.address,
        created_at: row.created_at,
    }
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn list(&self, kind: AccountKind) -> Result<Vec<Account>, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<AccountRow> = with_account_table!(kind, accounts => {
            accounts::table
                .select(account_columns!(accounts))
                .order(accounts::id.asc())
                .load(&mut conn)
                .await
        })
        .map_err(map_diesel_error)?;
        Ok(rows
            .into_iter()
            .map(|row| row_to_account(kind, row))
            .collect())
    }

    async fn insert(
        &self,
        kind: AccountKind,
        account: &NewAccount,
        created_at: DateTime<Utc>,
    ) -> Result<Account, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: AccountRow = with_account_table!(kind, accounts => {
            diesel::insert_into(accounts::table)
                .values((
                    accounts::name.eq(account.name()),
                    accounts::email.eq(account.email()),
                    accounts::password.eq(account.password()),
                    accounts::phone.eq(account.phone()),
                    accounts::address.eq(account.address()),
                    accounts::created_at.eq(created_at),
                ))
                .returning(account_columns!(accounts))
                .get_result(&mut conn)
                .await
        })
        .map_err(map_diesel_error)?;
        Ok(row_to_account(kind, row))
    }

    async fn find_by_credentials(
        &self,
        kind: AccountKind,
        credentials: &LoginCredentials,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<AccountRow> = with_account_table!(kind, accounts => {
            accounts::table
                .filter(accounts::email.eq(credentials.email()))
                .filter(accounts::password.eq(credentials.password()))
                .select(account_columns!(accounts))
                .order(accounts::id.asc())
                .first(&mut conn)
                .await
                .optional()
        })
        .map_err(map_diesel_error)?;
        Ok(row.map(|row| row_to_account(kind, row)))
    }
}
