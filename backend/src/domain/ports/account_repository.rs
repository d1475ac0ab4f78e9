//! Port abstraction for user and vendor account persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Account, AccountKind, LoginCredentials, NewAccount};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "account repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// All accounts of `kind` ordered by id.
    async fn list(&self, kind: AccountKind) -> Result<Vec<Account>, AccountRepositoryError>;

    async fn insert(
        &self,
        kind: AccountKind,
        account: &NewAccount,
        created_at: DateTime<Utc>,
    ) -> Result<Account, AccountRepositoryError>;

    /// Lowest-id account whose email and password both equal the credentials.
    async fn find_by_credentials(
        &self,
        kind: AccountKind,
        credentials: &LoginCredentials,
    ) -> Result<Option<Account>, AccountRepositoryError>;
}
