//! Driving ports for user and vendor accounts.
//!
//! The login port is the lookup gate: a pass/fail credential match with no
//! session or token issued.

use async_trait::async_trait;

use crate::domain::{Account, AccountKind, Error, LoginCredentials, NewAccount};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn list_accounts(&self, kind: AccountKind) -> Result<Vec<Account>, Error>;

    async fn register_account(
        &self,
        kind: AccountKind,
        account: NewAccount,
    ) -> Result<Account, Error>;
}

/// Domain use-case port for credential lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Return the matching account or `unauthorized`.
    async fn authenticate(
        &self,
        kind: AccountKind,
        credentials: &LoginCredentials,
    ) -> Result<Account, Error>;
}
