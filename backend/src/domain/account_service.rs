//! Account registry and the credential lookup gate.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use super::ports::{AccountDirectory, AccountRepository, LoginService};
use super::store_failure::{StoreStep, store_failure};
use super::{Account, AccountKind, Error, LoginCredentials, LoginValidationError, NewAccount};

impl From<LoginValidationError> for Error {
    fn from(value: LoginValidationError) -> Self {
        let field = match value {
            LoginValidationError::EmptyEmail => "email",
            LoginValidationError::EmptyPassword => "password",
        };
        Error::invalid_request(value.to_string())
            .with_details(json!({ "field": field, "code": "empty_field" }))
    }
}

/// Account service implementing the directory and login driving ports.
#[derive(Clone)]
pub struct AccountService<R> {
    accounts: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> AccountService<R> {
    pub fn new(accounts: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { accounts, clock }
    }
}

#[async_trait]
impl<R> AccountDirectory for AccountService<R>
where
    R: AccountRepository,
{
    async fn list_accounts(&self, kind: AccountKind) -> Result<Vec<Account>, Error> {
        self.accounts
            .list(kind)
            .await
            .map_err(|err| store_failure(StoreStep::ListAccounts, &err))
    }

    async fn register_account(
        &self,
        kind: AccountKind,
        account: NewAccount,
    ) -> Result<Account, Error> {
        let created = self
            .accounts
            .insert(kind, &account, self.clock.utc())
            .await
            .map_err(|err| store_failure(StoreStep::InsertAccount, &err))?;
        info!(account_id = %created.id, kind = %kind, "account registered");
        Ok(created)
    }
}

#[async_trait]
impl<R> LoginService for AccountService<R>
where
    R: AccountRepository,
{
    async fn authenticate(
        &self,
        kind: AccountKind,
        credentials: &LoginCredentials,
    ) -> Result<Account, Error> {
        let found = self
            .accounts
            .find_by_credentials(kind, credentials)
            .await
            .map_err(|err| store_failure(StoreStep::FindAccount, &err))?;
        match found {
            Some(account) => Ok(account),
            None => {
                debug!(kind = %kind, "credential lookup found no match");
                Err(Error::unauthorized("invalid credentials"))
            }
        }
    }
}
