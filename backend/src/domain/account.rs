//! Adopter and vendor accounts plus the credentials used to look them up.
//!
//! Both kinds share one shape and live in separate tables. Passwords are
//! accepted on input and matched on lookup but never leave the domain in a
//! serialisable type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

use super::AccountId;
use super::validation::{FieldValidationError, optional_text, required_text};

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 254;
const PHONE_MAX: usize = 32;
const ADDRESS_MAX: usize = 300;

/// Which account table a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    User,
    Vendor,
}

impl AccountKind {
    /// Singular noun used in messages and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Vendor => "vendor",
        }
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored account. Carries no password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub kind: AccountKind,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    name: String,
    email: String,
    password: Zeroizing<String>,
    phone: Option<String>,
    address: Option<String>,
}

impl NewAccount {
    /// Validate raw registration inputs.
    ///
    /// # Examples
    /// ```
    /// use petfinder::domain::NewAccount;
    ///
    /// let account = NewAccount::try_from_parts(
    ///     Some("Ada"),
    ///     Some("ada@example.com"),
    ///     Some("hunter2"),
    ///     None,
    ///     None,
    /// )
    /// .expect("valid account");
    /// assert_eq!(account.email(), "ada@example.com");
    /// ```
    pub fn try_from_parts(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
    ) -> Result<Self, FieldValidationError> {
        let name = required_text("name", name, NAME_MAX)?;
        let email = required_text("email", email, EMAIL_MAX)?;
        if !email.contains('@') {
            return Err(FieldValidationError::Invalid {
                field: "email",
                reason: "must contain '@'",
            });
        }
        let password = match password {
            None => return Err(FieldValidationError::Missing { field: "password" }),
            Some("") => return Err(FieldValidationError::Empty { field: "password" }),
            Some(raw) => Zeroizing::new(raw.to_owned()),
        };

        Ok(Self {
            name,
            email,
            password,
            phone: optional_text("phone", phone, PHONE_MAX)?,
            address: optional_text("address", address, ADDRESS_MAX)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was missing or empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials used by the lookup gate.
///
/// ## Invariants
/// - `email` is trimmed and must not be empty after trimming.
/// - `password` must be non-empty but keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use petfinder::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ada@example.com ", "pw").unwrap();
/// assert_eq!(creds.email(), "ada@example.com");
/// assert_eq!(creds.password(), "pw");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyEmail)]
    #[case("   ", "pw", LoginValidationError::EmptyEmail)]
    #[case("ada@example.com", "", LoginValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err =
            LoginCredentials::try_from_parts(email, password).expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn password_keeps_whitespace() {
        let creds = LoginCredentials::try_from_parts("ada@example.com", " pw ")
            .expect("valid inputs should succeed");
        assert_eq!(creds.password(), " pw ");
    }

    #[rstest]
    #[case(None, Some("a@b"), Some("pw"), "name")]
    #[case(Some("Ada"), None, Some("pw"), "email")]
    #[case(Some("Ada"), Some("not-an-email"), Some("pw"), "email")]
    #[case(Some("Ada"), Some("a@b"), None, "password")]
    #[case(Some("Ada"), Some("a@b"), Some(""), "password")]
    fn registration_rejects_bad_fields(
        #[case] name: Option<&str>,
        #[case] email: Option<&str>,
        #[case] password: Option<&str>,
        #[case] field: &str,
    ) {
        let err = NewAccount::try_from_parts(name, email, password, None, None)
            .expect_err("invalid registration");
        assert_eq!(err.field(), field);
    }

    #[rstest]
    fn account_serialises_without_password() {
        let account = Account {
            id: AccountId::new(3),
            kind: AccountKind::Vendor,
            name: "Shelter".to_owned(),
            email: "desk@shelter.test".to_owned(),
            phone: None,
            address: Some("1 Dock Road".to_owned()),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        };
        let value = serde_json::to_value(&account).expect("serialise account");
        assert!(value.get("password").is_none());
        assert_eq!(value["kind"], "vendor");
        assert_eq!(value["address"], "1 Dock Road");
    }
}
