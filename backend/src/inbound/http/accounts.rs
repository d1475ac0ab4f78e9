//! User and vendor registry handlers, plus the credential lookup gate.
//!
//! ```text
//! GET  /api/users            POST /api/users   {"name":..,"email":..,"password":..}
//! POST /api/user  {"email":"ada@example.com","password":"pw"}
//! GET  /api/vendors          POST /api/vendors
//! POST /api/vendor {"email":"shelter@example.com","password":"pw"}
//! ```
//!
//! Users and vendors share one shape and one service; the handlers only pick
//! the [`AccountKind`]. Passwords are accepted on the way in and never
//! returned.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Account, AccountKind, Error, LoginCredentials, NewAccount};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Registration body for users and vendors.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl TryFrom<AccountRequest> for NewAccount {
    type Error = Error;

    fn try_from(value: AccountRequest) -> Result<Self, Self::Error> {
        Ok(NewAccount::try_from_parts(
            value.name.as_deref(),
            value.email.as_deref(),
            value.password.as_deref(),
            value.phone.as_deref(),
            value.address.as_deref(),
        )?)
    }
}

/// Credential lookup body for `POST /api/user` and `POST /api/vendor`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = Error;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Ok(Self::try_from_parts(
            value.email.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
        )?)
    }
}

async fn list(state: &HttpState, kind: AccountKind) -> ApiResult<web::Json<Vec<Account>>> {
    Ok(web::Json(state.accounts.list_accounts(kind).await?))
}

async fn register(
    state: &HttpState,
    kind: AccountKind,
    payload: AccountRequest,
) -> ApiResult<HttpResponse> {
    let account = NewAccount::try_from(payload)?;
    let created = state.accounts.register_account(kind, account).await?;
    Ok(HttpResponse::Created().json(created))
}

async fn lookup(
    state: &HttpState,
    kind: AccountKind,
    payload: LoginRequest,
) -> ApiResult<web::Json<Account>> {
    let credentials = LoginCredentials::try_from(payload)?;
    Ok(web::Json(state.login.authenticate(kind, &credentials).await?))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [Account]),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Account>>> {
    list(&state, AccountKind::User).await
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = AccountRequest,
    responses(
        (status = 201, description = "Created user", body = Account),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<AccountRequest>,
) -> ApiResult<HttpResponse> {
    register(&state, AccountKind::User, payload.into_inner()).await
}

/// Look up a user by email and password.
#[utoipa::path(
    post,
    path = "/api/user",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Matching user", body = Account),
        (status = 400, description = "Email or password missing", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["users"],
    operation_id = "userLogin"
)]
#[post("/user")]
pub async fn user_login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<Account>> {
    lookup(&state, AccountKind::User, payload.into_inner()).await
}

/// List all vendors.
#[utoipa::path(
    get,
    path = "/api/vendors",
    responses(
        (status = 200, description = "Vendors", body = [Account]),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["vendors"],
    operation_id = "listVendors"
)]
#[get("/vendors")]
pub async fn list_vendors(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Account>>> {
    list(&state, AccountKind::Vendor).await
}

/// Register a vendor.
#[utoipa::path(
    post,
    path = "/api/vendors",
    request_body = AccountRequest,
    responses(
        (status = 201, description = "Created vendor", body = Account),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["vendors"],
    operation_id = "createVendor"
)]
#[post("/vendors")]
pub async fn create_vendor(
    state: web::Data<HttpState>,
    payload: web::Json<AccountRequest>,
) -> ApiResult<HttpResponse> {
    register(&state, AccountKind::Vendor, payload.into_inner()).await
}

/// Look up a vendor by email and password.
#[utoipa::path(
    post,
    path = "/api/vendor",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Matching vendor", body = Account),
        (status = 400, description = "Email or password missing", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Store error", body = Error)
    ),
    tags = ["vendors"],
    operation_id = "vendorLogin"
)]
#[post("/vendor")]
pub async fn vendor_login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<Account>> {
    lookup(&state, AccountKind::Vendor, payload.into_inner()).await
}
