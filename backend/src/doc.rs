//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every `/api` handler and the health probes. Swagger UI
//! serves it at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    Account, AccountKind, AdoptionBooking, Category, Error, ErrorCode, Pet, StatusChangeLogEntry,
};
use crate::inbound::http::accounts::{AccountRequest, LoginRequest};
use crate::inbound::http::bookings::BookingRequest;
use crate::inbound::http::categories::CategoryRequest;
use crate::inbound::http::pets::{Acknowledgement, PetRequest};
use crate::inbound::http::status_log::StatusChangeBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Petfinder API",
        description = "Pet listings, status history, adoption bookings and account lookup.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::welcome::welcome,
        crate::inbound::http::pets::list_pets,
        crate::inbound::http::pets::create_pet,
        crate::inbound::http::pets::get_pet,
        crate::inbound::http::pets::update_pet,
        crate::inbound::http::pets::delete_pet,
        crate::inbound::http::status_log::list_status_changes,
        crate::inbound::http::status_log::record_status_change,
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::create_category,
        crate::inbound::http::bookings::list_bookings,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::bookings_for_pet,
        crate::inbound::http::accounts::list_users,
        crate::inbound::http::accounts::create_user,
        crate::inbound::http::accounts::user_login,
        crate::inbound::http::accounts::list_vendors,
        crate::inbound::http::accounts::create_vendor,
        crate::inbound::http::accounts::vendor_login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Pet,
        Category,
        AdoptionBooking,
        StatusChangeLogEntry,
        Account,
        AccountKind,
        Error,
        ErrorCode,
        PetRequest,
        StatusChangeBody,
        CategoryRequest,
        BookingRequest,
        AccountRequest,
        LoginRequest,
        Acknowledgement,
    )),
    tags(
        (name = "pets", description = "Pet listings and cascading removal"),
        (name = "status", description = "Status transitions and their history"),
        (name = "categories", description = "Pet categories"),
        (name = "bookings", description = "Adoption visit bookings"),
        (name = "users", description = "User registry and credential lookup"),
        (name = "vendors", description = "Vendor registry and credential lookup"),
        (name = "welcome", description = "API greeting"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
