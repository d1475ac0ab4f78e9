//! Domain primitives, coordinators and ports.
//!
//! Purpose: keep the pet lifecycle rules (status transitions with
//! compensation, cascading deletion, filtered search) independent of Actix
//! and Diesel. Inbound adapters call the driving ports in [`ports`]; outbound
//! adapters implement the repository ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Record ids, entities and validated drafts.
//! - Services implementing the driving ports.

pub mod account;
pub mod booking;
pub mod category;
pub mod error;
pub mod pet;
pub mod pet_filter;
pub mod ports;
pub mod record_id;
pub mod status_log;
pub mod trace_id;
pub mod validation;

mod account_service;
mod booking_service;
mod cascading_deletion;
mod category_service;
mod pet_catalogue_service;
mod status_transition;
mod store_failure;

pub use self::account::{Account, AccountKind, LoginCredentials, LoginValidationError, NewAccount};
pub use self::account_service::AccountService;
pub use self::booking::{AdoptionBooking, BookingFields, NewBooking};
pub use self::booking_service::BookingService;
pub use self::cascading_deletion::CascadingDeletionService;
pub use self::category::{CATEGORY_NAME_MAX, Category, CategoryName};
pub use self::category_service::CategoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::pet::{NewPet, Pet, PetChanges, PetFields, PetStatus};
pub use self::pet_catalogue_service::PetCatalogueService;
pub use self::pet_filter::{PetClause, PetPredicate, PetSearchFilter};
pub use self::record_id::{AccountId, BookingId, CategoryId, LogId, PetId};
pub use self::status_log::{NewStatusChange, StatusChangeLogEntry, StatusChangeRequest};
pub use self::status_transition::{CompensationFailure, StatusTransitionService};
pub use self::store_failure::StoreStep;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::FieldValidationError;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use petfinder::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such pet"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
