//! Translation of repository failures into step-annotated domain errors.

use std::fmt::Display;

use serde_json::json;
use tracing::error;

use super::Error;
use super::ports::{
    AccountRepositoryError, BookingRepositoryError, CategoryRepositoryError, PetRepositoryError,
    StatusLogRepositoryError,
};

/// A single Record Store call made by a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStep {
    ListPets,
    FindPet,
    InsertPet,
    UpdatePet,
    InsertStatusLog,
    UpdatePetStatus,
    CompensateStatusLog,
    ListStatusLog,
    DeleteStatusLog,
    DeleteBookings,
    DeletePet,
    ListBookings,
    InsertBooking,
    ListCategories,
    InsertCategory,
    ListAccounts,
    InsertAccount,
    FindAccount,
}

impl StoreStep {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListPets => "list_pets",
            Self::FindPet => "find_pet",
            Self::InsertPet => "insert_pet",
            Self::UpdatePet => "update_pet",
            Self::InsertStatusLog => "insert_status_log",
            Self::UpdatePetStatus => "update_pet_status",
            Self::CompensateStatusLog => "compensate_status_log",
            Self::ListStatusLog => "list_status_log",
            Self::DeleteStatusLog => "delete_status_log",
            Self::DeleteBookings => "delete_bookings",
            Self::DeletePet => "delete_pet",
            Self::ListBookings => "list_bookings",
            Self::InsertBooking => "insert_booking",
            Self::ListCategories => "list_categories",
            Self::InsertCategory => "insert_category",
            Self::ListAccounts => "list_accounts",
            Self::InsertAccount => "insert_account",
            Self::FindAccount => "find_account",
        }
    }
}

impl std::fmt::Display for StoreStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repository errors that can be reported as a store failure.
pub(crate) trait StoreFault: Display {
    /// `"connection"` or `"query"`.
    fn cause(&self) -> &'static str;
}

macro_rules! impl_store_fault {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StoreFault for $ty {
                fn cause(&self) -> &'static str {
                    match self {
                        Self::Connection { .. } => "connection",
                        Self::Query { .. } => "query",
                    }
                }
            }
        )*
    };
}

impl_store_fault!(
    PetRepositoryError,
    StatusLogRepositoryError,
    BookingRepositoryError,
    AccountRepositoryError,
);

impl StoreFault for CategoryRepositoryError {
    fn cause(&self) -> &'static str {
        match self {
            Self::Connection { .. } => "connection",
            Self::Query { .. } => "query",
            Self::DuplicateName { .. } => "duplicate_key",
        }
    }
}

/// Log a failed store step and build the matching `store_error`.
pub(crate) fn store_failure(step: StoreStep, fault: &impl StoreFault) -> Error {
    error!(step = step.as_str(), cause = fault.cause(), error = %fault, "store step failed");
    Error::store_error(format!("{step} failed: {fault}")).with_details(json!({
        "step": step.as_str(),
        "cause": fault.cause(),
    }))
}
