//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_directory;
mod account_repository;
mod adoption_bookings;
mod booking_repository;
mod category_catalogue;
mod category_repository;
mod pet_catalogue;
mod pet_repository;
mod pet_status;
mod status_log_repository;

pub use account_directory::{AccountDirectory, LoginService};
#[cfg(test)]
pub use account_directory::{MockAccountDirectory, MockLoginService};
#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountRepository, AccountRepositoryError};
pub use adoption_bookings::AdoptionBookings;
#[cfg(test)]
pub use adoption_bookings::MockAdoptionBookings;
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::{BookingRepository, BookingRepositoryError};
pub use category_catalogue::CategoryCatalogue;
#[cfg(test)]
pub use category_catalogue::MockCategoryCatalogue;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
#[cfg(test)]
pub use pet_catalogue::{MockPetCatalogueCommand, MockPetCatalogueQuery, MockPetRemoval};
pub use pet_catalogue::{PetCatalogueCommand, PetCatalogueQuery, PetRemoval};
#[cfg(test)]
pub use pet_repository::MockPetRepository;
pub use pet_repository::{PetRepository, PetRepositoryError};
#[cfg(test)]
pub use pet_status::{MockPetStatusCommand, MockPetStatusQuery};
pub use pet_status::{PetStatusCommand, PetStatusQuery};
#[cfg(test)]
pub use status_log_repository::MockStatusLogRepository;
pub use status_log_repository::{StatusLogRepository, StatusLogRepositoryError};
