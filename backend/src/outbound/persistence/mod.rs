//! PostgreSQL record store adapters using Diesel.
//!
//! Each adapter implements one repository port over a shared [`DbPool`].
//! Adapters translate between Diesel rows and domain types and carry no
//! lifecycle rules; ordering, compensation and not-found decisions belong to
//! the domain services.
//!
//! # Example
//!
//! ```ignore
//! use petfinder::outbound::persistence::{DbPool, DieselPetRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/petfinder")).await?;
//! let pets = DieselPetRepository::new(pool);
//! ```

mod diesel_account_repository;
mod diesel_basic_error_mapping;
mod diesel_booking_repository;
mod diesel_category_repository;
mod diesel_pet_repository;
mod diesel_status_log_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use diesel_booking_repository::DieselBookingRepository;
pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_pet_repository::DieselPetRepository;
pub use diesel_status_log_repository::DieselStatusLogRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
