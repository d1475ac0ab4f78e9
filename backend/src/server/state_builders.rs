//! Wires the Diesel adapters into the HTTP state.

use std::sync::Arc;

use mockable::DefaultClock;

use petfinder::inbound::http::state::{HttpState, StoreAdapters};
use petfinder::outbound::persistence::{
    DbPool, DieselAccountRepository, DieselBookingRepository, DieselCategoryRepository,
    DieselPetRepository, DieselStatusLogRepository,
};

/// Build handler state over PostgreSQL-backed repositories sharing `pool`.
pub(super) fn build_http_state(pool: &DbPool) -> HttpState {
    HttpState::from_store_adapters(
        StoreAdapters {
            pets: Arc::new(DieselPetRepository::new(pool.clone())),
            status_log: Arc::new(DieselStatusLogRepository::new(pool.clone())),
            bookings: Arc::new(DieselBookingRepository::new(pool.clone())),
            categories: Arc::new(DieselCategoryRepository::new(pool.clone())),
            accounts: Arc::new(DieselAccountRepository::new(pool.clone())),
        },
        Arc::new(DefaultClock),
    )
}
