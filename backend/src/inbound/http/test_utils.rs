//! Test helpers for inbound HTTP components.
//!
//! Handlers are exercised against the real domain services wired over an
//! [`InMemoryStore`], so handler tests see the same coordinator behaviour as
//! production.

use std::sync::Arc;

use actix_web::App;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};

use crate::Trace;
use crate::inbound::http::api_scope;
use crate::inbound::http::state::{HttpState, StoreAdapters};
use crate::test_support::{InMemoryStore, MutableClock};

/// HTTP state wired over `store` with a frozen clock.
pub fn memory_state(store: &Arc<InMemoryStore>) -> HttpState {
    HttpState::from_store_adapters(
        StoreAdapters {
            pets: store.clone(),
            status_log: store.clone(),
            bookings: store.clone(),
            categories: store.clone(),
            accounts: store.clone(),
        },
        Arc::new(MutableClock::fixed()),
    )
}

/// Full `/api` application over the given state.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(actix_web::web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}
