//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    AccountDirectory, AccountRepository, AdoptionBookings, BookingRepository, CategoryCatalogue,
    CategoryRepository, LoginService, PetCatalogueCommand, PetCatalogueQuery, PetRemoval,
    PetRepository, PetStatusCommand, PetStatusQuery, StatusLogRepository,
};
use crate::domain::{
    AccountService, BookingService, CascadingDeletionService, CategoryService,
    PetCatalogueService, StatusTransitionService,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub pet_query: Arc<dyn PetCatalogueQuery>,
    pub pet_command: Arc<dyn PetCatalogueCommand>,
    pub pet_removal: Arc<dyn PetRemoval>,
    pub status_command: Arc<dyn PetStatusCommand>,
    pub status_query: Arc<dyn PetStatusQuery>,
    pub categories: Arc<dyn CategoryCatalogue>,
    pub bookings: Arc<dyn AdoptionBookings>,
    pub accounts: Arc<dyn AccountDirectory>,
    pub login: Arc<dyn LoginService>,
}

/// Record Store adapters, one per table group.
///
/// Every coordinator receives the adapters it needs from this bundle, so the
/// Diesel adapters and the in-memory store are wired the same way.
pub struct StoreAdapters<P, L, B, C, A> {
    pub pets: Arc<P>,
    pub status_log: Arc<L>,
    pub bookings: Arc<B>,
    pub categories: Arc<C>,
    pub accounts: Arc<A>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub pet_query: Arc<dyn PetCatalogueQuery>,
    pub pet_command: Arc<dyn PetCatalogueCommand>,
    pub pet_removal: Arc<dyn PetRemoval>,
    pub status_command: Arc<dyn PetStatusCommand>,
    pub status_query: Arc<dyn PetStatusQuery>,
    pub categories: Arc<dyn CategoryCatalogue>,
    pub bookings: Arc<dyn AdoptionBookings>,
    pub accounts: Arc<dyn AccountDirectory>,
    pub login: Arc<dyn LoginService>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            pet_query,
            pet_command,
            pet_removal,
            status_command,
            status_query,
            categories,
            bookings,
            accounts,
            login,
        } = ports;
        Self {
            pet_query,
            pet_command,
            pet_removal,
            status_command,
            status_query,
            categories,
            bookings,
            accounts,
            login,
        }
    }

    /// Wire the domain services over a set of store adapters.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use petfinder::inbound::http::state::{HttpState, StoreAdapters};
    /// use petfinder::test_support::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let state = HttpState::from_store_adapters(
    ///     StoreAdapters {
    ///         pets: store.clone(),
    ///         status_log: store.clone(),
    ///         bookings: store.clone(),
    ///         categories: store.clone(),
    ///         accounts: store,
    ///     },
    ///     Arc::new(DefaultClock),
    /// );
    /// let _pets = state.pet_query.clone();
    /// ```
    pub fn from_store_adapters<P, L, B, C, A>(
        adapters: StoreAdapters<P, L, B, C, A>,
        clock: Arc<dyn Clock>,
    ) -> Self
    where
        P: PetRepository + 'static,
        L: StatusLogRepository + 'static,
        B: BookingRepository + 'static,
        C: CategoryRepository + 'static,
        A: AccountRepository + 'static,
    {
        let StoreAdapters {
            pets,
            status_log,
            bookings,
            categories,
            accounts,
        } = adapters;

        let catalogue = Arc::new(PetCatalogueService::new(pets.clone(), clock.clone()));
        let transitions = Arc::new(StatusTransitionService::new(
            pets.clone(),
            status_log.clone(),
            clock.clone(),
        ));
        let removal = Arc::new(CascadingDeletionService::new(
            pets,
            status_log,
            bookings.clone(),
        ));
        let accounts = Arc::new(AccountService::new(accounts, clock.clone()));

        Self::new(HttpStatePorts {
            pet_query: catalogue.clone(),
            pet_command: catalogue,
            pet_removal: removal,
            status_command: transitions.clone(),
            status_query: transitions,
            categories: Arc::new(CategoryService::new(categories)),
            bookings: Arc::new(BookingService::new(bookings, clock)),
            accounts: accounts.clone(),
            login: accounts,
        })
    }
}
