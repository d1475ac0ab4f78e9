//! In-memory Record Store with per-operation fault injection.
//!
//! One [`InMemoryStore`] implements every repository port so coordinator
//! tests can inspect all tables after a multi-step operation. Each call is
//! appended to a journal before it runs, which lets tests assert step order
//! and that a rejected request never reached the store.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{
    AccountRepository, AccountRepositoryError, BookingRepository, BookingRepositoryError,
    CategoryRepository, CategoryRepositoryError, PetRepository, PetRepositoryError,
    StatusLogRepository, StatusLogRepositoryError,
};
use crate::domain::{
    Account, AccountId, AccountKind, AdoptionBooking, BookingId, Category, CategoryId,
    CategoryName, LogId, LoginCredentials, NewAccount, NewBooking, NewPet, NewStatusChange, Pet,
    PetChanges, PetId, PetPredicate, PetStatus, StatusChangeLogEntry,
};

/// Store operations that can be journaled and made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    ListPets,
    FindPet,
    InsertPet,
    UpdatePet,
    UpdatePetStatus,
    DeletePet,
    InsertStatusLog,
    DeleteStatusLog,
    DeleteStatusLogForPet,
    ListStatusLog,
    ListBookings,
    InsertBooking,
    DeleteBookingsForPet,
    ListCategories,
    InsertCategory,
    ListAccounts,
    InsertAccount,
    FindAccount,
}

struct StoredAccount {
    account: Account,
    password: String,
}

#[derive(Default)]
struct Tables {
    pets: BTreeMap<i64, Pet>,
    status_log: BTreeMap<i64, StatusChangeLogEntry>,
    bookings: BTreeMap<i64, AdoptionBooking>,
    categories: BTreeMap<i64, Category>,
    users: BTreeMap<i64, StoredAccount>,
    vendors: BTreeMap<i64, StoredAccount>,
    next_id: i64,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn accounts(&mut self, kind: AccountKind) -> &mut BTreeMap<i64, StoredAccount> {
        match kind {
            AccountKind::User => &mut self.users,
            AccountKind::Vendor => &mut self.vendors,
        }
    }
}

/// Shared in-memory implementation of all repository ports.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    faults: Mutex<HashSet<StoreOperation>>,
    journal: Mutex<Vec<StoreOperation>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call of `operation` fail with a query error.
    pub fn fail_on(&self, operation: StoreOperation) {
        lock(&self.faults).insert(operation);
    }

    pub fn clear_fault(&self, operation: StoreOperation) {
        lock(&self.faults).remove(&operation);
    }

    /// Operations attempted so far, in call order.
    pub fn journal(&self) -> Vec<StoreOperation> {
        lock(&self.journal).clone()
    }

    pub fn clear_journal(&self) {
        lock(&self.journal).clear();
    }

    pub fn pet(&self, id: PetId) -> Option<Pet> {
        lock(&self.tables).pets.get(&id.get()).cloned()
    }

    pub fn pet_count(&self) -> usize {
        lock(&self.tables).pets.len()
    }

    /// Log entries for a pet in insertion order.
    pub fn status_log_for(&self, pet_id: PetId) -> Vec<StatusChangeLogEntry> {
        lock(&self.tables)
            .status_log
            .values()
            .filter(|entry| entry.pet_id == pet_id)
            .cloned()
            .collect()
    }

    pub fn bookings_for(&self, pet_id: PetId) -> Vec<AdoptionBooking> {
        lock(&self.tables)
            .bookings
            .values()
            .filter(|booking| booking.pet_id == pet_id)
            .cloned()
            .collect()
    }

    pub fn category_count(&self) -> usize {
        lock(&self.tables).categories.len()
    }

    /// Journal the call, then report whether it should fail.
    fn enter(&self, operation: StoreOperation) -> Result<(), String> {
        lock(&self.journal).push(operation);
        if lock(&self.faults).contains(&operation) {
            Err(format!("injected failure in {operation:?}"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PetRepository for InMemoryStore {
    async fn list(&self, predicate: &PetPredicate) -> Result<Vec<Pet>, PetRepositoryError> {
        self.enter(StoreOperation::ListPets)
            .map_err(PetRepositoryError::query)?;
        Ok(lock(&self.tables)
            .pets
            .values()
            .filter(|pet| predicate.matches(pet.category_name.as_ref(), &pet.location))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: PetId) -> Result<Option<Pet>, PetRepositoryError> {
        self.enter(StoreOperation::FindPet)
            .map_err(PetRepositoryError::query)?;
        Ok(self.pet(id))
    }

    async fn insert(
        &self,
        pet: &NewPet,
        created_at: DateTime<Utc>,
    ) -> Result<Pet, PetRepositoryError> {
        self.enter(StoreOperation::InsertPet)
            .map_err(PetRepositoryError::query)?;
        let mut tables = lock(&self.tables);
        let id = tables.allocate_id();
        let stored = Pet {
            id: PetId::new(id),
            name: pet.name().to_owned(),
            category_name: pet.category_name().clone(),
            breed: pet.breed().map(str::to_owned),
            age_months: pet.age_months(),
            location: pet.location().to_owned(),
            status: pet.status().clone(),
            description: pet.description().map(str::to_owned),
            image_url: pet.image_url().map(str::to_owned),
            vendor_id: pet.vendor_id(),
            created_at,
        };
        tables.pets.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: PetId, changes: &PetChanges) -> Result<usize, PetRepositoryError> {
        self.enter(StoreOperation::UpdatePet)
            .map_err(PetRepositoryError::query)?;
        Ok(match lock(&self.tables).pets.get_mut(&id.get()) {
            Some(pet) => {
                changes.apply_to(pet);
                1
            }
            None => 0,
        })
    }

    async fn update_status(
        &self,
        id: PetId,
        status: &PetStatus,
    ) -> Result<usize, PetRepositoryError> {
        self.enter(StoreOperation::UpdatePetStatus)
            .map_err(PetRepositoryError::query)?;
        Ok(match lock(&self.tables).pets.get_mut(&id.get()) {
            Some(pet) => {
                pet.status = status.clone();
                1
            }
            None => 0,
        })
    }

    async fn delete(&self, id: PetId) -> Result<usize, PetRepositoryError> {
        self.enter(StoreOperation::DeletePet)
            .map_err(PetRepositoryError::query)?;
        Ok(usize::from(lock(&self.tables).pets.remove(&id.get()).is_some()))
    }
}

#[async_trait]
impl StatusLogRepository for InMemoryStore {
    async fn insert(
        &self,
        change: &NewStatusChange,
    ) -> Result<StatusChangeLogEntry, StatusLogRepositoryError> {
        self.enter(StoreOperation::InsertStatusLog)
            .map_err(StatusLogRepositoryError::query)?;
        let mut tables = lock(&self.tables);
        let id = tables.allocate_id();
        let entry = StatusChangeLogEntry {
            id: LogId::new(id),
            pet_id: change.pet_id,
            new_status: change.new_status.clone(),
            changed_by: change.changed_by.clone(),
            notes: change.notes.clone(),
            changed_at: change.changed_at,
        };
        tables.status_log.insert(id, entry.clone());
        Ok(entry)
    }

    async fn delete(&self, id: LogId) -> Result<usize, StatusLogRepositoryError> {
        self.enter(StoreOperation::DeleteStatusLog)
            .map_err(StatusLogRepositoryError::query)?;
        Ok(usize::from(
            lock(&self.tables).status_log.remove(&id.get()).is_some(),
        ))
    }

    async fn delete_for_pet(&self, pet_id: PetId) -> Result<usize, StatusLogRepositoryError> {
        self.enter(StoreOperation::DeleteStatusLogForPet)
            .map_err(StatusLogRepositoryError::query)?;
        let mut tables = lock(&self.tables);
        let before = tables.status_log.len();
        tables.status_log.retain(|_, entry| entry.pet_id != pet_id);
        Ok(before - tables.status_log.len())
    }

    async fn list(
        &self,
        pet_id: Option<PetId>,
    ) -> Result<Vec<StatusChangeLogEntry>, StatusLogRepositoryError> {
        self.enter(StoreOperation::ListStatusLog)
            .map_err(StatusLogRepositoryError::query)?;
        Ok(lock(&self.tables)
            .status_log
            .values()
            .rev()
            .filter(|entry| pet_id.is_none_or(|id| entry.pet_id == id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn list(
        &self,
        pet_id: Option<PetId>,
    ) -> Result<Vec<AdoptionBooking>, BookingRepositoryError> {
        self.enter(StoreOperation::ListBookings)
            .map_err(BookingRepositoryError::query)?;
        Ok(lock(&self.tables)
            .bookings
            .values()
            .filter(|booking| pet_id.is_none_or(|id| booking.pet_id == id))
            .cloned()
            .collect())
    }

    async fn insert(
        &self,
        booking: &NewBooking,
        created_at: DateTime<Utc>,
    ) -> Result<AdoptionBooking, BookingRepositoryError> {
        self.enter(StoreOperation::InsertBooking)
            .map_err(BookingRepositoryError::query)?;
        let mut tables = lock(&self.tables);
        let id = tables.allocate_id();
        let stored = AdoptionBooking {
            id: BookingId::new(id),
            pet_id: booking.pet_id(),
            adopter_name: booking.adopter_name().to_owned(),
            adopter_email: booking.adopter_email().to_owned(),
            adopter_phone: booking.adopter_phone().map(str::to_owned),
            preferred_date: booking.preferred_date(),
            message: booking.message().map(str::to_owned),
            created_at,
        };
        tables.bookings.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_for_pet(&self, pet_id: PetId) -> Result<usize, BookingRepositoryError> {
        self.enter(StoreOperation::DeleteBookingsForPet)
            .map_err(BookingRepositoryError::query)?;
        let mut tables = lock(&self.tables);
        let before = tables.bookings.len();
        tables.bookings.retain(|_, booking| booking.pet_id != pet_id);
        Ok(before - tables.bookings.len())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        self.enter(StoreOperation::ListCategories)
            .map_err(CategoryRepositoryError::query)?;
        Ok(lock(&self.tables).categories.values().cloned().collect())
    }

    async fn insert(&self, name: &CategoryName) -> Result<Category, CategoryRepositoryError> {
        self.enter(StoreOperation::InsertCategory)
            .map_err(CategoryRepositoryError::query)?;
        let mut tables = lock(&self.tables);
        if tables
            .categories
            .values()
            .any(|category| &category.category_name == name)
        {
            return Err(CategoryRepositoryError::duplicate_name(name.as_ref()));
        }
        let id = tables.allocate_id();
        let category = Category {
            id: CategoryId::new(id),
            category_name: name.clone(),
        };
        tables.categories.insert(id, category.clone());
        Ok(category)
    }
}

#[async_trait]
impl AccountRepository for InMemoryStore {
    async fn list(&self, kind: AccountKind) -> Result<Vec<Account>, AccountRepositoryError> {
        self.enter(StoreOperation::ListAccounts)
            .map_err(AccountRepositoryError::query)?;
        Ok(lock(&self.tables)
            .accounts(kind)
            .values()
            .map(|stored| stored.account.clone())
            .collect())
    }

    async fn insert(
        &self,
        kind: AccountKind,
        account: &NewAccount,
        created_at: DateTime<Utc>,
    ) -> Result<Account, AccountRepositoryError> {
        self.enter(StoreOperation::InsertAccount)
            .map_err(AccountRepositoryError::query)?;
        let mut tables = lock(&self.tables);
        let id = tables.allocate_id();
        let stored = Account {
            id: AccountId::new(id),
            kind,
            name: account.name().to_owned(),
            email: account.email().to_owned(),
            phone: account.phone().map(str::to_owned),
            address: account.address().map(str::to_owned),
            created_at,
        };
        tables.accounts(kind).insert(
            id,
            StoredAccount {
                account: stored.clone(),
                password: account.password().to_owned(),
            },
        );
        Ok(stored)
    }

    async fn find_by_credentials(
        &self,
        kind: AccountKind,
        credentials: &LoginCredentials,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        self.enter(StoreOperation::FindAccount)
            .map_err(AccountRepositoryError::query)?;
        Ok(lock(&self.tables)
            .accounts(kind)
            .values()
            .find(|stored| {
                stored.account.email == credentials.email()
                    && stored.password == credentials.password()
            })
            .map(|stored| stored.account.clone()))
    }
}
