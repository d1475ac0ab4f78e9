//! Test utilities shared by unit tests (in `src/`) and integration tests (in
//! `tests/`). Compiled for `cfg(test)` and behind the `test-support` feature.

pub mod clock;
pub mod memory_store;

pub use clock::MutableClock;
pub use memory_store::{InMemoryStore, StoreOperation};
