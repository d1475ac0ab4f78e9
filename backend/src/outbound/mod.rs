//! Outbound adapters implementing the domain's repository ports.
//!
//! - **persistence**: PostgreSQL record store built on Diesel, `diesel-async`
//!   and `bb8`.

pub mod persistence;
