//! Store-assigned record identities.
//!
//! Every table uses a `BIGSERIAL` key; the newtypes below keep a pet id from
//! being passed where a booking id is expected.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! define_record_id {
    (
        $(#[$outer:meta])*
        $name:ident
    ) => {
        $(#[$outer])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw store identity.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Raw store identity.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }
    };
}

define_record_id! {
    /// Identity of a pet listing.
    PetId
}

define_record_id! {
    /// Identity of a pet category.
    CategoryId
}

define_record_id! {
    /// Identity of a user or vendor account.
    AccountId
}

define_record_id! {
    /// Identity of an adoption booking.
    BookingId
}

define_record_id! {
    /// Identity of a status change log entry.
    LogId
}
