//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. None of the
//! tables declare foreign keys, so no `joinable!` entries exist.

diesel::table! {
    /// Pet listings. `status` mirrors the newest committed log entry.
    pets (id) {
        id -> Int8,
        name -> Varchar,
        category_name -> Varchar,
        breed -> Nullable<Varchar>,
        age_months -> Nullable<Int4>,
        location -> Varchar,
        status -> Varchar,
        description -> Nullable<Text>,
        image_url -> Nullable<Varchar>,
        vendor_id -> Nullable<Int8>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Pet categories. `category_name` carries a unique constraint.
    categories (id) {
        id -> Int8,
        category_name -> Varchar,
    }
}

diesel::table! {
    /// Adopter accounts.
    users (id) {
        id -> Int8,
        name -> Varchar,
        email -> Varchar,
        /// Stored as supplied; compared by equality.
        password -> Text,
        phone -> Nullable<Varchar>,
        address -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Vendor accounts. Same shape as `users`.
    vendors (id) {
        id -> Int8,
        name -> Varchar,
        email -> Varchar,
        password -> Text,
        phone -> Nullable<Varchar>,
        address -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Adoption bookings; `pet_id` is a soft reference to `pets.id`.
    adoption_bookings (id) {
        id -> Int8,
        pet_id -> Int8,
        adopter_name -> Varchar,
        adopter_email -> Varchar,
        adopter_phone -> Nullable<Varchar>,
        preferred_date -> Nullable<Date>,
        message -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only status history; `pet_id` is a soft reference.
    pet_status_change_log (id) {
        id -> Int8,
        pet_id -> Int8,
        new_status -> Varchar,
        changed_by -> Nullable<Varchar>,
        notes -> Nullable<Text>,
        changed_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    adoption_bookings,
    categories,
    pet_status_change_log,
    pets,
    users,
    vendors,
);
