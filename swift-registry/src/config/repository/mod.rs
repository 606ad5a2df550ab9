//! Repository layer for database operations

pub mod swift_codes;
