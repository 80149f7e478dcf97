//! Repository implementations for database access

pub mod guests;

pub use guests::GuestRepo;
