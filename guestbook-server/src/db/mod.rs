//! Database layer - connection pool, store contract and implementations
//!
//! - Pool is built once by the caller and injected, never held in a global
//! - Every statement is a single autocommitted query with bound parameters
//! - Unique constraints in the database stay authoritative; a request that
//!   passed validation can still lose an insert race and get `DbError`

pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryGuestStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::GuestRepo;
pub use store::{DbError, GuestStore};
