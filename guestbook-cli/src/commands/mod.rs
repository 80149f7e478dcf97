//! Command implementations for the guestbook CLI

pub mod serve;

pub use serve::run_serve;
