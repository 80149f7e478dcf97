//! Guest service: validation, country inference and store calls
//!
//! Independent of HTTP. Handlers turn `ServiceError` into responses.

pub mod guests;
pub mod validation;

pub use guests::{GuestService, ServiceError};
pub use validation::validate_guest;
