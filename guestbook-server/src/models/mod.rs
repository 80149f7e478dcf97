//! Domain models for guest records
//!
//! Incoming data is typed before it reaches validation. Every column is
//! optional on the way in so that missing fields can be reported together
//! instead of failing on the first one.

pub mod country;
pub mod guest;
pub mod validation;

pub use country::country_for_phone;
pub use guest::{Guest, GuestDraft, GuestId, GuestPayload};
pub use validation::{ValidationError, ValidationErrors};
