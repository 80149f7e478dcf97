//! Guest record types
//!
//! - `Guest`: a stored row
//! - `GuestDraft`: non-id columns, possibly incomplete
//! - `GuestPayload`: request body where each key is absent, null or a string

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Primary key of the `guests` table (`SERIAL`).
pub type GuestId = i32;

/// Guest row as stored in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Guest {
    pub id: GuestId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub country: Option<String>,
}

/// Column values for an insert or a full-row update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
}

impl GuestDraft {
    /// First name if present and non-empty.
    pub fn first_name(&self) -> Option<&str> {
        filled(&self.first_name)
    }

    /// Last name if present and non-empty.
    pub fn last_name(&self) -> Option<&str> {
        filled(&self.last_name)
    }

    /// Email if present and non-empty.
    pub fn email(&self) -> Option<&str> {
        filled(&self.email)
    }

    /// Phone if present and non-empty.
    pub fn phone(&self) -> Option<&str> {
        filled(&self.phone)
    }

    /// Country if present and non-empty.
    pub fn country(&self) -> Option<&str> {
        filled(&self.country)
    }

    /// Collapse empty optional columns to `None` so they persist as NULL.
    ///
    /// `email` carries a unique constraint, so two guests without an email
    /// must both store NULL rather than `""`.
    pub fn normalized(mut self) -> Self {
        if self.email().is_none() {
            self.email = None;
        }
        if self.country().is_none() {
            self.country = None;
        }
        self
    }
}

impl From<Guest> for GuestDraft {
    fn from(guest: Guest) -> Self {
        Self {
            first_name: Some(guest.first_name),
            last_name: Some(guest.last_name),
            email: guest.email,
            phone: Some(guest.phone),
            country: guest.country,
        }
    }
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Create/update request body.
///
/// The outer `Option` records whether the key was sent at all; the inner
/// one carries an explicit `null`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GuestPayload {
    #[serde(default, deserialize_with = "present")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub last_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub country: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl GuestPayload {
    /// Draft for a new guest: only what was submitted.
    pub fn into_draft(self) -> GuestDraft {
        GuestDraft {
            first_name: self.first_name.flatten(),
            last_name: self.last_name.flatten(),
            email: self.email.flatten(),
            phone: self.phone.flatten(),
            country: self.country.flatten(),
        }
    }

    /// Overlay submitted keys on an existing guest.
    ///
    /// A key that was sent, `null` included, replaces the stored value.
    pub fn merge_onto(self, existing: Guest) -> GuestDraft {
        let base = GuestDraft::from(existing);
        GuestDraft {
            first_name: self.first_name.unwrap_or(base.first_name),
            last_name: self.last_name.unwrap_or(base.last_name),
            email: self.email.unwrap_or(base.email),
            phone: self.phone.unwrap_or(base.phone),
            country: self.country.unwrap_or(base.country),
        }
    }
}
