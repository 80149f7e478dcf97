//! Validation error types

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single rule violation on a guest field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing or empty
    Empty { field: &'static str },

    /// Another guest already holds this value
    AlreadyExists { field: &'static str },

    /// Value doesn't match the required format
    InvalidFormat { field: &'static str },
}

impl ValidationError {
    /// Name of the field this error is reported under.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::AlreadyExists { field } | Self::InvalidFormat { field } => {
                *field
            }
        }
    }
}

fn label(field: &str) -> &str {
    match field {
        "first_name" => "First name",
        "last_name" => "Last name",
        "email" => "Email",
        "phone" => "Phone",
        "country" => "Country",
        other => other,
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is empty", label(field)),
            Self::AlreadyExists { field } => write!(f, "{} already exists", label(field)),
            Self::InvalidFormat { field } => write!(f, "Invalid {} format", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// All violations found for one guest, at most one per field.
///
/// Serializes as `{"field": "message", ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation. A later error for the same field replaces the
    /// earlier one.
    pub fn record(&mut self, error: ValidationError) {
        self.0.insert(error.field(), error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.values().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in &self.0 {
            map.serialize_entry(field, &error.to_string())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::Empty { field: "first_name" }.to_string(),
            "First name is empty"
        );
        assert_eq!(
            ValidationError::AlreadyExists { field: "phone" }.to_string(),
            "Phone already exists"
        );
        assert_eq!(
            ValidationError::InvalidFormat { field: "email" }.to_string(),
            "Invalid email format"
        );
    }

    #[test]
    fn later_error_replaces_earlier_for_same_field() {
        let mut errors = ValidationErrors::new();
        errors.record(ValidationError::AlreadyExists { field: "email" });
        errors.record(ValidationError::InvalidFormat { field: "email" });

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("email"),
            Some(&ValidationError::InvalidFormat { field: "email" })
        );
    }

    #[test]
    fn serializes_as_field_message_map() {
        let mut errors = ValidationErrors::new();
        errors.record(ValidationError::Empty { field: "last_name" });
        errors.record(ValidationError::Empty { field: "first_name" });

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "first_name": "First name is empty",
                "last_name": "Last name is empty"
            })
        );
    }
}
