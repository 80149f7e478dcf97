//! Guest validation rules
//!
//! Every rule runs; nothing short-circuits. Rules are applied in a fixed
//! order and a later message for a field replaces an earlier one, so an
//! email that is both taken and malformed reports the format error.

use validator::ValidateEmail;

use crate::db::{DbError, GuestStore};
use crate::models::{GuestDraft, GuestId, ValidationError, ValidationErrors};

/// Check a draft against the required-field, uniqueness and format rules.
///
/// `exclude_id` is the guest being updated, so it doesn't collide with its
/// own phone or email. An empty return value means the draft is valid.
///
/// # Errors
///
/// Only store failures are errors; rule violations are returned as data.
pub async fn validate_guest(
    store: &dyn GuestStore,
    draft: &GuestDraft,
    exclude_id: Option<GuestId>,
) -> Result<ValidationErrors, DbError> {
    let mut errors = ValidationErrors::new();

    if draft.first_name().is_none() {
        errors.record(ValidationError::Empty { field: "first_name" });
    }

    if draft.last_name().is_none() {
        errors.record(ValidationError::Empty { field: "last_name" });
    }

    if draft.phone().is_none() {
        errors.record(ValidationError::Empty { field: "phone" });
    }

    if let Some(email) = draft.email() {
        if store.email_exists(email, exclude_id).await? {
            errors.record(ValidationError::AlreadyExists { field: "email" });
        }
    }

    // An empty phone is already reported above; looking it up would only
    // replace that message.
    if let Some(phone) = draft.phone() {
        if store.phone_exists(phone, exclude_id).await? {
            errors.record(ValidationError::AlreadyExists { field: "phone" });
        }
    }

    if let Some(email) = draft.email() {
        if !email.validate_email() || !has_dotted_domain(email) {
            errors.record(ValidationError::InvalidFormat { field: "email" });
        }
    }

    Ok(errors)
}

/// `validator` follows RFC 5321 and accepts single-label domains such as
/// `user@localhost`; guest addresses must name a dotted domain or an
/// address literal.
fn has_dotted_domain(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => {
            (domain.starts_with('[') && domain.ends_with(']'))
                || domain.split('.').filter(|label| !label.is_empty()).count() >= 2
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryGuestStore;

    fn draft(first: &str, last: &str, phone: &str, email: Option<&str>) -> GuestDraft {
        GuestDraft {
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            email: email.map(str::to_owned),
            phone: Some(phone.into()),
            country: None,
        }
    }

    #[tokio::test]
    async fn valid_draft_has_no_errors() {
        let store = MemoryGuestStore::new();
        let errors = validate_guest(&store, &draft("A", "B", "+7111", Some("a@b.com")), None)
            .await
            .unwrap();
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn all_missing_fields_reported_together() {
        let store = MemoryGuestStore::new();
        let errors = validate_guest(&store, &GuestDraft::default(), None)
            .await
            .unwrap();

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["first_name", "last_name", "phone"]);
    }

    #[tokio::test]
    async fn taken_phone_is_reported() {
        let store = MemoryGuestStore::new();
        store.create(&draft("A", "B", "+7111", None)).await.unwrap();

        let errors = validate_guest(&store, &draft("C", "D", "+7111", None), None)
            .await
            .unwrap();
        assert_eq!(
            errors.get("phone"),
            Some(&ValidationError::AlreadyExists { field: "phone" })
        );
    }

    #[tokio::test]
    async fn own_phone_is_not_a_collision() {
        let store = MemoryGuestStore::new();
        let id = store.create(&draft("A", "B", "+7111", None)).await.unwrap();

        let errors = validate_guest(&store, &draft("A", "B", "+7111", None), Some(id))
            .await
            .unwrap();
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn malformed_email_wins_over_taken_email() {
        let store = MemoryGuestStore::new();
        store
            .create(&draft("A", "B", "+7111", Some("not-an-email")))
            .await
            .unwrap();

        let errors = validate_guest(&store, &draft("C", "D", "+7222", Some("not-an-email")), None)
            .await
            .unwrap();
        assert_eq!(
            errors.get("email"),
            Some(&ValidationError::InvalidFormat { field: "email" })
        );
    }

    #[tokio::test]
    async fn empty_phone_is_not_looked_up() {
        let store = MemoryGuestStore::new();
        // A row with an empty phone can only come from outside the service.
        store.create(&draft("A", "B", "", None)).await.unwrap();

        let errors = validate_guest(&store, &draft("C", "D", "", None), None)
            .await
            .unwrap();
        assert_eq!(
            errors.get("phone"),
            Some(&ValidationError::Empty { field: "phone" })
        );
    }

    #[tokio::test]
    async fn empty_email_is_skipped() {
        let store = MemoryGuestStore::new();
        let errors = validate_guest(&store, &draft("A", "B", "+7111", Some("")), None)
            .await
            .unwrap();
        assert!(errors.get("email").is_none());
    }

    #[tokio::test]
    async fn dotless_domain_is_invalid() {
        let store = MemoryGuestStore::new();
        for email in ["a@b", "guest@localhost"] {
            let errors = validate_guest(&store, &draft("A", "B", "+7111", Some(email)), None)
                .await
                .unwrap();
            assert_eq!(
                errors.get("email"),
                Some(&ValidationError::InvalidFormat { field: "email" }),
                "{}",
                email
            );
        }
    }

    #[test]
    fn dotted_domain_check() {
        assert!(has_dotted_domain("a@example.com"));
        assert!(has_dotted_domain("a@mail.example.co.uk"));
        assert!(has_dotted_domain("a@[127.0.0.1]"));
        assert!(!has_dotted_domain("a@b"));
        assert!(!has_dotted_domain("a@b."));
        assert!(!has_dotted_domain("no-at-sign"));
    }

    #[tokio::test]
    async fn zero_is_a_present_value() {
        let store = MemoryGuestStore::new();
        let errors = validate_guest(&store, &draft("0", "0", "0", None), None)
            .await
            .unwrap();
        assert!(errors.is_empty());
    }
}
