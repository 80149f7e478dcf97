//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, RawPathParams, Request};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{GuestId, GuestPayload};

/// Second path segment under `/guests`.
///
/// Numeric segments address a guest; anything else falls back to the
/// collection, so `GET /guests/abc` lists guests. "Numeric" follows the
/// usual loose reading: surrounding whitespace, a sign, a fraction and an
/// exponent are all allowed, and the value is truncated toward zero, so
/// `/guests/1.0` and `/guests/1e0` both name guest 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestSegment {
    Id(GuestId),
    /// Numeric, but outside the id type. No such guest can exist.
    OutOfRange(String),
    Collection,
}

impl GuestSegment {
    /// Classify a raw path segment.
    pub fn parse(segment: &str) -> Self {
        let Some(literal) = numeric_literal(segment) else {
            return Self::Collection;
        };

        let id = match literal.parse::<i64>() {
            Ok(whole) => GuestId::try_from(whole).ok(),
            Err(_) => literal
                .parse::<f64>()
                .ok()
                .map(f64::trunc)
                .filter(|n| *n >= f64::from(GuestId::MIN) && *n <= f64::from(GuestId::MAX))
                .map(|n| n as GuestId),
        };

        match id {
            Some(id) => Self::Id(id),
            None => Self::OutOfRange(segment.to_owned()),
        }
    }

    /// The addressed guest, or `NotFound` for an id that can't exist.
    ///
    /// `None` for the collection.
    pub fn member(&self) -> Option<Result<GuestId, ApiError>> {
        match self {
            Self::Id(id) => Some(Ok(*id)),
            Self::OutOfRange(raw) => Some(Err(ApiError::NotFound {
                resource: "Guest",
                id: raw.clone(),
            })),
            Self::Collection => None,
        }
    }
}

/// Trim `segment` and return it if it reads as a decimal number:
/// optional sign, digits with an optional fraction, optional exponent.
fn numeric_literal(segment: &str) -> Option<&str> {
    let text = segment.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'));
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !digits(whole) || !digits(fraction) {
        return None;
    }

    if let Some(exponent) = exponent {
        let magnitude = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if magnitude.is_empty() || !digits(magnitude) {
            return None;
        }
    }

    Some(text)
}

impl<S> FromRequestParts<S> for GuestSegment
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::RouteNotFound)?;

        let segment = params
            .iter()
            .find(|(key, _)| *key == "segment")
            .map(|(_, value)| value)
            .unwrap_or_default();

        Ok(Self::parse(segment))
    }
}

/// Guest request body, parsed regardless of `Content-Type`.
pub struct JsonPayload(pub GuestPayload);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                reason: e.body_text(),
            })?;

        Ok(Self(parse_payload(&bytes)?))
    }
}

/// Parse a guest body. An empty body is an empty payload.
pub fn parse_payload(bytes: &[u8]) -> Result<GuestPayload, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(GuestPayload::default());
    }

    serde_json::from_slice(bytes).map_err(|e| ApiError::BadRequest {
        reason: format!("Invalid JSON body: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segment_is_id() {
        assert_eq!(GuestSegment::parse("42"), GuestSegment::Id(42));
        assert_eq!(GuestSegment::parse("007"), GuestSegment::Id(7));
        assert_eq!(GuestSegment::parse("+3"), GuestSegment::Id(3));
        assert_eq!(GuestSegment::parse(" 12"), GuestSegment::Id(12));
        assert_eq!(GuestSegment::parse("12 "), GuestSegment::Id(12));
    }

    #[test]
    fn signed_and_fractional_segments_truncate() {
        assert_eq!(GuestSegment::parse("-1"), GuestSegment::Id(-1));
        assert_eq!(GuestSegment::parse("1.0"), GuestSegment::Id(1));
        assert_eq!(GuestSegment::parse("1.9"), GuestSegment::Id(1));
        assert_eq!(GuestSegment::parse("-0.5"), GuestSegment::Id(0));
        assert_eq!(GuestSegment::parse("1e0"), GuestSegment::Id(1));
        assert_eq!(GuestSegment::parse("2E+1"), GuestSegment::Id(20));
        assert_eq!(GuestSegment::parse(".5"), GuestSegment::Id(0));
        assert_eq!(GuestSegment::parse("3."), GuestSegment::Id(3));
    }

    #[test]
    fn non_numeric_segment_is_collection() {
        for segment in ["abc", "", "-", "+", ".", "1e", "e5", "1.2.3", "0x1A", "inf", "NaN", "1 2", "12abc"] {
            assert_eq!(GuestSegment::parse(segment), GuestSegment::Collection, "{:?}", segment);
        }
    }

    #[test]
    fn overflowing_id_is_out_of_range() {
        for segment in ["99999999999999", "99999999999999999999999", "1e10", "-3e9"] {
            let parsed = GuestSegment::parse(segment);
            assert_eq!(parsed, GuestSegment::OutOfRange(segment.to_owned()));
            assert!(matches!(parsed.member(), Some(Err(ApiError::NotFound { .. }))));
        }
    }

    #[test]
    fn member_of_collection_is_none() {
        assert!(GuestSegment::Collection.member().is_none());
        assert!(matches!(GuestSegment::Id(4).member(), Some(Ok(4))));
    }

    #[test]
    fn empty_body_is_empty_payload() {
        assert_eq!(parse_payload(b"").unwrap(), GuestPayload::default());
        assert_eq!(parse_payload(b"  \n").unwrap(), GuestPayload::default());
    }

    #[test]
    fn non_object_body_is_bad_request() {
        assert!(matches!(
            parse_payload(b"[1, 2]").unwrap_err(),
            ApiError::BadRequest { .. }
        ));
        assert!(matches!(
            parse_payload(b"{not json").unwrap_err(),
            ApiError::BadRequest { .. }
        ));
    }
}
