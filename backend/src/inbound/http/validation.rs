//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs deserialise every field as optional; these helpers turn the
//! optional soup into validated domain values, producing 400 responses with
//! a machine-readable `field`/`code` pair in the error details.

use serde_json::json;

use crate::domain::{Error, LocationStatus};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldErrorCode {
    MissingField,
    EmptyField,
    InvalidField,
}

impl FieldErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::EmptyField => "empty_field",
            Self::InvalidField => "invalid_field",
        }
    }
}

fn field_error(field: &'static str, message: String, code: FieldErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

/// Reject a request missing a required field.
pub(crate) fn missing_field(field: &'static str) -> Error {
    field_error(
        field,
        format!("{field} is required"),
        FieldErrorCode::MissingField,
    )
}

/// Require a string field to be present and non-empty after trimming.
pub(crate) fn require_text(field: &'static str, value: Option<String>) -> Result<String, Error> {
    optional_text(field, value)?.ok_or_else(|| missing_field(field))
}

/// Validate an optional string field, rejecting blank values.
pub(crate) fn optional_text(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, Error> {
    match value {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Err(field_error(
            field,
            format!("{field} must not be empty"),
            FieldErrorCode::EmptyField,
        )),
        Some(text) => Ok(Some(text)),
    }
}

/// Require a numeric field to be present.
pub(crate) fn require_number(field: &'static str, value: Option<f64>) -> Result<f64, Error> {
    value.ok_or_else(|| missing_field(field))
}

/// Parse an optional status string against the two-valued status set.
pub(crate) fn optional_status(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<LocationStatus>, Error> {
    value
        .map(|raw| {
            raw.parse::<LocationStatus>().map_err(|err| {
                Error::invalid_request(format!("{field} must be \"active\" or \"inactive\""))
                    .with_details(json!({
                        "field": field,
                        "value": err.value,
                        "code": FieldErrorCode::InvalidField.as_str(),
                    }))
            })
        })
        .transpose()
}

/// Deserialise a field that distinguishes "absent" from "explicitly null".
///
/// Serde collapses both into `None` by default; wrapping the value in a
/// nested option keeps PATCH merge semantics faithful.
pub(crate) mod double_option {
    use serde::{Deserialize, Deserializer};

    pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn missing_required_text_is_flagged() {
        let err = require_text("title", None).expect_err("missing field");
        assert_eq!(
            err.details().and_then(|d| d.get("code")).cloned(),
            Some(serde_json::json!("missing_field"))
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_text_is_flagged(#[case] raw: &str) {
        let err = require_text("address", Some(raw.to_owned())).expect_err("blank field");
        assert_eq!(
            err.details().and_then(|d| d.get("code")).cloned(),
            Some(serde_json::json!("empty_field"))
        );
    }

    #[test]
    fn absent_optional_text_passes() {
        assert_eq!(optional_text("description", None).expect("valid"), None);
    }

    #[test]
    fn unknown_status_is_flagged_with_value() {
        let err = optional_status("status", Some("paused".to_owned())).expect_err("bad status");
        let details = err.details().expect("details present");
        assert_eq!(details.get("value"), Some(&serde_json::json!("paused")));
    }

    #[test]
    fn known_status_parses() {
        let status = optional_status("status", Some("inactive".to_owned())).expect("valid");
        assert_eq!(status, Some(crate::domain::LocationStatus::Inactive));
    }
}
