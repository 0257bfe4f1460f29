//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, UserDraft, UserId, UserValidationError};

const MISSING_FIELD_CODE: &str = "missing_field";

pub(crate) fn missing_field_error(field: &str) -> Error {
    Error::invalid_request("Todos los campos son obligatorios.").with_details(json!({
        "field": field,
        "code": MISSING_FIELD_CODE,
    }))
}

pub(crate) fn map_user_validation_error(err: UserValidationError) -> Error {
    missing_field_error(err.field())
}

/// Parse a path segment into a [`UserId`].
///
/// Segments that are not non-negative decimal integers name no stored record,
/// so callers treat `None` as an unknown identifier rather than a bad request.
pub(crate) fn parse_user_id(raw: &str) -> Option<UserId> {
    raw.parse().ok()
}

/// Validate optional body fields into a [`UserDraft`].
pub(crate) fn parse_draft(
    email: Option<String>,
    nombre: Option<String>,
    apellidos: Option<String>,
) -> Result<UserDraft, Error> {
    UserDraft::try_from_parts(email, nombre, apellidos).map_err(map_user_validation_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case("12", Some(12))]
    #[case("0", Some(0))]
    #[case("abc", None)]
    #[case("1.5", None)]
    #[case("-1", None)]
    #[case("", None)]
    fn parse_user_id_accepts_only_decimal_integers(
        #[case] raw: &str,
        #[case] expected: Option<u64>,
    ) {
        assert_eq!(parse_user_id(raw).map(UserId::get), expected);
    }

    #[rstest]
    fn parse_draft_names_missing_field() {
        let err = parse_draft(Some("a@b.com".to_owned()), Some("Ana".to_owned()), None)
            .expect_err("apellidos missing");
        let details = err.details().expect("details present");
        assert_eq!(details.get("field").and_then(Value::as_str), Some("apellidos"));
        assert_eq!(details.get("code").and_then(Value::as_str), Some("missing_field"));
    }
}
