//! Tests for the user record model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn draft() -> UserDraft {
    UserDraft::try_from_parts(
        Some("a@b.com".to_owned()),
        Some("Ana".to_owned()),
        Some("Lopez".to_owned()),
    )
    .expect("valid draft")
}

#[rstest]
#[case(None, Some("Ana"), Some("Lopez"), "email")]
#[case(Some(""), Some("Ana"), Some("Lopez"), "email")]
#[case(Some("a@b.com"), None, Some("Lopez"), "nombre")]
#[case(Some("a@b.com"), Some("Ana"), Some(""), "apellidos")]
#[case(None, None, None, "email")]
fn draft_reports_first_missing_field(
    #[case] email: Option<&str>,
    #[case] nombre: Option<&str>,
    #[case] apellidos: Option<&str>,
    #[case] expected: &str,
) {
    let err = UserDraft::try_from_parts(
        email.map(str::to_owned),
        nombre.map(str::to_owned),
        apellidos.map(str::to_owned),
    )
    .expect_err("draft must be rejected");
    assert_eq!(err.field(), expected);
    assert_eq!(err.to_string(), format!("missing required field: {expected}"));
}

#[rstest]
#[case("1", Some(1))]
#[case("007", Some(7))]
#[case("abc", None)]
#[case("12abc", None)]
#[case("-1", None)]
#[case("", None)]
fn user_id_parses_strict_decimal(#[case] raw: &str, #[case] expected: Option<u64>) {
    assert_eq!(raw.parse::<UserId>().ok().map(UserId::get), expected);
}

#[rstest]
fn user_serialises_with_lowercase_keys_and_numeric_id(draft: UserDraft) {
    let user = User::new(UserId::new(1), draft);
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value,
        json!({ "id": 1, "email": "a@b.com", "nombre": "Ana", "apellidos": "Lopez" })
    );
}

#[rstest]
fn replace_fields_preserves_identifier(draft: UserDraft) {
    let mut user = User::new(UserId::new(9), draft);
    let replacement = UserDraft::try_from_parts(
        Some("z@y.com".to_owned()),
        Some("Zoe".to_owned()),
        Some("Ruiz Diaz".to_owned()),
    )
    .expect("valid draft");

    user.replace_fields(replacement);

    assert_eq!(user.id(), UserId::new(9));
    assert_eq!(user.email(), "z@y.com");
    assert_eq!(user.nombre(), "Zoe");
    assert_eq!(user.apellidos(), "Ruiz Diaz");
}
