//! User record model.
//!
//! A [`User`] is one row of the record store: an allocator-assigned
//! [`UserId`] plus three free-text fields. The identifier is immutable after
//! creation; the text fields are always replaced together through a
//! [`UserDraft`].

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Email field wire name.
pub const EMAIL_FIELD: &str = "email";
/// Given-name field.
pub const NOMBRE_FIELD: &str = "nombre";
/// Surname(s) field.
pub const APELLIDOS_FIELD: &str = "apellidos";

/// Validation errors returned by [`UserDraft::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// A required field was absent or empty.
    MissingField {
        /// Wire name of the offending field.
        field: &'static str,
    },
}

impl UserValidationError {
    /// Wire name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } => field,
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing required field: {field}"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Allocator-assigned user identifier.
///
/// Serialises as a bare JSON number and parses from strict decimal text.
///
/// # Examples
/// ```
/// use usuarios::domain::UserId;
///
/// let id: UserId = "42".parse().expect("decimal id");
/// assert_eq!(id.get(), 42);
/// assert!("4x".parse::<UserId>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Validated field set shared by create and update.
///
/// ## Invariants
/// - `email`, `nombre` and `apellidos` are all non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    email: String,
    nombre: String,
    apellidos: String,
}

impl UserDraft {
    /// Validate optional request fields, reporting the first one missing.
    ///
    /// Fields are checked in the order email, nombre, apellidos.
    ///
    /// # Examples
    /// ```
    /// use usuarios::domain::{UserDraft, UserValidationError};
    ///
    /// let err = UserDraft::try_from_parts(Some("a@b.com".into()), Some(String::new()), None)
    ///     .expect_err("nombre is empty");
    /// assert_eq!(err, UserValidationError::MissingField { field: "nombre" });
    /// ```
    pub fn try_from_parts(
        email: Option<String>,
        nombre: Option<String>,
        apellidos: Option<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            email: require(email, EMAIL_FIELD)?,
            nombre: require(nombre, NOMBRE_FIELD)?,
            apellidos: require(apellidos, APELLIDOS_FIELD)?,
        })
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Given name.
    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    /// Surname(s).
    pub fn apellidos(&self) -> &str {
        &self.apellidos
    }
}

fn require(value: Option<String>, field: &'static str) -> Result<String, UserValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(UserValidationError::MissingField { field }),
    }
}

/// Persisted user record.
///
/// Email uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Allocator-assigned identifier.
    id: UserId,
    /// Contact email.
    #[schema(example = "a@b.com")]
    email: String,
    /// Given name.
    #[schema(example = "Ana")]
    nombre: String,
    /// Surname(s).
    #[schema(example = "Lopez")]
    apellidos: String,
}

impl User {
    /// Build a record from an identifier and a validated draft.
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        let UserDraft {
            email,
            nombre,
            apellidos,
        } = draft;
        Self {
            id,
            email,
            nombre,
            apellidos,
        }
    }

    /// Rebuild a record from stored column values without validation.
    ///
    /// Rows written by other tools may legitimately carry empty fields.
    pub fn from_stored(id: UserId, email: String, nombre: String, apellidos: String) -> Self {
        Self {
            id,
            email,
            nombre,
            apellidos,
        }
    }

    /// Replace every text field, keeping the identifier.
    pub fn replace_fields(&mut self, draft: UserDraft) {
        let id = self.id;
        *self = Self::new(id, draft);
    }

    /// Allocator-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Given name.
    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    /// Surname(s).
    pub fn apellidos(&self) -> &str {
        &self.apellidos
    }
}

#[cfg(test)]
mod tests;
