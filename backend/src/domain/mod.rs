//! Domain primitives, ports and services.
//!
//! Purpose: define the user record model and the use-cases that operate on
//! it, independent of HTTP and of the on-disk format. Inbound adapters call
//! the driving ports in [`ports`]; outbound adapters implement the driven
//! ones.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User / UserId / UserDraft: the record model.
//! - IdAllocator: identifier source rebuilt from the store at start-up.
//! - UserService: CRUD use-cases over a record store.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod id_allocator;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::id_allocator::IdAllocator;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    APELLIDOS_FIELD, EMAIL_FIELD, NOMBRE_FIELD, User, UserDraft, UserId, UserValidationError,
};
pub use self::user_service::{USER_NOT_FOUND_MESSAGE, UserService};
