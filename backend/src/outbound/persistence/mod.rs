//! Flat-file persistence adapters.
//!
//! Implements the domain [`UserRepository`](crate::domain::ports::UserRepository)
//! port over a single delimited text file. Adapters only translate between
//! rows and domain types; no business logic lives here.

mod csv_user_repository;

pub use csv_user_repository::{CSV_HEADER, CsvUserRepository};
