//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: CSV-file-backed user record store.

pub mod persistence;
