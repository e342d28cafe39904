//! Core types for call-ledger
//!
//! Shared vocabulary for the schema manager: the table and column catalog,
//! the transcript role domain, and environment helpers. This crate knows
//! nothing about SQL execution; the storage crate reads the catalog and
//! turns it into statements.

mod constants;
mod env_config;
mod error;
mod role;
mod schema;

pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use role::*;
pub use schema::*;
