//! # rentr-common
//!
//! Shared building blocks for the rental workspace: the domain models, the
//! error type, the runtime [`config::Config`] and the [`records::RecordLog`] port
//! that the ledger writes completed rentals to.

pub mod config;
pub mod error;
pub mod models;
pub mod records;
