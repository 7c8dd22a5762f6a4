//! # rentr-core
//!
//! The rental ledger and the services built on it.
//!
//! * [`ledger`]: the aggregate owning cars, customers and active rentals.
//! * [`booking`]: the quote/confirm flow used by the interactive shell.
//! * [`records`]: file and in-memory [`RecordLog`](rentr_common::records::RecordLog) implementations.
//! * [`fleet`]: the cars every ledger starts with.

pub mod booking;
pub mod fleet;
pub mod ledger;
pub mod records;
