//! # Domain Models
//!
//! The entities the ledger works with.
//!
//! * [`car::Car`]: a rentable vehicle with its daily rate and availability flag.
//! * [`customer::Customer`]: a person a car was rented to.
//! * [`rental::Rental`]: an active link between a car and a customer.
//!
//! Models refer to each other by id, never by reference. The ledger owns the
//! collections and resolves ids when it needs the full entity.

pub mod car;
pub mod customer;
pub mod rental;
