//! The record log port.
//!
//! The ledger describes each completed rental as a [`RentalRecord`] and hands
//! it to a [`RecordLog`]. Where the line ends up is up to the implementation.

use std::fmt;
use std::io;

use crate::models::car::Car;
use crate::models::customer::Customer;

/// One line of the rental log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalRecord {
    pub customer_id: String,
    pub customer_name: String,
    pub car: String,
    pub days: u32,
}

impl RentalRecord {
    pub fn new(car: &Car, customer: &Customer, days: u32) -> Self {
        Self {
            customer_id: customer.id().to_owned(),
            customer_name: customer.name().to_owned(),
            car: car.description(),
            days,
        }
    }
}

impl fmt::Display for RentalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer ID: {}, Customer Name: {}, Car: {}, Rental Days: {}",
            self.customer_id, self.customer_name, self.car, self.days
        )
    }
}

/// Append-only sink for rental records.
pub trait RecordLog {
    /// Appends `record` as a single line.
    ///
    /// # Errors
    /// Returns the underlying I/O error. Callers treat it as non-fatal.
    fn append(&self, record: &RentalRecord) -> io::Result<()>;
}
