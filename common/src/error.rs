//! Error type shared by the ledger and the booking desk.
//!
//! Every variant except [`RentalError::Record`] is a business-rule rejection:
//! the operation that produced it changed nothing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentalError {
    #[error("Car is not available for rent.")]
    CarUnavailable { car_id: String },

    #[error("Car was not rented.")]
    NotRented { car_id: String },

    #[error("Invalid car ID: {car_id}")]
    UnknownCar { car_id: String },

    #[error("Invalid car selection or car not available for rent.")]
    InvalidSelection { car_id: String },

    #[error("Error saving rental record: {0}")]
    Record(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RentalError>;
