//! # Rental Ledger
//!
//! The aggregate that owns every car, every customer and the active rentals.
//!
//! Cars are looked up by id, first match wins. Active rentals are indexed by
//! the id of the car they hold, which keeps "one active rental per car" a
//! property of the index itself.
//!
//! Completed rentals are handed to a [`RecordLog`] after the in-memory state
//! has been updated. A failing log never rolls the rental back; the error is
//! returned on the [`RentReceipt`] instead.

use std::collections::BTreeMap;

use rentr_common::error::{RentalError, Result};
use rentr_common::models::car::Car;
use rentr_common::models::customer::Customer;
use rentr_common::models::rental::Rental;
use rentr_common::records::{RecordLog, RentalRecord};
use tracing::{debug, trace};

/// Outcome of a successful [`RentalLedger::rent_car`].
#[derive(Debug)]
pub struct RentReceipt {
    pub rental: Rental,
    pub total_price: f64,
    /// Set when the record line could not be written.
    pub record_error: Option<RentalError>,
}

pub struct RentalLedger {
    cars: Vec<Car>,
    customers: Vec<Customer>,
    rentals: BTreeMap<String, Rental>,
    record_log: Box<dyn RecordLog>,
}

impl RentalLedger {
    pub fn new(record_log: Box<dyn RecordLog>) -> Self {
        Self {
            cars: Vec::new(),
            customers: Vec::new(),
            rentals: BTreeMap::new(),
            record_log,
        }
    }

    /// Creates a ledger that starts out with `cars` in its catalog.
    pub fn with_fleet(record_log: Box<dyn RecordLog>, cars: Vec<Car>) -> Self {
        let mut ledger = Self::new(record_log);
        for car in cars {
            ledger.add_car(car);
        }
        ledger
    }

    pub fn add_car(&mut self, car: Car) {
        trace!(car_id = car.id(), "car added to catalog");
        self.cars.push(car);
    }

    pub fn add_customer(&mut self, customer: Customer) {
        trace!(customer_id = customer.id(), "customer added to roster");
        self.customers.push(customer);
    }

    /// The customer that [`register_customer`](Self::register_customer) would
    /// create for `name` right now, without adding it.
    pub fn next_customer(&self, name: &str) -> Customer {
        Customer::numbered(self.customers.len() + 1, name)
    }

    /// Adds a new customer with the next sequential id and returns it.
    pub fn register_customer(&mut self, name: &str) -> Customer {
        let customer = self.next_customer(name);
        self.add_customer(customer.clone());
        customer
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn available_cars(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter().filter(|car| car.is_available())
    }

    pub fn car(&self, car_id: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.id() == car_id)
    }

    /// The car with `car_id` if it can be rented right now.
    pub fn available_car(&self, car_id: &str) -> Result<&Car> {
        self.car(car_id)
            .filter(|car| car.is_available())
            .ok_or_else(|| RentalError::InvalidSelection {
                car_id: car_id.to_owned(),
            })
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|customer| customer.id() == customer_id)
    }

    pub fn rentals(&self) -> impl Iterator<Item = &Rental> {
        self.rentals.values()
    }

    pub fn rental_for(&self, car_id: &str) -> Option<&Rental> {
        self.rentals.get(car_id)
    }

    /// Rents the car with `car_id` to `customer`.
    ///
    /// The car is marked rented and the rental stored before the record line
    /// is written.
    ///
    /// # Errors
    /// * [`RentalError::UnknownCar`] if no car has this id.
    /// * [`RentalError::CarUnavailable`] if the car is already rented.
    pub fn rent_car(
        &mut self,
        car_id: &str,
        customer: &Customer,
        days: u32,
        is_weekend: bool,
    ) -> Result<RentReceipt> {
        let idx = self.position(car_id)?;
        let car = &mut self.cars[idx];
        if !car.is_available() {
            debug!(car_id, "rent rejected, car already rented");
            return Err(RentalError::CarUnavailable {
                car_id: car_id.to_owned(),
            });
        }

        car.rent();
        let total_price = car.calculate_price(days, is_weekend);
        let rental = Rental::new(car_id, customer.id(), days, is_weekend);
        self.rentals.insert(car_id.to_owned(), rental.clone());
        debug!(car_id, customer_id = customer.id(), days, is_weekend, "car rented");

        let record_error = self
            .save_rental_record(&self.cars[idx], customer, days)
            .err();

        Ok(RentReceipt {
            rental,
            total_price,
            record_error,
        })
    }

    /// Closes the active rental on the car with `car_id` and returns it.
    ///
    /// # Errors
    /// * [`RentalError::UnknownCar`] if no car has this id.
    /// * [`RentalError::NotRented`] if the car has no active rental.
    pub fn return_car(&mut self, car_id: &str) -> Result<Rental> {
        let idx = self.position(car_id)?;
        let Some(rental) = self.rentals.remove(car_id) else {
            debug!(car_id, "return rejected, no active rental");
            return Err(RentalError::NotRented {
                car_id: car_id.to_owned(),
            });
        };

        self.cars[idx].return_car();
        debug!(car_id, customer_id = rental.customer_id(), "car returned");
        Ok(rental)
    }

    /// Appends the record line for a completed rental to the record log.
    pub fn save_rental_record(&self, car: &Car, customer: &Customer, days: u32) -> Result<()> {
        let record = RentalRecord::new(car, customer, days);
        if let Err(e) = self.record_log.append(&record) {
            debug!(error = %e, car_id = car.id(), "rental record not saved");
            return Err(e.into());
        }
        Ok(())
    }

    fn position(&self, car_id: &str) -> Result<usize> {
        self.cars
            .iter()
            .position(|car| car.id() == car_id)
            .ok_or_else(|| RentalError::UnknownCar {
                car_id: car_id.to_owned(),
            })
    }
}
