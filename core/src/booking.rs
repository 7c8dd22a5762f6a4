//! # Booking Desk
//!
//! Runs the two-step rental flow on top of a [`RentalLedger`]: a customer is
//! quoted a price for a car, then confirms or declines.
//!
//! When the customer joins the roster is decided by [`CustomerRegistration`].
//! With `OnQuote` the customer is registered as soon as the quote is produced
//! and stays registered if the quote is declined. With `OnConfirm` nothing is
//! registered until [`BookingDesk::confirm`].

use rentr_common::config::CustomerRegistration;
use rentr_common::error::Result;
use rentr_common::models::car::Car;
use rentr_common::models::customer::Customer;
use rentr_common::models::rental::Rental;
use tracing::debug;

use crate::ledger::{RentReceipt, RentalLedger};

/// A priced, not yet confirmed booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    customer: Customer,
    car: Car,
    days: u32,
    is_weekend: bool,
    total_price: f64,
}

impl Quote {
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Snapshot of the car at the time of quoting.
    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn is_weekend(&self) -> bool {
        self.is_weekend
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }
}

/// A closed rental together with the customer who held it.
#[derive(Debug)]
pub struct ReturnReceipt {
    pub rental: Rental,
    pub customer: Option<Customer>,
}

pub struct BookingDesk {
    ledger: RentalLedger,
    registration: CustomerRegistration,
}

impl BookingDesk {
    pub fn new(ledger: RentalLedger, registration: CustomerRegistration) -> Self {
        Self {
            ledger,
            registration,
        }
    }

    pub fn ledger(&self) -> &RentalLedger {
        &self.ledger
    }

    /// Prices `days` of `car_id` for `customer_name`.
    ///
    /// # Errors
    /// [`RentalError::InvalidSelection`](rentr_common::error::RentalError::InvalidSelection)
    /// if the id matches no car or the car is rented out. No customer is
    /// registered in that case.
    pub fn quote(
        &mut self,
        customer_name: &str,
        car_id: &str,
        days: u32,
        is_weekend: bool,
    ) -> Result<Quote> {
        let car = self.ledger.available_car(car_id)?.clone();
        let total_price = car.calculate_price(days, is_weekend);

        let customer = match self.registration {
            CustomerRegistration::OnQuote => self.ledger.register_customer(customer_name),
            CustomerRegistration::OnConfirm => self.ledger.next_customer(customer_name),
        };

        debug!(car_id, customer_id = customer.id(), total_price, "quote issued");
        Ok(Quote {
            customer,
            car,
            days,
            is_weekend,
            total_price,
        })
    }

    /// Turns `quote` into an active rental.
    ///
    /// # Errors
    /// Whatever [`RentalLedger::rent_car`] rejects with. Under `OnConfirm`
    /// the customer is only registered once the rental went through.
    pub fn confirm(&mut self, quote: Quote) -> Result<RentReceipt> {
        // The id handed out with the quote is only provisional here.
        let customer = match self.registration {
            CustomerRegistration::OnQuote => quote.customer,
            CustomerRegistration::OnConfirm => self.ledger.next_customer(quote.customer.name()),
        };

        let receipt =
            self.ledger
                .rent_car(quote.car.id(), &customer, quote.days, quote.is_weekend)?;

        if self.registration == CustomerRegistration::OnConfirm {
            self.ledger.add_customer(customer);
        }
        Ok(receipt)
    }

    pub fn decline(&mut self, quote: Quote) {
        debug!(
            car_id = quote.car.id(),
            customer_id = quote.customer.id(),
            registration = %self.registration,
            "quote declined"
        );
    }

    /// Closes the rental on `car_id` and looks up who held it.
    pub fn return_car(&mut self, car_id: &str) -> Result<ReturnReceipt> {
        let rental = self.ledger.return_car(car_id)?;
        let customer = self.ledger.customer(rental.customer_id()).cloned();
        Ok(ReturnReceipt { rental, customer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet;
    use crate::records::MemoryRecordLog;
    use rentr_common::error::RentalError;

    fn desk(registration: CustomerRegistration) -> (BookingDesk, MemoryRecordLog) {
        let log = MemoryRecordLog::default();
        let ledger = RentalLedger::with_fleet(Box::new(log.clone()), fleet::default_fleet());
        (BookingDesk::new(ledger, registration), log)
    }

    #[test]
    fn quote_prices_the_booking() {
        let (mut desk, _) = desk(CustomerRegistration::OnQuote);
        let quote = desk.quote("Ada", "C003", 8, true).unwrap();
        assert!((quote.total_price() - 1188.0).abs() < 1e-9);
        assert_eq!(quote.car().id(), "C003");
        assert_eq!(quote.customer().id(), "CUS1");
    }

    #[test]
    fn declined_quote_keeps_customer_on_quote_policy() {
        let (mut desk, log) = desk(CustomerRegistration::OnQuote);
        let quote = desk.quote("Ada", "C001", 2, false).unwrap();
        desk.decline(quote);

        assert_eq!(desk.ledger().customers().len(), 1);
        assert_eq!(desk.ledger().rentals().count(), 0);
        assert!(desk.ledger().car("C001").unwrap().is_available());
        assert!(log.lines().is_empty());
    }

    #[test]
    fn declined_quote_leaves_roster_alone_on_confirm_policy() {
        let (mut desk, _) = desk(CustomerRegistration::OnConfirm);
        let quote = desk.quote("Ada", "C001", 2, false).unwrap();
        assert_eq!(quote.customer().id(), "CUS1");
        desk.decline(quote);

        assert!(desk.ledger().customers().is_empty());
    }

    #[test]
    fn confirm_registers_customer_on_confirm_policy() {
        let (mut desk, log) = desk(CustomerRegistration::OnConfirm);
        let quote = desk.quote("Ada", "C002", 2, false).unwrap();
        let receipt = desk.confirm(quote).unwrap();

        assert_eq!(desk.ledger().customers().len(), 1);
        assert_eq!(desk.ledger().customers()[0].id(), "CUS1");
        assert_eq!(receipt.rental.customer_id(), "CUS1");
        assert_eq!(log.lines().len(), 1);
    }

    #[test]
    fn confirm_does_not_register_twice_on_quote_policy() {
        let (mut desk, _) = desk(CustomerRegistration::OnQuote);
        let quote = desk.quote("Ada", "C002", 2, false).unwrap();
        desk.confirm(quote).unwrap();
        assert_eq!(desk.ledger().customers().len(), 1);
    }

    #[test]
    fn invalid_selection_registers_nobody() {
        let (mut desk, _) = desk(CustomerRegistration::OnQuote);
        let err = desk.quote("Ada", "C404", 1, false).unwrap_err();

        assert!(matches!(err, RentalError::InvalidSelection { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid car selection or car not available for rent."
        );
        assert!(desk.ledger().customers().is_empty());
    }

    #[test]
    fn rented_car_cannot_be_quoted() {
        let (mut desk, _) = desk(CustomerRegistration::OnQuote);
        let quote = desk.quote("Ada", "C001", 1, false).unwrap();
        desk.confirm(quote).unwrap();

        assert!(desk.quote("Grace", "C001", 1, false).is_err());
    }

    #[test]
    fn stale_quote_is_rejected_on_confirm() {
        let (mut desk, _) = desk(CustomerRegistration::OnConfirm);
        let first = desk.quote("Ada", "C001", 1, false).unwrap();
        let second = desk.quote("Grace", "C001", 3, false).unwrap();
        desk.confirm(first).unwrap();

        let err = desk.confirm(second).unwrap_err();
        assert!(matches!(err, RentalError::CarUnavailable { .. }));
        assert_eq!(desk.ledger().customers().len(), 1);
    }

    #[test]
    fn overlapping_quotes_get_distinct_ids_on_confirm() {
        let (mut desk, _) = desk(CustomerRegistration::OnConfirm);
        let first = desk.quote("Ada", "C001", 1, false).unwrap();
        let second = desk.quote("Grace", "C002", 1, false).unwrap();

        let a = desk.confirm(first).unwrap();
        let b = desk.confirm(second).unwrap();

        assert_eq!(a.rental.customer_id(), "CUS1");
        assert_eq!(b.rental.customer_id(), "CUS2");
        assert_eq!(desk.ledger().customer("CUS2").unwrap().name(), "Grace");
    }

    #[test]
    fn return_reports_the_customer() {
        let (mut desk, _) = desk(CustomerRegistration::OnQuote);
        let quote = desk.quote("Ada", "C003", 8, true).unwrap();
        desk.confirm(quote).unwrap();

        let receipt = desk.return_car("C003").unwrap();

        assert_eq!(receipt.customer.map(|c| c.name().to_owned()), Some("Ada".to_owned()));
        assert!(desk.ledger().car("C003").unwrap().is_available());
        assert!(desk.ledger().rental_for("C003").is_none());
    }
}
