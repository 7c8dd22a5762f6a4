#![cfg(test)]
use rentr_common::config::CustomerRegistration;
use rentr_common::error::RentalError;
use rentr_core::booking::BookingDesk;
use rentr_core::fleet;
use rentr_core::ledger::RentalLedger;
use rentr_core::records::MemoryRecordLog;

fn seeded_desk(registration: CustomerRegistration) -> (BookingDesk, MemoryRecordLog) {
    let log = MemoryRecordLog::default();
    let ledger = RentalLedger::with_fleet(Box::new(log.clone()), fleet::default_fleet());
    (BookingDesk::new(ledger, registration), log)
}

/// Rent the Thar for a long weekend, then bring it back.
#[test]
fn thar_long_weekend_round_trip() {
    let (mut desk, log) = seeded_desk(CustomerRegistration::OnQuote);

    let quote = desk.quote("Ada Lovelace", "C003", 8, true).unwrap();
    assert!(
        (quote.total_price() - 1188.0).abs() < 1e-9,
        "unexpected price {}",
        quote.total_price()
    );

    let receipt = desk.confirm(quote).unwrap();
    assert!(receipt.record_error.is_none());
    assert!(!desk.ledger().car("C003").unwrap().is_available());
    assert_eq!(desk.ledger().rental_for("C003"), Some(&receipt.rental));

    let returned = desk.return_car("C003").unwrap();
    assert_eq!(returned.rental, receipt.rental);
    assert_eq!(returned.customer.unwrap().name(), "Ada Lovelace");
    assert!(desk.ledger().car("C003").unwrap().is_available());
    assert!(desk.ledger().rentals().all(|r| r.car_id() != "C003"));

    assert_eq!(
        log.lines(),
        ["Customer ID: CUS1, Customer Name: Ada Lovelace, Car: Mahindra Thar (SUV, Diesel), Rental Days: 8"]
    );
}

#[test]
fn whole_fleet_can_be_out_at_once() {
    let (mut desk, log) = seeded_desk(CustomerRegistration::OnQuote);

    for (name, car_id) in [("Ada", "C001"), ("Grace", "C002"), ("Linus", "C003")] {
        let quote = desk.quote(name, car_id, 2, false).unwrap();
        desk.confirm(quote).unwrap();
    }

    assert_eq!(desk.ledger().available_cars().count(), 0);
    assert_eq!(desk.ledger().rentals().count(), 3);
    assert_eq!(log.lines().len(), 3);

    let err = desk.quote("Ken", "C001", 1, false).unwrap_err();
    assert!(matches!(err, RentalError::InvalidSelection { .. }));
}

#[test]
fn second_rent_of_same_car_is_rejected() {
    let (mut desk, _) = seeded_desk(CustomerRegistration::OnQuote);
    let first = desk.quote("Ada", "C001", 3, false).unwrap();
    let second = desk.quote("Grace", "C001", 3, false).unwrap();

    desk.confirm(first).unwrap();
    let err = desk.confirm(second).unwrap_err();

    assert_eq!(err.to_string(), "Car is not available for rent.");
    assert_eq!(desk.ledger().rentals().count(), 1);
    // Both quotes registered their customer up front.
    assert_eq!(desk.ledger().customers().len(), 2);
}

#[test]
fn return_without_rental_changes_nothing() {
    let (mut desk, _) = seeded_desk(CustomerRegistration::OnQuote);
    let before: Vec<bool> = desk.ledger().cars().iter().map(|c| c.is_available()).collect();

    let err = desk.return_car("C002").unwrap_err();

    assert_eq!(err.to_string(), "Car was not rented.");
    let after: Vec<bool> = desk.ledger().cars().iter().map(|c| c.is_available()).collect();
    assert_eq!(before, after);
    assert_eq!(desk.ledger().rentals().count(), 0);
}

#[test]
fn car_can_be_rented_again_after_return() {
    let (mut desk, log) = seeded_desk(CustomerRegistration::OnConfirm);

    let quote = desk.quote("Ada", "C002", 1, false).unwrap();
    desk.confirm(quote).unwrap();
    desk.return_car("C002").unwrap();

    let quote = desk.quote("Grace", "C002", 10, true).unwrap();
    assert_eq!(quote.customer().id(), "CUS2");
    let receipt = desk.confirm(quote).unwrap();

    assert!((receipt.total_price - 70.0 * 10.0 * 1.10 * 0.90).abs() < 1e-9);
    assert_eq!(log.lines().len(), 2);
    assert!(log.lines()[1].starts_with("Customer ID: CUS2, Customer Name: Grace"));
}
