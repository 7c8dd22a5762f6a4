#![cfg(test)]
use std::fs;
use std::path::PathBuf;

use rentr_core::fleet;
use rentr_core::ledger::RentalLedger;
use rentr_core::records::FileRecordLog;

fn scratch_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "rentr-it-{}-{name}.txt",
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn rentals_are_appended_to_the_file() {
    let path = scratch_path("ledger");
    let mut ledger =
        RentalLedger::with_fleet(Box::new(FileRecordLog::new(&path)), fleet::default_fleet());

    let ada = ledger.register_customer("Ada");
    let grace = ledger.register_customer("Grace");
    ledger.rent_car("C001", &ada, 2, false).unwrap();
    ledger.rent_car("C003", &grace, 9, true).unwrap();
    ledger.return_car("C001").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        [
            "Customer ID: CUS1, Customer Name: Ada, Car: Toyota Camry (Sedan, Petrol), Rental Days: 2",
            "Customer ID: CUS2, Customer Name: Grace, Car: Mahindra Thar (SUV, Diesel), Rental Days: 9",
        ]
    );
    assert!(contents.ends_with('\n'));
    let _ = fs::remove_file(&path);
}

#[test]
fn unwritable_log_does_not_undo_the_rental() {
    let dir = std::env::temp_dir().join(format!("rentr-it-{}-missing", std::process::id()));
    let path = dir.join("nested").join("rental_records.txt");
    let mut ledger =
        RentalLedger::with_fleet(Box::new(FileRecordLog::new(&path)), fleet::default_fleet());
    let ada = ledger.register_customer("Ada");

    let receipt = ledger.rent_car("C002", &ada, 1, false).unwrap();

    let err = receipt.record_error.expect("the write should have failed");
    assert!(err.to_string().starts_with("Error saving rental record:"));
    assert!(!ledger.car("C002").unwrap().is_available());
    assert_eq!(ledger.rentals().count(), 1);
    assert!(!path.exists());
}
