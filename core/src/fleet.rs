//! The fleet every ledger starts with.

use rentr_common::models::car::Car;

/// The three cars that are in the catalog at launch.
pub fn default_fleet() -> Vec<Car> {
    vec![
        Car::new("C001", "Toyota", "Camry", 60.0, "Sedan", "Petrol"),
        Car::new("C002", "Honda", "Accord", 70.0, "Sedan", "Diesel"),
        Car::new("C003", "Mahindra", "Thar", 150.0, "SUV", "Diesel"),
    ]
}
