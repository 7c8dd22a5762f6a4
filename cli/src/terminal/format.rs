use colored::*;
use rentr_common::models::car::Car;
use rentr_common::models::customer::Customer;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// Two decimals behind a dollar sign, the way totals are quoted.
pub fn price_str(amount: f64) -> String {
    format!("${amount:.2}")
}

pub fn price(amount: f64) -> ColoredString {
    price_str(amount).color(colors::PRICE).bold()
}

pub fn availability(car: &Car) -> ColoredString {
    if car.is_available() {
        "available".color(colors::AVAILABLE)
    } else {
        "rented".color(colors::RENTED)
    }
}

/// Details shown under a car in the fleet tree.
pub fn car_to_details(car: &Car, renter: Option<&Customer>) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        (
            "Rate".to_string(),
            format!("{}/day", price_str(car.base_price_per_day())).color(colors::PRICE),
        ),
        ("Type".to_string(), car.car_type().normal()),
        ("Fuel".to_string(), car.fuel_type().normal()),
        ("Status".to_string(), availability(car)),
    ];

    if let Some(customer) = renter {
        details.push(("Renter".to_string(), customer.to_string().normal()));
    }

    details
}
