use std::fmt;

/// Multiplier applied to bookings flagged as weekend rentals.
pub const WEEKEND_SURCHARGE: f64 = 1.10;

/// Multiplier applied once a rental runs longer than [`LONG_TERM_THRESHOLD_DAYS`].
pub const LONG_TERM_DISCOUNT: f64 = 0.90;

pub const LONG_TERM_THRESHOLD_DAYS: u32 = 7;

/// A rentable vehicle.
///
/// Everything except the availability flag is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    id: String,
    brand: String,
    model: String,
    base_price_per_day: f64,
    car_type: String,
    fuel_type: String,
    available: bool,
}

impl Car {
    /// Creates a car that is immediately available for rent.
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        base_price_per_day: f64,
        car_type: impl Into<String>,
        fuel_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            base_price_per_day,
            car_type: car_type.into(),
            fuel_type: fuel_type.into(),
            available: true,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_price_per_day(&self) -> f64 {
        self.base_price_per_day
    }

    pub fn car_type(&self) -> &str {
        &self.car_type
    }

    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Total price for a booking of `rental_days`.
    ///
    /// The weekend surcharge is applied first and the long-term discount is
    /// applied to the surcharged amount. Nothing is rounded along the way.
    pub fn calculate_price(&self, rental_days: u32, is_weekend: bool) -> f64 {
        let mut total_price = self.base_price_per_day * f64::from(rental_days);

        if is_weekend {
            total_price *= WEEKEND_SURCHARGE;
        }

        if rental_days > LONG_TERM_THRESHOLD_DAYS {
            total_price *= LONG_TERM_DISCOUNT;
        }

        total_price
    }

    /// Marks the car as rented. The caller checks availability first.
    pub fn rent(&mut self) {
        self.available = false;
    }

    pub fn return_car(&mut self) {
        self.available = true;
    }

    /// `Brand Model (Type, Fuel)`, the form used in listings and record lines.
    pub fn description(&self) -> String {
        format!(
            "{} {} ({}, {})",
            self.brand, self.model, self.car_type, self.fuel_type
        )
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.description())
    }
}
