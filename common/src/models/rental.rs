/// An active rental.
///
/// Holds the ids of the car and customer it links; both outlive the rental.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rental {
    car_id: String,
    customer_id: String,
    days: u32,
    is_weekend: bool,
}

impl Rental {
    pub fn new(
        car_id: impl Into<String>,
        customer_id: impl Into<String>,
        days: u32,
        is_weekend: bool,
    ) -> Self {
        Self {
            car_id: car_id.into(),
            customer_id: customer_id.into(),
            days,
            is_weekend,
        }
    }

    pub fn car_id(&self) -> &str {
        &self.car_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn is_weekend(&self) -> bool {
        self.is_weekend
    }
}
