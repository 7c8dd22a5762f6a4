use colored::*;
use rentr_common::config::Config;
use rentr_core::ledger::RentalLedger;

use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn fleet(ledger: &RentalLedger, cfg: &Config) -> anyhow::Result<()> {
    print::header("fleet", cfg.quiet);

    let cars = ledger.cars();
    if cars.is_empty() {
        print::no_results("No cars in the catalog.");
        print::end_of_program();
        return Ok(());
    }

    for (idx, car) in cars.iter().enumerate() {
        let title = format!("{} {} ({})", car.brand(), car.model(), car.id());
        print::tree_head(idx, &title);

        let renter = ledger
            .rental_for(car.id())
            .and_then(|rental| ledger.customer(rental.customer_id()));
        print::as_tree_one_level(format::car_to_details(car, renter));

        if idx + 1 != cars.len() {
            mprint!();
        }
    }

    let available = ledger.available_cars().count();
    let summary = format!(
        "{} of {} cars available",
        available.to_string().bold().green(),
        cars.len().to_string().bold()
    );
    print::fat_separator();
    print::centerln(&format!("{}", summary.color(colors::TEXT_DEFAULT)));
    Ok(())
}
