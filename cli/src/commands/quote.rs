use rentr_common::config::Config;
use rentr_common::models::car::{Car, LONG_TERM_THRESHOLD_DAYS};
use rentr_core::ledger::RentalLedger;

use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};
use crate::terminal::format;

pub fn quote(
    ledger: &RentalLedger,
    car_id: &str,
    days: u32,
    is_weekend: bool,
    cfg: &Config,
) -> anyhow::Result<()> {
    let car: &Car = ledger.available_car(car_id)?;
    let total_price = car.calculate_price(days, is_weekend);

    print::header("price quote", cfg.quiet);
    GLOBAL_KEY_WIDTH.set(11);

    print::aligned_line("Car", car.to_string());
    print::aligned_line("Daily Rate", format::price_str(car.base_price_per_day()));
    print::aligned_line("Rental Days", days.to_string());
    print::aligned_line("Weekend", if is_weekend { "+10%" } else { "no" });
    if days > LONG_TERM_THRESHOLD_DAYS {
        print::aligned_line("Long Stay", "-10%");
    }
    print::aligned_line("Total Price", format::price(total_price));
    print::end_of_program();
    Ok(())
}
