use std::io::{BufRead, Write};

use colored::*;
use rentr_common::config::Config;
use rentr_core::booking::{BookingDesk, Quote};
use tracing::{error, info, warn};

use crate::commands::menu::Flow;
use crate::mprint;
use crate::terminal::input::Prompter;
use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};
use crate::terminal::{colors, format};

pub fn rent<R: BufRead, W: Write>(
    desk: &mut BookingDesk,
    prompter: &mut Prompter<R, W>,
    cfg: &Config,
) -> anyhow::Result<Flow> {
    print::header("rent a car", cfg.quiet);

    let Some(customer_name) = prompter.line("Enter your name: ")? else {
        return Ok(Flow::Closed);
    };

    print_available_cars(desk);

    let Some(car_id) = prompter.line("Enter the car ID you want to rent: ")? else {
        return Ok(Flow::Closed);
    };
    let Some(days) = prompter.days("Enter the number of days for rental: ")? else {
        return Ok(Flow::Closed);
    };
    let Some(is_weekend) = prompter.yes("Is it a weekend rental? (Y/N): ")? else {
        return Ok(Flow::Closed);
    };

    let quote = match desk.quote(&customer_name, car_id.trim(), days, is_weekend) {
        Ok(quote) => quote,
        Err(e) => {
            warn!("{e}");
            return Ok(Flow::Continue);
        }
    };

    print_rental_information(&quote, cfg);

    let Some(confirmed) = prompter.yes("Confirm rental (Y/N): ")? else {
        desk.decline(quote);
        return Ok(Flow::Closed);
    };

    if !confirmed {
        desk.decline(quote);
        warn!("Rental canceled.");
        return Ok(Flow::Continue);
    }

    match desk.confirm(quote) {
        Ok(receipt) => {
            if let Some(record_error) = receipt.record_error {
                error!("{record_error}");
            }
            info!("Car rented successfully.");
        }
        Err(e) => warn!("{e}"),
    }
    Ok(Flow::Continue)
}

fn print_available_cars(desk: &BookingDesk) {
    mprint!();
    print::print_status("Available Cars:".color(colors::PRIMARY).to_string());

    let mut listed: usize = 0;
    for car in desk.ledger().available_cars() {
        print::print_status(format!(
            "  {} - {}",
            car.id().color(colors::ACCENT),
            car.description()
        ));
        listed += 1;
    }

    if listed == 0 {
        print::no_results("  No cars available right now.");
    }
    mprint!();
}

fn print_rental_information(quote: &Quote, cfg: &Config) {
    mprint!();
    print::header("rental information", cfg.quiet);
    GLOBAL_KEY_WIDTH.set(13);

    let weekend = if quote.is_weekend() { "yes" } else { "no" };
    print::aligned_line("Customer ID", quote.customer().id());
    print::aligned_line("Customer Name", quote.customer().name());
    print::aligned_line("Car", quote.car().description());
    print::aligned_line("Rental Days", quote.days().to_string());
    print::aligned_line("Weekend", weekend);
    print::aligned_line("Total Price", format::price(quote.total_price()));
    mprint!();
}
