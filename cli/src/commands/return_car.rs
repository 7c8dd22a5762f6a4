use std::io::{BufRead, Write};

use rentr_common::config::Config;
use rentr_core::booking::{BookingDesk, ReturnReceipt};
use tracing::{info, warn};

use crate::commands::menu::Flow;
use crate::terminal::input::Prompter;
use crate::terminal::print;

pub fn return_car<R: BufRead, W: Write>(
    desk: &mut BookingDesk,
    prompter: &mut Prompter<R, W>,
    cfg: &Config,
) -> anyhow::Result<Flow> {
    print::header("return a car", cfg.quiet);

    let Some(car_id) = prompter.line("Enter the car ID you want to return: ")? else {
        return Ok(Flow::Closed);
    };

    match desk.return_car(car_id.trim()) {
        Ok(ReturnReceipt {
            customer: Some(customer),
            ..
        }) => info!("Car returned successfully by {}", customer.name()),
        Ok(_) => info!("Car returned successfully."),
        Err(e) => warn!("{e}"),
    }
    Ok(Flow::Continue)
}
