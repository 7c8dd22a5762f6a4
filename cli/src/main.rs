mod commands;
mod terminal;

use commands::{CommandLine, Commands, fleet, menu, quote};
use rentr_common::config::Config;
use rentr_core::booking::BookingDesk;
use rentr_core::ledger::RentalLedger;
use rentr_core::records::FileRecordLog;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        records_path: commands.records,
        registration: commands.register_customer,
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    print::banner(cfg.no_banner, cfg.quiet);
    let mut desk = open_desk(&cfg);

    match commands.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::menu(&mut desk, &cfg),
        Commands::Fleet => fleet::fleet(desk.ledger(), &cfg),
        Commands::Quote {
            car_id,
            days,
            weekend,
        } => quote::quote(desk.ledger(), &car_id, days, weekend, &cfg),
    }
}

fn open_desk(cfg: &Config) -> BookingDesk {
    let record_log = FileRecordLog::new(&cfg.records_path);
    tracing::debug!(path = %record_log.path().display(), registration = %cfg.registration, "opening rental desk");

    let ledger = RentalLedger::with_fleet(
        Box::new(record_log),
        rentr_core::fleet::default_fleet(),
    );
    BookingDesk::new(ledger, cfg.registration)
}
