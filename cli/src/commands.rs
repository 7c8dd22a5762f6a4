pub mod fleet;
pub mod menu;
pub mod quote;
pub mod rent;
pub mod return_car;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use rentr_common::config::{CustomerRegistration, DEFAULT_RECORDS_PATH};

#[derive(Parser)]
#[command(name = "rentr")]
#[command(version, about = "A small car rental desk.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// File completed rentals are appended to
    #[arg(long, global = true, default_value = DEFAULT_RECORDS_PATH)]
    pub records: PathBuf,

    /// When a customer joins the roster: on-quote or on-confirm
    #[arg(long = "register-customer", global = true, default_value = "on-quote")]
    pub register_customer: CustomerRegistration,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Hide banner and section headers
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug (-v) or trace (-vv) logs
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive rental desk (default)
    #[command(alias = "m")]
    Menu,
    /// List the fleet with daily rates
    #[command(alias = "f")]
    Fleet,
    /// Price a rental without booking it
    #[command(alias = "q")]
    Quote {
        car_id: String,
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        days: u32,
        /// Apply the weekend surcharge
        #[arg(short, long)]
        weekend: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
