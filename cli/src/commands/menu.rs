use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rentr_common::config::Config;
use rentr_core::booking::BookingDesk;
use tracing::warn;

use crate::commands::{rent, return_car};
use crate::mprint;
use crate::terminal::input::Prompter;
use crate::terminal::print;

/// What the shell does after a menu action finished.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Input was closed mid-action.
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Rent,
    Return,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Rent),
            "2" => Ok(Self::Return),
            "3" => Ok(Self::Exit),
            other => Err(format!("invalid menu choice: {other}")),
        }
    }
}

/// Runs the interactive desk on stdin/stdout.
pub fn menu(desk: &mut BookingDesk, cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run(desk, &mut prompter, cfg)
}

pub fn run<R: BufRead, W: Write>(
    desk: &mut BookingDesk,
    prompter: &mut Prompter<R, W>,
    cfg: &Config,
) -> anyhow::Result<()> {
    loop {
        print::header("car rental system", cfg.quiet);
        print::menu();

        let Some(answer) = prompter.line("Enter your choice: ")? else {
            break;
        };

        let flow = match answer.parse::<MenuChoice>() {
            Ok(MenuChoice::Rent) => rent::rent(desk, prompter, cfg)?,
            Ok(MenuChoice::Return) => return_car::return_car(desk, prompter, cfg)?,
            Ok(MenuChoice::Exit) => break,
            Err(_) => {
                warn!("Invalid choice. Please enter a valid option.");
                Flow::Continue
            }
        };

        if flow == Flow::Closed {
            break;
        }
        mprint!();
    }

    print::farewell();
    Ok(())
}
