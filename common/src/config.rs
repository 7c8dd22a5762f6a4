use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_RECORDS_PATH: &str = "rental_records.txt";

pub struct Config {
    /// File the completed rentals are appended to.
    pub records_path: PathBuf,
    /// When a customer joins the roster during a booking.
    pub registration: CustomerRegistration,
    pub no_banner: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
            registration: CustomerRegistration::default(),
            no_banner: false,
            quiet: 0,
        }
    }
}

/// Point in the booking flow at which the customer is added to the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CustomerRegistration {
    /// As soon as the quote is shown. A declined quote leaves the customer on
    /// the roster.
    #[default]
    OnQuote,
    /// Only once the rental is confirmed.
    OnConfirm,
}

impl FromStr for CustomerRegistration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "on-quote" | "quote" => Ok(Self::OnQuote),
            "on-confirm" | "confirm" => Ok(Self::OnConfirm),
            _ => Err(format!(
                "invalid registration policy: {s} (expected 'on-quote' or 'on-confirm')"
            )),
        }
    }
}

impl fmt::Display for CustomerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnQuote => f.write_str("on-quote"),
            Self::OnConfirm => f.write_str("on-confirm"),
        }
    }
}
