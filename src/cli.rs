use clap::{CommandFactory, Parser};

use crate::error::AppError;
use crate::ip_lookup::IpStrategy;
use crate::prayer_times::{DEFAULT_COUNTRY, DEFAULT_METHOD, PrayerQuery};

#[derive(Parser, Debug)]
#[command(
    name = "prayer-times",
    about = "Print today's prayer times for a city, or for wherever your IP says you are",
    version
)]
pub struct Args {
    /// City to fetch prayer times for (exactly one)
    pub city: Vec<String>,

    /// Resolve the city from this machine's IP address instead
    #[arg(short, long)]
    pub locate: bool,

    /// How the IP address is discovered in --locate mode
    #[arg(long, value_enum, default_value_t, env = "IP_STRATEGY")]
    pub ip_strategy: IpStrategy,

    /// Country passed to the prayer-times service
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Calculation method code passed to the prayer-times service
    #[arg(long, default_value_t = DEFAULT_METHOD)]
    pub method: u8,
}

/// What the arguments ask the program to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    City(&'a str),
    Locate(IpStrategy),
}

impl Args {
    /// Validates the positional/flag combination; anything other than one city
    /// or a bare `--locate` is a usage error.
    pub fn mode(&self) -> Result<Mode<'_>, AppError> {
        match (self.locate, self.city.as_slice()) {
            (false, [city]) => Ok(Mode::City(city)),
            (true, []) => Ok(Mode::Locate(self.ip_strategy)),
            _ => Err(AppError::Usage(usage())),
        }
    }

    pub fn prayer_query(&self) -> PrayerQuery {
        PrayerQuery {
            country: self.country.clone(),
            method: self.method,
        }
    }
}

pub fn usage() -> String {
    Args::command().render_usage().to_string()
}
