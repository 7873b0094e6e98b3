use std::io::Write;

use tracing::{Instrument, info, span};

use crate::cli::{Args, Mode};
use crate::config::Config;
use crate::error::AppError;
use crate::geo_location;
use crate::prayer_times::{self, PrayerQuery, PrayerTimes};
use crate::time_format::format_time;

/// Runs the whole pipeline for one invocation, writing the report to `out`.
///
/// Stages run strictly one after another and the first failure stops the run;
/// in locate mode the location line is already written by then.
pub async fn run(args: &Args, config: &Config, out: &mut impl Write) -> Result<(), AppError> {
    let query = args.prayer_query();

    match args.mode()? {
        Mode::City(city) => print_prayer_times(config, city, &query, out).await,
        Mode::Locate(strategy) => {
            let ip = strategy
                .resolve(&config.endpoints.ip_lookup)
                .instrument(span!(tracing::Level::INFO, "ip_lookup", ?strategy))
                .await?;
            info!("Resolved IP address: {}", ip);

            let access_key = config.access_key()?;
            let location =
                geo_location::get_location(&config.endpoints.geolocation, access_key, &ip)
                    .instrument(span!(tracing::Level::INFO, "geo_location"))
                    .await?;
            writeln!(out, "Location: {}, {}", location.city, location.country_name)?;

            print_prayer_times(config, &location.city, &query, out).await
        }
    }
}

async fn print_prayer_times(
    config: &Config,
    city: &str,
    query: &PrayerQuery,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let times = prayer_times::get_prayer_times(&config.endpoints.prayer_times, city, query)
        .instrument(span!(tracing::Level::INFO, "prayer_times", city))
        .await?;
    write_report(out, city, &times)?;
    Ok(())
}

/// Writes the header line and one formatted line per prayer.
pub fn write_report(out: &mut impl Write, city: &str, times: &PrayerTimes) -> std::io::Result<()> {
    writeln!(out, "Prayer times for {} on {}:", city, times.date)?;
    for (name, time) in times.entries() {
        writeln!(out, "{}: {}", name, format_time(time))?;
    }
    out.flush()
}
