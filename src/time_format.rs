use chrono::NaiveTime;

/// Converts a 24-hour "HH:MM" string into "HH:MM AM/PM".
///
/// Input that does not parse as a 24-hour time is returned unchanged.
pub fn format_time(time: &str) -> String {
    match NaiveTime::parse_from_str(time, "%H:%M") {
        // Only exact two-digit "HH:MM" input round-trips
        Ok(parsed) if parsed.format("%H:%M").to_string() == time => {
            parsed.format("%I:%M %p").to_string()
        }
        _ => time.to_string(),
    }
}
