mod response;

use chrono::Local;
use tracing::{debug, error, info};

use crate::error::AppError;

pub const DEFAULT_COUNTRY: &str = "egypt";
pub const DEFAULT_METHOD: u8 = 2;

/// Country and calculation method sent along with the city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerQuery {
    pub country: String,
    pub method: u8,
}

impl Default for PrayerQuery {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            method: DEFAULT_METHOD,
        }
    }
}

/// Daily prayer times stamped with the local date they were fetched on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTimes {
    /// Local date in format "YYYY-MM-DD"
    pub date: String,
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub sunset: String,
    pub maghrib: String,
    pub isha: String,
    pub imsak: String,
    pub midnight: String,
}

impl PrayerTimes {
    fn from_timings(timings: response::Timings, date: String) -> Self {
        Self {
            date,
            fajr: timings.fajr,
            sunrise: timings.sunrise,
            dhuhr: timings.dhuhr,
            asr: timings.asr,
            sunset: timings.sunset,
            maghrib: timings.maghrib,
            isha: timings.isha,
            imsak: timings.imsak,
            midnight: timings.midnight,
        }
    }

    /// Named times in display order.
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("Fajr", &self.fajr),
            ("Sunrise", &self.sunrise),
            ("Dhuhr", &self.dhuhr),
            ("Asr", &self.asr),
            ("Sunset", &self.sunset),
            ("Maghrib", &self.maghrib),
            ("Isha", &self.isha),
            ("Imsak", &self.imsak),
            ("Midnight", &self.midnight),
        ]
    }
}

/// Fetches today's prayer times for a city from the Aladhan API.
///
/// The returned `date` is always the current local date, whatever date the API reports.
pub async fn get_prayer_times(
    endpoint: &str,
    city: &str,
    query: &PrayerQuery,
) -> Result<PrayerTimes, AppError> {
    info!(
        "Fetching prayer times for city: {} (country: {}, method: {})",
        city, query.country, query.method
    );

    // Create HTTP client and send the request with city, country and method as query
    let client = reqwest::Client::new();
    let response = client
        .get(endpoint)
        .query(&[
            ("city", city),
            ("country", query.country.as_str()),
            ("method", query.method.to_string().as_str()),
        ])
        .send()
        .await?;

    if response.status().is_success() {
        let body = response.text().await?;
        let timings_response: response::TimingsResponse = serde_json::from_str(&body)?;
        debug!("Prayer times fetched successfully: {:?}", timings_response);

        // Stamp with the local date; the date block in the response is ignored
        let date = Local::now().format("%Y-%m-%d").to_string();
        Ok(PrayerTimes::from_timings(timings_response.data.timings, date))
    } else {
        // Log and return error for unsuccessful responses
        error!("Failed to fetch prayer times: {}", response.status());
        Err(AppError::ApiRequestFailed(format!(
            "Failed to fetch prayer times: {}",
            response.status()
        )))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::{Value, json};

    pub(crate) fn cairo_timings() -> Value {
        json!({
            "Fajr": "04:30",
            "Sunrise": "05:55",
            "Dhuhr": "11:45",
            "Asr": "15:05",
            "Sunset": "17:35",
            "Maghrib": "17:35",
            "Isha": "18:52",
            "Imsak": "04:20",
            "Midnight": "23:45"
        })
    }

    #[tokio::test]
    async fn date_is_local_today_not_api_date() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/timingsByCity");
                then.status(200).json_body(json!({
                    "code": 200,
                    "data": {
                        "timings": cairo_timings(),
                        "date": { "readable": "01 Jan 1999", "gregorian": { "date": "01-01-1999" } }
                    }
                }));
            })
            .await;

        let times = get_prayer_times(
            &server.url("/timingsByCity"),
            "Cairo",
            &PrayerQuery::default(),
        )
        .await
        .unwrap();

        assert_eq!(times.date, Local::now().format("%Y-%m-%d").to_string());
        assert_eq!(times.fajr, "04:30");
        assert_eq!(times.midnight, "23:45");
    }

    #[tokio::test]
    async fn city_country_and_method_are_sent_as_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/timingsByCity")
                    .query_param("city", "New York")
                    .query_param("country", "usa")
                    .query_param("method", "4");
                then.status(200)
                    .json_body(json!({ "data": { "timings": cairo_timings() } }));
            })
            .await;

        let query = PrayerQuery {
            country: "usa".to_string(),
            method: 4,
        };
        get_prayer_times(&server.url("/timingsByCity"), "New York", &query)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_timings_is_a_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/timingsByCity");
                then.status(200).json_body(json!({ "data": { "date": {} } }));
            })
            .await;

        let result = get_prayer_times(
            &server.url("/timingsByCity"),
            "Cairo",
            &PrayerQuery::default(),
        )
        .await;

        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[tokio::test]
    async fn non_string_timing_is_a_parse_error() {
        let mut timings = cairo_timings();
        timings["Isha"] = json!(1852);

        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/timingsByCity");
                then.status(200).json_body(json!({ "data": { "timings": timings } }));
            })
            .await;

        let result = get_prayer_times(
            &server.url("/timingsByCity"),
            "Cairo",
            &PrayerQuery::default(),
        )
        .await;

        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn entries_follow_display_order() {
        let times = PrayerTimes::from_timings(
            serde_json::from_value(cairo_timings()).unwrap(),
            "2026-10-19".to_string(),
        );
        let names: Vec<&str> = times.entries().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["Fajr", "Sunrise", "Dhuhr", "Asr", "Sunset", "Maghrib", "Isha", "Imsak", "Midnight"]
        );
    }
}
