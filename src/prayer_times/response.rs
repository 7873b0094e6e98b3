/// Response structure for the Aladhan `timingsByCity` endpoint
/// Only the timings are read; the API's own date block is ignored
#[derive(serde::Deserialize, Debug)]
pub struct TimingsResponse {
    pub data: TimingsData,
}

#[derive(serde::Deserialize, Debug)]
pub struct TimingsData {
    pub timings: Timings,
}

/// Prayer times for the day as 24-hour "HH:MM" strings
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct Timings {
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
