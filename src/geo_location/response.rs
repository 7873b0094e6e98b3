/// Location resolved by the ipstack geolocation API
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Country name in English (e.g., "Egypt")
    pub country_name: String,
    /// City name in English (e.g., "Cairo")
    pub city: String,
}

/// Error body ipstack returns with a 200 status, e.g. for an invalid access key
#[derive(serde::Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(serde::Deserialize, Debug)]
pub struct ErrorDetail {
    pub code: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub info: Option<String>,
}
