// Module containing response data structures for location information
mod response;

pub use response::Location;

use crate::error::AppError;
use tracing::{debug, error, info};

/// Resolves an IP address to a city and country using the ipstack API.
///
/// # Arguments
/// * `endpoint` - Base URL of the geolocation service
/// * `access_key` - The API key for accessing the service
/// * `ip` - IP address to look up
///
/// # Returns
/// * `Location` with the city and country name of the address
/// * Error if the request fails, the service reports an error, or the body has an unexpected shape
pub async fn get_location(endpoint: &str, access_key: &str, ip: &str) -> Result<Location, AppError> {
    info!("Fetching location for IP: {}", ip);

    // Construct the API URL with the IP as the last path segment
    let url = format!("{}/{}", endpoint.trim_end_matches('/'), ip);

    // Create HTTP client and send the request
    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .query(&[("access_key", access_key)])
        .send()
        .await?;

    if response.status().is_success() {
        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;

        // ipstack reports failures inside a successful response
        if value.get("error").is_some() {
            let failure: response::ErrorResponse = serde_json::from_value(value)?;
            error!("Geolocation service returned an error: {:?}", failure.error);
            return Err(AppError::ApiRequestFailed(describe(&failure.error)));
        }

        let location: Location = serde_json::from_value(value)?;
        debug!("Location fetched successfully: {:?}", location);
        Ok(location)
    } else {
        // Log and return error for unsuccessful responses
        error!("Failed to fetch location: {}", response.status());
        Err(AppError::ApiRequestFailed(format!(
            "Failed to fetch location: {}",
            response.status()
        )))
    }
}

fn describe(detail: &response::ErrorDetail) -> String {
    let info = detail
        .info
        .as_deref()
        .or(detail.kind.as_deref())
        .unwrap_or("unknown error");
    match detail.code {
        Some(code) => format!("Failed to fetch location: {} (code {})", info, code),
        None => format!("Failed to fetch location: {}", info),
    }
}
