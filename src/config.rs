use dotenvy::dotenv;
use std::env;

use crate::error::AppError;

const ACCESS_KEY_VAR: &str = "ACCESS_KEY";

const IP_LOOKUP_ENDPOINT: &str = "https://api.ipify.org?format=json";
const GEOLOCATION_ENDPOINT: &str = "http://api.ipstack.com";
const PRAYER_TIMES_ENDPOINT: &str = "http://api.aladhan.com/v1/timingsByCity";

/// Base URLs of the upstream services.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub ip_lookup: String,
    pub geolocation: String,
    pub prayer_times: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ip_lookup: IP_LOOKUP_ENDPOINT.to_string(),
            geolocation: GEOLOCATION_ENDPOINT.to_string(),
            prayer_times: PRAYER_TIMES_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    access_key: Option<String>,
    pub endpoints: Endpoints,
}

impl Config {
    /// Loads `.env` (if present) and reads the geolocation access key from the environment.
    pub fn from_env() -> Self {
        dotenv().ok();

        Self::new(env::var(ACCESS_KEY_VAR).ok())
    }

    pub fn new(access_key: Option<String>) -> Self {
        Self {
            access_key: access_key.filter(|key| !key.trim().is_empty()),
            endpoints: Endpoints::default(),
        }
    }

    #[cfg(test)]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// The geolocation credential, or `AppError::Config` when it was never provided.
    pub fn access_key(&self) -> Result<&str, AppError> {
        self.access_key
            .as_deref()
            .ok_or_else(|| AppError::Config(ACCESS_KEY_VAR.to_string()))
    }
}
