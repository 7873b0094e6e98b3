mod response;

use std::net::{IpAddr, Ipv4Addr};

use clap::ValueEnum;
use tracing::{debug, error, info, warn};

use crate::error::AppError;

/// How the caller's IP address is discovered.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IpStrategy {
    /// Ask a public "what is my IP" service
    #[default]
    External,
    /// Use the first non-loopback IPv4 address of a local interface
    Local,
}

impl IpStrategy {
    /// Resolves the caller's IP address with this strategy.
    ///
    /// `endpoint` is only contacted by [`IpStrategy::External`].
    pub async fn resolve(self, endpoint: &str) -> Result<String, AppError> {
        match self {
            IpStrategy::External => get_public_ip(endpoint).await,
            IpStrategy::Local => require_address(local_ipv4()),
        }
    }
}

/// Fetches the public IP address from a JSON lookup service.
pub async fn get_public_ip(endpoint: &str) -> Result<String, AppError> {
    info!("Fetching public IP from {}", endpoint);

    // Create HTTP client and send the request
    let client = reqwest::Client::new();
    let response = client.get(endpoint).send().await?;

    if response.status().is_success() {
        // Read the raw body, then parse it into IpResponse
        let body = response.text().await?;
        let ip_response: response::IpResponse = serde_json::from_str(&body)?;
        debug!("Public IP fetched successfully: {:?}", ip_response);
        Ok(ip_response.ip)
    } else {
        // Log and return error for unsuccessful responses
        error!("Failed to fetch public IP: {}", response.status());
        Err(AppError::ApiRequestFailed(format!(
            "Failed to fetch public IP: {}",
            response.status()
        )))
    }
}

/// Inspects the local network interfaces without any network I/O.
pub fn local_ipv4() -> Option<Ipv4Addr> {
    match if_addrs::get_if_addrs() {
        Ok(interfaces) => {
            let ip = first_non_loopback_ipv4(interfaces.iter().map(|iface| iface.ip()));
            debug!("Local IPv4 address: {:?}", ip);
            ip
        }
        Err(e) => {
            warn!("Failed to enumerate network interfaces: {}", e);
            None
        }
    }
}

fn require_address(ip: Option<Ipv4Addr>) -> Result<String, AppError> {
    ip.map(|ip| ip.to_string()).ok_or(AppError::NoIpAddress)
}

fn first_non_loopback_ipv4(addrs: impl IntoIterator<Item = IpAddr>) -> Option<Ipv4Addr> {
    addrs.into_iter().find_map(|addr| match addr {
        IpAddr::V4(v4) if !v4.is_loopback() => Some(v4),
        _ => None,
    })
}
