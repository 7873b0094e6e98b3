/// Response structure for the "what is my IP" JSON endpoint (`{"ip": "..."}`)
#[derive(serde::Deserialize, Debug)]
pub struct IpResponse {
    /// Public address of the caller as seen by the service
    pub ip: String,
}
