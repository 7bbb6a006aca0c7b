//! Application configuration loaded from environment variables.

use std::net::SocketAddr;

use serde::{Deserialize, Deserializer};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server port.
    #[serde(default = "default_port", deserialize_with = "lenient_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

/// Parse `PORT` leniently: an unparseable value falls back to the
/// default instead of aborting startup.
fn lenient_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().parse() {
        Ok(port) => Ok(port),
        Err(_) => {
            tracing::warn!(value = %raw, "PORT is not a valid port number, using default");
            Ok(default_port())
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Address to bind the listener on: all interfaces at the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
