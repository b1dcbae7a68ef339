use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};

/// Command-line configuration. The endpoint defaults are the real public
/// services; the overrides exist so the binary can be pointed at mock
/// servers.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "iss-spotter")]
#[command(about = "Report upcoming ISS flyover times for your current location")]
pub struct CliConfig {
    /// IP-echo service returning {"ip": "<addr>"}
    #[arg(long, default_value = "https://api.ipify.org?format=json")]
    pub ip_endpoint: String,

    /// Geolocation service base; the IP address is appended as a path segment
    #[arg(long, default_value = "https://ipvigilante.com")]
    pub geo_endpoint: String,

    /// Flyover-prediction service taking lat/lon query parameters
    #[arg(long, default_value = "http://api.open-notify.org/iss-pass.json")]
    pub flyover_endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn ip_endpoint(&self) -> &str {
        &self.ip_endpoint
    }

    fn geo_endpoint(&self) -> &str {
        &self.geo_endpoint
    }

    fn flyover_endpoint(&self) -> &str {
        &self.flyover_endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("ip_endpoint", &self.ip_endpoint)?;
        validate_url("geo_endpoint", &self.geo_endpoint)?;
        validate_url("flyover_endpoint", &self.flyover_endpoint)?;
        Ok(())
    }
}
