use async_trait::async_trait;

use crate::core::model::{Coordinates, Pass};
use crate::utils::error::Result;

/// Read-only view of the three upstream endpoint URLs.
pub trait ConfigProvider: Send + Sync {
    fn ip_endpoint(&self) -> &str;
    fn geo_endpoint(&self) -> &str;
    fn flyover_endpoint(&self) -> &str;
}

/// The three upstream calls composing the chain. One implementation speaks
/// HTTP; tests substitute scripted mocks.
#[async_trait]
pub trait SpotterApi: Send + Sync {
    /// Resolve the caller's public IP address.
    async fn resolve_ip(&self) -> Result<String>;

    /// Look up geographic coordinates for an IP address. The address is used
    /// as-is; no format validation happens first.
    async fn lookup_coordinates(&self, ip: &str) -> Result<Coordinates>;

    /// Fetch the ordered upcoming flyover schedule for the given coordinates.
    async fn fetch_passes(&self, coords: &Coordinates) -> Result<Vec<Pass>>;
}
