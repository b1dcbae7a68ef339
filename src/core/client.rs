use reqwest::Client;

use crate::core::model::{Coordinates, FlyoverPayload, GeoPayload, IpPayload, Pass};
use crate::core::ports::{ConfigProvider, SpotterApi};
use crate::utils::error::{Result, SpotterError, Stage};

/// HTTP implementation of the three chain stages.
///
/// No request timeout is configured; a hung upstream call stalls the chain.
pub struct SpotterClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> SpotterClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// One GET, shared by all three stages. Failure order: transport, then
    /// non-2xx status carrying the raw body, then parse.
    async fn get_json<T>(&self, stage: Stage, url: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!("Making API request to: {}", url);

        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|source| SpotterError::Transport { stage, source })?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|source| SpotterError::Transport { stage, source })?;

        if !status.is_success() {
            return Err(SpotterError::UpstreamStatus {
                stage,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| SpotterError::Parse { stage, source })
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> SpotterApi for SpotterClient<C> {
    async fn resolve_ip(&self) -> Result<String> {
        let payload: IpPayload = self
            .get_json(Stage::IpLookup, self.config.ip_endpoint(), &[])
            .await?;
        Ok(payload.ip)
    }

    async fn lookup_coordinates(&self, ip: &str) -> Result<Coordinates> {
        let url = format!("{}/{}", self.config.geo_endpoint().trim_end_matches('/'), ip);
        let payload: GeoPayload = self.get_json(Stage::Geolocation, &url, &[]).await?;
        Ok(payload.data)
    }

    async fn fetch_passes(&self, coords: &Coordinates) -> Result<Vec<Pass>> {
        let query = [
            ("lat", coords.latitude.as_str()),
            ("lon", coords.longitude.as_str()),
        ];
        let payload: FlyoverPayload = self
            .get_json(Stage::FlyoverSchedule, self.config.flyover_endpoint(), &query)
            .await?;
        Ok(payload.response)
    }
}
