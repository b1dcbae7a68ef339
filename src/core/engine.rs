use crate::core::model::Pass;
use crate::core::ports::SpotterApi;
use crate::utils::error::Result;

/// Runs the three stages in order, feeding each stage's output into the next.
///
/// The chain is strictly sequential because every stage needs the previous
/// stage's result; the first error aborts the run and is returned to the
/// caller untouched. No stage is retried.
pub struct SpotterEngine<A: SpotterApi> {
    api: A,
}

impl<A: SpotterApi> SpotterEngine<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn run(&self) -> Result<Vec<Pass>> {
        tracing::info!("🌐 Resolving public IP address...");
        let ip = self.api.resolve_ip().await?;
        tracing::info!("📍 Public IP: {}", ip);

        let coords = self.api.lookup_coordinates(&ip).await?;
        tracing::info!(
            "🌍 Location: latitude {}, longitude {}",
            coords.latitude,
            coords.longitude
        );

        let passes = self.api.fetch_passes(&coords).await?;
        tracing::info!("🛰️ Received {} upcoming passes", passes.len());

        Ok(passes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Coordinates;
    use crate::utils::error::{SpotterError, Stage};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Scripted stage implementation: counts invocations and records the
    /// values handed to each stage.
    #[derive(Default)]
    struct ScriptedApi {
        fail_ip: bool,
        fail_coords: bool,
        ip_calls: AtomicUsize,
        coords_calls: AtomicUsize,
        passes_calls: AtomicUsize,
        seen_ip: Mutex<Option<String>>,
        seen_coords: Mutex<Option<Coordinates>>,
    }

    fn upstream_error(stage: Stage) -> SpotterError {
        SpotterError::UpstreamStatus {
            stage,
            status: 503,
            body: "down for maintenance".to_string(),
        }
    }

    #[async_trait]
    impl SpotterApi for ScriptedApi {
        async fn resolve_ip(&self) -> Result<String> {
            self.ip_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_ip {
                return Err(upstream_error(Stage::IpLookup));
            }
            Ok("162.245.144.188".to_string())
        }

        async fn lookup_coordinates(&self, ip: &str) -> Result<Coordinates> {
            self.coords_calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_ip.lock().unwrap() = Some(ip.to_string());
            if self.fail_coords {
                return Err(upstream_error(Stage::Geolocation));
            }
            Ok(Coordinates {
                latitude: "49.27670".to_string(),
                longitude: "-123.13000".to_string(),
            })
        }

        async fn fetch_passes(&self, coords: &Coordinates) -> Result<Vec<Pass>> {
            self.passes_calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_coords.lock().unwrap() = Some(coords.clone());
            Ok(vec![
                Pass {
                    risetime: 134564234,
                    duration: 600,
                },
                Pass {
                    risetime: 134570000,
                    duration: 540,
                },
            ])
        }
    }

    #[tokio::test]
    async fn test_run_chains_stage_outputs_in_order() {
        let engine = SpotterEngine::new(ScriptedApi::default());
        let passes = engine.run().await.unwrap();

        assert_eq!(passes.len(), 2);
        assert_eq!(passes[0].risetime, 134564234);
        assert_eq!(passes[1].risetime, 134570000);

        let api = &engine.api;
        assert_eq!(api.ip_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.coords_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.passes_calls.load(Ordering::SeqCst), 1);

        // Each stage received exactly the previous stage's output.
        assert_eq!(
            api.seen_ip.lock().unwrap().as_deref(),
            Some("162.245.144.188")
        );
        let seen = api.seen_coords.lock().unwrap().clone().unwrap();
        assert_eq!(seen.latitude, "49.27670");
        assert_eq!(seen.longitude, "-123.13000");
    }

    #[tokio::test]
    async fn test_failing_ip_stage_skips_later_stages() {
        let api = ScriptedApi {
            fail_ip: true,
            ..Default::default()
        };
        let engine = SpotterEngine::new(api);

        let err = engine.run().await.unwrap_err();

        assert!(matches!(
            err,
            SpotterError::UpstreamStatus {
                stage: Stage::IpLookup,
                ..
            }
        ));
        assert_eq!(engine.api.coords_calls.load(Ordering::SeqCst), 0);
        assert_eq!(engine.api.passes_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failing_geolocation_stage_skips_flyover_fetch() {
        let api = ScriptedApi {
            fail_coords: true,
            ..Default::default()
        };
        let engine = SpotterEngine::new(api);

        let err = engine.run().await.unwrap_err();

        assert_eq!(err.stage(), Some(Stage::Geolocation));
        assert_eq!(engine.api.ip_calls.load(Ordering::SeqCst), 1);
        assert_eq!(engine.api.passes_calls.load(Ordering::SeqCst), 0);
    }
}
