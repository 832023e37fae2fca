//! DRS speed trap: timed HTTP transfers.
//!
//! Latency is the best of a few small GETs, download is one streamed GET,
//! upload is one POST of a zero-filled body.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::runtime::Handle;

use super::{NetworkProbe, SpeedReport};
use crate::config::ProbeConfig;

/// Megabits per second for `bytes` moved in `elapsed`.
pub fn mbps(bytes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return 0.0;
    }
    (bytes as f64 * 8.0) / secs / 1_000_000.0
}

async fn ping(client: &reqwest::Client, config: &ProbeConfig) -> Result<f64> {
    let mut best: Option<Duration> = None;
    for _ in 0..config.ping_samples.max(1) {
        let start = Instant::now();
        client
            .get(&config.ping_url)
            .send()
            .await
            .with_context(|| format!("reach {}", config.ping_url))?
            .error_for_status()
            .context("ping endpoint returned an error status")?
            .bytes()
            .await
            .context("read ping response")?;
        let elapsed = start.elapsed();
        best = Some(best.map_or(elapsed, |b| b.min(elapsed)));
    }
    Ok(best.unwrap_or_default().as_secs_f64() * 1000.0)
}

async fn download(client: &reqwest::Client, config: &ProbeConfig) -> Result<f64> {
    let url = config.download_url();
    let start = Instant::now();
    let mut response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("reach {url}"))?
        .error_for_status()
        .context("download endpoint returned an error status")?;
    let mut received = 0u64;
    while let Some(chunk) = response.chunk().await.context("download interrupted")? {
        received += chunk.len() as u64;
    }
    Ok(mbps(received, start.elapsed()))
}

async fn upload(client: &reqwest::Client, config: &ProbeConfig) -> Result<f64> {
    let payload = vec![0u8; usize::try_from(config.upload_bytes).unwrap_or(usize::MAX)];
    let sent = payload.len() as u64;
    let start = Instant::now();
    client
        .post(&config.upload_url)
        .body(payload)
        .send()
        .await
        .with_context(|| format!("reach {}", config.upload_url))?
        .error_for_status()
        .context("upload endpoint returned an error status")?;
    Ok(mbps(sent, start.elapsed()))
}

/// Runs the full ping, download, upload sequence.
pub async fn run_probe(client: &reqwest::Client, config: &ProbeConfig) -> Result<SpeedReport> {
    let ping_ms = ping(client, config).await?;
    tracing::debug!(ping_ms, "ping measured");
    let download_mbps = download(client, config).await?;
    tracing::debug!(download_mbps, "download measured");
    let upload_mbps = upload(client, config).await?;
    tracing::debug!(upload_mbps, "upload measured");
    Ok(SpeedReport {
        ping_ms,
        download_mbps,
        upload_mbps,
    })
}

/// Blocking [`NetworkProbe`] over [`run_probe`].
#[derive(Debug)]
pub struct HttpProbe {
    handle: Handle,
    client: reqwest::Client,
    config: ProbeConfig,
}

impl HttpProbe {
    pub fn new(handle: Handle, config: ProbeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .context("build probe http client")?;
        Ok(Self {
            handle,
            client,
            config,
        })
    }
}

impl NetworkProbe for HttpProbe {
    fn measure(&mut self) -> Result<SpeedReport> {
        self.handle
            .block_on(run_probe(&self.client, &self.config))
            .inspect_err(|e| tracing::warn!("speed probe failed: {e:#}"))
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config_for(server: &MockServer) -> ProbeConfig {
        ProbeConfig {
            ping_url: format!("{}/ping", server.uri()),
            download_url: format!("{}/down?bytes={{bytes}}", server.uri()),
            upload_url: format!("{}/up", server.uri()),
            download_bytes: 4096,
            upload_bytes: 2048,
            ping_samples: 2,
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_mbps() {
        assert!((mbps(1_000_000, Duration::from_secs(1)) - 8.0).abs() < 1e-9);
        assert_eq!(mbps(10, Duration::ZERO), 0.0);
    }

    #[tokio::test]
    async fn test_run_probe_measures_all_phases() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/down"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8; 4096]))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/up"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let report = run_probe(&client, &config_for(&server)).await.unwrap();
        assert!(report.ping_ms >= 0.0);
        assert!(report.download_mbps > 0.0);
        assert!(report.upload_mbps > 0.0);
    }

    #[tokio::test]
    async fn test_run_probe_fails_when_upload_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8; 16]))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let err = run_probe(&client, &config_for(&server)).await.unwrap_err();
        assert!(format!("{err:#}").contains("upload endpoint"));
    }

    #[tokio::test]
    async fn test_run_probe_unreachable_server() {
        let config = ProbeConfig {
            ping_url: "http://127.0.0.1:9/ping".to_string(),
            ping_samples: 1,
            timeout_secs: 2,
            ..ProbeConfig::default()
        };
        let client = reqwest::Client::new();
        assert!(run_probe(&client, &config).await.is_err());
    }
}
