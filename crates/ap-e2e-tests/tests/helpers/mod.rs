//! Shared test harness for E2E probe tests.
//!
//! Stands up a mock asset search endpoint and runs the real probe
//! (config → client → report) against it, capturing stdout into a buffer.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ap_probe::{ProbeConfig, ProbeResult};

/// Path the mock serves, mirroring the real integration endpoint.
pub const ASSETS_PATH: &str = "/vm/v4/integration/assets";

/// API key the harness configures.
pub const TEST_API_KEY: &str = "e2e-test-key";

/// Mock API server plus probe config pointed at it.
pub struct ProbeHarness {
    pub server: MockServer,
}

impl ProbeHarness {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Probe config targeting the mock server with the test API key.
    pub fn config(&self) -> ProbeConfig {
        ProbeConfig {
            base_url: format!("{}{}", self.server.uri(), ASSETS_PATH),
            api_key: Some(TEST_API_KEY.into()),
            timeout_secs: Some(5),
            ..ProbeConfig::default()
        }
    }

    /// Answer every asset search with `status` and a raw text body.
    pub async fn respond_text(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(ASSETS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Answer every asset search with `status` and a JSON body.
    pub async fn respond_json(&self, status: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(ASSETS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Run the probe with the harness config.
    /// Returns (probe result, captured stdout).
    pub async fn run(&self) -> (ProbeResult<()>, String) {
        run_with(&self.config()).await
    }

    /// Number of requests the mock has received.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

/// Run the probe with an explicit config, capturing stdout.
pub async fn run_with(config: &ProbeConfig) -> (ProbeResult<()>, String) {
    let mut out = Vec::new();
    let result = ap_probe::probe::run(config, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}
