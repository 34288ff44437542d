// HTTP client for the external equity calculation service.
//
// Sends one POST per calculation and reports the result as an `EquityEvent`
// over an mpsc channel for the orchestrator to consume. Transport failures,
// non-success statuses, and undecodable bodies all collapse into the same
// user-presentable failure message; the details go to the log instead.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::Config;
use crate::protocol::EquityEvent;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Path of the calculation endpoint, relative to the configured base URL.
pub const CALCULATE_PATH: &str = "/api/calculate-equity";

/// The one user-facing message for every way the call can fail.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch equity. Please check the backend server.";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/calculate-equity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquityRequest {
    /// 10-character concatenation of the 5 card codes in slot order.
    pub hero_hand: String,
    /// Top-N% villain range percentile, 1..=100.
    pub villain_range_percent: u8,
}

/// The part of the response this client cares about. The service also
/// echoes the request fields; those are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct EquityResponse {
    /// Already-formatted percentage string, e.g. "61.32%". Stored verbatim,
    /// never parsed.
    pub equity: String,
}

// ---------------------------------------------------------------------------
// EquityClient
// ---------------------------------------------------------------------------

pub struct EquityClient {
    http: reqwest::Client,
    base_url: String,
}

impl EquityClient {
    /// Build a client with the given base URL and per-request timeout.
    pub fn new(base_url: String, timeout: std::time::Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(EquityClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the application config.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        EquityClient::new(
            config.base_url.clone(),
            std::time::Duration::from_secs(config.timeout_secs),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CALCULATE_PATH)
    }

    /// Perform one equity calculation and send the outcome over `tx`.
    ///
    /// The `generation` counter is threaded through the emitted event so the
    /// coordinator can discard results that no longer belong to the current
    /// request cycle. Always returns `Ok`; every failure mode becomes an
    /// `EquityEvent::Failed`.
    pub async fn calculate(
        &self,
        request: EquityRequest,
        tx: mpsc::Sender<EquityEvent>,
        generation: u64,
    ) -> anyhow::Result<()> {
        debug!(
            hero_hand = %request.hero_hand,
            villain_range_percent = request.villain_range_percent,
            generation,
            "sending equity request"
        );

        let response = match self.http.post(self.endpoint()).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "equity request transport failure");
                let _ = tx
                    .send(EquityEvent::Failed {
                        message: FETCH_ERROR_MESSAGE.to_string(),
                        generation,
                    })
                    .await;
                return Ok(());
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "equity service returned non-success status");
            let _ = tx
                .send(EquityEvent::Failed {
                    message: FETCH_ERROR_MESSAGE.to_string(),
                    generation,
                })
                .await;
            return Ok(());
        }

        match response.json::<EquityResponse>().await {
            Ok(body) => {
                debug!(equity = %body.equity, generation, "equity response received");
                let _ = tx
                    .send(EquityEvent::Completed {
                        equity: body.equity,
                        generation,
                    })
                    .await;
            }
            Err(e) => {
                warn!(error = %e, "equity response body did not match expected shape");
                let _ = tx
                    .send(EquityEvent::Failed {
                        message: FETCH_ERROR_MESSAGE.to_string(),
                        generation,
                    })
                    .await;
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
