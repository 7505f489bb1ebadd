//! Spot-checking a timestep series with HEAD requests.

use std::fmt;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::{info, warn};

use crate::records::TimestepRecord;

/// Issues a HEAD request and reports the status code.
#[async_trait]
pub trait HeadProbe: Send + Sync {
    /// HTTP status of `url`, or a description of the transport failure.
    async fn head(&self, url: &str) -> Result<u16, String>;
}

#[async_trait]
impl HeadProbe for Client {
    async fn head(&self, url: &str) -> Result<u16, String> {
        Client::head(self, url)
            .send()
            .await
            .map(|r| r.status().as_u16())
            .map_err(|e| e.to_string())
    }
}

/// Outcome of checking one timestep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyStatus {
    Ok,
    /// Non-200 status code or transport error text.
    Fail(String),
}

impl VerifyStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for VerifyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("OK"),
            Self::Fail(reason) => write!(f, "FAIL ({})", reason),
        }
    }
}

/// Result of checking the timestep at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub index: usize,
    pub timestep: String,
    pub run_label: String,
    pub url: String,
    pub status: VerifyStatus,
}

/// Indices to check in a series of `len` items: the first, the last, and
/// evenly spaced ones between them, at most `count` in total.
pub fn verification_sample(len: usize, count: usize) -> Vec<usize> {
    if len == 0 || count == 0 {
        return Vec::new();
    }

    let step = if count > 2 { (len / (count - 2)).max(1) } else { 1 };

    let mut indices = vec![0, len - 1];
    indices.extend((step..len - 1).step_by(step));
    indices.sort_unstable();
    indices.dedup();
    indices.truncate(count);
    indices
}

/// HEAD-check a sample of `timesteps`.
///
/// Every sampled item gets a result; a failed request is recorded and the
/// remaining checks still run. Results are in index order.
pub async fn verify<P>(
    probe: &P,
    timesteps: &[TimestepRecord],
    count: usize,
    parallel: usize,
) -> Vec<Verification>
where
    P: HeadProbe + ?Sized,
{
    let indices = verification_sample(timesteps.len(), count);
    info!(checks = indices.len(), "Verifying timesteps");

    let results: Vec<Verification> = stream::iter(indices)
        .map(|index| async move {
            let ts = &timesteps[index];
            let status = match probe.head(&ts.url).await {
                Ok(200) => VerifyStatus::Ok,
                Ok(code) => VerifyStatus::Fail(code.to_string()),
                Err(e) => VerifyStatus::Fail(e),
            };
            Verification {
                index,
                timestep: ts.timestep.clone(),
                run_label: ts.run_label.clone(),
                url: ts.url.clone(),
                status,
            }
        })
        .buffered(parallel.max(1))
        .collect()
        .await;

    let failed = results.iter().filter(|r| !r.status.is_ok()).count();
    if failed > 0 {
        warn!(failed, total = results.len(), "Some timesteps failed verification");
    }
    results
}
