//! Roster fetch: one raw snapshot per identity parameter value.
//!
//! The payload shape varies across deployments, so this layer returns
//! raw JSON; normalization happens in
//! `contracts::applications::transform`.

use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use thiserror::Error;

use crate::shared::api_utils::api_url;

/// Transport budget for the snapshot fetch
pub const FETCH_TIMEOUT_MS: u32 = 60_000;

/// Transport failures, surfaced distinctly so the view can tell a slow
/// backend from a broken one. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error(
        "applications request for employee {employee_id} timed out after {} seconds",
        FETCH_TIMEOUT_MS / 1000
    )]
    Timeout { employee_id: i64 },
    #[error("server error: {status}")]
    Server { status: u16 },
    #[error("network error: {0}")]
    Network(String),
}

/// Fetch the raw applications payload for one employee/campus id
pub async fn fetch_applications(employee_campus_id: i64) -> Result<Value, FetchError> {
    let url = api_url(&format!(
        "/api/admissions/applications/{}",
        employee_campus_id
    ));
    log::debug!("fetching applications: {}", url);

    let request = Box::pin(Request::get(&url).send());
    let timeout = Box::pin(TimeoutFuture::new(FETCH_TIMEOUT_MS));

    let response = match select(request, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| FetchError::Network(e.to_string()))?,
        Either::Right(_) => {
            return Err(FetchError::Timeout {
                employee_id: employee_campus_id,
            });
        }
    };

    if !response.ok() {
        return Err(FetchError::Server {
            status: response.status(),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_names_the_identity() {
        let message = FetchError::Timeout { employee_id: 4217 }.to_string();
        assert!(message.contains("4217"));
        assert!(message.contains("60 seconds"));
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        let timeout = FetchError::Timeout { employee_id: 1 };
        let server = FetchError::Server { status: 502 };
        let network = FetchError::Network("connection refused".to_string());
        assert_ne!(timeout, server);
        assert!(server.to_string().contains("502"));
        assert!(network.to_string().contains("connection refused"));
    }
}
