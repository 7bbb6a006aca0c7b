//! HTTP API handlers.
//!
//! Every handler is a pure function of the current time (where a
//! timestamp applies): no state, no input parsing, no failure modes
//! beyond the transport itself.

use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;

/// Service name reported by the root endpoint.
pub const SERVICE_MESSAGE: &str = "Zero Trust AKS Sample API";

/// Greeting returned by `/api/hello`.
pub const HELLO_MESSAGE: &str = "Hello from Zero Trust AKS!";

/// Deployment environment label.
pub const ENVIRONMENT: &str = "dev";

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Service name.
    pub message: &'static str,
    /// Directory of the available endpoints.
    pub endpoints: EndpointMap,
}

/// Endpoint directory in the root response.
#[derive(Debug, Serialize)]
pub struct EndpointMap {
    /// Greeting endpoint path.
    pub hello: &'static str,
    /// Liveness probe path.
    pub health: &'static str,
    /// Readiness probe path.
    pub ready: &'static str,
}

/// Probe response shared by the liveness and readiness endpoints.
#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    /// Probe status: "healthy" or "ready".
    pub status: &'static str,
    /// Time the probe was answered.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Greeting response.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    /// Greeting message.
    pub message: &'static str,
    /// Deployment environment: "dev".
    pub environment: &'static str,
}

impl ProbeResponse {
    fn now(status: &'static str) -> Self {
        Self {
            status,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

/// Root handler - lists the available endpoints.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_MESSAGE,
        endpoints: EndpointMap {
            hello: "/api/hello",
            health: "/healthz",
            ready: "/readyz",
        },
    })
}

/// Liveness probe handler - healthy whenever the process can respond.
pub async fn healthz() -> Json<ProbeResponse> {
    Json(ProbeResponse::now("healthy"))
}

/// Readiness probe handler - the service has no dependencies, so it is
/// ready as soon as it can serve requests.
pub async fn readyz() -> Json<ProbeResponse> {
    Json(ProbeResponse::now("ready"))
}

/// Legacy health handler - alias of `/healthz` kept for older probe
/// configurations.
pub async fn health() -> Json<ProbeResponse> {
    Json(ProbeResponse::now("healthy"))
}

/// Greeting handler.
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: HELLO_MESSAGE,
        environment: ENVIRONMENT,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use time::format_description::well_known::Rfc3339;

    use super::*;

    #[tokio::test]
    async fn root_response_serializes_endpoint_directory() {
        let Json(response) = root().await;
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["message"], "Zero Trust AKS Sample API");
        assert_eq!(
            value["endpoints"],
            json!({
                "hello": "/api/hello",
                "health": "/healthz",
                "ready": "/readyz",
            })
        );
    }

    #[test]
    fn probe_response_timestamp_is_rfc3339() {
        let response = ProbeResponse::now("healthy");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "healthy");
        let timestamp = value["timestamp"].as_str().unwrap();
        assert!(OffsetDateTime::parse(timestamp, &Rfc3339).is_ok());
    }

    #[tokio::test]
    async fn probe_handlers_report_expected_status() {
        let Json(live) = healthz().await;
        let Json(ready) = readyz().await;
        let Json(legacy) = health().await;

        assert_eq!(live.status, "healthy");
        assert_eq!(ready.status, "ready");
        assert_eq!(legacy.status, "healthy");
    }

    #[tokio::test]
    async fn hello_response_is_exact() {
        let Json(response) = hello().await;
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "message": "Hello from Zero Trust AKS!",
                "environment": "dev",
            })
        );
    }
}
