use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client, StatusCode, Url};

use crate::error::SubmitError;

/// Value of the `SplinterProtocolVersion` header scabbard expects.
pub const SCABBARD_PROTOCOL_VERSION: u32 = 1;

const PROTOCOL_VERSION_HEADER: &str = "SplinterProtocolVersion";
const OCTET_STREAM: &str = "application/octet-stream";
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts signed payloads to a gameroom daemon or a splinter node.
#[derive(Clone)]
pub struct GameroomRpcClient {
    url: String,
    base: Url,
    client: Client,
}

impl GameroomRpcClient {
    pub fn new(url: &str) -> Result<Self, SubmitError> {
        Self::with_timeout(url, DEFAULT_HTTP_TIMEOUT)
    }

    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let base = Url::parse(url).map_err(|source| SubmitError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        if base.cannot_be_a_base() {
            return Err(SubmitError::CannotBeABase(url.to_string()));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SubmitError::Transport)?;
        Ok(GameroomRpcClient {
            url: url.trim_end_matches('/').to_string(),
            base,
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Submit a `BatchList` to the gameroom circuit `circuit_id`.
    pub async fn submit_batches(
        &self,
        circuit_id: &str,
        batch_list: Vec<u8>,
    ) -> Result<String, SubmitError> {
        self.post_octets(&["gamerooms", circuit_id, "batches"], batch_list, None)
            .await
    }

    /// Submit a signed `CircuitManagementPayload`.
    pub async fn submit_admin_payload(&self, payload: Vec<u8>) -> Result<String, SubmitError> {
        self.post_octets(&["submit"], payload, None).await
    }

    /// Submit a `BatchList` straight to a scabbard service, bypassing the
    /// gameroom daemon. The client must point at splinterd.
    pub async fn submit_scabbard_batches(
        &self,
        circuit_id: &str,
        service_id: &str,
        batch_list: Vec<u8>,
    ) -> Result<String, SubmitError> {
        self.post_octets(
            &["scabbard", circuit_id, service_id, "batches"],
            batch_list,
            Some(SCABBARD_PROTOCOL_VERSION),
        )
        .await
    }

    /// The base url with `segments` appended, each percent-encoded so ids
    /// cannot alter the route.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SubmitError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| SubmitError::CannotBeABase(self.url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn post_octets(
        &self,
        segments: &[&str],
        body: Vec<u8>,
        protocol_version: Option<u32>,
    ) -> Result<String, SubmitError> {
        let url = self.endpoint(segments)?;
        log::debug!("POST {} ({} bytes)", url, body.len());

        let mut request = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, OCTET_STREAM)
            .body(body);
        if let Some(version) = protocol_version {
            request = request.header(PROTOCOL_VERSION_HEADER, version.to_string());
        }

        let response = request.send().await.map_err(|err| {
            log::error!("request to {} failed: {}", url, err);
            SubmitError::Transport(err)
        })?;
        let status = response.status();
        let text = response.text().await.map_err(SubmitError::Transport)?;

        if status.is_success() {
            return Ok(text);
        }

        let message = error_message(&text);
        if let Some(message) = &message {
            log::error!("{} responded {}: {}", url, status, message);
        } else {
            log::error!("{} responded {}", url, status);
        }
        Err(classify(status, message))
    }
}

fn classify(status: StatusCode, message: Option<String>) -> SubmitError {
    let code = status.as_u16();
    if status.is_client_error() {
        SubmitError::Rejected {
            status: code,
            message,
        }
    } else {
        SubmitError::Server {
            status: code,
            message,
        }
    }
}

fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|message| message.as_str())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CLIENT_ERROR_MESSAGE, SERVER_ERROR_MESSAGE};
    use axum::{
        extract::{Path, State},
        http::{HeaderMap, StatusCode as AxumStatusCode},
        routing::post,
        Json, Router,
    };
    use std::{
        net::SocketAddr,
        sync::{Arc, Mutex},
    };
    use tokio::time::sleep;

    #[derive(Clone, Default)]
    struct Received {
        inner: Arc<Mutex<Vec<(String, Option<String>, Option<String>, Vec<u8>)>>>,
    }

    impl Received {
        fn record(&self, path: String, headers: &HeaderMap, body: &[u8]) {
            let header = |name: &str| {
                headers
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .map(ToString::to_string)
            };
            self.inner.lock().unwrap().push((
                path,
                header("content-type"),
                header("splinterprotocolversion"),
                body.to_vec(),
            ));
        }

        fn take(&self) -> Vec<(String, Option<String>, Option<String>, Vec<u8>)> {
            std::mem::take(&mut *self.inner.lock().unwrap())
        }
    }

    async fn serve_router(router: Router) -> (String, tokio::task::JoinHandle<()>) {
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
        let actual_addr = listener.local_addr().unwrap();
        let base_url = format!("http://{actual_addr}");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router.into_make_service())
                .await
                .unwrap();
        });

        sleep(Duration::from_millis(50)).await;
        (base_url, handle)
    }

    fn gameroom_router(received: Received) -> Router {
        Router::new()
            .route(
                "/gamerooms/:circuit_id/batches",
                post(
                    |State(received): State<Received>,
                     Path(circuit_id): Path<String>,
                     headers: HeaderMap,
                     body: axum::body::Bytes| async move {
                        received.record(circuit_id.clone(), &headers, &body);
                        match circuit_id.as_str() {
                            "bad-circuit" => (
                                AxumStatusCode::BAD_REQUEST,
                                Json(serde_json::json!({ "message": "Invalid batch list" })),
                            ),
                            "broken-circuit" => (
                                AxumStatusCode::INTERNAL_SERVER_ERROR,
                                Json(serde_json::json!({ "code": 500 })),
                            ),
                            _ => (
                                AxumStatusCode::ACCEPTED,
                                Json(serde_json::json!({ "link": "/batch_statuses?ids=abc" })),
                            ),
                        }
                    },
                ),
            )
            .route(
                "/submit",
                post(
                    |State(received): State<Received>,
                     headers: HeaderMap,
                     body: axum::body::Bytes| async move {
                        received.record("submit".to_string(), &headers, &body);
                        AxumStatusCode::ACCEPTED
                    },
                ),
            )
            .route(
                "/scabbard/:circuit_id/:service_id/batches",
                post(
                    |State(received): State<Received>,
                     Path((circuit_id, service_id)): Path<(String, String)>,
                     headers: HeaderMap,
                     body: axum::body::Bytes| async move {
                        received.record(format!("{}/{}", circuit_id, service_id), &headers, &body);
                        AxumStatusCode::ACCEPTED
                    },
                ),
            )
            .with_state(received)
    }

    #[tokio::test]
    async fn test_submit_batches() {
        let received = Received::default();
        let (base_url, handle) = serve_router(gameroom_router(received.clone())).await;
        let client = GameroomRpcClient::new(&format!("{}/", base_url)).unwrap();
        assert_eq!(client.url(), base_url);

        let body = client
            .submit_batches("ajTAf-Ul6dH", vec![10, 2, 8, 1])
            .await
            .unwrap();
        assert!(body.contains("batch_statuses"));

        let calls = received.take();
        assert_eq!(calls.len(), 1);
        let (circuit_id, content_type, version, bytes) = &calls[0];
        assert_eq!(circuit_id, "ajTAf-Ul6dH");
        assert_eq!(content_type.as_deref(), Some(OCTET_STREAM));
        assert_eq!(version, &None);
        assert_eq!(bytes, &vec![10, 2, 8, 1]);

        handle.abort();
    }

    #[tokio::test]
    async fn test_client_error_keeps_server_message() {
        let (base_url, handle) = serve_router(gameroom_router(Received::default())).await;
        let client = GameroomRpcClient::new(&base_url).unwrap();

        let err = client
            .submit_batches("bad-circuit", vec![1])
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Rejected { status: 400, .. }));
        assert_eq!(err.server_message(), Some("Invalid batch list"));
        assert_eq!(err.to_string(), CLIENT_ERROR_MESSAGE);

        handle.abort();
    }

    #[tokio::test]
    async fn test_server_error() {
        let (base_url, handle) = serve_router(gameroom_router(Received::default())).await;
        let client = GameroomRpcClient::new(&base_url).unwrap();

        let err = client
            .submit_batches("broken-circuit", vec![1])
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), SERVER_ERROR_MESSAGE);

        handle.abort();
    }

    #[tokio::test]
    async fn test_unknown_route_is_rejected() {
        let (base_url, handle) = serve_router(gameroom_router(Received::default())).await;
        let client = GameroomRpcClient::new(&format!("{}/api", base_url)).unwrap();

        let err = client.submit_admin_payload(vec![1]).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), CLIENT_ERROR_MESSAGE);

        handle.abort();
    }

    #[tokio::test]
    async fn test_submit_admin_payload() {
        let received = Received::default();
        let (base_url, handle) = serve_router(gameroom_router(received.clone())).await;
        let client = GameroomRpcClient::new(&base_url).unwrap();

        let body = client.submit_admin_payload(vec![10, 84]).await.unwrap();
        assert!(body.is_empty());
        let calls = received.take();
        assert_eq!(calls[0].0, "submit");
        assert_eq!(calls[0].3, vec![10, 84]);

        handle.abort();
    }

    #[tokio::test]
    async fn test_submit_scabbard_batches() {
        let received = Received::default();
        let (base_url, handle) = serve_router(gameroom_router(received.clone())).await;
        let client = GameroomRpcClient::new(&base_url).unwrap();

        client
            .submit_scabbard_batches("ajTAf-Ul6dH", "gameroom_acme-node-000", vec![7])
            .await
            .unwrap();
        let calls = received.take();
        assert_eq!(calls[0].0, "ajTAf-Ul6dH/gameroom_acme-node-000");
        assert_eq!(
            calls[0].2,
            Some(SCABBARD_PROTOCOL_VERSION.to_string())
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = GameroomRpcClient::new(&format!("http://{addr}")).unwrap();
        let err = client.submit_batches("any", vec![1]).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
        assert_eq!(err.to_string(), SERVER_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_ids_are_escaped() {
        let received = Received::default();
        let (base_url, handle) = serve_router(gameroom_router(received.clone())).await;
        let client = GameroomRpcClient::new(&base_url).unwrap();

        client
            .submit_batches("a/b?c#d", vec![1])
            .await
            .unwrap();
        client
            .submit_scabbard_batches("ajTAf-Ul6dH", "node/../x", vec![2])
            .await
            .unwrap();
        let calls = received.take();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "a/b?c#d");
        assert_eq!(calls[1].0, "ajTAf-Ul6dH/node/../x");

        handle.abort();
    }

    #[test]
    fn test_endpoint() {
        let client = GameroomRpcClient::new("http://localhost:8001/api/").unwrap();
        assert_eq!(
            client.endpoint(&["gamerooms", "a b/c", "batches"]).unwrap().as_str(),
            "http://localhost:8001/api/gamerooms/a%20b%2Fc/batches"
        );
        let client = GameroomRpcClient::new("http://localhost:8001").unwrap();
        assert_eq!(
            client.endpoint(&["submit"]).unwrap().as_str(),
            "http://localhost:8001/submit"
        );
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            GameroomRpcClient::new("localhost 8001"),
            Err(SubmitError::InvalidUrl { .. })
        ));
        assert!(matches!(
            GameroomRpcClient::new("mailto:admin@gameroom.local"),
            Err(SubmitError::CannotBeABase(_))
        ));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"code":400,"message":"Circuit not found"}"#).as_deref(),
            Some("Circuit not found")
        );
        assert_eq!(error_message("Internal Server Error"), None);
        assert_eq!(error_message(r#"{"message":12}"#), None);
    }
}
