//! HTTP client for the admissions backend
//!
//! Talks JSON over HTTP to the backend's `/api/admissions` endpoint.

use super::error::SubmitError;
use super::traits::AdmissionApi;
use super::types::{error_detail, AdmissionPayload, AdmissionReceipt};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Path of the admissions endpoint, relative to the base URL
const ADMISSIONS_PATH: &str = "/api/admissions";

/// Upper bound on the liveness check; submissions themselves never time out
const LIVENESS_TIMEOUT: Duration = Duration::from_secs(3);

/// Client for communicating with the admissions backend
#[derive(Debug, Clone)]
pub struct AdmissionClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL without a trailing slash
    base_url: String,
}

impl AdmissionClient {
    /// Create a new client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn admissions_url(&self) -> String {
        format!("{}{}", self.base_url, ADMISSIONS_PATH)
    }
}

#[async_trait]
impl AdmissionApi for AdmissionClient {
    async fn check_connection(&self) -> bool {
        let response = self
            .http
            .get(format!("{}/", self.base_url))
            .timeout(LIVENESS_TIMEOUT)
            .send()
            .await;

        match response {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Backend liveness check failed: {e}");
                false
            }
        }
    }

    async fn create_admission(
        &self,
        payload: AdmissionPayload,
    ) -> Result<AdmissionReceipt, SubmitError> {
        let response = self
            .http
            .post(self.admissions_url())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let receipt = AdmissionReceipt::from_body(&body);
            tracing::debug!(?receipt, "Admission created");
            Ok(receipt)
        } else {
            // A failure body that is not JSON did not come from the backend
            // application, so it counts as a transport failure
            let detail = error_detail(&body).map_err(|e| {
                SubmitError::Transport(format!("unreadable {status} response body: {e}"))
            })?;
            Err(SubmitError::Application {
                status: status.as_u16(),
                detail,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn jane_doe() -> AdmissionPayload {
        AdmissionPayload {
            full_name: "Jane Doe".to_string(),
            father_name: "John Doe".to_string(),
            class_grade: "5th Grade".to_string(),
        }
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = AdmissionClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url, "http://127.0.0.1:8000");
        assert_eq!(
            client.admissions_url(),
            "http://127.0.0.1:8000/api/admissions"
        );
    }

    #[tokio::test]
    async fn test_create_admission_posts_json_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/admissions"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "full_name": "Jane Doe",
                "father_name": "John Doe",
                "class_grade": "5th Grade",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Student admission created successfully",
                "data": {"id": 1, "full_name": "Jane Doe"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = AdmissionClient::new(server.uri());
        let receipt = client.create_admission(jane_doe()).await.unwrap();

        assert_eq!(receipt.success, Some(true));
        assert_eq!(
            receipt.message.as_deref(),
            Some("Student admission created successfully")
        );
    }

    #[tokio::test]
    async fn test_create_admission_accepts_any_2xx() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/admissions"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = AdmissionClient::new(server.uri());
        let receipt = client.create_admission(jane_doe()).await.unwrap();
        assert_eq!(receipt, AdmissionReceipt::default());
    }

    #[tokio::test]
    async fn test_create_admission_surfaces_detail() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/admissions"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"detail": "Name already exists"})),
            )
            .mount(&server)
            .await;

        let client = AdmissionClient::new(server.uri());
        let err = client.create_admission(jane_doe()).await.unwrap_err();

        assert_eq!(
            err,
            SubmitError::Application {
                status: 400,
                detail: Some("Name already exists".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_create_admission_without_detail() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/admissions"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"error": "database unavailable"})),
            )
            .mount(&server)
            .await;

        let client = AdmissionClient::new(server.uri());
        let err = client.create_admission(jane_doe()).await.unwrap_err();

        assert_eq!(
            err,
            SubmitError::Application {
                status: 500,
                detail: None,
            }
        );
    }

    #[tokio::test]
    async fn test_create_admission_validation_list_has_no_detail() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/admissions"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "detail": [{"loc": ["body", "full_name"], "msg": "field required"}]
            })))
            .mount(&server)
            .await;

        let client = AdmissionClient::new(server.uri());
        let err = client.create_admission(jane_doe()).await.unwrap_err();

        assert_eq!(
            err,
            SubmitError::Application {
                status: 422,
                detail: None,
            }
        );
    }

    #[tokio::test]
    async fn test_create_admission_non_json_failure_is_transport() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/admissions"))
            .respond_with(
                ResponseTemplate::new(502)
                    .insert_header("content-type", "text/html")
                    .set_body_string("<html>Bad Gateway</html>"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = AdmissionClient::new(server.uri());
        let err = client.create_admission(jane_doe()).await.unwrap_err();

        assert!(matches!(err, SubmitError::Transport(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_create_admission_empty_failure_body_is_transport() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/admissions"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = AdmissionClient::new(server.uri());
        let err = client.create_admission(jane_doe()).await.unwrap_err();

        assert!(matches!(err, SubmitError::Transport(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_create_admission_unreachable_backend() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = AdmissionClient::new(format!("http://{addr}"));
        let err = client.create_admission(jane_doe()).await.unwrap_err();

        assert!(matches!(err, SubmitError::Transport(_)));
    }

    #[tokio::test]
    async fn test_check_connection_reachable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "School Management System API is running"
            })))
            .mount(&server)
            .await;

        let client = AdmissionClient::new(server.uri());
        assert!(client.check_connection().await);
    }

    #[tokio::test]
    async fn test_check_connection_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = AdmissionClient::new(server.uri());
        assert!(!client.check_connection().await);
    }
}
