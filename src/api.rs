//! HTTP client for the tracker backend. One method per remote operation;
//! every failure is normalized into an [`ApiError`] whose display string is
//! what views show the user.

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Application, ApplicationDraft, JobPosting, JobStatus, Keyword};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const BASE_URL_ENV: &str = "JOBTRACK_API_BASE_URL";

const GENERIC_ERROR: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; the message is the server's, or a generic fallback
    /// when the body carried none.
    #[error("{message}")]
    Server { status: StatusCode, message: String },
    /// The request never completed.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// 2xx response whose body did not decode into the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct Registration<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct StatusChange {
    status: JobStatus,
}

#[derive(Serialize)]
struct NewKeyword<'a> {
    term: &'a str,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Base path from `JOBTRACK_API_BASE_URL`, defaulting to the local
    /// backend.
    pub fn from_env() -> Self {
        let base =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(server_error(status, &bytes));
        }
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }

    async fn send_empty(builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await?;
            return Err(server_error(status, &bytes));
        }
        Ok(())
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let body = Registration { username, email, password };
        Self::send_empty(self.request(Method::POST, "/auth/register").json(&body)).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<TokenGrant, ApiError> {
        let body = Credentials { username, password };
        Self::send_json(self.request(Method::POST, "/auth/login").json(&body)).await
    }

    pub async fn list_jobs(&self) -> Result<Vec<JobPosting>, ApiError> {
        Self::send_json(self.request(Method::GET, "/jobs")).await
    }

    pub async fn update_job_status(
        &self,
        id: u64,
        status: JobStatus,
    ) -> Result<JobPosting, ApiError> {
        let path = format!("/jobs/{id}/status");
        Self::send_json(self.request(Method::PUT, &path).json(&StatusChange { status })).await
    }

    pub async fn list_applications(&self) -> Result<Vec<Application>, ApiError> {
        Self::send_json(self.request(Method::GET, "/applications/")).await
    }

    pub async fn create_application(
        &self,
        draft: &ApplicationDraft,
    ) -> Result<Application, ApiError> {
        Self::send_json(self.request(Method::POST, "/applications/").json(draft)).await
    }

    pub async fn get_application(&self, id: u64) -> Result<Application, ApiError> {
        let path = format!("/applications/{id}");
        Self::send_json(self.request(Method::GET, &path)).await
    }

    pub async fn update_application(
        &self,
        id: u64,
        draft: &ApplicationDraft,
    ) -> Result<Application, ApiError> {
        let path = format!("/applications/{id}");
        Self::send_json(self.request(Method::PUT, &path).json(draft)).await
    }

    pub async fn delete_application(&self, id: u64) -> Result<(), ApiError> {
        let path = format!("/applications/{id}");
        Self::send_empty(self.request(Method::DELETE, &path)).await
    }

    pub async fn list_keywords(&self) -> Result<Vec<Keyword>, ApiError> {
        Self::send_json(self.request(Method::GET, "/keywords/")).await
    }

    pub async fn add_keyword(&self, term: &str) -> Result<Keyword, ApiError> {
        Self::send_json(self.request(Method::POST, "/keywords/").json(&NewKeyword { term })).await
    }

    pub async fn delete_keyword(&self, id: u64) -> Result<(), ApiError> {
        let path = format!("/keywords/{id}");
        Self::send_empty(self.request(Method::DELETE, &path)).await
    }
}

fn server_error(status: StatusCode, bytes: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ErrorBody>(bytes)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| GENERIC_ERROR.to_string());
    tracing::warn!(%status, %message, "server reported failure");
    ApiError::Server { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApplicationStatus;
    use mockito::Matcher;

    #[tokio::test]
    async fn login_returns_the_granted_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login")
            .match_body(Matcher::Json(serde_json::json!({
                "username": "u",
                "password": "p"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token":"t"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let grant = client.login("u", "p").await.expect("login succeeds");

        assert_eq!(grant.access_token, "t");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn login_surfaces_the_server_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(401)
            .with_body(r#"{"message":"Invalid credentials"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.login("u", "wrong").await.expect_err("login fails");

        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn unparseable_error_bodies_fall_back_to_a_generic_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/jobs")
            .with_status(500)
            .with_body("<html>nope</html>")
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.list_jobs().await.expect_err("fetch fails");

        assert_eq!(err.to_string(), GENERIC_ERROR);
    }

    #[tokio::test]
    async fn authenticated_requests_carry_the_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/jobs")
            .match_header("authorization", "Bearer sesame")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let mut client = ApiClient::new(server.url());
        client.set_token(Some("sesame".to_string()));
        let jobs = client.list_jobs().await.expect("fetch succeeds");

        assert!(jobs.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn requests_without_a_token_omit_the_authorization_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/register")
            .match_header("authorization", Matcher::Missing)
            .with_status(201)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        client.register("u", "u@example.com", "p").await.expect("register succeeds");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_job_status_puts_the_lowercase_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/jobs/1/status")
            .match_body(Matcher::Json(serde_json::json!({ "status": "saved" })))
            .with_status(200)
            .with_body(
                r#"{
                    "id": 1,
                    "title": "Job 1",
                    "company": "Company A",
                    "description": "Desc 1",
                    "application_link": "link1",
                    "status": "saved"
                }"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let updated = client
            .update_job_status(1, JobStatus::Saved)
            .await
            .expect("update succeeds");

        assert_eq!(updated.id, 1);
        assert_eq!(updated.status, JobStatus::Saved);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn successful_but_undecodable_bodies_are_malformed_responses() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/jobs")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.list_jobs().await.expect_err("decode fails");

        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("malformed response"));
    }

    #[tokio::test]
    async fn add_keyword_posts_the_term() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/keywords/")
            .match_body(Matcher::Json(serde_json::json!({ "term": "rust" })))
            .with_status(201)
            .with_body(r#"{"id":3,"term":"rust"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let created = client.add_keyword("rust").await.expect("create succeeds");

        assert_eq!(created, Keyword { id: 3, term: "rust".into() });
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn get_application_fetches_a_single_record() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/applications/7")
            .with_status(200)
            .with_body(
                r#"{
                    "id": 7,
                    "job_title": "Engineer",
                    "company": "Acme",
                    "application_date": "2024-03-01",
                    "status": "Interviewing"
                }"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let app = client.get_application(7).await.expect("fetch succeeds");

        assert_eq!(app.id, 7);
        assert_eq!(app.status, ApplicationStatus::Interviewing);
        assert_eq!(app.notes, "");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_application_hits_the_item_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/applications/7")
            .with_status(204)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        client.delete_application(7).await.expect("delete succeeds");

        mock.assert_async().await;
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url, "http://localhost:8000/api");
    }
}
