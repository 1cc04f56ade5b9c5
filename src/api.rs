use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use yew::prelude::*;

use crate::auth;

pub const API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("impossibile contattare il server")]
    Network,
    #[error("{detail}")]
    Status { status: u16, detail: String },
    #[error("{0}")]
    Validation(String),
}

// FastAPI wraps error messages as {"detail": "..."}
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(str::to_string)
}

/// Thin gateway over the REST API: attaches the bearer token, parses
/// JSON, maps failures onto [`ApiError`]. No caching, no retries.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self {
            base: API_BASE_URL.to_string(),
        }
    }
}

impl ApiClient {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match auth::stored_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.ok() {
            response.json::<T>().await.map_err(|_| ApiError::Network)
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn status_error(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body).unwrap_or(body);
        ApiError::Status { status, detail }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = Self::authorize(Request::get(&self.url(path)))
            .query(query.iter().map(|(key, value)| (*key, value.as_str())));
        let response = builder.send().await.map_err(|_| ApiError::Network)?;
        Self::parse(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Self::authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|_| ApiError::Network)?;
        let response = request.send().await.map_err(|_| ApiError::Network)?;
        Self::parse(response).await
    }

    // action endpoints that carry everything in the query string
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = Self::authorize(Request::post(&self.url(path)))
            .query(query.iter().map(|(key, value)| (*key, value.as_str())));
        let response = builder.send().await.map_err(|_| ApiError::Network)?;
        Self::parse(response).await
    }

    // the token endpoint speaks application/x-www-form-urlencoded, not JSON
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let encoded = fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, form_encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let request = Request::post(&self.url(path))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(encoded)
            .map_err(|_| ApiError::Network)?;
        let response = request.send().await.map_err(|_| ApiError::Network)?;
        Self::parse(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Self::authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|_| ApiError::Network)?;
        let response = request.send().await.map_err(|_| ApiError::Network)?;
        Self::parse(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = Self::authorize(Request::delete(&self.url(path)));
        let response = builder.send().await.map_err(|_| ApiError::Network)?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }
}

fn form_encode(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

#[hook]
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_default()
}

/// Per-component monotonic ticket counter. Each fetch takes a ticket
/// before dispatch and applies its response only while the ticket is
/// still the newest one, so a slow response can never overwrite the
/// result of a later request.
#[derive(Clone, Default, PartialEq)]
pub struct FetchSeq(Rc<Cell<u64>>);

impl FetchSeq {
    pub fn issue(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

#[hook]
pub fn use_fetch_seq() -> FetchSeq {
    let seq = use_mut_ref(FetchSeq::default);
    let current = seq.borrow().clone();
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_tickets_are_rejected() {
        let seq = FetchSeq::default();
        let first = seq.issue();
        assert!(seq.is_current(first));
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let seq = FetchSeq::default();
        let other = seq.clone();
        let ticket = seq.issue();
        assert!(other.is_current(ticket));
        other.issue();
        assert!(!seq.is_current(ticket));
    }

    #[test]
    fn detail_is_taken_from_the_json_envelope() {
        assert_eq!(
            extract_detail(r#"{"detail":"Budget not found"}"#),
            Some("Budget not found".to_string())
        );
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"message":"nope"}"#), None);
    }

    #[test]
    fn status_errors_render_their_detail() {
        let error = ApiError::Status {
            status: 404,
            detail: "Budget not found".to_string(),
        };
        assert_eq!(error.to_string(), "Budget not found");
        assert_eq!(
            ApiError::Validation("le password non coincidono".to_string()).to_string(),
            "le password non coincidono"
        );
    }
}
