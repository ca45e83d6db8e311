//! Raw HTTP exchange shared by the backend and identity clients.
//!
//! Browser builds go through `reqwasm` with credentials included, native builds (desktop and
//! the integration tests) through `reqwest`.

use crate::{client::error::ClientError, model::api::ErrorDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a success body, treating an empty body as JSON `null`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ClientError> {
        let body = if self.body.trim().is_empty() {
            "null"
        } else {
            self.body.as_str()
        };

        serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Convert a failed exchange into an error, preferring the message in an `ErrorDto` body.
    pub fn into_error(self) -> ClientError {
        let message = match serde_json::from_str::<ErrorDto>(&self.body) {
            Ok(error_dto) => Some(error_dto.message),
            Err(_) => {
                let text = self.body.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
        };

        ClientError::Status {
            status: self.status,
            message,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn send(
    method: Method,
    url: &str,
    bearer: Option<&str>,
    body: Option<String>,
) -> Result<RawResponse, ClientError> {
    use reqwasm::http::{Method as HttpMethod, Request, RequestCredentials};

    let http_method = match method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Patch => HttpMethod::PATCH,
        Method::Delete => HttpMethod::DELETE,
    };

    let mut request = Request::new(url)
        .method(http_method)
        .credentials(RequestCredentials::Include);
    if let Some(token) = bearer {
        request = request.header("Authorization", &format!("Bearer {token}"));
    }
    if let Some(body) = body {
        request = request
            .header("Content-Type", "application/json")
            .body(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Request(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    Ok(RawResponse { status, body })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn send(
    method: Method,
    url: &str,
    bearer: Option<&str>,
    body: Option<String>,
) -> Result<RawResponse, ClientError> {
    let http_method = match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    };

    let mut request = reqwest::Client::new().request(http_method, url);
    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }
    if let Some(body) = body {
        request = request
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Request(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    Ok(RawResponse { status, body })
}
