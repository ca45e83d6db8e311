//! Backend REST client.
//!
//! Queries (`GET`) go through the [`RetryPolicy`]; mutations are sent once. Every request
//! carries the session's identity token when one is present, and credentialed endpoints refuse
//! to send without one.

pub mod identity;
pub mod order;
pub mod payment;
pub mod retry;
pub mod statistics;
pub mod ticket;
pub mod transport;
pub mod user;

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::client::{
    api::{
        retry::RetryPolicy,
        transport::{Method, RawResponse},
    },
    error::ClientError,
};
use crate::model::api::MutationResultDto;

pub use identity::IdentityClient;

/// Whether an endpoint requires a signed in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Public,
    Required,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    retry: RetryPolicy,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self, auth: Auth) -> Result<Option<&str>, ClientError> {
        match (auth, self.token()) {
            (Auth::Required, None) => Err(ClientError::Unauthenticated),
            (_, token) => Ok(token),
        }
    }

    async fn exchange(
        &self,
        method: Method,
        path: &str,
        auth: Auth,
        body: Option<String>,
    ) -> Result<RawResponse, ClientError> {
        let bearer = self.bearer(auth)?;
        let url = self.url(path);

        tracing::debug!("{} {}", method.as_str(), url);
        let response = transport::send(method, &url, bearer, body).await?;
        if !response.is_success() {
            tracing::warn!(
                "{} {} failed with status {}",
                method.as_str(),
                path,
                response.status
            );
        }

        Ok(response)
    }

    /// Fetch a single record.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Auth,
    ) -> Result<T, ClientError> {
        self.retry
            .run(path, move || async move {
                let response = self.exchange(Method::Get, path, auth, None).await?;
                match response.status {
                    200 => response.json(),
                    _ => Err(response.into_error()),
                }
            })
            .await
    }

    /// Fetch a list; a 404 means there is nothing to show.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Auth,
    ) -> Result<Vec<T>, ClientError> {
        self.retry
            .run(path, move || async move {
                let response = self.exchange(Method::Get, path, auth, None).await?;
                match response.status {
                    200 => Ok(response.json::<Option<Vec<T>>>()?.unwrap_or_default()),
                    404 => Ok(Vec::new()),
                    _ => Err(response.into_error()),
                }
            })
            .await
    }

    /// Send a mutation once and decode its response.
    pub(crate) async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        let response = self.exchange(method, path, Auth::Required, body).await?;
        match response.status {
            200 | 201 => response.json(),
            _ => Err(response.into_error()),
        }
    }

    /// Mutation whose response is only an acknowledgement.
    pub(crate) async fn mutate<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<MutationResultDto, ClientError> {
        let result: Option<MutationResultDto> = self.send(method, path, body).await?;
        Ok(result.unwrap_or_default())
    }
}
