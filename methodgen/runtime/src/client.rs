//! Form-encoded HTTP transport shared by every generated service.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{Span, debug, instrument};
use url::Url;

use crate::context::Context;
use crate::error::TransportError;
use crate::values::Values;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring an [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl HttpClientBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
        }
    }

    /// Sets the per-request timeout enforced by the HTTP client itself,
    /// independently of any [`Context`] deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the [`HttpClient`].
    ///
    /// The base URL gets a trailing slash if it lacks one, so endpoint names
    /// are appended rather than replacing the last path segment.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be constructed.
    pub fn build(self) -> Result<HttpClient, TransportError> {
        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url).map_err(|source| TransportError::InvalidUrl {
            endpoint: String::new(),
            source,
        })?;

        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(HttpClient {
            client: builder.build()?,
            base_url,
        })
    }
}

/// Posts form-encoded parameters to `<base_url>/<endpoint>` and decodes
/// the JSON response.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    /// Creates a new builder.
    pub fn builder(base_url: impl Into<String>) -> HttpClientBuilder {
        HttpClientBuilder::new(base_url)
    }

    /// Creates a client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        Self::builder(base_url).build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submits `values` to `endpoint` and decodes the response body as `T`.
    ///
    /// The request is raced against `ctx`: cancellation or an expired
    /// deadline abandons it.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The context is cancelled or its deadline passes
    /// - The request fails (network, timeout, etc.)
    /// - The server returns a non-success status code
    /// - The body cannot be decoded as `T`
    #[instrument(
        name = "post_form",
        skip(self, ctx, values),
        fields(http.url = tracing::field::Empty, http.status_code = tracing::field::Empty)
    )]
    pub async fn post_form<T>(
        &self,
        ctx: &Context,
        endpoint: &str,
        values: &Values,
    ) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
    {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|source| TransportError::InvalidUrl {
                endpoint: endpoint.to_string(),
                source,
            })?;
        Span::current().record("http.url", url.as_str());
        debug!(params = values.len(), "posting form");

        let request = self.client.post(url).form(values);

        ctx.run(async move {
            let response = request.send().await?;

            let status = response.status();
            Span::current().record("http.status_code", status.as_u16());

            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());
                return Err(TransportError::HttpStatus {
                    status: status.as_u16(),
                    body,
                });
            }

            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        })
        .await
    }
}
