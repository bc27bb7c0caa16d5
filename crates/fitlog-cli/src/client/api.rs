//! HTTP client for the hosted record store
//!
//! Thin wrapper over `reqwest` that injects the static API key on every
//! request and turns non-success responses into transport errors.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::error::{FitlogError, Result};

/// User agent for record store requests
const API_USER_AGENT: &str = concat!("fitlog/", env!("CARGO_PKG_VERSION"));

/// Header carrying the shared secret
const API_KEY_HEADER: &str = "X-API-KEY";

/// Record store API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: HeaderValue,
}

impl ApiClient {
    /// Create a new API client for the given REST root
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        let mut api_key = HeaderValue::from_str(api_key)
            .map_err(|_| FitlogError::config("API key contains invalid header characters"))?;
        api_key.set_sensitive(true);

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Build the full URL for a given path
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build headers with the API key
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(API_USER_AGENT));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, self.api_key.clone());
        headers
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response> {
        let url = self.build_url(path);
        tracing::debug!(%method, path, "record store request");

        let mut request = self
            .client
            .request(method.clone(), &url)
            .headers(self.build_headers());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "record store request failed");
            FitlogError::Http(e)
        })?;

        self.handle_response_status(&method, path, response).await
    }

    /// Make a GET request and deserialize the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send::<()>(Method::GET, path, None).await?;
        parse_json(response).await
    }

    /// Make a POST request with a JSON body and deserialize the response
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, Some(body)).await?;
        parse_json(response).await
    }

    /// Make a PATCH request with a JSON body and deserialize the response
    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PATCH, path, Some(body)).await?;
        parse_json(response).await
    }

    /// Make a DELETE request; any success payload is accepted
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Handle response status codes and convert to errors
    async fn handle_response_status(
        &self,
        method: &Method,
        path: &str,
        response: Response,
    ) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%method, path, status = status.as_u16(), "record store returned an error");
        Err(FitlogError::transport(status.as_u16(), body))
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| FitlogError::invalid_response(format!("Failed to parse JSON response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("https://my.living-apps.de/rest/", "key", Duration::from_secs(30)).unwrap()
    }

    #[test]
    fn test_build_url() {
        assert_eq!(
            client().build_url("/apps/abc/records"),
            "https://my.living-apps.de/rest/apps/abc/records"
        );
    }

    #[test]
    fn test_headers_carry_api_key() {
        let headers = client().build_headers();
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "key");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(API_KEY_HEADER).unwrap().is_sensitive());
    }

    #[test]
    fn test_invalid_api_key_rejected() {
        let result = ApiClient::new("https://x", "bad\nkey", Duration::from_secs(1));
        assert!(matches!(result, Err(FitlogError::Config(_))));
    }
}
