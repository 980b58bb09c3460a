//! HTTP client for communicating with the GrubMart backend API

use crate::error::{ClientError, ClientResult};
use grubmart_core::config::ApiConfig;
use grubmart_core::types::ApiResponse;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// API client for making HTTP requests to the GrubMart backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.request_timeout));

        if config.send_credentials {
            builder = builder.cookie_store(true);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: normalize_base_url(&config.base_url),
        })
    }

    /// Create a client pointed at an explicit base URL with default settings
    #[must_use]
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(&base_url.into()),
        }
    }

    /// Base URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the display URL for a server-stored image filename
    ///
    /// Pure URL construction; performs no I/O.
    #[must_use]
    pub fn image_url(&self, filename: &str) -> String {
        format!("{}/images/{filename}", self.base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a resource, decoding the response envelope
    pub(crate) async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> ClientResult<ApiResponse<T>> {
        tracing::debug!(path, "GET");
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    /// POST a JSON body, decoding the response envelope
    pub(crate) async fn post_envelope<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiResponse<T>> {
        tracing::debug!(path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    /// PUT a JSON body, decoding the response envelope
    pub(crate) async fn put_envelope<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiResponse<T>> {
        tracing::debug!(path, "PUT");
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    /// POST a multipart form, decoding the response envelope
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<ApiResponse<T>> {
        tracing::debug!(path, "POST multipart");
        let response = self
            .http
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<ApiResponse<T>> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status });
        }
        Ok(response.json().await?)
    }

    /// Unwrap a data-carrying envelope into its payload
    pub(crate) fn into_data<T>(envelope: ApiResponse<T>) -> ClientResult<T> {
        if !envelope.success {
            return Err(backend_failure(envelope.message));
        }
        envelope.data.ok_or(ClientError::MissingData)
    }

    /// Unwrap an acknowledgement-only envelope
    pub(crate) fn into_ack<T>(envelope: ApiResponse<T>) -> ClientResult<()> {
        if envelope.success {
            Ok(())
        } else {
            Err(backend_failure(envelope.message))
        }
    }
}

fn backend_failure(message: Option<String>) -> ClientError {
    ClientError::backend(message.unwrap_or_else(|| "Request rejected by backend".to_string()))
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_image_url_construction() {
        let client = ApiClient::from_base_url("http://localhost:5000");
        assert_eq!(
            client.image_url("1710509130-burger.png"),
            "http://localhost:5000/images/1710509130-burger.png"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client = ApiClient::from_base_url("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/api/food/list"), "http://localhost:5000/api/food/list");
    }

    #[test]
    fn test_client_from_config() {
        let config = ApiConfig {
            base_url: "http://backend.test:9000".to_string(),
            request_timeout: 5,
            send_credentials: true,
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://backend.test:9000");
    }

    #[test]
    fn test_into_data_success() {
        let envelope = ApiResponse::success(vec![1, 2, 3]);
        assert_eq!(ApiClient::into_data(envelope).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_into_data_backend_failure_carries_message() {
        let envelope: ApiResponse<Vec<i32>> = ApiResponse::failure("no such item");
        let error = ApiClient::into_data(envelope).unwrap_err();
        assert_eq!(format!("{error}"), "no such item");
    }

    #[test]
    fn test_into_data_missing_payload() {
        let envelope: ApiResponse<Vec<i32>> = ApiResponse {
            success: true,
            data: None,
            message: None,
        };
        assert!(matches!(
            ApiClient::into_data(envelope),
            Err(ClientError::MissingData)
        ));
    }

    #[test]
    fn test_into_ack() {
        let ok: ApiResponse<serde_json::Value> = ApiResponse {
            success: true,
            data: None,
            message: None,
        };
        assert!(ApiClient::into_ack(ok).is_ok());

        let failed: ApiResponse<serde_json::Value> = ApiResponse::failure("nope");
        assert!(ApiClient::into_ack(failed).is_err());
    }

    #[test]
    fn test_backend_failure_fallback_message() {
        let error = backend_failure(None);
        assert_eq!(format!("{error}"), "Request rejected by backend");
    }
}
