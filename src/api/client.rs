//! Resort REST API Client
//!
//! reqwest-backed [`ResortApi`] used by the terminal front end.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{normalize_base, ApiError, ApiResult, ResortApi, DEFAULT_API_BASE};
use crate::model::{BookingRequest, DashboardStats, LoginResponse, PricingQuery, PricingQuote, Room};

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Configuration for [`ResortClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the API prefix (e.g., "http://localhost:8000/api/v1")
    pub base_url: String,
    /// Request timeout in seconds; 0 waits indefinitely
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Resort backend REST client
#[derive(Debug, Clone)]
pub struct ResortClient {
    client: Client,
    config: ClientConfig,
}

impl ResortClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        let config = ClientConfig {
            base_url: normalize_base(&config.base_url),
            ..config
        };

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Exchange admin credentials for a bearer token
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let builder = self
            .client
            .post(self.url("/auth/login"))
            .form(&[("username", email), ("password", password)]);

        let response = self.send("POST /auth/login", builder).await?;
        decode(response).await
    }

    /// Send a request, tagging it with a request id and turning non-2xx
    /// responses into [`ApiError::Status`]
    async fn send(&self, label: &str, builder: RequestBuilder) -> ApiResult<Response> {
        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(request_id = %request_id, request = label, "Sending request");

        let response = builder
            .header(REQUEST_ID_HEADER, &request_id)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(request_id = %request_id, request = label, error = %e, "Request failed");
                ApiError::from(e)
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(request_id = %request_id, status = status.as_u16(), "Request succeeded");
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        tracing::warn!(
            request_id = %request_id,
            request = label,
            status = status.as_u16(),
            "Backend returned error status"
        );
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response.json().await.map_err(ApiError::from)
}

#[async_trait(?Send)]
impl ResortApi for ResortClient {
    async fn list_rooms(&self) -> ApiResult<Vec<Room>> {
        let builder = self.client.get(self.url("/rooms"));
        let response = self.send("GET /rooms", builder).await?;
        decode(response).await
    }

    async fn create_booking(&self, booking: &BookingRequest) -> ApiResult<()> {
        let builder = self.client.post(self.url("/bookings")).json(booking);
        self.send("POST /bookings", builder).await?;
        Ok(())
    }

    async fn fetch_analytics(&self, token: &str) -> ApiResult<DashboardStats> {
        let builder = self
            .client
            .get(self.url("/admin/analytics"))
            .bearer_auth(token);
        let response = self.send("GET /admin/analytics", builder).await?;
        decode(response).await
    }

    async fn quote_price(&self, query: &PricingQuery) -> ApiResult<PricingQuote> {
        let builder = self
            .client
            .get(self.url(&query.path()))
            .query(&query.params());
        let response = self.send("GET /pricing/room/:id/price", builder).await?;
        decode(response).await
    }
}
