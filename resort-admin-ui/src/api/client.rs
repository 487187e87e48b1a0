//! HTTP API Client
//!
//! gloo-net transport for the resort backend.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use resort_admin::api::normalize_base;
use resort_admin::{
    ApiError, ApiResult, BookingRequest, DashboardStats, PricingQuery, PricingQuote, ResortApi,
    Room, DEFAULT_API_BASE,
};

/// Local storage key overriding the API base URL
const API_URL_KEY: &str = "resort_admin_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

/// Browser client for the resort backend
#[derive(Debug, Clone)]
pub struct GlooClient {
    base_url: String,
}

impl GlooClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base(base_url),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(map_error)?;
        check(response).await
    }
}

/// Client for the configured backend
pub fn client() -> GlooClient {
    GlooClient::new(&get_api_base())
}

fn map_error(error: gloo_net::Error) -> ApiError {
    match error {
        gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}

async fn check(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    web_sys::console::warn_1(&format!("{} {}: {}", status, response.url(), message).into());
    Err(ApiError::Status { status, message })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response.json().await.map_err(map_error)
}

#[async_trait(?Send)]
impl ResortApi for GlooClient {
    async fn list_rooms(&self) -> ApiResult<Vec<Room>> {
        let response = self.send(Request::get(&self.url("/rooms"))).await?;
        decode(response).await
    }

    async fn create_booking(&self, booking: &BookingRequest) -> ApiResult<()> {
        let request = Request::post(&self.url("/bookings"))
            .json(booking)
            .map_err(map_error)?;
        let response = request.send().await.map_err(map_error)?;
        check(response).await?;
        Ok(())
    }

    async fn fetch_analytics(&self, token: &str) -> ApiResult<DashboardStats> {
        let request = Request::get(&self.url("/admin/analytics"))
            .header("Authorization", &format!("Bearer {}", token));
        let response = self.send(request).await?;
        decode(response).await
    }

    async fn quote_price(&self, query: &PricingQuery) -> ApiResult<PricingQuote> {
        let params = query.params();
        let request = Request::get(&self.url(&query.path()))
            .query(params.iter().map(|(key, value)| (*key, value.as_str())));
        let response = self.send(request).await?;
        decode(response).await
    }
}
