use gloo::net::http::{Request, Response};
use shared::{CreateReservationRequest, CreateReservationResponse, Reservation, ReservationQuery};
use thiserror::Error;

use crate::services::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server error {status}: {body}")]
    Server { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

/// API client for the reservation backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_url.clone(),
        }
    }

    pub fn create_url(&self) -> String {
        format!("{}/create", self.base_url)
    }

    pub fn list_url(&self) -> String {
        format!("{}/get", self.base_url)
    }

    /// Submit a new reservation
    pub async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
    ) -> Result<CreateReservationResponse, ApiError> {
        let response = Request::post(&self.create_url())
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = ensure_ok(response).await?;
        response
            .json::<CreateReservationResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Reservations already booked for a room on a day
    pub async fn get_reservations(&self, query: &ReservationQuery) -> Result<Vec<Reservation>, ApiError> {
        let response = Request::get(&self.list_url())
            .query([
                ("roomName", query.room_name.name()),
                ("date", query.date.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = ensure_ok(response).await?;
        response
            .json::<Vec<Reservation>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ApiError::Server { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_endpoint_urls() {
        let client = ApiClient::from_config(&AppConfig::with_api_url("https://rooms.example.com/"));
        assert_eq!(client.create_url(), "https://rooms.example.com/create");
        assert_eq!(client.list_url(), "https://rooms.example.com/get");
    }

    #[wasm_bindgen_test]
    fn test_server_error_message() {
        let error = ApiError::Server {
            status: 422,
            body: "topic missing".to_string(),
        };
        assert_eq!(error.to_string(), "server error 422: topic missing");
    }
}
