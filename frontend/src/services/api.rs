use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{CreateIncomeRequest, IncomeRecord, UpdateIncomeRequest};
use thiserror::Error;

use crate::services::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// API client for the `/income` endpoints
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from the build-time configuration
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self::from_config(&AppConfig::with_base_url(&base_url))
    }

    fn income_url(&self) -> String {
        format!("{}/income", self.base_url)
    }

    fn income_item_url(&self, id: &str) -> String {
        format!("{}/income/{}", self.base_url, id)
    }

    /// Create an income record. `Ok(None)` when the server answered with an empty body.
    pub async fn create_income(
        &self,
        request: &CreateIncomeRequest,
    ) -> Result<Option<IncomeRecord>, ApiError> {
        let response = Request::post(&self.income_url())
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body = checked_text(response).await?;
        decode_optional(&body)
    }

    /// List every income record
    pub async fn list_income(&self) -> Result<Vec<IncomeRecord>, ApiError> {
        let response = Request::get(&self.income_url())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(&checked_text(response).await?)
    }

    /// Fetch a single income record
    pub async fn get_income(&self, id: &str) -> Result<IncomeRecord, ApiError> {
        let response = Request::get(&self.income_item_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(&checked_text(response).await?)
    }

    /// Replace an income record. No screen calls this yet.
    pub async fn update_income(
        &self,
        id: &str,
        request: &UpdateIncomeRequest,
    ) -> Result<Option<IncomeRecord>, ApiError> {
        let response = Request::put(&self.income_item_url(id))
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_optional(&checked_text(response).await?)
    }

    /// Delete an income record. No screen calls this yet.
    pub async fn delete_income(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.income_item_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        checked_text(response).await.map(|_| ())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the body, turning non-2xx statuses into [`ApiError::Status`].
async fn checked_text(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::Status { status, body })
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Empty bodies and a JSON `null` both decode to `None`.
fn decode_optional<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    decode(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_income_urls() {
        let client = ApiClient::with_base_url("http://localhost:8080/".to_string());
        assert_eq!(client.income_url(), "http://localhost:8080/income");
        assert_eq!(client.income_item_url("abc"), "http://localhost:8080/income/abc");
    }

    #[wasm_bindgen_test]
    fn test_decode_optional_treats_blank_and_null_as_missing() {
        assert_eq!(decode_optional::<IncomeRecord>("").unwrap(), None);
        assert_eq!(decode_optional::<IncomeRecord>("null").unwrap(), None);
        assert!(matches!(
            decode_optional::<IncomeRecord>("{\"id\":1}"),
            Err(ApiError::Decode(_))
        ));
    }

    #[wasm_bindgen_test]
    fn test_decode_optional_reads_record() {
        let body = r#"{"id":"7","amount":"200","fundAmount":"20","incomeType":"CASH","source":"Market","transactionDate":"2024-05-01"}"#;
        let record = decode_optional::<IncomeRecord>(body).unwrap().unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.fund_amount, "20");
    }
}
