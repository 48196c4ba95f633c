//! HTTP client for the remote prediction service.

use crate::error::AppError;
use crate::models::predict_types::PredictionReply;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

/// Base URL of the deployed prediction service. Edit per deployment.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

const PREDICT_PATH: &str = "/predict";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Clone)]
pub struct PredictorClient {
    http: reqwest::Client,
    base_url: String,
}

impl PredictorClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_PATH)
    }

    /// Upload the file as a multipart form (single part named `file`) and
    /// decode the JSON reply. Transport failures, undecodable bodies and
    /// service-side error replies all collapse into `AppError`.
    pub async fn predict(&self, path: &Path) -> Result<PredictionReply, AppError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| AppError {
            message: format!("Failed to read file {}: {}", path.display(), e),
        })?;

        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let file_part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/octet-stream")
            .map_err(|e| AppError {
                message: format!("Failed to create file part: {}", e),
            })?;

        let form = Form::new().part("file", file_part);

        let response = self
            .http
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError {
                message: format!("Error connecting to server: {}", e),
            })?;

        let reply: PredictionReply = response.json().await.map_err(|e| AppError {
            message: format!("Failed to decode prediction reply: {}", e),
        })?;

        if let Some(detail) = reply.service_error() {
            return Err(format!("Prediction service error: {}", detail).into());
        }

        Ok(reply)
    }

    /// One-shot reachability probe. Any HTTP answer counts as reachable.
    pub async fn probe(&self) -> Result<(), AppError> {
        self.http
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| AppError {
                message: format!("Endpoint unreachable: {}", e),
            })?;
        Ok(())
    }
}

impl Default for PredictorClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rt() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn test_endpoint_join() {
        let client = PredictorClient::with_base_url("http://10.0.0.5:8000/");
        assert_eq!(client.endpoint(), "http://10.0.0.5:8000/predict");

        let client = PredictorClient::with_base_url("https://sentinel.example.com");
        assert_eq!(client.endpoint(), "https://sentinel.example.com/predict");
    }

    #[test]
    fn test_predict_missing_file_sends_nothing() {
        // Unroutable base URL: if the read guard failed we would block on a
        // connect attempt instead of failing fast.
        let client = PredictorClient::with_base_url("http://192.0.2.1:1");
        let err = rt()
            .block_on(client.predict(Path::new("/no/such/file.wav")))
            .unwrap_err();
        assert!(err.message.contains("Failed to read file"));
    }
}
