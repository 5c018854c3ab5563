use crate::analysis::Describe;
use crate::dto::DbInfo;
use crate::dto::Health;
use crate::dto::PredictRequest;
use crate::predict::Prediction;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::time::Duration;

const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A non-2xx answer from the API.
#[derive(Debug)]
pub struct ApiError {
    pub status: u16,
    pub body: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.status, self.body)
    }
}

impl std::error::Error for ApiError {}

/// Typed calls against one API base URL.
pub struct Client {
    http: reqwest::Client,
    base: String,
}

impl Client {
    pub fn new(base: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("failed to create HTTP client")?;
        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn health(&self) -> anyhow::Result<Health> {
        let response = self
            .http
            .get(self.url("/health"))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
            .context("health check failed")?;
        Self::decode(response).await
    }

    pub async fn analyze(&self) -> anyhow::Result<Describe> {
        let response = self
            .http
            .get(self.url("/analyze"))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .context("analysis failed")?;
        Self::decode(response).await
    }

    pub async fn db_info(&self) -> anyhow::Result<DbInfo> {
        let response = self
            .http
            .get(self.url("/db-info"))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .context("db-info failed")?;
        Self::decode(response).await
    }

    pub async fn predict(&self, req: PredictRequest) -> anyhow::Result<Prediction> {
        let response = self
            .http
            .post(self.url("/predict"))
            .timeout(REQUEST_TIMEOUT)
            .json(&req)
            .send()
            .await
            .context("prediction failed")?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> anyhow::Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError {
                status: status.as_u16(),
                body,
            }
            .into());
        }
        response
            .json::<T>()
            .await
            .context("unexpected response body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_loses_trailing_slash() {
        let client = Client::new("http://localhost:8000/").unwrap();
        assert!(client.base() == "http://localhost:8000");
        assert!(client.url("/health") == "http://localhost:8000/health");
    }

    #[test]
    fn api_errors_show_status_and_body() {
        let error = ApiError {
            status: 400,
            body: r#"{"detail":"no rows"}"#.to_string(),
        };
        assert!(error.to_string() == r#"400 - {"detail":"no rows"}"#);
    }
}
