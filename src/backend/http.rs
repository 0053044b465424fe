/// HTTP implementation of the recommendation backend
///
/// Thin reqwest wrapper over the five consumed endpoints. No retries and no
/// explicit timeouts; requests rely on transport defaults, and failures are
/// surfaced to the caller to collapse into its own error state.
use crate::{
    error::{ClientError, ClientResult},
    models::{LoginResponse, PreferenceRecord, ProductRecord},
};
use reqwest::{Client as HttpClient, Response};
use serde::Deserialize;

use super::RecommendationBackend;

#[derive(Clone)]
pub struct HttpBackend {
    http_client: HttpClient,
    base_url: String,
}

/// Failure body shape of the recommendations endpoint
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-2xx response into a `ClientError::Backend`, preferring the
    /// backend's `{"error": ...}` detail when the body carries one.
    async fn failure(endpoint: &str, response: Response) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        ClientError::Backend(format!(
            "{} returned status {}: {}",
            endpoint, status, detail
        ))
    }
}

#[async_trait::async_trait]
impl RecommendationBackend for HttpBackend {
    async fn login(&self, customer_id: &str) -> ClientResult<LoginResponse> {
        let url = format!("{}/login/{}", self.base_url, customer_id);
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::failure("login", response).await);
        }

        let login: LoginResponse = response.json().await?;

        tracing::info!(
            customer_id = %customer_id,
            status = %login.status,
            "Login lookup completed"
        );

        Ok(login)
    }

    async fn recommendations(&self, customer_id: &str) -> ClientResult<Vec<ProductRecord>> {
        let url = format!("{}/recommend/{}", self.base_url, customer_id);
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::failure("recommend", response).await);
        }

        let records: Vec<ProductRecord> = response.json().await?;

        tracing::info!(
            customer_id = %customer_id,
            results = records.len(),
            "Recommendations fetched"
        );

        Ok(records)
    }

    async fn preferences(&self, customer_id: &str) -> ClientResult<Vec<PreferenceRecord>> {
        let url = format!("{}/preferences/{}", self.base_url, customer_id);
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::failure("preferences", response).await);
        }

        let records: Vec<PreferenceRecord> = response.json().await?;

        tracing::info!(
            customer_id = %customer_id,
            results = records.len(),
            "Preferences fetched"
        );

        Ok(records)
    }

    async fn search(&self, customer_id: &str, query: &str) -> ClientResult<Vec<ProductRecord>> {
        let url = format!("{}/search/{}", self.base_url, customer_id);
        let response = self
            .http_client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::failure("search", response).await);
        }

        let records: Vec<ProductRecord> = response.json().await?;

        tracing::info!(
            customer_id = %customer_id,
            query = %query,
            results = records.len(),
            "Search completed"
        );

        Ok(records)
    }

    async fn report_interaction(&self, customer_id: &str, product_id: &str) -> ClientResult<()> {
        let url = format!("{}/click/{}/{}", self.base_url, customer_id, product_id);
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::failure("click", response).await);
        }

        tracing::debug!(
            customer_id = %customer_id,
            product_id = %product_id,
            "Interaction reported"
        );

        Ok(())
    }
}
