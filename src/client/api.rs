//! HTTP client for the template API

use reqwest::{Response, StatusCode};

use crate::{
    config::ClientConfig,
    error::ErrorResponse,
    handlers::{
        health::HealthResponse,
        operators::CatalogResponse,
        prices::{DispatchResponse, MetalPriceRequest},
        templates::TemplateRequest,
    },
    models::NotificationTemplate,
};

use super::error::{ClientError, ClientResult};

/// CRUD client for notification templates
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for an API rooted at `base_url`, e.g. `http://localhost:8080/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all templates
    pub async fn list_templates(&self) -> ClientResult<Vec<NotificationTemplate>> {
        let response = self.http.get(self.url("/templates")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// List templates whose title contains `query`, filtered server-side
    pub async fn search_templates(&self, query: &str) -> ClientResult<Vec<NotificationTemplate>> {
        let response = self
            .http
            .get(self.url("/templates"))
            .query(&[("search", query)])
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// Fetch one template
    pub async fn get_template(&self, id: i64) -> ClientResult<NotificationTemplate> {
        let response = self
            .http
            .get(self.url(&format!("/templates/{}", id)))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// Create a template
    pub async fn create_template(
        &self,
        template: &TemplateRequest,
    ) -> ClientResult<NotificationTemplate> {
        let response = self
            .http
            .post(self.url("/templates"))
            .json(template)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// Replace a template
    pub async fn update_template(
        &self,
        id: i64,
        template: &TemplateRequest,
    ) -> ClientResult<NotificationTemplate> {
        let response = self
            .http
            .put(self.url(&format!("/templates/{}", id)))
            .json(template)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// Delete a template
    pub async fn delete_template(&self, id: i64) -> ClientResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/templates/{}", id)))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// Post a price signal and return the dispatch summary
    pub async fn publish_price(&self, price: &MetalPriceRequest) -> ClientResult<DispatchResponse> {
        let response = self
            .http
            .post(self.url("/new-price"))
            .json(price)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// Fetch the operator catalog
    pub async fn operators(&self) -> ClientResult<CatalogResponse> {
        let response = self.http.get(self.url("/operators")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// Server health
    pub async fn health(&self) -> ClientResult<HealthResponse> {
        let response = self.http.get(self.url("/health")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn non-success responses into [`ClientError::Status`], preferring the
/// server's error message over the raw body
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| fallback_message(status, body));

    tracing::debug!(status = status.as_u16(), %message, "API request failed");

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

fn fallback_message(status: StatusCode, body: String) -> String {
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.url("/templates/3"), "http://localhost:8080/api/templates/3");
    }

    #[test]
    fn test_from_config() {
        let client = ApiClient::from_config(&ClientConfig::default());
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_fallback_message() {
        assert_eq!(fallback_message(StatusCode::NOT_FOUND, String::new()), "Not Found");
        assert_eq!(fallback_message(StatusCode::BAD_REQUEST, "nope".into()), "nope");
    }
}
