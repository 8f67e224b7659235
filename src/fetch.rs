//! Remote template providers.
//!
//! The [`TemplateProvider`] trait abstracts the two remote template sources
//! to enable:
//! - Mocking for unit tests
//! - Alternative implementations
//! - Easier testing of the fallback orchestration
//!
//! The real implementation, [`HttpTemplateProvider`], talks to the
//! github/gitignore raw-content endpoint (per-template GETs) and the
//! gitignore.io API (one batched GET). Non-200 responses and empty bodies
//! are "not found" for the requested template, never a crash.

use crate::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

/// Trait for remote template retrieval.
///
/// `fetch_github_template` is the per-identifier tier-1 lookup;
/// `fetch_api_batch` is the whole-batch tier-2 call. The two are asymmetric
/// on purpose: tier 1 preserves per-template granularity while tier 2 is a
/// single request covering every valid stack at once.
#[async_trait]
pub trait TemplateProvider: Send + Sync {
    /// Fetches one template by its provider-specific name (e.g. `Node`,
    /// `Global/JetBrains`).
    async fn fetch_github_template(&self, name: &str) -> Result<String, FetchError>;

    /// Fetches one combined template for a batch of stack identifiers.
    async fn fetch_api_batch(&self, stacks: &[String]) -> Result<String, FetchError>;
}

/// Real implementation backed by `reqwest`.
#[derive(Clone)]
pub struct HttpTemplateProvider {
    client: reqwest::Client,
    github_base_url: String,
    api_base_url: String,
}

impl HttpTemplateProvider {
    /// Creates a provider against the given base URLs.
    ///
    /// Base URLs are configurable so tests and mirrors can redirect the
    /// tiers without code changes.
    pub fn new(
        github_base_url: impl Into<String>,
        api_base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            github_base_url: github_base_url.into(),
            api_base_url: api_base_url.into(),
        })
    }
}

#[async_trait]
impl TemplateProvider for HttpTemplateProvider {
    async fn fetch_github_template(&self, name: &str) -> Result<String, FetchError> {
        let url = format!("{}/{}.gitignore", self.github_base_url, name);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(FetchError::NotFound {
                template: name.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
                template: name.to_string(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(FetchError::EmptyResponse {
                template: name.to_string(),
            });
        }
        Ok(body.trim().to_string())
    }

    async fn fetch_api_batch(&self, stacks: &[String]) -> Result<String, FetchError> {
        let batch = stacks.join(",");
        let url = format!("{}/{}", self.api_base_url, batch);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        // The API reports bad identifiers inside a 200 body
        if body.contains("ERROR:") || body.contains("is undefined") {
            return Err(FetchError::ErrorPayload {
                message: format!("one or more stacks rejected in batch '{batch}'"),
            });
        }
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
                template: format!("batch '{batch}'"),
            });
        }
        if body.trim().is_empty() {
            return Err(FetchError::EmptyResponse {
                template: format!("batch '{batch}'"),
            });
        }
        Ok(body)
    }
}


#[cfg(test)]
mod tests {
    use super::mocks::MockTemplateProvider;
    use super::*;

    /// # Mock Tier-1 Lookup
    ///
    /// Verifies the mock provider honors its configured templates.
    ///
    /// ## Test Scenario
    /// - Configures one template and fetches it plus an unknown name
    ///
    /// ## Expected Outcome
    /// - Configured name returns its body; unknown name is NotFound
    #[tokio::test]
    async fn test_mock_github_lookup() {
        let provider = MockTemplateProvider::new().with_github_template("Node", "node_modules/");

        let body = provider.fetch_github_template("Node").await.unwrap();
        assert_eq!(body, "node_modules/");

        let err = provider.fetch_github_template("Zig").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound { .. }));
    }

    /// # Mock Tier-2 Batch
    ///
    /// Verifies batch responses and failure modes of the mock provider.
    ///
    /// ## Test Scenario
    /// - Fetches with a configured response, then from an unreachable mock
    ///
    /// ## Expected Outcome
    /// - Configured body is returned; unreachable mock yields BadStatus
    #[tokio::test]
    async fn test_mock_api_batch() {
        let provider = MockTemplateProvider::new().with_api_response("# Combined\n*.log");
        let stacks = vec!["node".to_string(), "go".to_string()];
        assert_eq!(
            provider.fetch_api_batch(&stacks).await.unwrap(),
            "# Combined\n*.log"
        );

        let dead = MockTemplateProvider::fully_unreachable();
        let err = dead.fetch_api_batch(&stacks).await.unwrap_err();
        assert!(matches!(err, FetchError::BadStatus { status: 503, .. }));
    }

    /// # Provider Construction
    ///
    /// Verifies the real provider builds with custom endpoints.
    ///
    /// ## Test Scenario
    /// - Creates an HttpTemplateProvider with test URLs and a short timeout
    ///
    /// ## Expected Outcome
    /// - Construction succeeds without touching the network
    #[test]
    fn test_http_provider_creation() {
        let provider = HttpTemplateProvider::new(
            "https://example.test/raw",
            "https://example.test/api",
            Duration::from_secs(5),
        );
        assert!(provider.is_ok());
    }
}
