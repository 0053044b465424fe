/// Recommendation backend abstraction
///
/// Every remote operation the page performs goes through this trait, so the
/// session resolver, panels, and tracker can be exercised against a mock or
/// fake backend without a network.
use crate::{
    error::ClientResult,
    models::{LoginResponse, PreferenceRecord, ProductRecord},
};

pub mod http;

pub use http::HttpBackend;

/// Trait for the remote recommendation backend
///
/// One method per consumed endpoint. All calls are scoped by the session's
/// customer identifier; the trait holds no session state of its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// Validate a customer identifier (GET /login/{customer_id})
    async fn login(&self, customer_id: &str) -> ClientResult<LoginResponse>;

    /// Fetch the current ranked item list (GET /recommend/{customer_id})
    async fn recommendations(&self, customer_id: &str) -> ClientResult<Vec<ProductRecord>>;

    /// Fetch inferred category preferences (GET /preferences/{customer_id})
    async fn preferences(&self, customer_id: &str) -> ClientResult<Vec<PreferenceRecord>>;

    /// Query a filtered subset of items (GET /search/{customer_id}?query=...)
    async fn search(&self, customer_id: &str, query: &str) -> ClientResult<Vec<ProductRecord>>;

    /// Report a view/click interaction (GET /click/{customer_id}/{product_id})
    ///
    /// The backend records both kinds against the same endpoint; the client
    /// deduplicates per kind locally before calling.
    async fn report_interaction(&self, customer_id: &str, product_id: &str) -> ClientResult<()>;
}
