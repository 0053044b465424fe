/// Session resolution and session-scoped state
///
/// A session is one validated customer identifier plus the interaction
/// history accumulated during the page view. The history is owned by the
/// session context (not module-global), so dropping the session discards it.
use std::collections::HashSet;

use reqwest::Url;

use crate::{
    backend::RecommendationBackend,
    error::{ClientError, ClientResult},
    models::InteractionKind,
};

/// Per-session record of which items have already been reported, by kind
///
/// Rebuilt empty on every session start; nothing persists across page views.
#[derive(Debug, Default)]
pub struct InteractionHistory {
    views: HashSet<String>,
    clicks: HashSet<String>,
}

impl InteractionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_for(&mut self, kind: InteractionKind) -> &mut HashSet<String> {
        match kind {
            InteractionKind::View => &mut self.views,
            InteractionKind::Click => &mut self.clicks,
        }
    }

    /// Marks `(kind, product_id)` as reported. Returns `true` if the pair
    /// was not already present.
    pub fn mark(&mut self, kind: InteractionKind, product_id: &str) -> bool {
        self.set_for(kind).insert(product_id.to_string())
    }

    pub fn contains(&self, kind: InteractionKind, product_id: &str) -> bool {
        match kind {
            InteractionKind::View => self.views.contains(product_id),
            InteractionKind::Click => self.clicks.contains(product_id),
        }
    }
}

/// The customer identifier and derived state scoping all requests for one
/// page view
#[derive(Debug)]
pub struct SessionContext {
    pub customer_id: String,
    pub history: InteractionHistory,
}

impl SessionContext {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            history: InteractionHistory::new(),
        }
    }
}

/// Validates a user-entered identifier against the backend and establishes
/// the session context.
///
/// A non-success login status maps to `LoginRejected`; transport and non-2xx
/// failures pass through unchanged. Either way the caller keeps its entry
/// form active for a manual retry.
pub async fn resolve_session(
    backend: &dyn RecommendationBackend,
    customer_id: &str,
) -> ClientResult<SessionContext> {
    let customer_id = customer_id.trim();
    if customer_id.is_empty() {
        return Err(ClientError::InvalidInput(
            "Customer ID cannot be empty".to_string(),
        ));
    }

    let login = backend.login(customer_id).await?;
    if !login.is_success() {
        tracing::warn!(customer_id = %customer_id, status = %login.status, "Login rejected");
        return Err(ClientError::LoginRejected(format!(
            "backend returned status {:?} for customer {}",
            login.status, customer_id
        )));
    }

    tracing::info!(customer_id = %customer_id, "Session established");
    Ok(SessionContext::new(customer_id))
}

/// Builds the session-scoped view URL, carrying the customer identifier as a
/// query parameter.
pub fn session_view_url(base_url: &str, customer_id: &str) -> ClientResult<Url> {
    let base = format!("{}/recommendations", base_url.trim_end_matches('/'));
    Url::parse_with_params(&base, &[("customer_id", customer_id)])
        .map_err(|e| ClientError::InvalidInput(format!("invalid backend URL: {}", e)))
}

/// Logout target: the root entry point
pub fn entry_url(base_url: &str) -> ClientResult<Url> {
    Url::parse(base_url)
        .map_err(|e| ClientError::InvalidInput(format!("invalid backend URL: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockRecommendationBackend;
    use crate::models::LoginResponse;

    #[test]
    fn test_resolve_session_success() {
        let mut backend = MockRecommendationBackend::new();
        backend.expect_login().returning(|_| {
            Ok(LoginResponse {
                status: "success".to_string(),
            })
        });

        let session = tokio_test::block_on(resolve_session(&backend, "  C42 ")).unwrap();
        assert_eq!(session.customer_id, "C42");
        assert!(!session.history.contains(InteractionKind::View, "P1"));
    }

    #[test]
    fn test_resolve_session_rejected_status() {
        let mut backend = MockRecommendationBackend::new();
        backend.expect_login().returning(|_| {
            Ok(LoginResponse {
                status: "not_found".to_string(),
            })
        });

        let result = tokio_test::block_on(resolve_session(&backend, "C42"));
        assert!(matches!(result, Err(ClientError::LoginRejected(_))));
    }

    #[test]
    fn test_resolve_session_empty_identifier_makes_no_request() {
        // No expectation set: any login call would panic the mock
        let backend = MockRecommendationBackend::new();
        let result = tokio_test::block_on(resolve_session(&backend, "   "));
        assert!(matches!(result, Err(ClientError::InvalidInput(_))));
    }

    #[test]
    fn test_history_mark_is_idempotent_per_kind() {
        let mut history = InteractionHistory::new();
        assert!(history.mark(InteractionKind::View, "P1"));
        assert!(!history.mark(InteractionKind::View, "P1"));
        // A click on the same item is tracked independently
        assert!(history.mark(InteractionKind::Click, "P1"));
        assert!(!history.mark(InteractionKind::Click, "P1"));
    }

    #[test]
    fn test_session_view_url_carries_customer_id() {
        let url = session_view_url("http://localhost:5000/", "C42").unwrap();
        assert_eq!(url.path(), "/recommendations");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, vec![("customer_id".to_string(), "C42".to_string())]);
    }

    #[test]
    fn test_entry_url_is_backend_root() {
        let url = entry_url("http://localhost:5000").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/");
    }
}
