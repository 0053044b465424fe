/// Interaction reporting with per-session deduplication
///
/// An interaction of a given kind for a given item is reported at most once
/// per session: the history set is marked before the network call, so even a
/// slow or failed report is never attempted twice. Delivery is best-effort;
/// a failed report is logged and not retried.
use crate::{backend::RecommendationBackend, models::InteractionKind, session::SessionContext};

/// Result of a `report` call, from the caller's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The pair was already in the history; no request was issued
    AlreadyReported,
    /// The backend acknowledged the report; a preference refresh is warranted
    Delivered,
    /// The request was issued and failed; the pair stays marked regardless
    Failed,
}

/// Reports one interaction, deduplicated against the session history.
pub async fn report(
    backend: &dyn RecommendationBackend,
    session: &mut SessionContext,
    product_id: &str,
    kind: InteractionKind,
) -> ReportOutcome {
    if !session.history.mark(kind, product_id) {
        return ReportOutcome::AlreadyReported;
    }

    match backend
        .report_interaction(&session.customer_id, product_id)
        .await
    {
        Ok(()) => {
            tracing::debug!(
                customer_id = %session.customer_id,
                product_id = %product_id,
                kind = kind.as_str(),
                "Interaction delivered"
            );
            ReportOutcome::Delivered
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                product_id = %product_id,
                kind = kind.as_str(),
                "Interaction report failed"
            );
            ReportOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockRecommendationBackend;
    use crate::error::ClientError;

    #[test]
    fn test_report_delivers_once_per_pair() {
        let mut backend = MockRecommendationBackend::new();
        backend
            .expect_report_interaction()
            .times(1)
            .returning(|_, _| Ok(()));
        let mut session = SessionContext::new("C1");

        let first = tokio_test::block_on(report(
            &backend,
            &mut session,
            "P1",
            InteractionKind::Click,
        ));
        let second = tokio_test::block_on(report(
            &backend,
            &mut session,
            "P1",
            InteractionKind::Click,
        ));

        assert_eq!(first, ReportOutcome::Delivered);
        assert_eq!(second, ReportOutcome::AlreadyReported);
    }

    #[test]
    fn test_view_and_click_deduplicate_independently() {
        let mut backend = MockRecommendationBackend::new();
        backend
            .expect_report_interaction()
            .times(2)
            .returning(|_, _| Ok(()));
        let mut session = SessionContext::new("C1");

        let view =
            tokio_test::block_on(report(&backend, &mut session, "P1", InteractionKind::View));
        let click = tokio_test::block_on(report(
            &backend,
            &mut session,
            "P1",
            InteractionKind::Click,
        ));

        assert_eq!(view, ReportOutcome::Delivered);
        assert_eq!(click, ReportOutcome::Delivered);
    }

    #[test]
    fn test_failed_report_is_not_retried() {
        let mut backend = MockRecommendationBackend::new();
        backend
            .expect_report_interaction()
            .times(1)
            .returning(|_, _| Err(ClientError::Backend("boom".to_string())));
        let mut session = SessionContext::new("C1");

        let first =
            tokio_test::block_on(report(&backend, &mut session, "P1", InteractionKind::View));
        // Marked before the attempt, so the failure is terminal for this pair
        let second =
            tokio_test::block_on(report(&backend, &mut session, "P1", InteractionKind::View));

        assert_eq!(first, ReportOutcome::Failed);
        assert_eq!(second, ReportOutcome::AlreadyReported);
    }
}
