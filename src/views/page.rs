/// Session-scoped view orchestrator
///
/// Owns the backend handle, the session context, and the three display
/// panels, and wires the page events together: the initial concurrent load,
/// search input and selection, card clicks, and the preference refreshes
/// that delivered interaction reports trigger.
use std::sync::Arc;

use crate::{
    backend::RecommendationBackend,
    models::InteractionKind,
    session::SessionContext,
    tracker::{self, ReportOutcome},
};

use super::{PreferencePanel, RecommendationPanel, SearchPanel};

pub struct Page {
    backend: Arc<dyn RecommendationBackend>,
    session: SessionContext,
    pub recommendations: RecommendationPanel,
    pub preferences: PreferencePanel,
    pub search: SearchPanel,
}

impl Page {
    pub fn new(backend: Arc<dyn RecommendationBackend>, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            recommendations: RecommendationPanel::new(),
            preferences: PreferencePanel::new(),
            search: SearchPanel::new(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.session.customer_id
    }

    /// Initial page load: preferences and recommendations fetch
    /// independently (either completion order), then view tracking runs for
    /// the freshly rendered list.
    pub async fn load(&mut self) {
        let Self {
            backend,
            session,
            recommendations,
            preferences,
            ..
        } = self;
        tokio::join!(
            preferences.refresh(backend.as_ref(), &session.customer_id),
            recommendations.refresh(backend.as_ref(), &session.customer_id),
        );

        self.track_rendered_views().await;
    }

    /// Refetches the recommendation grid and view-tracks anything newly
    /// rendered.
    pub async fn refresh_recommendations(&mut self) {
        let Self {
            backend,
            session,
            recommendations,
            ..
        } = self;
        recommendations
            .refresh(backend.as_ref(), &session.customer_id)
            .await;
        self.track_rendered_views().await;
    }

    /// Reports a view for every rendered item not yet in the session's view
    /// set. Reports are best-effort; one preference refresh runs if any
    /// report was delivered.
    async fn track_rendered_views(&mut self) {
        let ids: Vec<String> = self
            .recommendations
            .items()
            .iter()
            .map(|p| p.product_id.clone())
            .collect();

        let backend = Arc::clone(&self.backend);
        let mut delivered = false;
        for id in ids {
            let outcome =
                tracker::report(backend.as_ref(), &mut self.session, &id, InteractionKind::View)
                    .await;
            delivered |= outcome == ReportOutcome::Delivered;
        }

        if delivered {
            self.preferences
                .refresh(backend.as_ref(), &self.session.customer_id)
                .await;
        }
    }

    /// One keystroke in the search box.
    pub async fn search_input(&mut self, raw: &str) {
        let Some(req) = self.search.begin(raw) else {
            return;
        };
        let outcome = self
            .backend
            .search(&self.session.customer_id, &req.query)
            .await;
        self.search.complete(req.seq, outcome);
    }

    /// Selects a search result, substituting it into the recommendation
    /// region as a single card (no fetch, no sort, no view report). Returns
    /// false if no result exists at `index`.
    pub fn select_search_result(&mut self, index: usize) -> bool {
        match self.search.take_selection(index) {
            Some(item) => {
                self.recommendations.show_single(item);
                true
            }
            None => false,
        }
    }

    /// A click on a rendered card. Unknown identifiers are ignored, since
    /// only rendered cards are clickable.
    pub async fn click_card(&mut self, product_id: &str) {
        let rendered = self
            .recommendations
            .items()
            .iter()
            .any(|p| p.product_id == product_id);
        if !rendered {
            return;
        }

        let backend = Arc::clone(&self.backend);
        let outcome = tracker::report(
            backend.as_ref(),
            &mut self.session,
            product_id,
            InteractionKind::Click,
        )
        .await;

        if outcome == ReportOutcome::Delivered {
            self.preferences
                .refresh(backend.as_ref(), &self.session.customer_id)
                .await;
        }
    }
}
