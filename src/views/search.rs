/// Search dropdown panel
///
/// Issuing and completing a request are split so the caller drives the
/// backend call: `begin` trims and gates the query and hands back a
/// sequence-numbered request; `complete` renders only if that sequence
/// number is still the latest issued, discarding responses that arrive out
/// of order behind a newer keystroke.
use crate::{
    error::ClientResult,
    models::ProductRecord,
};

/// Queries shorter than this (after trimming) hide the panel and issue no
/// request.
pub const MIN_QUERY_LEN: usize = 2;

const NO_MATCHES: &str = "No matches.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Hidden,
    Shown,
}

/// A search request the caller should issue against the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct SearchPanel {
    state: PanelState,
    content: String,
    results: Vec<ProductRecord>,
    last_issued: u64,
}

impl Default for SearchPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchPanel {
    pub fn new() -> Self {
        Self {
            state: PanelState::Hidden,
            content: String::new(),
            results: Vec::new(),
            last_issued: 0,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Results currently rendered, in the order received
    pub fn results(&self) -> &[ProductRecord] {
        &self.results
    }

    /// Handles one input change. Returns the request to issue, or `None`
    /// when the query is too short (in which case the panel is hidden and
    /// cleared).
    pub fn begin(&mut self, raw: &str) -> Option<SearchRequest> {
        let query = raw.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            self.hide();
            return None;
        }

        self.last_issued += 1;
        Some(SearchRequest {
            seq: self.last_issued,
            query: query.to_string(),
        })
    }

    /// Completes a previously begun request. Stale completions (a newer
    /// request has been issued since) are discarded; failures are logged
    /// with no user-visible change.
    pub fn complete(&mut self, seq: u64, outcome: ClientResult<Vec<ProductRecord>>) {
        if seq != self.last_issued {
            tracing::debug!(seq, latest = self.last_issued, "Discarding stale search response");
            return;
        }

        match outcome {
            Ok(results) => self.render(results),
            Err(e) => {
                // Search is supplementary; degrade silently
                tracing::warn!(error = %e, "Search failed");
            }
        }
    }

    /// Takes the result at `index` for substitution into the recommendation
    /// view, clearing and hiding the panel.
    pub fn take_selection(&mut self, index: usize) -> Option<ProductRecord> {
        let item = self.results.get(index).cloned()?;
        self.hide();
        Some(item)
    }

    fn render(&mut self, results: Vec<ProductRecord>) {
        self.state = PanelState::Shown;
        self.content = if results.is_empty() {
            NO_MATCHES.to_string()
        } else {
            results
                .iter()
                .map(|p| {
                    format!(
                        "{} | {} - {} (rating {})",
                        p.brand, p.category, p.subcategory, p.product_rating
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        };
        self.results = results;
    }

    fn hide(&mut self) {
        // Invalidate anything still in flight so a late completion cannot
        // re-show a panel the user has already cleared.
        self.last_issued += 1;
        self.state = PanelState::Hidden;
        self.content.clear();
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, brand: &str) -> ProductRecord {
        ProductRecord {
            product_id: id.to_string(),
            brand: brand.to_string(),
            category: "Outdoor".to_string(),
            subcategory: "Tents".to_string(),
            similarity_score: 0.0,
            final_score: 0.0,
            click_count: 0,
            view_count: 0,
            product_rating: 4.7,
            sentiment_score: 0.0,
            recommendation_probability: 0.0,
        }
    }

    #[test]
    fn test_short_query_hides_panel_and_issues_nothing() {
        let mut panel = SearchPanel::new();
        let req = panel.begin("te").unwrap();
        panel.complete(req.seq, Ok(vec![record("P1", "A")]));
        assert_eq!(panel.state(), PanelState::Shown);

        assert!(panel.begin(" t ").is_none());
        assert_eq!(panel.state(), PanelState::Hidden);
        assert!(panel.content().is_empty());
        assert!(panel.results().is_empty());
    }

    #[test]
    fn test_results_render_in_received_order() {
        let mut panel = SearchPanel::new();
        let req = panel.begin("tent").unwrap();
        panel.complete(req.seq, Ok(vec![record("P1", "A"), record("P2", "B")]));

        assert_eq!(panel.state(), PanelState::Shown);
        let a = panel.content().find("A |").unwrap();
        let b = panel.content().find("B |").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut panel = SearchPanel::new();
        let first = panel.begin("te").unwrap();
        let second = panel.begin("tent").unwrap();

        panel.complete(second.seq, Ok(vec![record("P2", "Fresh")]));
        panel.complete(first.seq, Ok(vec![record("P1", "Stale")]));

        assert_eq!(panel.results().len(), 1);
        assert_eq!(panel.results()[0].brand, "Fresh");
        assert!(panel.content().contains("Fresh"));
    }

    #[test]
    fn test_completion_after_hiding_query_does_not_reshow_panel() {
        let mut panel = SearchPanel::new();
        let req = panel.begin("tent").unwrap();

        // Query drops below the threshold while the request is in flight
        assert!(panel.begin("t").is_none());
        assert_eq!(panel.state(), PanelState::Hidden);

        panel.complete(req.seq, Ok(vec![record("P1", "Late")]));
        assert_eq!(panel.state(), PanelState::Hidden);
        assert!(panel.content().is_empty());
        assert!(panel.results().is_empty());
    }

    #[test]
    fn test_failure_leaves_previous_render_untouched() {
        let mut panel = SearchPanel::new();
        let req = panel.begin("tent").unwrap();
        panel.complete(req.seq, Ok(vec![record("P1", "A")]));

        let req = panel.begin("tents").unwrap();
        panel.complete(
            req.seq,
            Err(crate::error::ClientError::Backend("down".to_string())),
        );

        assert_eq!(panel.state(), PanelState::Shown);
        assert!(panel.content().contains("A |"));
    }

    #[test]
    fn test_zero_matches_shows_no_matches_row() {
        let mut panel = SearchPanel::new();
        let req = panel.begin("zzzz").unwrap();
        panel.complete(req.seq, Ok(vec![]));

        assert_eq!(panel.state(), PanelState::Shown);
        assert_eq!(panel.content(), "No matches.");
    }

    #[test]
    fn test_take_selection_clears_and_hides() {
        let mut panel = SearchPanel::new();
        let req = panel.begin("tent").unwrap();
        panel.complete(req.seq, Ok(vec![record("P1", "A"), record("P2", "B")]));

        let picked = panel.take_selection(0).unwrap();
        assert_eq!(picked.product_id, "P1");
        assert_eq!(panel.state(), PanelState::Hidden);
        assert!(panel.results().is_empty());

        assert!(panel.take_selection(0).is_none());
    }
}
