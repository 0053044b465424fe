/// Recommendation grid panel
///
/// Fetches the ranked item list, sorts by final score descending, and
/// renders one card per item. On failure the whole region becomes a single
/// error notice carrying the reason; there is no automatic retry.
use chrono::{DateTime, Utc};

use crate::{backend::RecommendationBackend, models::ProductRecord};

#[derive(Debug, Default)]
pub struct RecommendationPanel {
    content: String,
    items: Vec<ProductRecord>,
    fetched_at: Option<DateTime<Utc>>,
}

impl RecommendationPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered region, replaced wholesale on every render
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Items currently rendered, in display order
    pub fn items(&self) -> &[ProductRecord] {
        &self.items
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Refetches and re-renders the ranked list. The previous render stays
    /// untouched until the response resolves.
    pub async fn refresh(&mut self, backend: &dyn RecommendationBackend, customer_id: &str) {
        match backend.recommendations(customer_id).await {
            Ok(mut items) => {
                items.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
                self.content = render_cards(&items);
                self.items = items;
                self.fetched_at = Some(Utc::now());
                tracing::info!(
                    customer_id = %customer_id,
                    items = self.items.len(),
                    "Recommendations rendered"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, customer_id = %customer_id, "Failed to load recommendations");
                self.items.clear();
                self.content = format!(
                    "Unable to load recommendations at this time. Please try again later.\nError: {}",
                    e
                );
            }
        }
    }

    /// Replaces the region with a single card, bypassing the fetch/sort
    /// cycle (search-result substitution).
    pub fn show_single(&mut self, item: ProductRecord) {
        self.content = render_cards(std::slice::from_ref(&item));
        self.items = vec![item];
    }
}

fn render_cards(items: &[ProductRecord]) -> String {
    let cards: Vec<String> = items.iter().map(render_card).collect();
    cards.join("\n\n")
}

fn render_card(item: &ProductRecord) -> String {
    format!(
        "{}\n\
         {} / {}\n\
         recommendation score {:.1}% | similarity {:.1}%\n\
         clicks {} | views {}\n\
         rating {} | sentiment {} | recommendation {:.2}%",
        item.brand,
        item.category,
        item.subcategory,
        item.final_score * 100.0,
        item.similarity_score * 100.0,
        item.click_count,
        item.view_count,
        item.product_rating,
        item.sentiment_score,
        item.recommendation_probability * 100.0,
    )
}
