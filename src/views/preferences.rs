/// Inferred-preferences panel
///
/// An empty preference list and a failed fetch render the identical
/// placeholder: the panel deliberately does not distinguish "no data yet"
/// from "could not load".
use crate::{backend::RecommendationBackend, models::PreferenceRecord};

pub const EMPTY_PLACEHOLDER: &str =
    "No preferences recorded yet. Start browsing to build your preferences!";

#[derive(Debug)]
pub struct PreferencePanel {
    content: String,
}

impl Default for PreferencePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferencePanel {
    pub fn new() -> Self {
        Self {
            content: EMPTY_PLACEHOLDER.to_string(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub async fn refresh(&mut self, backend: &dyn RecommendationBackend, customer_id: &str) {
        match backend.preferences(customer_id).await {
            Ok(prefs) if !prefs.is_empty() => {
                self.content = render_rows(&prefs);
                tracing::debug!(
                    customer_id = %customer_id,
                    rows = prefs.len(),
                    "Preferences rendered"
                );
            }
            Ok(_) => {
                self.content = EMPTY_PLACEHOLDER.to_string();
            }
            Err(e) => {
                tracing::error!(error = %e, customer_id = %customer_id, "Failed to load preferences");
                self.content = EMPTY_PLACEHOLDER.to_string();
            }
        }
    }
}

fn render_rows(prefs: &[PreferenceRecord]) -> String {
    let rows: Vec<String> = prefs
        .iter()
        .map(|p| {
            format!(
                "{} - {}: {:.0}%",
                p.category,
                p.subcategory,
                p.preference_score * 100.0
            )
        })
        .collect();
    rows.join("\n")
}
