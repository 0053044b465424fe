use serde::{Deserialize, Serialize};

/// A backend-supplied, client-immutable description of a recommendable
/// product with its scoring metadata.
///
/// Field names mirror the backend's JSON keys. The search endpoint returns a
/// reduced record (no counters, no final score), so every scoring field
/// defaults to zero when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    #[serde(rename = "Product_ID")]
    pub product_id: String,

    #[serde(rename = "Brand")]
    pub brand: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Subcategory")]
    pub subcategory: String,

    /// Cosine similarity against the customer's preference vector
    #[serde(rename = "Similarity_Score", default)]
    pub similarity_score: f64,

    /// Blended relevance score in [0, 1]; rendering order key
    #[serde(rename = "Final_Score", default)]
    pub final_score: f64,

    #[serde(rename = "Click_Count", default)]
    pub click_count: u64,

    #[serde(rename = "View_Count", default)]
    pub view_count: u64,

    #[serde(rename = "Product_Rating", default)]
    pub product_rating: f64,

    #[serde(rename = "Customer_Review_Sentiment_Score", default)]
    pub sentiment_score: f64,

    #[serde(rename = "Probability_of_Recommendation", default)]
    pub recommendation_probability: f64,
}

/// An inferred category preference for the session's customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreferenceRecord {
    pub category: String,
    pub subcategory: String,
    /// Score in [0, 1], rendered as a percentage
    pub preference_score: f64,
}

/// Response body of GET /login/{customer_id}
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub status: String,
}

impl LoginResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Kind of a user interaction with a rendered product card
///
/// Both kinds report to the same backend endpoint; the kind only scopes the
/// per-session deduplication set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    View,
    Click,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::View => "view",
            InteractionKind::Click => "click",
        }
    }
}
