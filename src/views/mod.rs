/// Display panels for the session-scoped view
///
/// Each panel owns one display region: a string buffer that a render
/// replaces wholesale, never edits in place. Regions are disjoint, so the
/// concurrent page-load fetches can complete in either order.
pub mod page;
pub mod preferences;
pub mod recommendations;
pub mod search;

pub use page::Page;
pub use preferences::PreferencePanel;
pub use recommendations::RecommendationPanel;
pub use search::{PanelState, SearchPanel};
