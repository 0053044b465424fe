//! Client-side interaction layer for a remote recommendation backend
//!
//! Wires session resolution, recommendation/preference/search panels, and
//! deduplicated interaction tracking over the backend's HTTP endpoints. The
//! binary drives this as a small interactive terminal front-end.

pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod tracker;
pub mod views;

pub use backend::{HttpBackend, RecommendationBackend};
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use session::{resolve_session, SessionContext};
pub use views::Page;
