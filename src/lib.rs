pub mod api;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod ingest;
pub mod models;
pub mod paths;
mod serde_utils;
pub mod view;

pub mod prelude {
    pub use crate::client::NewsClient;
    pub use crate::dashboard::{Dashboard, Session, UpdateSource};
    pub use crate::models::{NewsItem, Preferences, UpdateResult};
    pub use crate::view::{render, DashboardView, RenderOptions};
}
