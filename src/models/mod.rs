mod message;
mod news;
mod preferences;
mod update;

pub use message::{ContentBlock, Message, MessagesRequest, MessagesResponse, Role, Tool, Usage};
pub use news::{Category, NewsItem};
pub use preferences::Preferences;
pub use update::{format_date, format_date_time, UpdateResult, DEMO_MODE_SUFFIX};
