pub mod news;

pub use news::NEWS_PROMPT;
