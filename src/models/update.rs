use chrono::{DateTime, Local};

use super::NewsItem;

pub const DEMO_MODE_SUFFIX: &str = " (Demo Mode)";

const DATE_FORMAT: &str = "%-m/%-d/%Y";
const DATE_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Outcome of one fetch. `Fallback` carries the fixed demo items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    Live {
        items: Vec<NewsItem>,
        updated_at: DateTime<Local>,
    },
    Fallback {
        items: Vec<NewsItem>,
        updated_at: DateTime<Local>,
    },
}

impl UpdateResult {
    pub fn items(&self) -> &[NewsItem] {
        match self {
            Self::Live { items, .. } | Self::Fallback { items, .. } => items,
        }
    }

    pub fn into_items(self) -> Vec<NewsItem> {
        match self {
            Self::Live { items, .. } | Self::Fallback { items, .. } => items,
        }
    }

    pub fn updated_at(&self) -> DateTime<Local> {
        match self {
            Self::Live { updated_at, .. } | Self::Fallback { updated_at, .. } => *updated_at,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Localized timestamp, annotated when the items are demo data.
    pub fn display_timestamp(&self) -> String {
        let stamp = format_date_time(&self.updated_at());
        if self.is_fallback() {
            format!("{stamp}{DEMO_MODE_SUFFIX}")
        } else {
            stamp
        }
    }
}

pub fn format_date(at: &DateTime<Local>) -> String {
    at.format(DATE_FORMAT).to_string()
}

pub fn format_date_time(at: &DateTime<Local>) -> String {
    at.format(DATE_TIME_FORMAT).to_string()
}
