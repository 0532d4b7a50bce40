use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use chrono::NaiveTime;
use tracing::debug;

use crate::{
    client::NewsClient,
    models::{NewsItem, Preferences, UpdateResult},
};

pub const FETCH_LABEL: &str = "Fetch Updates";
pub const FETCHING_LABEL: &str = "Fetching...";

/// Everything the view renders. Transitions consume the state and return the
/// next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub items: Vec<NewsItem>,
    pub loading: bool,
    pub last_update: Option<String>,
    pub preferences: Preferences,
}

impl Dashboard {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            preferences,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn begin_fetch(self) -> Self {
        Self {
            loading: true,
            ..self
        }
    }

    /// Replaces the items wholesale; nothing from the previous fetch survives.
    #[must_use]
    pub fn complete_fetch(self, update: UpdateResult) -> Self {
        let last_update = Some(update.display_timestamp());
        Self {
            items: update.into_items(),
            loading: false,
            last_update,
            ..self
        }
    }

    #[must_use]
    pub fn with_schedule(self, schedule: NaiveTime) -> Self {
        Self {
            preferences: Preferences {
                schedule,
                ..self.preferences
            },
            ..self
        }
    }

    #[must_use]
    pub fn with_email_notifications(self, enabled: bool) -> Self {
        Self {
            preferences: Preferences {
                email_notifications: enabled,
                ..self.preferences
            },
            ..self
        }
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.loading {
            FETCHING_LABEL
        } else {
            FETCH_LABEL
        }
    }
}

/// Anything that can produce one round of updates.
#[async_trait::async_trait]
pub trait UpdateSource {
    async fn fetch_updates(&self) -> UpdateResult;
}

#[async_trait::async_trait]
impl UpdateSource for NewsClient {
    async fn fetch_updates(&self) -> UpdateResult {
        NewsClient::fetch_updates(self).await
    }
}

/// Handed out by [`Session::begin`]; identifies one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Shared dashboard state with last-started-wins fetch sequencing.
///
/// Starting a fetch never blocks. When fetches overlap, only the result of the
/// most recently started one is applied; older completions are dropped.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: Arc<parking_lot::RwLock<Dashboard>>,
    generation: Arc<AtomicU64>,
}

impl Session {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            state: Arc::new(parking_lot::RwLock::new(dashboard)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn snapshot(&self) -> Dashboard {
        self.state.read().clone()
    }

    /// Issues the next ticket and marks the dashboard as loading.
    ///
    /// The generation only moves while the state lock is held, so `complete`
    /// always sees the loading flag and the newest ticket in agreement.
    pub fn begin(&self) -> Ticket {
        let mut state = self.state.write();
        let ticket = Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
        let current = std::mem::take(&mut *state);
        *state = current.begin_fetch();
        ticket
    }

    /// Applies `update` if `ticket` is still the newest. Returns whether it was.
    pub fn complete(&self, ticket: Ticket, update: UpdateResult) -> bool {
        let mut state = self.state.write();
        if self.generation.load(Ordering::SeqCst) != ticket.0 {
            debug!(ticket = ticket.0, "Discarding result of superseded fetch");
            return false;
        }
        let current = std::mem::take(&mut *state);
        *state = current.complete_fetch(update);
        true
    }

    pub async fn refresh<S>(&self, source: &S) -> bool
    where
        S: UpdateSource + ?Sized,
    {
        let ticket = self.begin();
        let update = source.fetch_updates().await;
        self.complete(ticket, update)
    }

    pub fn set_schedule(&self, schedule: NaiveTime) {
        self.replace(|s| s.with_schedule(schedule));
    }

    pub fn set_email_notifications(&self, enabled: bool) {
        self.replace(|s| s.with_email_notifications(enabled));
    }

    fn replace(&self, f: impl FnOnce(Dashboard) -> Dashboard) {
        let mut state = self.state.write();
        let current = std::mem::take(&mut *state);
        *state = f(current);
    }
}
