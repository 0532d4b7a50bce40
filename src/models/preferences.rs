use chrono::NaiveTime;

/// Daily schedule and notification toggle. Neither is acted upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub schedule: NaiveTime,
    pub email_notifications: bool,
}

impl Preferences {
    pub const DEFAULT_SCHEDULE: &'static str = "09:00";

    /// Parses a time-of-day in `HH:MM` form.
    pub fn parse_schedule(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(raw.trim(), "%H:%M")
    }

    pub fn schedule_label(&self) -> String {
        self.schedule.format("%H:%M").to_string()
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            schedule: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            email_notifications: false,
        }
    }
}
