use std::fmt;

use strum::Display;

use crate::{
    dashboard::{Dashboard, FETCH_LABEL},
    models::{Category, NewsItem},
};

pub const TITLE: &str = "AI Daily Updates";
pub const EMPTY_STATE: &str = "Click \"Fetch Updates\" to get the latest AI news";

const RULE: &str = "────────────────────────────────────────────────────────────";
const ANSI_RESET: &str = "\x1b[0m";
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_DIM: &str = "\x1b[2m";

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum BadgeTheme {
    Purple,
    Blue,
    Green,
    Orange,
    Gray,
}

impl BadgeTheme {
    /// Theme for a raw category value; unrecognized values get [`BadgeTheme::Gray`].
    pub fn for_category(raw: &str) -> Self {
        match Category::recognize(raw) {
            Some(Category::Models) => Self::Purple,
            Some(Category::Tools) => Self::Blue,
            Some(Category::Research) => Self::Green,
            Some(Category::Industry) => Self::Orange,
            None => Self::Gray,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Purple => "bg-purple-100 text-purple-800",
            Self::Blue => "bg-blue-100 text-blue-800",
            Self::Green => "bg-green-100 text-green-800",
            Self::Orange => "bg-orange-100 text-orange-800",
            Self::Gray => "bg-gray-100 text-gray-800",
        }
    }

    pub fn ansi(&self) -> &'static str {
        match self {
            Self::Purple => "\x1b[35m",
            Self::Blue => "\x1b[34m",
            Self::Green => "\x1b[32m",
            Self::Orange => "\x1b[38;5;208m",
            Self::Gray => "\x1b[90m",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
}

struct Painter {
    color: bool,
}

impl Painter {
    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{ANSI_RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Borrowed dashboard plus render options; [`render`] is its `to_string`.
pub struct DashboardView<'a> {
    dashboard: &'a Dashboard,
    painter: Painter,
}

impl<'a> DashboardView<'a> {
    pub fn new(dashboard: &'a Dashboard, options: RenderOptions) -> Self {
        Self {
            dashboard,
            painter: Painter {
                color: options.color,
            },
        }
    }

    fn header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dashboard = self.dashboard;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "  {}    [ {} ]",
            self.painter.paint(ANSI_BOLD, TITLE),
            dashboard.trigger_label()
        )?;
        writeln!(f, "{RULE}")?;

        let prefs = &dashboard.preferences;
        writeln!(f, "  Daily Update Time: {}", prefs.schedule_label())?;
        writeln!(
            f,
            "  Email Notifications: [{}]",
            if prefs.email_notifications { "x" } else { " " }
        )?;

        if let Some(last_update) = &dashboard.last_update {
            writeln!(f, "{RULE}")?;
            writeln!(f, "  Last updated: {last_update}")?;
        }
        writeln!(f, "{RULE}")
    }

    fn card(&self, f: &mut fmt::Formatter<'_>, item: &NewsItem) -> fmt::Result {
        let painter = &self.painter;
        let theme = BadgeTheme::for_category(&item.category);
        let badge = painter.paint(theme.ansi(), &format!("[{}]", item.category));
        writeln!(f, "  {badge} {}", painter.paint(ANSI_DIM, &item.date))?;
        writeln!(f, "  {}", painter.paint(ANSI_BOLD, &item.title))?;
        if !item.summary.is_empty() {
            writeln!(f, "  {}", item.summary)?;
        }
        writeln!(f, "  Source: {}", item.source)
    }

    fn help(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "How to use:")?;
        writeln!(
            f,
            "  • Run `fetch` (\"{FETCH_LABEL}\") to get the latest AI news using web search"
        )?;
        writeln!(f, "  • Set your preferred daily update time with --schedule")?;
        writeln!(
            f,
            "  • Enable email notifications with --email-notifications to receive updates automatically"
        )?;
        writeln!(
            f,
            "  • Updates are categorized by Models, Tools, Research, and Industry news"
        )
    }
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.header(f)?;
        writeln!(f)?;

        if self.dashboard.items.is_empty() {
            writeln!(f, "  {}", self.painter.paint(ANSI_DIM, EMPTY_STATE))?;
        } else {
            for item in &self.dashboard.items {
                self.card(f, item)?;
                writeln!(f)?;
            }
        }

        writeln!(f)?;
        Self::help(f)
    }
}

pub fn render(dashboard: &Dashboard, options: RenderOptions) -> String {
    DashboardView::new(dashboard, options).to_string()
}
