/**
 * Shared Types Module
 *
 * App view states and the transient notice shown after a benevit request.
 */

use std::time::{Duration, Instant};

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login screen
    Login,
    /// Catalog with search
    Home,
    /// Member's unlocked benevits
    MyBenevits,
}

impl AppView {
    pub fn title(self) -> &'static str {
        use crate::shared::strings::{benevits, home, login};
        match self {
            AppView::Login => login::TITLE,
            AppView::Home => home::TITLE,
            AppView::MyBenevits => benevits::MY_BENEVITS_TITLE,
        }
    }

    pub fn requires_session(self) -> bool {
        !matches!(self, AppView::Login)
    }
}

/// Short-lived banner text
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    shown_at: Instant,
}

impl Notice {
    pub const LIFETIME: Duration = Duration::from_secs(3);

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::LIFETIME
    }
}
