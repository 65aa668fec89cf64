//! crates/nordic_explorer_core/src/router.rs
//!
//! Page routing. Exactly one page is active at a time; a selection replaces it
//! immediately and there is no history.

use crate::domain::Page;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown page: '{0}'")]
    UnknownPage(String),
}

/// Holds the currently selected page for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRouter {
    current: Page,
}

impl PageRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn select(&mut self, page: Page) {
        self.current = page;
    }

    /// Selects the page named by a navigation label.
    ///
    /// On an unknown label the current page is left untouched.
    pub fn navigate(&mut self, label: &str) -> Result<Page, RouteError> {
        let page = parse_label(label)?;
        self.select(page);
        Ok(page)
    }
}

/// Resolves a navigation label such as "Booking" or "💳 Booking".
pub fn parse_label(label: &str) -> Result<Page, RouteError> {
    // Sidebar labels carry a leading icon.
    let text = label.trim_start_matches(|c: char| !c.is_alphanumeric());
    text.parse::<Page>()
        .map_err(|_| RouteError::UnknownPage(label.trim().to_string()))
}

/// The sidebar label of a page, icon included.
pub fn nav_label(page: Page) -> String {
    format!("{} {}", page.icon(), page.label())
}
