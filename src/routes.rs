// file: src/routes.rs
// description: path routing between pages; only the session registry travels between them

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Landing,
    Generate,
    Review,
    Compare,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Landing, Page::Generate, Page::Review, Page::Compare];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::Generate => "/generate",
            Page::Review => "/review",
            Page::Compare => "/compare",
        }
    }

    /// Header navigation label.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Landing => "Home",
            Page::Generate => "Generate Document",
            Page::Review => "Review Contract",
            Page::Compare => "Compare Contract",
        }
    }

    /// Unknown paths have no page.
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Self::ALL.into_iter().find(|page| page.path() == normalized)
    }
}

/// Tracks the active page, the way the header highlights it.
#[derive(Debug, Clone)]
pub struct Router {
    active: Page,
    history: Vec<Page>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            active: Page::Landing,
            history: vec![Page::Landing],
        }
    }

    pub fn active(&self) -> Page {
        self.active
    }

    pub fn navigate(&mut self, path: &str) -> Option<Page> {
        let page = Page::from_path(path)?;
        tracing::debug!("Navigating to {}", page.path());
        self.active = page;
        self.history.push(page);
        Some(page)
    }

    pub fn history(&self) -> &[Page] {
        &self.history
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
