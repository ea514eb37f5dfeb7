//! State machine of the sidebar search box.
//!
//! ```text
//!            input(non-blank) / focus with text
//!   Closed ------------------------------------> Open
//!     ^                                           |
//!     +-------------------------------------------+
//!       input(blank) | escape | outside click | select
//! ```
//!
//! Results are recomputed on every text change. Escape and select clear the
//! text; an outside click only closes the panel.

use super::search::{SearchIndex, SearchRecord};

/// Call-out to the host router.
pub trait Navigator {
    fn navigate(&mut self, href: &str);
}

impl<F> Navigator for F
where
    F: FnMut(&str),
{
    fn navigate(&mut self, href: &str) {
        self(href)
    }
}

#[derive(Debug, Clone)]
pub struct SearchBox {
    index: SearchIndex,
    text: String,
    is_open: bool,
    results: Vec<&'static SearchRecord>,
    highlighted: Option<usize>,
}

impl SearchBox {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            index,
            text: String::new(),
            is_open: false,
            results: Vec::new(),
            highlighted: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn results(&self) -> &[&'static SearchRecord] {
        &self.results
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Open with nothing to show.
    pub fn shows_no_results(&self) -> bool {
        self.is_open && self.results.is_empty()
    }

    /// Open or holding text, so Escape has something to reset.
    pub fn is_engaged(&self) -> bool {
        self.is_open || !self.text.is_empty()
    }

    fn has_query(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Keystroke in the focused input.
    pub fn input(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.results = self.index.search(&self.text);
        self.highlighted = None;
        self.is_open = self.has_query();
    }

    pub fn focus(&mut self) {
        if self.has_query() {
            self.is_open = true;
        }
    }

    pub fn escape(&mut self) {
        self.reset();
    }

    /// Interaction outside the component. Keeps the text.
    pub fn outside_click(&mut self) {
        self.is_open = false;
        self.highlighted = None;
    }

    pub fn select(&mut self, record: &SearchRecord, navigator: &mut impl Navigator) {
        log::debug!("search: navigating to '{}' ({})", record.href, record.id);
        navigator.navigate(record.href);
        self.reset();
    }

    /// Enter key. Returns whether a result was activated.
    pub fn activate_highlighted(&mut self, navigator: &mut impl Navigator) -> bool {
        if !self.is_open {
            return false;
        }
        match self.highlighted.and_then(|i| self.results.get(i).copied()) {
            Some(record) => {
                self.select(record, navigator);
                true
            }
            None => false,
        }
    }

    /// Arrow down. Wraps from the last result to the first.
    pub fn highlight_next(&mut self) {
        if !self.is_open || self.results.is_empty() {
            return;
        }
        let len = self.results.len();
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    /// Arrow up. Wraps from the first result to the last.
    pub fn highlight_prev(&mut self) {
        if !self.is_open || self.results.is_empty() {
            return;
        }
        let len = self.results.len();
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    fn reset(&mut self) {
        self.text.clear();
        self.results.clear();
        self.highlighted = None;
        self.is_open = false;
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new(SearchIndex::builtin())
    }
}
