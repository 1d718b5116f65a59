//! Page history

use super::page::Page;

/// Oldest entries are forgotten past this depth
pub const MAX_HISTORY: usize = 50;

/// Tracks the current page and where the user came from
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Page,
    history: Vec<Page>,
}

impl Navigator {
    pub fn new(start: Page) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Page {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Move to `page`, remembering the current one
    ///
    /// Returns false (and changes nothing) when `page` is already shown.
    pub fn navigate(&mut self, page: Page) -> bool {
        if page == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, page);
        self.history.push(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        true
    }

    /// Return to the previous page, if any
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(page) => {
                self.current = page;
                true
            }
            None => false,
        }
    }
}
