//! Keyboard selection over the suggestion list

/// Arrow-key direction for moving the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Selection cursor over the suggestion list
///
/// `None` means nothing is highlighted and Enter searches for the raw text.
/// Movement clamps at the ends instead of wrapping; moving up from the first
/// item returns to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    /// Highlight `index` directly (mouse click)
    ///
    /// Returns false and leaves the selection alone when `index` is out of range.
    pub fn select_index(&mut self, index: usize, suggestion_count: usize) -> bool {
        if index >= suggestion_count {
            return false;
        }
        self.selected_index = Some(index);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Move one step in `direction` over a list of `suggestion_count` items
    pub fn navigate(&mut self, direction: Direction, suggestion_count: usize) {
        if suggestion_count == 0 {
            return;
        }

        self.selected_index = match (direction, self.selected_index) {
            (Direction::Down, None) => Some(0),
            (Direction::Down, Some(current)) => Some((current + 1).min(suggestion_count - 1)),
            (Direction::Up, None) | (Direction::Up, Some(0)) => None,
            (Direction::Up, Some(current)) => Some(current - 1),
        };
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
