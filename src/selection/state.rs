//! Selection state machine
//!
//! At most one satellite is selected. Hover is transient and recomputed on
//! every pointer move. The orbit on display belongs to the selection when
//! there is one, otherwise to the hovered satellite.

use bevy::prelude::*;

/// Click-driven selection phase
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected(usize),
}

/// What a click did to the selection
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    Unchanged,
    Selected(usize),
    Cleared,
}

/// Process-wide selection resource
#[derive(Resource, Debug, Default)]
pub struct SelectionState {
    selection: Selection,
    hovered: Option<usize>,
}

impl SelectionState {
    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<usize> {
        match self.selection() {
            Selection::Idle => None,
            Selection::Selected(index) => Some(index),
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Pointer moved: replace the hover result. Never touches the selection.
    pub fn on_pointer_move(&mut self, hit: Option<usize>) {
        self.hovered = hit;
    }

    /// Click: a hit selects, a miss returns to Idle.
    pub fn on_click(&mut self, hit: Option<usize>) -> SelectionChange {
        let next = match hit {
            Some(index) => Selection::Selected(index),
            None => Selection::Idle,
        };
        if next == self.selection {
            return SelectionChange::Unchanged;
        }
        self.selection = next;
        match next {
            Selection::Selected(index) => SelectionChange::Selected(index),
            Selection::Idle => SelectionChange::Cleared,
        }
    }

    /// Satellite whose orbit should be shown, if any
    pub fn orbit_source(&self) -> Option<usize> {
        self.selected().or(self.hovered)
    }
}
