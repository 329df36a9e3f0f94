// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The selection cursor over a result list.
//!
//! A tiny state machine, but one with an awkward edge: "nothing selected" is
//! a real state the user can navigate back into. ArrowUp from the first
//! result deselects; ArrowDown from nothing selects the first result. The
//! original sentinel for this was `-1`; here it is `None`, which makes the
//! invariant (`selected < len`) unrepresentable to violate rather than
//! merely discouraged.
//!
//! # Transition table (list of length `len > 0`)
//!
//! | State     | Down              | Up        | First     | Last           |
//! |-----------|-------------------|-----------|-----------|----------------|
//! | `None`    | `Some(0)`         | `None`    | `Some(0)` | `Some(len-1)`  |
//! | `Some(i)` | `Some(min(i+1, len-1))` | `i==0 → None`, else `Some(i-1)` | `Some(0)` | `Some(len-1)` |
//!
//! With `len == 0` every movement is a no-op. Every search resets to `None`.

use crate::types::NavDirection;

/// Selection cursor. Owned by a [`SearchSession`](crate::SearchSession);
/// `len` always refers to that session's current result count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    selected: Option<usize>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected result index, if any.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Back to "nothing selected". Called on every new search and on clear.
    pub fn reset(&mut self) {
        self.selected = None;
    }

    /// Apply one movement over a list of `len` results.
    ///
    /// Returns whether the selection actually changed - the caller skips the
    /// re-render (and the scroll-into-view) when it didn't.
    pub fn navigate(&mut self, direction: NavDirection, len: usize) -> bool {
        if len == 0 {
            return false;
        }

        let previous = self.selected;
        self.selected = match direction {
            NavDirection::Down => match self.selected {
                None => Some(0),
                Some(i) => Some((i + 1).min(len - 1)),
            },
            NavDirection::Up => match self.selected {
                None | Some(0) => None,
                Some(i) => Some(i - 1),
            },
            NavDirection::First => Some(0),
            NavDirection::Last => Some(len - 1),
        };
        previous != self.selected
    }

    /// Point at `index` directly (mouse hover). Out-of-range is ignored.
    pub fn set(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        let changed = self.selected != Some(index);
        self.selected = Some(index);
        changed
    }
}
