// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Key event classification for the two keyboard surfaces.
//!
//! The widget listens in two places: on its own input element, and globally
//! on the document for the focus shortcuts. Both handlers reduce to pure
//! functions here - (key, modifiers, focus state) in, intent out - so the
//! bindings are testable without a DOM and the glue code is a one-line
//! `match`.
//!
//! # Bindings
//!
//! Widget-local (input has focus):
//!
//! | Key               | Action                                  |
//! |-------------------|-----------------------------------------|
//! | Escape            | dismiss: close results, blur, deselect  |
//! | ArrowDown / ArrowUp | move the selection cursor             |
//! | Enter             | open the selected result                |
//! | Ctrl/Cmd+Home     | jump to first result                    |
//! | Ctrl/Cmd+End      | jump to last result                     |
//! | Tab               | close results, let focus move on        |
//!
//! Global (anywhere on the page):
//!
//! | Key        | Condition              | Action       |
//! |------------|------------------------|--------------|
//! | Ctrl/Cmd+K | always                 | focus search |
//! | `/`        | not typing in a field  | focus search |
//!
//! Ctrl+K deliberately works while a text field has focus (it is a chord, it
//! can't be typed by accident); bare `/` just as deliberately does not.

use crate::types::NavDirection;

/// What a key event on the search input asks the widget to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKeyAction {
    /// Escape: hide results, blur the input, reset the cursor
    Dismiss,
    /// Arrow keys and Home/End jumps
    Move(NavDirection),
    /// Enter: navigate to the selected result's URL
    Open,
    /// Tab: hide results but let the default focus traversal proceed
    CloseResults,
}

impl WidgetKeyAction {
    /// Should the glue call `preventDefault()` for this action?
    ///
    /// Tab keeps its default so focus still moves on.
    pub fn consumes_event(self) -> bool {
        !matches!(self, WidgetKeyAction::CloseResults)
    }
}

/// Classify a key event on the search input. `key` is the DOM
/// `KeyboardEvent.key` value.
pub fn widget_key_action(key: &str, ctrl: bool, meta: bool) -> Option<WidgetKeyAction> {
    let chord = ctrl || meta;
    match key {
        "Escape" => Some(WidgetKeyAction::Dismiss),
        "ArrowDown" => Some(WidgetKeyAction::Move(NavDirection::Down)),
        "ArrowUp" => Some(WidgetKeyAction::Move(NavDirection::Up)),
        "Enter" => Some(WidgetKeyAction::Open),
        "Home" if chord => Some(WidgetKeyAction::Move(NavDirection::First)),
        "End" if chord => Some(WidgetKeyAction::Move(NavDirection::Last)),
        "Tab" => Some(WidgetKeyAction::CloseResults),
        _ => None,
    }
}

/// What a global (document-level) key event asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalKeyAction {
    /// Move focus into whichever search input is visible
    FocusSearch,
}

/// Classify a document-level key event. `in_text_field` is whether the
/// active element already accepts typing (input, textarea, contenteditable).
pub fn global_key_action(
    key: &str,
    ctrl: bool,
    meta: bool,
    in_text_field: bool,
) -> Option<GlobalKeyAction> {
    match key {
        "k" | "K" if ctrl || meta => Some(GlobalKeyAction::FocusSearch),
        "/" if !in_text_field => Some(GlobalKeyAction::FocusSearch),
        _ => None,
    }
}
