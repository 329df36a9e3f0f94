// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search widget.
//!
//! The browser glue stays thin: it owns the DOM (inputs, dropdown, overlay,
//! timers) and forwards events here; this layer owns every decision. Three
//! callbacks cross back out, all `js_sys::Function`:
//!
//! - `render(payload)` - the result list changed, repaint the dropdown
//! - `navigate(index)` - the selection moved (`-1` = nothing selected)
//! - `select(url)` - the user committed; go to this URL
//!
//! The corpus crosses the boundary as already-decoded JSON: the glue runs
//! `fetch('/index.json')` itself and hands the array to
//! [`LoupeCorpus::load`], or reports the failure via
//! [`LoupeCorpus::load_failed`]. Keeping fetch on the JS side avoids
//! shipping an HTTP stack in the binary and keeps the loader's
//! single-shot/sticky-failure semantics in exactly one place.
//!
//! Debounce wiring: `input()` returns a ticket (or `undefined` when nothing
//! was scheduled); the glue arms `setTimeout(ticket => widget.fire(ticket),
//! DEBOUNCE_DELAY_MS)`. Stale tickets are refused by the core, so the glue
//! does not even need to clear its timers.

use crate::corpus::CorpusStore;
use crate::debounce::{Debouncer, Ticket, DEBOUNCE_DELAY_MS, MIN_QUERY_LEN};
use crate::highlight::highlight;
use crate::keyboard::{global_key_action, widget_key_action, WidgetKeyAction};
use crate::search::SearchSession;
use crate::types::{Document, ScoredDocument, SearchContext};
use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::sync::Arc;
use wasm_bindgen::prelude::*;

/// One result row as the renderer sees it: document fields plus
/// pre-highlighted title and summary. The score stays internal.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultOutput {
    url: String,
    title: String,
    summary: String,
    date: String,
    tags: Vec<String>,
    highlighted_title: String,
    highlighted_summary: String,
}

/// Everything the renderer needs for one repaint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderPayload {
    query: String,
    context: Option<SearchContext>,
    results: Vec<ResultOutput>,
    /// `-1` when nothing is selected, mirroring the DOM-side convention
    selected_index: i32,
}

fn result_output(entry: &ScoredDocument, query: &str) -> ResultOutput {
    let doc = &entry.doc;
    ResultOutput {
        url: doc.url.clone(),
        title: doc.title_text().to_string(),
        summary: doc.summary_text().to_string(),
        date: doc.date.clone().unwrap_or_default(),
        tags: doc.tags.clone(),
        highlighted_title: highlight(doc.title_text(), query),
        highlighted_summary: highlight(doc.summary_text(), query),
    }
}

/// The shared corpus handle. Construct one per page, pass it to each widget.
#[wasm_bindgen]
pub struct LoupeCorpus {
    store: Arc<CorpusStore>,
}

#[wasm_bindgen]
impl LoupeCorpus {
    #[wasm_bindgen(constructor)]
    pub fn new() -> LoupeCorpus {
        LoupeCorpus {
            store: CorpusStore::shared(),
        }
    }

    /// Install the fetched index. Single-shot; a second call is a no-op.
    pub fn load(&self, documents: JsValue) -> Result<usize, JsValue> {
        let docs: Vec<Document> = from_value(documents).map_err(|e| e.to_string())?;
        let count = docs.len();
        self.store.install(docs);
        Ok(count)
    }

    /// Record that the glue-side fetch failed. Sticky for the page session;
    /// every widget sharing this corpus will search into the empty list.
    pub fn load_failed(&self) {
        self.store.mark_failed();
    }

    pub fn is_ready(&self) -> bool {
        self.store.is_ready()
    }
}

impl Default for LoupeCorpus {
    fn default() -> Self {
        Self::new()
    }
}

/// One search input instance (the page mounts two: desktop and mobile).
#[wasm_bindgen]
pub struct LoupeWidget {
    session: SearchSession,
    debouncer: Debouncer,
    context: Option<SearchContext>,
    query: String,
    on_render: Function,
    on_navigate: Function,
    on_select: Function,
}

#[wasm_bindgen]
impl LoupeWidget {
    /// Build a widget over a shared corpus with its three UI callbacks.
    #[wasm_bindgen(constructor)]
    pub fn new(
        corpus: &LoupeCorpus,
        on_render: Function,
        on_navigate: Function,
        on_select: Function,
    ) -> LoupeWidget {
        LoupeWidget {
            session: SearchSession::new(Arc::clone(&corpus.store)),
            debouncer: Debouncer::new(),
            context: None,
            query: String::new(),
            on_render,
            on_navigate,
            on_select,
        }
    }

    /// Delay the glue should pass to `setTimeout` between keystroke and
    /// [`fire`](LoupeWidget::fire).
    pub fn debounce_delay_ms() -> u32 {
        DEBOUNCE_DELAY_MS
    }

    /// Classify the current page. Returns whether the widget should be
    /// mounted at all; off blog/docs pages the search chrome stays hidden.
    pub fn set_path(&mut self, path: &str) -> bool {
        self.context = SearchContext::from_path(path);
        crate::types::search_enabled_for_path(path)
    }

    /// The input's value changed. Cancels any pending ranking pass; clears
    /// the dropdown for an empty query; schedules a pass for a query of at
    /// least `MIN_QUERY_LEN` characters. Returns the ticket to fire after
    /// the debounce delay, or `undefined` when nothing was scheduled.
    pub fn input(&mut self, query: &str) -> Result<Option<f64>, JsValue> {
        self.debouncer.cancel();
        self.query = query.to_string();

        if query.is_empty() {
            self.session.clear();
            self.render()?;
            return Ok(None);
        }
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(None);
        }
        let ticket = self.debouncer.schedule(query);
        Ok(Some(ticket_to_js(ticket)))
    }

    /// A debounce timer fired. Runs the ranking pass only if this ticket is
    /// still the latest one; stale timers are ignored wholesale, so results
    /// for a superseded query can never paint over the current one.
    pub fn fire(&mut self, ticket: f64) -> Result<(), JsValue> {
        let Some(query) = self.debouncer.take_due(js_to_ticket(ticket)) else {
            return Ok(());
        };
        self.session.search(&query, self.context);
        self.render()
    }

    /// Key event on the search input. Returns whether the glue should call
    /// `preventDefault()`.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, meta: bool) -> Result<bool, JsValue> {
        let Some(action) = widget_key_action(key, ctrl, meta) else {
            return Ok(false);
        };
        match action {
            WidgetKeyAction::Dismiss => {
                self.debouncer.cancel();
                if self.session.reset_selection() {
                    self.notify_navigate()?;
                }
            }
            WidgetKeyAction::Move(direction) => {
                if self.session.navigate(direction) {
                    self.notify_navigate()?;
                }
            }
            WidgetKeyAction::Open => {
                if let Some(url) = self.session.selected_url() {
                    let url = JsValue::from_str(url);
                    self.on_select.call1(&JsValue::NULL, &url)?;
                }
            }
            WidgetKeyAction::CloseResults => {}
        }
        Ok(action.consumes_event())
    }

    /// Mouse hover over a result row.
    pub fn hover(&mut self, index: usize) -> Result<(), JsValue> {
        if self.session.select(index) {
            self.notify_navigate()?;
        }
        Ok(())
    }

    /// Click on a result row: commit to its URL.
    pub fn activate(&mut self, index: usize) -> Result<(), JsValue> {
        if self.session.select(index) {
            self.notify_navigate()?;
        }
        if let Some(url) = self.session.selected_url() {
            let url = JsValue::from_str(url);
            self.on_select.call1(&JsValue::NULL, &url)?;
        }
        Ok(())
    }

    fn render(&self) -> Result<(), JsValue> {
        let payload = RenderPayload {
            query: self.query.clone(),
            context: self.context,
            results: self
                .session
                .results()
                .iter()
                .map(|entry| result_output(entry, &self.query))
                .collect(),
            selected_index: selected_to_js(self.session.selected_index()),
        };
        let payload = to_value(&payload).map_err(|e| JsValue::from(e.to_string()))?;
        self.on_render.call1(&JsValue::NULL, &payload)?;
        Ok(())
    }

    fn notify_navigate(&self) -> Result<(), JsValue> {
        let index = JsValue::from(selected_to_js(self.session.selected_index()));
        self.on_navigate.call1(&JsValue::NULL, &index)?;
        Ok(())
    }
}

/// Document-level key event. Returns whether the glue should focus whichever
/// search input is visible (and call `preventDefault()`).
#[wasm_bindgen]
pub fn should_focus_search(key: &str, ctrl: bool, meta: bool, in_text_field: bool) -> bool {
    global_key_action(key, ctrl, meta, in_text_field).is_some()
}

/// Highlight query tokens in arbitrary text (exposed for renderers that
/// build their own rows).
#[wasm_bindgen(js_name = highlight)]
pub fn highlight_js(text: &str, query: &str) -> String {
    highlight(text, query)
}

fn selected_to_js(selected: Option<usize>) -> i32 {
    selected.map_or(-1, |i| i as i32)
}

// Tickets are u64 internally; a page session never issues enough of them to
// leave f64's exact-integer range.
fn ticket_to_js(ticket: Ticket) -> f64 {
    ticket.raw() as f64
}

fn js_to_ticket(value: f64) -> Ticket {
    Ticket::from_raw(value as u64)
}
