// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keystroke coalescing without a clock.
//!
//! The widget ranks on pause, not on every keystroke. The classic bug in
//! hand-rolled debounce is the stale timer: keystroke A schedules a ranking
//! pass, keystroke B replaces it, and A's timer still fires and paints A's
//! results over B's. This module makes that impossible by construction.
//!
//! [`Debouncer`] owns a generation counter. Every [`schedule`] bumps the
//! generation and returns a [`Ticket`] stamped with it. When the host timer
//! fires it redeems the ticket with [`take_due`]; only the ticket from the
//! *latest* schedule yields the query - every superseded ticket redeems to
//! `None` and the stale pass simply never runs.
//!
//! The actual clock stays with the host (a `setTimeout` in the browser glue,
//! a test calling `take_due` directly), which keeps this logic synchronous
//! and exhaustively testable.
//!
//! [`schedule`]: Debouncer::schedule
//! [`take_due`]: Debouncer::take_due

/// Delay the host timer should use between the last keystroke and the
/// ranking pass.
pub const DEBOUNCE_DELAY_MS: u32 = 150;

/// Queries shorter than this never schedule a ranking pass. One character is
/// below the tokenizer's floor anyway; skipping the round-trip keeps the
/// dropdown from flickering on the first keystroke.
pub const MIN_QUERY_LEN: usize = 2;

/// Claim check for a scheduled ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    /// The raw generation number, for carrying a ticket across an FFI
    /// boundary that can't hold the type itself.
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Rebuild a ticket from [`raw`](Ticket::raw). A forged value simply
    /// fails to redeem.
    pub fn from_raw(raw: u64) -> Self {
        Ticket(raw)
    }
}

/// Generation-counted debouncer; one per search input.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    generation: u64,
    query: String,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a ranking pass for `query`, superseding anything pending.
    /// The host should arm its timer for [`DEBOUNCE_DELAY_MS`] and redeem
    /// the returned ticket when it fires.
    pub fn schedule(&mut self, query: impl Into<String>) -> Ticket {
        self.generation += 1;
        self.pending = Some(Pending {
            generation: self.generation,
            query: query.into(),
        });
        Ticket(self.generation)
    }

    /// Drop whatever is pending (query cleared, widget dismissed). Tickets
    /// issued before this point can no longer redeem.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Redeem a ticket. Yields the scheduled query only for the most recent
    /// ticket; a superseded or cancelled ticket yields `None`.
    pub fn take_due(&mut self, ticket: Ticket) -> Option<String> {
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.generation == ticket.0)
        {
            self.pending.take().map(|pending| pending.query)
        } else {
            None
        }
    }

    /// Is anything scheduled and not yet redeemed?
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
