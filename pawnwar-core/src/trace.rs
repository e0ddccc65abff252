//! Structured search trace
//!
//! The search engine reports what it does through a `SearchObserver` instead
//! of printing; renderers and tests consume the events.

use serde::{Deserialize, Serialize};

use crate::game::{Move, Side};

/// One child evaluation inside the search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEvent {
    /// Depth of the evaluated child (root children are at depth 1)
    pub depth: usize,
    /// Side that made `mv`
    pub side: Side,
    /// Move leading to the evaluated child
    pub mv: Move,
    /// Value the child returned
    pub value: i32,
    /// Parent's alpha after folding in `value`
    pub alpha: i32,
    /// Parent's beta after folding in `value`
    pub beta: i32,
    /// Later siblings skipped because this evaluation closed the window
    pub pruned: usize,
}

impl SearchEvent {
    pub fn is_cutoff(&self) -> bool {
        self.beta <= self.alpha
    }
}

/// Receiver of search events
pub trait SearchObserver {
    fn on_event(&mut self, event: &SearchEvent);
}

/// Observer that ignores everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_event(&mut self, _event: &SearchEvent) {}
}

/// Observer that keeps every event in order
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    events: Vec<SearchEvent>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SearchEvent> {
        self.events
    }

    /// Events that triggered a cutoff
    pub fn cutoffs(&self) -> impl Iterator<Item = &SearchEvent> {
        self.events.iter().filter(|e| e.pruned > 0)
    }
}

impl SearchObserver for TraceRecorder {
    fn on_event(&mut self, event: &SearchEvent) {
        self.events.push(*event);
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_event(&mut self, event: &SearchEvent) {
        (**self).on_event(event)
    }
}
