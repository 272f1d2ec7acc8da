//! Transition history tracking.
//!
//! The interpreter appends one record per fired transition. Ignored events
//! leave no trace here. A history may carry a retention limit, in which case
//! the oldest records are dropped once the limit is reached.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of records an interpreter keeps unless told otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Record of a single fired transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionRecord {
    /// Event that fired the transition
    pub event: String,
    /// Name of the state being left
    pub from: String,
    /// Name of the state being entered
    pub to: String,
    /// When the transition fired
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of fired transitions, oldest first.
///
/// # Example
///
/// ```rust
/// use eventgraph::core::{EventHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let mut history = EventHistory::with_limit(2);
///
/// for (event, from, to) in [("PLAY", "STOP", "PLAYING"), ("PAUSE", "PLAYING", "PAUSED"), ("STOP", "PAUSED", "STOP")] {
///     history.record(TransitionRecord {
///         event: event.to_string(),
///         from: from.to_string(),
///         to: to.to_string(),
///         timestamp: Utc::now(),
///     });
/// }
///
/// // The oldest record was dropped.
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path(), vec!["PLAYING", "PAUSED", "STOP"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventHistory {
    transitions: VecDeque<TransitionRecord>,
    limit: Option<usize>,
}

impl EventHistory {
    /// Create an empty history with no retention limit.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history keeping at most `limit` records.
    ///
    /// A limit of `0` disables recording entirely.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit: Some(limit),
        }
    }

    /// Retention limit, `None` when unbounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Change the retention limit, dropping the oldest records if needed.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        self.enforce_limit();
    }

    /// False when the limit is `0` and records are discarded.
    pub fn is_recording(&self) -> bool {
        self.limit != Some(0)
    }

    /// Append a record, evicting the oldest one when at the limit.
    pub fn record(&mut self, transition: TransitionRecord) {
        if !self.is_recording() {
            return;
        }
        self.transitions.push_back(transition);
        self.enforce_limit();
    }

    /// Names of the states traversed: the first retained source, then each target.
    ///
    /// Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from.as_str());
        }
        for transition in &self.transitions {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Time between the first and last retained record, `None` if empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Retained records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.transitions.iter()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.transitions.back()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// True when no records are retained.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.transitions.clear();
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
    }
}
