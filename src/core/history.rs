//! History of committed transitions.
//!
//! Only transitions that actually moved the machine are recorded: rejected
//! applications and failed actions leave no trace here. A history may be
//! capped, in which case the oldest records are dropped first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use placeflow::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     transition: "submit".to_string(),
///     from: "draft",
///     to: "review",
///     timestamp: Utc::now(),
/// };
/// assert!(!record.is_self_loop());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord<P> {
    /// Name of the applied transition
    pub transition: String,
    /// The place the machine left
    pub from: P,
    /// The place the machine entered
    pub to: P,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

impl<P: PartialEq> TransitionRecord<P> {
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of committed transitions.
///
/// Unbounded by default. [`History::with_limit`] keeps at most `limit`
/// records, dropping the oldest; a limit of `0` records nothing.
///
/// # Example
///
/// ```rust
/// use placeflow::core::Transition;
/// use placeflow::machine::StateMachine;
///
/// let mut machine: StateMachine<char> = StateMachine::new(
///     vec!['A', 'B'],
///     vec![Transition::new("go", 'A', 'B'), Transition::new("back", 'B', 'A')],
/// )
/// .unwrap();
/// machine.apply("go").unwrap();
/// machine.apply("back").unwrap();
///
/// assert_eq!(machine.history().get_path(), vec![&'A', &'B', &'A']);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History<P> {
    records: VecDeque<TransitionRecord<P>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<P> Default for History<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> History<P> {
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
            limit: None,
        }
    }

    /// Create a history that keeps only the `limit` most recent records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(limit.min(1024)),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub(crate) fn push(&mut self, record: TransitionRecord<P>) {
        match self.limit {
            Some(0) => return,
            Some(limit) => {
                while self.records.len() >= limit {
                    self.records.pop_front();
                }
            }
            None => {}
        }
        self.records.push_back(record);
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    /// Get the path of places traversed.
    ///
    /// The oldest kept record's `from` place, then the `to` place of each
    /// record. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&P> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Time between the oldest and newest kept record.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Kept records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord<P>> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord<P>> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dump the history as JSON for diagnostics.
    pub fn to_json(&self) -> Result<String, serde_json::Error>
    where
        P: Serialize,
    {
        serde_json::to_string(self)
    }
}
