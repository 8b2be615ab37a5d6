// File: ./src/model/date.rs
use crate::datetime::{DateTimeNormalizer, Instant};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A date attached to a task. Immutable; compared by instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskDate(Instant);

impl TaskDate {
    pub fn new(instant: Instant) -> Self {
        Self(instant)
    }

    pub fn instant(&self) -> &Instant {
        &self.0
    }

    /// Canonical string up to the first comma, e.g. `11 November 2011`.
    pub fn date_only(&self) -> String {
        let full = self.to_string();
        match full.split_once(',') {
            Some((date, _)) => date.to_string(),
            None => full,
        }
    }

    pub fn is_same_day(&self, other: &TaskDate) -> bool {
        self.date_only() == other.date_only()
    }
}

impl fmt::Display for TaskDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DateTimeNormalizer::format(&self.0))
    }
}
