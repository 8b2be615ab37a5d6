// File: ./src/model/item.rs
use crate::error::{CommandError, CommandResult};
use crate::model::date::TaskDate;
use crate::model::tag::Tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> CommandResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CommandError::InvalidName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User-facing classification, derived from which dates a task has.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Floating,
    Deadline,
    Event,
}

// --- SCHEDULE ---

/// The dates a task carries.
///
/// A start date is only meaningful together with an end date, so "start
/// without end" has no variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Schedule {
    #[default]
    Floating,
    Deadline {
        end: TaskDate,
    },
    Event {
        start: TaskDate,
        end: TaskDate,
    },
}

impl Schedule {
    pub fn from_dates(start: Option<TaskDate>, end: Option<TaskDate>) -> CommandResult<Self> {
        match (start, end) {
            (None, None) => Ok(Self::Floating),
            (None, Some(end)) => Ok(Self::Deadline { end }),
            (Some(start), Some(end)) => Ok(Self::Event { start, end }),
            (Some(_), None) => Err(CommandError::StartDateWithoutEndDate),
        }
    }

    pub fn start_date(&self) -> Option<&TaskDate> {
        match self {
            Self::Event { start, .. } => Some(start),
            Self::Floating | Self::Deadline { .. } => None,
        }
    }

    pub fn end_date(&self) -> Option<&TaskDate> {
        match self {
            Self::Deadline { end } | Self::Event { end, .. } => Some(end),
            Self::Floating => None,
        }
    }

    pub fn task_type(&self) -> TaskType {
        match self {
            Self::Floating => TaskType::Floating,
            Self::Deadline { .. } => TaskType::Deadline,
            Self::Event { .. } => TaskType::Event,
        }
    }
}

// --- TASK ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    name: Name,
    schedule: Schedule,
    tags: BTreeSet<Tag>,
    #[serde(default)]
    done: bool,
}

impl Task {
    pub fn new(name: Name, schedule: Schedule, tags: BTreeSet<Tag>) -> Self {
        Self {
            name,
            schedule,
            tags,
            done: false,
        }
    }

    pub fn floating(name: Name) -> Self {
        Self::new(name, Schedule::Floating, BTreeSet::new())
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn start_date(&self) -> Option<&TaskDate> {
        self.schedule.start_date()
    }

    pub fn end_date(&self) -> Option<&TaskDate> {
        self.schedule.end_date()
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn task_type(&self) -> TaskType {
        self.schedule.task_type()
    }

    pub fn is_floating(&self) -> bool {
        self.task_type() == TaskType::Floating
    }

    pub fn is_deadline(&self) -> bool {
        self.task_type() == TaskType::Deadline
    }

    pub fn is_event(&self) -> bool {
        self.task_type() == TaskType::Event
    }

    pub fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    pub fn set_schedule(&mut self, schedule: Schedule) {
        self.schedule = schedule;
    }

    pub fn set_tags(&mut self, tags: BTreeSet<Tag>) {
        self.tags = tags;
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Duplicate check used by the store. Completion does not count.
    pub fn is_same_state_as(&self, other: &Task) -> bool {
        self.name == other.name && self.schedule == other.schedule && self.tags == other.tags
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(start) = self.start_date() {
            write!(f, " Start: {}", start)?;
        }
        if let Some(end) = self.end_date() {
            write!(f, " End: {}", end)?;
        }
        if !self.tags.is_empty() {
            f.write_str(" Tags: ")?;
            for tag in &self.tags {
                write!(f, "{}", tag)?;
            }
        }
        Ok(())
    }
}
