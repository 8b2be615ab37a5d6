// File: ./src/model/patch.rs
use crate::error::CommandResult;
use crate::model::date::TaskDate;
use crate::model::item::{Name, Schedule, Task};
use crate::model::tag::Tag;
use std::collections::BTreeSet;

/// Edit to one optional date field.
///
/// `Keep` and `Remove` must stay distinct: an absent flag leaves the date
/// alone, the removal keyword clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DatePatch {
    #[default]
    Keep,
    Set(TaskDate),
    Remove,
}

impl DatePatch {
    pub fn is_touched(&self) -> bool {
        !matches!(self, Self::Keep)
    }

    pub fn apply(&self, current: Option<&TaskDate>) -> Option<TaskDate> {
        match self {
            Self::Keep => current.cloned(),
            Self::Set(date) => Some(date.clone()),
            Self::Remove => None,
        }
    }
}

/// Which fields an edit replaces, and with what.
///
/// Untouched fields are `None` / [`DatePatch::Keep`]. A `Some` empty tag set
/// clears every tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskDescriptor {
    pub name: Option<Name>,
    pub start: DatePatch,
    pub end: DatePatch,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditTaskDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.start.is_touched() || self.end.is_touched() || self.tags.is_some()
    }

    /// Builds the edited copy of `task`. The original is left untouched.
    pub fn apply_to(&self, task: &Task) -> CommandResult<Task> {
        let mut edited = task.clone();
        if let Some(name) = &self.name {
            edited.set_name(name.clone());
        }
        if self.start.is_touched() || self.end.is_touched() {
            let start = self.start.apply(task.start_date());
            let end = self.end.apply(task.end_date());
            edited.set_schedule(Schedule::from_dates(start, end)?);
        }
        if let Some(tags) = &self.tags {
            edited.set_tags(tags.clone());
        }
        Ok(edited)
    }
}
