// File: src/store.rs
use crate::datetime::DateTimeNormalizer;
use crate::error::{CommandError, CommandResult};
use crate::model::{Qualifier, Task, TaskType};
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

/// The live task list plus the filter that defines the visible view.
///
/// Indices handed to [`TaskStore::delete_task`] / [`TaskStore::update_task`]
/// are 1-based positions in the view, as shown to the user.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    qualifier: Qualifier,
    normalizer: DateTimeNormalizer,
}

impl TaskStore {
    pub fn new(normalizer: DateTimeNormalizer) -> Self {
        Self {
            tasks: Vec::new(),
            qualifier: Qualifier::All,
            normalizer,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn qualifier(&self) -> &Qualifier {
        &self.qualifier
    }

    /// Tasks passing the active filter, evaluated now against the full list.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.qualifier.matches(t))
            .collect()
    }

    pub fn get_filtered(&self, view_index: NonZeroUsize) -> CommandResult<&Task> {
        let idx = self.source_index(view_index)?;
        Ok(&self.tasks[idx])
    }

    fn source_index(&self, view_index: NonZeroUsize) -> CommandResult<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| self.qualifier.matches(t))
            .nth(view_index.get() - 1)
            .map(|(idx, _)| idx)
            .ok_or(CommandError::InvalidTaskIndex)
    }

    fn contains_same(&self, task: &Task, skip: Option<usize>) -> bool {
        self.tasks
            .iter()
            .enumerate()
            .any(|(idx, t)| Some(idx) != skip && t.is_same_state_as(task))
    }

    /// Adds a task and resets the view to show everything.
    pub fn add_task(&mut self, task: Task) -> CommandResult<()> {
        if self.contains_same(&task, None) {
            return Err(CommandError::DuplicateTask);
        }
        self.tasks.push(task);
        self.show_all();
        Ok(())
    }

    pub fn delete_task(&mut self, view_index: NonZeroUsize) -> CommandResult<Task> {
        let idx = self.source_index(view_index)?;
        Ok(self.tasks.remove(idx))
    }

    /// Replaces the task at `view_index` with `edited`.
    ///
    /// Fails if some other task already has the same name, dates and tags.
    pub fn update_task(&mut self, view_index: NonZeroUsize, edited: Task) -> CommandResult<()> {
        let idx = self.source_index(view_index)?;
        if self.contains_same(&edited, Some(idx)) {
            return Err(CommandError::DuplicateTask);
        }
        self.tasks[idx] = edited;
        Ok(())
    }

    pub fn show_all(&mut self) {
        self.set_qualifier(Qualifier::All);
    }

    pub fn filter_by_name_keywords<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: BTreeSet<String> = keywords.into_iter().map(Into::into).collect();
        self.set_qualifier(Qualifier::NameKeywords(keywords));
    }

    /// Filters by task type name, or failing that by a date.
    pub fn filter_by_type(&mut self, token: &str) {
        let qualifier = match token.trim().parse::<TaskType>() {
            Ok(task_type) => Qualifier::Type(task_type),
            Err(_) => {
                let date = self.normalizer.parse_task_date(token);
                if date.is_none() {
                    log::warn!("List filter '{}' is neither a task type nor a date", token);
                }
                Qualifier::Date(date)
            }
        };
        self.set_qualifier(qualifier);
    }

    fn set_qualifier(&mut self, qualifier: Qualifier) {
        log::info!("Task list filter set to {}", qualifier);
        self.qualifier = qualifier;
    }
}
