// File: src/controller.rs
//! Runs user commands against the task store.
//! Every front end should go through `TaskController` so edits are parsed,
//! checked and applied the same way everywhere.
use crate::config::Config;
use crate::datetime::DateTimeNormalizer;
use crate::error::CommandResult;
use crate::model::{EditTaskDescriptor, Task};
use crate::parser::EditCommandParser;
use crate::store::TaskStore;
use std::num::NonZeroUsize;

pub const MESSAGE_EDIT_TASK_SUCCESS: &str = "Edited Task: ";

/// A parsed `edit`: which task in the current view, and what to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: NonZeroUsize,
    descriptor: EditTaskDescriptor,
}

impl EditCommand {
    pub fn new(index: NonZeroUsize, descriptor: EditTaskDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> NonZeroUsize {
        self.index
    }

    pub fn descriptor(&self) -> &EditTaskDescriptor {
        &self.descriptor
    }

    /// Applies the edit to the task at `index` in the store's current view.
    ///
    /// The store is untouched when any step fails.
    pub fn execute(&self, store: &mut TaskStore) -> CommandResult<Task> {
        let target = store.get_filtered(self.index)?;
        let edited = self.descriptor.apply_to(target)?;
        store.update_task(self.index, edited.clone())?;
        Ok(edited)
    }
}

/// Central entry point for task commands.
#[derive(Debug, Clone)]
pub struct TaskController {
    store: TaskStore,
    edit_parser: EditCommandParser,
}

impl TaskController {
    pub fn new(store: TaskStore, edit_parser: EditCommandParser) -> Self {
        Self { store, edit_parser }
    }

    /// Wires a parser and an empty store around one shared normalizer.
    pub fn from_config(config: &Config, normalizer: DateTimeNormalizer) -> Self {
        let parser = EditCommandParser::new(config.syntax(), normalizer.clone());
        Self::new(TaskStore::new(normalizer), parser)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    /// Runs `edit` with its arguments and returns the feedback line.
    pub fn edit(&mut self, args: &str) -> CommandResult<String> {
        let result = self
            .edit_parser
            .parse(args)
            .and_then(|command| command.execute(&mut self.store));

        match result {
            Ok(task) => {
                log::info!("Edited task '{}'", task.name());
                Ok(format!("{}{}", MESSAGE_EDIT_TASK_SUCCESS, task))
            }
            Err(e) => {
                log::warn!("Edit rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Shows tasks whose name contains any of the whitespace separated keywords.
    pub fn find(&mut self, keywords: &str) -> String {
        self.store.filter_by_name_keywords(keywords.split_whitespace());
        listed_message(self.store.filtered_tasks().len())
    }

    /// Shows tasks of a type (`floating`, `deadline`, `event`) or on a date.
    /// An empty token shows everything.
    pub fn list(&mut self, token: &str) -> String {
        if token.trim().is_empty() {
            self.store.show_all();
        } else {
            self.store.filter_by_type(token);
        }
        listed_message(self.store.filtered_tasks().len())
    }
}

fn listed_message(count: usize) -> String {
    format!("{} tasks listed!", count)
}
