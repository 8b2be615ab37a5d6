//! Rejections produced while interpreting or applying a command.

use std::num::NonZeroUsize;

pub const MESSAGE_INVALID_DATE_FORMAT: &str = "Date format is not accepted by PotaTodo";
pub const MESSAGE_TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";
pub const MESSAGE_NAME_CONSTRAINTS: &str = "Task names should not be blank";

/// Result alias used by the parser, the store and the controller.
pub type CommandResult<T> = Result<T, CommandError>;

/// Every way a command can be rejected.
///
/// None of these are fatal: the caller shows the message and waits for the
/// next command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Index missing or not a positive integer.
    #[error("Invalid command format! \n{usage}")]
    MalformedCommand { usage: String },

    /// Two markers of the same date group were substituted in one command.
    #[error(
        "Repeated date markers found: use at most one start date marker and one end date marker"
    )]
    DuplicateDateMarker,

    #[error("{}", MESSAGE_INVALID_DATE_FORMAT)]
    InvalidDateFormat,

    #[error("{}", MESSAGE_TAG_CONSTRAINTS)]
    InvalidTagName,

    #[error("{}", MESSAGE_NAME_CONSTRAINTS)]
    InvalidName,

    #[error("At least one field to edit must be provided for task {index}.")]
    NoFieldsEdited { index: NonZeroUsize },

    #[error("This task already exists in the task manager")]
    DuplicateTask,

    #[error("The task index provided is invalid")]
    InvalidTaskIndex,

    #[error("A task with a start date must also have an end date")]
    StartDateWithoutEndDate,
}
