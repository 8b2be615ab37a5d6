// File: ./src/model/mod.rs
pub mod date;
pub mod item;
pub mod matcher;
pub mod patch;
pub mod tag;

pub use date::TaskDate;
pub use item::{Name, Schedule, Task, TaskType};
pub use matcher::Qualifier;
pub use patch::{DatePatch, EditTaskDescriptor};
pub use tag::Tag;
