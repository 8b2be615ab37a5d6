// Logic for checking if tasks match the active list filter.
//
// A filter is a single `Qualifier` value carrying its own parameters; the
// store keeps one and evaluates it against every task whenever the view is
// read.

use crate::model::date::TaskDate;
use crate::model::item::{Task, TaskType};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Qualifier {
    #[default]
    All,
    /// Any keyword equals a word of the name, ignoring case.
    NameKeywords(BTreeSet<String>),
    Type(TaskType),
    /// Start or end date on the same day. `None` came from an unreadable
    /// date and matches nothing.
    Date(Option<TaskDate>),
}

impl Qualifier {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Qualifier::All => true,
            Qualifier::NameKeywords(keywords) => keywords
                .iter()
                .any(|keyword| contains_word_ignore_case(task.name().as_str(), keyword)),
            Qualifier::Type(task_type) => task.task_type() == *task_type,
            Qualifier::Date(Some(target)) => [task.start_date(), task.end_date()]
                .into_iter()
                .flatten()
                .any(|date| date.is_same_day(target)),
            Qualifier::Date(None) => false,
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::All => write!(f, "all"),
            Qualifier::NameKeywords(keywords) => {
                let joined: Vec<&str> = keywords.iter().map(String::as_str).collect();
                write!(f, "name={}", joined.join(", "))
            }
            Qualifier::Type(task_type) => write!(f, "type={}", task_type),
            Qualifier::Date(Some(date)) => write!(f, "date={}", date.date_only()),
            Qualifier::Date(None) => write!(f, "date=<unreadable>"),
        }
    }
}

fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim().to_lowercase();
    !word.is_empty()
        && sentence
            .split_whitespace()
            .any(|candidate| candidate.to_lowercase() == word)
}
