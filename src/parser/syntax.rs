// File: ./src/parser/syntax.rs
//! Flag prefixes, date marker words and the removal keyword.

pub const PREFIX_START_DATE: &str = "s/";
pub const PREFIX_END_DATE: &str = "e/";
pub const PREFIX_TAG: &str = "t/";
pub const REMOVE_KEYWORD: &str = "remove";

pub const START_DATE_MARKERS: &[&str] = &["from", "start", "starting", "begin", "begins"];
pub const END_DATE_MARKERS: &[&str] = &["to", "by", "until", "till", "due", "end", "ends"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFlag {
    Start,
    End,
}

/// Vocabulary the edit parser recognizes. Built from [`crate::config::Config`].
///
/// Marker words and the removal keyword are stored lower-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliSyntax {
    pub start_prefix: String,
    pub end_prefix: String,
    pub tag_prefix: String,
    pub start_markers: Vec<String>,
    pub end_markers: Vec<String>,
    pub removal_keyword: String,
}

impl Default for CliSyntax {
    fn default() -> Self {
        Self {
            start_prefix: PREFIX_START_DATE.to_string(),
            end_prefix: PREFIX_END_DATE.to_string(),
            tag_prefix: PREFIX_TAG.to_string(),
            start_markers: START_DATE_MARKERS.iter().map(|m| m.to_string()).collect(),
            end_markers: END_DATE_MARKERS.iter().map(|m| m.to_string()).collect(),
            removal_keyword: REMOVE_KEYWORD.to_string(),
        }
    }
}

impl CliSyntax {
    pub fn prefixes(&self) -> [&str; 3] {
        [
            self.start_prefix.as_str(),
            self.end_prefix.as_str(),
            self.tag_prefix.as_str(),
        ]
    }

    pub fn prefix_for(&self, flag: DateFlag) -> &str {
        match flag {
            DateFlag::Start => &self.start_prefix,
            DateFlag::End => &self.end_prefix,
        }
    }

    /// Date group of a marker word, ignoring case.
    pub fn marker_flag(&self, word: &str) -> Option<DateFlag> {
        let lower = word.to_lowercase();
        if self.start_markers.contains(&lower) {
            Some(DateFlag::Start)
        } else if self.end_markers.contains(&lower) {
            Some(DateFlag::End)
        } else {
            None
        }
    }

    pub fn starts_with_prefix(&self, word: &str) -> bool {
        self.prefixes()
            .iter()
            .any(|p| !p.is_empty() && word.starts_with(*p))
    }

    /// `value` names the removal keyword, in any case and padding.
    ///
    /// A leading '/' left over from the flag is ignored.
    pub fn is_removal_keyword(&self, value: &str) -> bool {
        value.strip_prefix('/').unwrap_or(value).trim().to_lowercase() == self.removal_keyword
    }
}
