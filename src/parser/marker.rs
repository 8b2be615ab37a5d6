// File: ./src/parser/marker.rs
//! Date markers are plain words announcing that a date follows, e.g.
//! "dinner from tomorrow 7pm to tomorrow 10pm". Each marker that is followed
//! by a readable date is rewritten into its group's flag prefix so the
//! tokenizer can pick the date up. Markers without a date after them are
//! ordinary words of the name.

use crate::datetime::DateTimeNormalizer;
use crate::error::{CommandError, CommandResult};
use crate::parser::syntax::{CliSyntax, DateFlag};
use std::collections::HashMap;

/// Longest run of words tried as the date after a marker.
pub const MAX_DATE_SPAN: usize = 4;

/// Marker lookup plus how many times each group has been substituted.
/// Lives for a single pass.
struct MarkerMap<'a> {
    syntax: &'a CliSyntax,
    substituted: HashMap<DateFlag, usize>,
}

impl<'a> MarkerMap<'a> {
    fn new(syntax: &'a CliSyntax) -> Self {
        Self {
            syntax,
            substituted: HashMap::new(),
        }
    }

    fn flag_for(&self, word: &str) -> Option<DateFlag> {
        self.syntax.marker_flag(word)
    }

    /// Counts a substitution and hands back the prefix to write instead.
    fn record(&mut self, flag: DateFlag) -> CommandResult<&'a str> {
        let count = self.substituted.entry(flag).or_insert(0);
        *count += 1;
        if *count > 1 {
            return Err(CommandError::DuplicateDateMarker);
        }
        Ok(self.syntax.prefix_for(flag))
    }
}

/// Rewrites date markers into flag prefixes.
///
/// Whitespace in the result is collapsed to single spaces.
pub fn substitute_markers(
    input: &str,
    syntax: &CliSyntax,
    normalizer: &DateTimeNormalizer,
) -> CommandResult<String> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let mut markers = MarkerMap::new(syntax);
    let mut output: Vec<&str> = Vec::with_capacity(words.len());

    for (i, word) in words.iter().enumerate() {
        if let Some(flag) = markers.flag_for(word)
            && is_followed_by_date(&words[i + 1..], syntax, normalizer)
        {
            let prefix = markers.record(flag)?;
            log::debug!("Date marker '{}' replaced with '{}'", word, prefix);
            output.push(prefix);
            continue;
        }
        output.push(*word);
    }
    Ok(output.join(" "))
}

/// Tries the next 1..=MAX_DATE_SPAN words as a date, stopping short of the
/// next marker or flag.
fn is_followed_by_date(rest: &[&str], syntax: &CliSyntax, normalizer: &DateTimeNormalizer) -> bool {
    let limit = rest.len().min(MAX_DATE_SPAN);
    let span = rest[..limit]
        .iter()
        .position(|w| syntax.marker_flag(w).is_some() || syntax.starts_with_prefix(w))
        .unwrap_or(limit);
    (1..=span).any(|len| normalizer.is_valid_date_string(&rest[..len].join(" ")))
}
