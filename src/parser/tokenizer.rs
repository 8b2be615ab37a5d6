// File: ./src/parser/tokenizer.rs
use std::collections::HashMap;

/// Command arguments split by flag prefix.
///
/// Every prefix present maps to at least one value, in the order the values
/// appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    preamble: String,
    values: HashMap<String, Vec<String>>,
}

impl ArgumentMap {
    /// Text before the first flag, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: &str) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.values.contains_key(prefix)
    }
}

/// Splits `input` at every word that starts with one of `prefixes`.
///
/// A prefix only counts at the start of a whitespace-delimited word; when
/// several prefixes fit, the longest wins. Values are trimmed but otherwise
/// left as typed.
pub fn tokenize(input: &str, prefixes: &[&str]) -> ArgumentMap {
    let occurrences = find_prefix_occurrences(input, prefixes);

    let preamble_end = occurrences.first().map_or(input.len(), |(pos, _)| *pos);
    let mut map = ArgumentMap {
        preamble: input[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (k, (pos, prefix)) in occurrences.iter().enumerate() {
        let value_end = occurrences
            .get(k + 1)
            .map_or(input.len(), |(next, _)| *next);
        let value = input[pos + prefix.len()..value_end].trim();
        map.values
            .entry(prefix.to_string())
            .or_default()
            .push(value.to_string());
    }
    map
}

fn find_prefix_occurrences<'p>(input: &str, prefixes: &[&'p str]) -> Vec<(usize, &'p str)> {
    let mut found = Vec::new();
    let mut at_word_start = true;

    for (idx, c) in input.char_indices() {
        if c.is_whitespace() {
            at_word_start = true;
            continue;
        }
        if at_word_start
            && let Some(prefix) = prefixes
                .iter()
                .filter(|p| !p.is_empty() && input[idx..].starts_with(**p))
                .max_by_key(|p| p.len())
        {
            found.push((idx, *prefix));
        }
        at_word_start = false;
    }
    found
}
