// File: ./src/parser/edit.rs
use crate::controller::EditCommand;
use crate::datetime::DateTimeNormalizer;
use crate::error::{CommandError, CommandResult};
use crate::model::{DatePatch, EditTaskDescriptor, Name, Tag};
use crate::parser::marker::substitute_markers;
use crate::parser::syntax::CliSyntax;
use crate::parser::tokenizer::tokenize;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

pub const COMMAND_WORD: &str = "edit";

/// Parses the arguments of `edit` into an [`EditCommand`].
#[derive(Debug, Clone)]
pub struct EditCommandParser {
    syntax: CliSyntax,
    normalizer: DateTimeNormalizer,
}

impl EditCommandParser {
    pub fn new(syntax: CliSyntax, normalizer: DateTimeNormalizer) -> Self {
        Self { syntax, normalizer }
    }

    pub fn syntax(&self) -> &CliSyntax {
        &self.syntax
    }

    pub fn usage(&self) -> String {
        let s = &self.syntax.start_prefix;
        let e = &self.syntax.end_prefix;
        let t = &self.syntax.tag_prefix;
        let r = &self.syntax.removal_keyword;
        format!(
            "{COMMAND_WORD}: Edits the task identified by the index number used in the last task listing. \
             Only the given fields are changed.\n\
             Parameters: INDEX (must be a positive integer) [NAME] [{s}START_DATE] [{e}END_DATE] [{t}TAG]...\n\
             Use {s}{r} or {e}{r} to clear a date, and an empty {t} to clear all tags.\n\
             Example: {COMMAND_WORD} 1 {s}tomorrow 9am {t}urgent"
        )
    }

    /// Parses `args` (command word already stripped).
    ///
    /// Stops at the first problem; nothing is returned for a partly valid
    /// command.
    pub fn parse(&self, args: &str) -> CommandResult<EditCommand> {
        log::debug!("Parsing edit arguments: '{}'", args);

        let substituted = substitute_markers(args, &self.syntax, &self.normalizer)?;
        let arguments = tokenize(&substituted, &self.syntax.prefixes());

        let (index_field, name_field) = split_preamble(arguments.preamble());
        let index = index_field
            .and_then(parse_index)
            .ok_or_else(|| CommandError::MalformedCommand {
                usage: self.usage(),
            })?;

        let start = self.parse_date_patch(arguments.value(&self.syntax.start_prefix))?;
        let end = self.parse_date_patch(arguments.value(&self.syntax.end_prefix))?;
        let name = name_field.map(Name::parse).transpose()?;
        let tags = parse_tags_for_edit(arguments.all_values(&self.syntax.tag_prefix))?;

        let descriptor = EditTaskDescriptor {
            name,
            start,
            end,
            tags,
        };
        if !descriptor.is_any_field_edited() {
            return Err(CommandError::NoFieldsEdited { index });
        }

        log::debug!("Edit of task {} parsed: {:?}", index, descriptor);
        Ok(EditCommand::new(index, descriptor))
    }

    fn parse_date_patch(&self, value: Option<&str>) -> CommandResult<DatePatch> {
        match value {
            None => Ok(DatePatch::Keep),
            Some(raw) if self.syntax.is_removal_keyword(raw) => Ok(DatePatch::Remove),
            Some(raw) => self
                .normalizer
                .parse_task_date(raw)
                .map(DatePatch::Set)
                .ok_or_else(|| {
                    log::debug!("Rejected date value: '{}'", raw);
                    CommandError::InvalidDateFormat
                }),
        }
    }
}

/// Index word and the optional rest of the preamble as the name.
fn split_preamble(preamble: &str) -> (Option<&str>, Option<&str>) {
    let mut fields = preamble.trim().splitn(2, char::is_whitespace);
    let index = fields.next().filter(|f| !f.is_empty());
    let name = fields.next().map(str::trim).filter(|f| !f.is_empty());
    (index, name)
}

fn parse_index(field: &str) -> Option<NonZeroUsize> {
    if !field.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    field.parse::<NonZeroUsize>().ok()
}

/// No tag flag leaves tags alone; a single empty tag flag clears them.
fn parse_tags_for_edit(values: &[String]) -> CommandResult<Option<BTreeSet<Tag>>> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => values
            .iter()
            .map(|v| Tag::parse(v))
            .collect::<CommandResult<BTreeSet<Tag>>>()
            .map(Some),
    }
}
