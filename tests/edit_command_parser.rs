// Tests for turning `edit` arguments into an edit descriptor.
use chrono::NaiveDate;
use potatodo::controller::EditCommand;
use potatodo::datetime::DateTimeNormalizer;
use potatodo::error::{CommandError, MESSAGE_INVALID_DATE_FORMAT};
use potatodo::model::{DatePatch, Name, Tag};
use potatodo::parser::{CliSyntax, EditCommandParser};
use rstest::rstest;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

// Friday 10 March 2017, 09:30
fn normalizer() -> DateTimeNormalizer {
    let reference = NaiveDate::from_ymd_opt(2017, 3, 10)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap();
    DateTimeNormalizer::with_reference(reference)
}

fn parser() -> EditCommandParser {
    EditCommandParser::new(CliSyntax::default(), normalizer())
}

fn parse(args: &str) -> Result<EditCommand, CommandError> {
    parser().parse(args)
}

fn set_date(patch: &DatePatch) -> String {
    match patch {
        DatePatch::Set(date) => date.to_string(),
        other => panic!("expected a date, got {:?}", other),
    }
}

fn tags(names: &[&str]) -> BTreeSet<Tag> {
    names.iter().map(|n| Tag::parse(n).unwrap()).collect()
}

#[test]
fn test_name_only_edit() {
    let cmd = parse("1 lol").unwrap();
    assert_eq!(cmd.index(), NonZeroUsize::new(1).unwrap());

    let d = cmd.descriptor();
    assert_eq!(d.name, Some(Name::parse("lol").unwrap()));
    assert_eq!(d.start, DatePatch::Keep);
    assert_eq!(d.end, DatePatch::Keep);
    assert_eq!(d.tags, None);
}

#[test]
fn test_start_date_is_normalized() {
    let cmd = parse("1 s/11/11/2011 11am").unwrap();
    let d = cmd.descriptor();
    assert_eq!(d.name, None);
    assert_eq!(set_date(&d.start), "11 November 2011, 11:00 am");
    assert_eq!(d.end, DatePatch::Keep);
}

#[test]
fn test_all_fields_together() {
    let cmd = parse("3 write report s/monday 9am e/tuesday 5pm t/work t/urgent").unwrap();
    let d = cmd.descriptor();
    assert_eq!(cmd.index().get(), 3);
    assert_eq!(d.name, Some(Name::parse("write report").unwrap()));
    assert_eq!(set_date(&d.start), "13 March 2017, 09:00 am");
    assert_eq!(set_date(&d.end), "14 March 2017, 05:00 pm");
    assert_eq!(d.tags, Some(tags(&["work", "urgent"])));
}

#[test]
fn test_markers_fill_date_fields() {
    let cmd = parse("2 dinner from tomorrow 7pm to tomorrow 10pm").unwrap();
    let d = cmd.descriptor();
    assert_eq!(d.name, Some(Name::parse("dinner").unwrap()));
    assert_eq!(set_date(&d.start), "11 March 2017, 07:00 pm");
    assert_eq!(set_date(&d.end), "11 March 2017, 10:00 pm");
}

#[test]
fn test_marker_words_without_dates_stay_in_name() {
    let cmd = parse("2 drive to the airport by friday").unwrap();
    let d = cmd.descriptor();
    assert_eq!(d.name, Some(Name::parse("drive to the airport").unwrap()));
    assert_eq!(set_date(&d.end), "17 March 2017, 09:30 am");
}

#[test]
fn test_last_repeated_date_flag_wins() {
    let cmd = parse("1 s/monday s/tuesday").unwrap();
    assert_eq!(set_date(&cmd.descriptor().start), "14 March 2017, 09:30 am");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("meeting")]
#[case("0 lol")]
#[case("-1 lol")]
#[case("+1 lol")]
#[case("1.5 lol")]
#[case("s/tomorrow")]
fn test_bad_index_is_malformed(#[case] args: &str) {
    match parse(args) {
        Err(CommandError::MalformedCommand { usage }) => {
            assert_eq!(usage, parser().usage());
        }
        other => panic!("'{}' gave {:?}", args, other),
    }
}

#[test]
fn test_malformed_message_carries_usage() {
    let err = parse("meeting").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Invalid command format! \n"));
    assert!(message.contains("edit: Edits the task"));
}

#[test]
fn test_index_alone_edits_nothing() {
    let err = parse("1").unwrap_err();
    assert_eq!(
        err,
        CommandError::NoFieldsEdited {
            index: NonZeroUsize::new(1).unwrap()
        }
    );
    assert_eq!(
        err.to_string(),
        "At least one field to edit must be provided for task 1."
    );
}

#[rstest]
#[case("remove")]
#[case("Remove")]
#[case("REMOVE")]
#[case(" remove ")]
#[case("/remove")]
fn test_removal_keyword_clears_dates(#[case] keyword: &str) {
    let start = parse(&format!("1 s/{}", keyword)).unwrap();
    assert_eq!(start.descriptor().start, DatePatch::Remove);
    assert_eq!(start.descriptor().end, DatePatch::Keep);

    let end = parse(&format!("1 e/{}", keyword)).unwrap();
    assert_eq!(end.descriptor().end, DatePatch::Remove);
}

#[test]
fn test_empty_tag_flag_clears_tags() {
    let cmd = parse("1 t/").unwrap();
    assert_eq!(cmd.descriptor().tags, Some(BTreeSet::new()));
    assert!(cmd.descriptor().is_any_field_edited());
}

#[test]
fn test_one_bad_tag_rejects_the_command() {
    assert_eq!(
        parse("1 t/home t/#urgent t/work"),
        Err(CommandError::InvalidTagName)
    );
}

#[test]
fn test_repeated_markers_rejected() {
    assert_eq!(
        parse("1 trip from monday from tuesday"),
        Err(CommandError::DuplicateDateMarker)
    );
    assert_eq!(
        parse("1 trip by monday due tuesday"),
        Err(CommandError::DuplicateDateMarker)
    );
}

#[test]
fn test_unreadable_dates_rejected() {
    for args in ["1 s/now e/potato", "1 s/!@#$%^", "1 e/"] {
        let err = parse(args).unwrap_err();
        assert_eq!(err, CommandError::InvalidDateFormat, "'{}'", args);
        assert_eq!(err.to_string(), MESSAGE_INVALID_DATE_FORMAT);
    }
}

#[test]
fn test_out_of_range_dates_rejected() {
    assert_eq!(parse("1 e/in 300000 years"), Err(CommandError::InvalidDateFormat));
    assert_eq!(parse("1 s/99999999999d"), Err(CommandError::InvalidDateFormat));

    // After a marker an out-of-range span is not a date, so the words stay in the name
    let cmd = parse("1 report by 9999999y").unwrap();
    assert_eq!(
        cmd.descriptor().name,
        Some(Name::parse("report by 9999999y").unwrap())
    );
    assert_eq!(cmd.descriptor().end, DatePatch::Keep);
}

#[test]
fn test_tonight_marker() {
    let cmd = parse("2 dinner from tonight to tonight 11pm").unwrap();
    let d = cmd.descriptor();
    assert_eq!(d.name, Some(Name::parse("dinner").unwrap()));
    assert_eq!(set_date(&d.start), "10 March 2017, 08:00 pm");
    assert_eq!(set_date(&d.end), "10 March 2017, 11:00 pm");
}

#[test]
fn test_custom_syntax() {
    let syntax = CliSyntax {
        tag_prefix: "#".to_string(),
        end_markers: vec!["before".to_string()],
        removal_keyword: "clear".to_string(),
        ..Default::default()
    };
    let parser = EditCommandParser::new(syntax, normalizer());

    let cmd = parser.parse("4 gym before friday #health").unwrap();
    let d = cmd.descriptor();
    assert_eq!(d.name, Some(Name::parse("gym").unwrap()));
    assert_eq!(set_date(&d.end), "17 March 2017, 09:30 am");
    assert_eq!(d.tags, Some(tags(&["health"])));

    assert_eq!(parser.parse("4 s/clear").unwrap().descriptor().start, DatePatch::Remove);
    // "by" is no longer a marker, so it stays in the name
    let cmd = parser.parse("4 pay rent by friday").unwrap();
    assert_eq!(cmd.descriptor().name, Some(Name::parse("pay rent by friday").unwrap()));
    assert_eq!(cmd.descriptor().end, DatePatch::Keep);
}
