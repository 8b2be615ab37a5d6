// End-to-end edits through the controller: parse, resolve index, apply, store.
use chrono::NaiveDate;
use potatodo::config::Config;
use potatodo::controller::TaskController;
use potatodo::datetime::DateTimeNormalizer;
use potatodo::error::CommandError;
use potatodo::model::{Name, Tag, Task, TaskType};

fn normalizer() -> DateTimeNormalizer {
    let reference = NaiveDate::from_ymd_opt(2017, 3, 10)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap();
    DateTimeNormalizer::with_reference(reference)
}

fn controller_with(names: &[&str]) -> TaskController {
    let mut controller = TaskController::from_config(&Config::default(), normalizer());
    for name in names {
        controller
            .store_mut()
            .add_task(Task::floating(Name::parse(name).unwrap()))
            .unwrap();
    }
    controller
}

fn first(controller: &TaskController) -> &Task {
    &controller.store().tasks()[0]
}

#[test]
fn test_floating_to_deadline_to_event_and_back() {
    let mut c = controller_with(&["buy milk"]);

    let msg = c.edit("1 e/11/11/2011 11am").unwrap();
    assert_eq!(msg, "Edited Task: buy milk End: 11 November 2011, 11:00 am");
    assert_eq!(first(&c).task_type(), TaskType::Deadline);

    c.edit("1 s/11/10/2011 9am").unwrap();
    assert_eq!(first(&c).task_type(), TaskType::Event);
    assert_eq!(
        first(&c).start_date().map(|d| d.to_string()).as_deref(),
        Some("10 November 2011, 09:00 am")
    );

    c.edit("1 s/remove").unwrap();
    assert_eq!(first(&c).task_type(), TaskType::Deadline);

    c.edit("1 e/remove").unwrap();
    assert_eq!(first(&c).task_type(), TaskType::Floating);
}

#[test]
fn test_removing_end_of_event_is_rejected() {
    let mut c = controller_with(&["conference"]);
    c.edit("1 from monday 9am to friday 5pm").unwrap();
    let before = first(&c).clone();
    assert!(before.is_event());

    assert_eq!(c.edit("1 e/remove"), Err(CommandError::StartDateWithoutEndDate));
    assert_eq!(first(&c), &before);
}

#[test]
fn test_start_alone_on_floating_task_is_rejected() {
    let mut c = controller_with(&["nap"]);
    assert_eq!(c.edit("1 s/tomorrow"), Err(CommandError::StartDateWithoutEndDate));
    assert!(first(&c).is_floating());
}

#[test]
fn test_renaming_onto_another_task_is_rejected() {
    let mut c = controller_with(&["alpha", "beta"]);

    let err = c.edit("2 alpha").unwrap_err();
    assert_eq!(err, CommandError::DuplicateTask);
    assert_eq!(err.to_string(), "This task already exists in the task manager");
    assert_eq!(c.store().tasks()[1].name().as_str(), "beta");

    // Renaming a task to its own name is not a duplicate
    assert!(c.edit("1 alpha").is_ok());
}

#[test]
fn test_index_beyond_view_is_rejected() {
    let mut c = controller_with(&["alpha", "beta"]);
    let err = c.edit("3 x").unwrap_err();
    assert_eq!(err, CommandError::InvalidTaskIndex);
    assert_eq!(err.to_string(), "The task index provided is invalid");
}

#[test]
fn test_index_refers_to_filtered_view() {
    let mut c = controller_with(&["alpha", "beta", "gamma"]);

    assert_eq!(c.find("gamma beta"), "2 tasks listed!");
    c.edit("2 t/home t/work").unwrap();

    let gamma = &c.store().tasks()[2];
    let expected: Vec<Tag> = ["home", "work"]
        .iter()
        .map(|t| Tag::parse(t).unwrap())
        .collect();
    assert_eq!(gamma.tags().iter().cloned().collect::<Vec<_>>(), expected);
    assert!(c.store().tasks()[1].tags().is_empty());

    c.edit("2 t/").unwrap();
    assert!(c.store().tasks()[2].tags().is_empty());
}

#[test]
fn test_list_reports_counts() {
    let mut c = controller_with(&["alpha", "beta"]);
    c.edit("1 by tomorrow").unwrap();

    assert_eq!(c.list("deadline"), "1 tasks listed!");
    assert_eq!(c.list("tomorrow"), "1 tasks listed!");
    assert_eq!(c.list("event"), "0 tasks listed!");
    assert_eq!(c.list(""), "2 tasks listed!");
}

#[test]
fn test_parse_errors_leave_store_alone() {
    let mut c = controller_with(&["alpha"]);
    let before = c.store().tasks().to_vec();

    assert!(matches!(
        c.edit("alpha"),
        Err(CommandError::MalformedCommand { .. })
    ));
    assert_eq!(c.edit("1 e/potato"), Err(CommandError::InvalidDateFormat));
    assert_eq!(c.store().tasks(), before.as_slice());
}
