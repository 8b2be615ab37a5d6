// File: src/datetime.rs
/*! Natural-language date normalization.

The grammar that turns "next friday 2pm" into a calendar instant lives behind
the [`DateInterpreter`] trait so it can be swapped for a deterministic one.
[`DateTimeNormalizer`] is what the rest of the crate talks to: it picks the
first instant of the first reading and renders instants in the one canonical
pattern used for display and for same-day comparison.
*/

use crate::model::TaskDate;
use chrono::{
    DateTime, Datelike, Duration, Local, Month, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Weekday,
};
use std::fmt;
use std::sync::Arc;

/// A calendar instant in the ambient time zone.
pub type Instant = DateTime<Local>;

/// `11 November 2011, 11:00 am`
pub const DATE_DISPLAY_FORMAT: &str = "%d %B %Y, %I:%M %P";

/// One way of reading a piece of text as dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateReading {
    pub instants: Vec<Instant>,
}

/// Natural-language date grammar.
///
/// Implementations return their readings best first; an empty vector means
/// the text is not a date.
pub trait DateInterpreter: Send + Sync + fmt::Debug {
    fn interpret(&self, text: &str) -> Vec<DateReading>;
}

/// Default interpreter built on chrono.
///
/// Relative words ("tomorrow", "next week", "in 2 days") resolve against the
/// reference clock, which is `Local::now()` unless one was pinned.
#[derive(Debug, Clone, Default)]
pub struct ChronoInterpreter {
    reference: Option<NaiveDateTime>,
}

impl ChronoInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference(reference: NaiveDateTime) -> Self {
        Self {
            reference: Some(reference),
        }
    }

    fn now(&self) -> NaiveDateTime {
        self.reference
            .unwrap_or_else(|| Local::now().naive_local())
    }
}

impl DateInterpreter for ChronoInterpreter {
    fn interpret(&self, text: &str) -> Vec<DateReading> {
        let cleaned = text.replace(',', " ").to_lowercase();
        let words: Vec<&str> = cleaned.split_whitespace().collect();

        resolve(&words, self.now())
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
            .map(|instant| {
                vec![DateReading {
                    instants: vec![instant],
                }]
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct DateTimeNormalizer {
    interpreter: Arc<dyn DateInterpreter>,
}

impl DateTimeNormalizer {
    pub fn new(interpreter: Arc<dyn DateInterpreter>) -> Self {
        Self { interpreter }
    }

    /// Normalizer over a [`ChronoInterpreter`] pinned to `reference`.
    pub fn with_reference(reference: NaiveDateTime) -> Self {
        Self::new(Arc::new(ChronoInterpreter::with_reference(reference)))
    }

    /// First instant of the first reading, if the text reads as a date at all.
    pub fn parse(&self, text: &str) -> Option<Instant> {
        self.interpreter
            .interpret(text)
            .into_iter()
            .next()?
            .instants
            .into_iter()
            .next()
    }

    pub fn is_valid_date_string(&self, text: &str) -> bool {
        self.parse(text).is_some()
    }

    pub fn parse_task_date(&self, text: &str) -> Option<TaskDate> {
        self.parse(text).map(TaskDate::new)
    }

    pub fn format(instant: &Instant) -> String {
        instant.format(DATE_DISPLAY_FORMAT).to_string()
    }
}

impl Default for DateTimeNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(ChronoInterpreter::new()))
    }
}

// --- GRAMMAR ---

/// Time of day "tonight" means when no time is given.
const TONIGHT_HOUR: u32 = 20;

fn resolve(words: &[&str], now: NaiveDateTime) -> Option<NaiveDateTime> {
    if words == ["now"] {
        return Some(now);
    }

    // Date first, optionally followed by a time ("tomorrow 5pm")
    if let Some((date, used)) = parse_date_phrase(words, now.date()) {
        let rest = &words[used..];
        if rest.is_empty() {
            let time = match words.first() {
                Some(&"tonight") => NaiveTime::from_hms_opt(TONIGHT_HOUR, 0, 0)?,
                _ => now.time(),
            };
            return Some(date.and_time(time));
        }
        return parse_time_phrase(rest).map(|time| date.and_time(time));
    }

    // Time first, optionally followed by a date ("5pm tomorrow")
    let (time, used) = parse_time_prefix(words)?;
    let rest = &words[used..];
    if rest.is_empty() {
        return Some(now.date().and_time(time));
    }
    let (date, date_used) = parse_date_phrase(rest, now.date())?;
    (date_used == rest.len()).then(|| date.and_time(time))
}

fn parse_date_phrase(words: &[&str], today: NaiveDate) -> Option<(NaiveDate, usize)> {
    let first = *words.first()?;
    match first {
        "today" | "tonight" => return Some((today, 1)),
        "tomorrow" => return add_days(today, 1).map(|d| (d, 1)),
        "yesterday" => return add_days(today, -1).map(|d| (d, 1)),
        "next" => {
            let unit = words.get(1)?;
            return parse_next_date(unit, today).map(|d| (d, 2));
        }
        "in" => {
            let (date, used) = parse_offset(&words[1..], today)?;
            return Some((date, used + 1));
        }
        _ => {}
    }

    if let Ok(weekday) = first.parse::<Weekday>() {
        return next_weekday(today, weekday).map(|d| (d, 1));
    }
    if let Ok(date) = NaiveDate::parse_from_str(first, "%Y-%m-%d") {
        return Some((date, 1));
    }
    if let Some(date) = parse_slash_date(first, today) {
        return Some((date, 1));
    }
    parse_calendar_date(words, today).or_else(|| parse_offset(words, today))
}

fn parse_next_date(unit: &str, today: NaiveDate) -> Option<NaiveDate> {
    match unit {
        "week" => add_days(today, 7),
        "month" => add_days(today, 30),
        "year" => add_days(today, 365),
        _ => next_weekday(today, unit.parse::<Weekday>().ok()?),
    }
}

/// "2 days", "two weeks", "3d"
fn parse_offset(words: &[&str], today: NaiveDate) -> Option<(NaiveDate, usize)> {
    let first = *words.first()?;
    if let Some(unit) = words.get(1)
        && let Some(amount) = parse_english_number(first)
        && let Some(days) = unit_days(unit)
    {
        return add_days(today, amount.checked_mul(days)?).map(|d| (d, 2));
    }

    let idx = first.find(|c: char| !c.is_ascii_digit())?;
    let (amount, unit) = first.split_at(idx);
    let days = unit_days(unit)?;
    let amount = amount.parse::<i64>().ok()?;
    add_days(today, amount.checked_mul(days)?).map(|d| (d, 1))
}

/// `None` when the result falls outside chrono's calendar.
fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

fn unit_days(unit: &str) -> Option<i64> {
    match unit {
        "d" | "day" | "days" => Some(1),
        "w" | "week" | "weeks" => Some(7),
        "mo" | "month" | "months" => Some(30),
        "y" | "year" | "years" => Some(365),
        _ => None,
    }
}

fn parse_english_number(s: &str) -> Option<i64> {
    match s {
        "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        "six" => Some(6),
        "seven" => Some(7),
        "eight" => Some(8),
        "nine" => Some(9),
        "ten" => Some(10),
        "eleven" => Some(11),
        "twelve" => Some(12),
        _ => s.parse::<i64>().ok(),
    }
}

fn next_weekday(from: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let current = i64::from(from.weekday().num_days_from_monday());
    let wanted = i64::from(target.num_days_from_monday());
    let ahead = (wanted - current).rem_euclid(7);
    add_days(from, if ahead == 0 { 7 } else { ahead })
}

/// US ordering: month first. "11/11/2011", "1/2/23", "3/14"
fn parse_slash_date(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.split('/').collect();
    let (month, day, year) = match parts.as_slice() {
        [m, d] => (*m, *d, today.year()),
        [m, d, y] => (*m, *d, parse_year(y)?),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

fn parse_year(s: &str) -> Option<i32> {
    let year = s.parse::<i32>().ok()?;
    match s.len() {
        2 => Some(2000 + year),
        4 => Some(year),
        _ => None,
    }
}

/// "11 November 2011", "november 11th", "3 mar"
fn parse_calendar_date(words: &[&str], today: NaiveDate) -> Option<(NaiveDate, usize)> {
    let [first, second, rest @ ..] = words else {
        return None;
    };
    let (day, month) = match parse_month(second) {
        Some(month) => (parse_day(first)?, month),
        None => (parse_day(second)?, parse_month(first)?),
    };
    let explicit_year = rest
        .first()
        .filter(|y| y.len() == 4)
        .and_then(|y| y.parse::<i32>().ok());
    let (year, used) = match explicit_year {
        Some(year) => (year, 3),
        None => (today.year(), 2),
    };
    NaiveDate::from_ymd_opt(year, month, day).map(|d| (d, used))
}

fn parse_month(s: &str) -> Option<u32> {
    s.parse::<Month>().ok().map(|m| m.number_from_month())
}

fn parse_day(s: &str) -> Option<u32> {
    let digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix))
        .unwrap_or(s);
    digits.parse::<u32>().ok().filter(|d| (1..=31).contains(d))
}

/// A time that must use up every remaining word.
fn parse_time_phrase(words: &[&str]) -> Option<NaiveTime> {
    parse_time_prefix(words)
        .filter(|(_, used)| *used == words.len())
        .map(|(time, _)| time)
}

fn parse_time_prefix(words: &[&str]) -> Option<(NaiveTime, usize)> {
    let (skipped, words) = match words {
        ["at", rest @ ..] => (1, rest),
        _ => (0, words),
    };
    let first = *words.first()?;
    let (time, used) = match first {
        "noon" => (NaiveTime::from_hms_opt(12, 0, 0)?, 1),
        "midnight" => (NaiveTime::MIN, 1),
        _ => {
            if let Some(&meridiem) = words.get(1)
                && matches!(meridiem, "am" | "pm")
                && let Some(time) = parse_clock(first, Some(meridiem == "pm"))
            {
                (time, 2)
            } else {
                (parse_time_string(first)?, 1)
            }
        }
    };
    Some((time, used + skipped))
}

fn parse_time_string(s: &str) -> Option<NaiveTime> {
    if let Some(stripped) = s.strip_suffix("am") {
        return parse_clock(stripped, Some(false));
    }
    if let Some(stripped) = s.strip_suffix("pm") {
        return parse_clock(stripped, Some(true));
    }
    if s.contains([':', '.']) {
        return parse_clock(s, None);
    }
    None
}

/// `is_pm` is `None` for 24h input.
fn parse_clock(s: &str, is_pm: Option<bool>) -> Option<NaiveTime> {
    let (h, m) = match s.split_once([':', '.']) {
        Some((h_str, m_str)) => (h_str.parse::<u32>().ok()?, m_str.parse::<u32>().ok()?),
        None => (s.parse::<u32>().ok()?, 0),
    };
    match is_pm {
        Some(pm) => {
            if !(1..=12).contains(&h) || m > 59 {
                return None;
            }
            let h_24 = match (h, pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, true) => h + 12,
                (h, false) => h,
            };
            NaiveTime::from_hms_opt(h_24, m, 0)
        }
        None => NaiveTime::from_hms_opt(h, m, 0),
    }
}
