//! Academic calendar: the deadline catalog, next-deadline selection,
//! semester grouping, and countdown math.
//!
//! The catalog is a fixed list for the academic year, shared by the
//! calendar view, the countdown tool, and the terminal clock. It is built
//! once on first access and validated then: a malformed date or two
//! entries on the same instant is a bug in the list itself, so
//! construction panics rather than letting selection order drift.

use chrono::{Datelike, Local, NaiveDateTime};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Academic year the deadline catalog covers
pub const ACADEMIC_YEAR: i32 = 2026;

/// Urgency class of a deadline, used for display emphasis
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineKind {
    info,
    warning,
    urgent,
    critical,
    fun,
}

/// One entry in the academic calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    /// Display name, shown verbatim
    pub label: String,
    /// Local date-time the deadline falls on
    pub when: NaiveDateTime,
    pub kind: DeadlineKind,
}

/// Raw catalog data: label, local date-time, kind
///
/// Kept in the registrar's published order, which is not sorted by
/// instant (the tuition deadline falls earlier in the day than the drop
/// deadline listed before it).
const RAW_DEADLINES: &[(&str, &str, DeadlineKind)] = &[
    // --- Spring 2026 ---
    ("Classes Begin 🚀", "2026-01-12T08:00:00", DeadlineKind::info),
    (
        "Last Day to Add Classes",
        "2026-01-18T23:59:00",
        DeadlineKind::warning,
    ),
    (
        "Drop Deadline (100% Refund) 💸",
        "2026-01-25T23:59:00",
        DeadlineKind::urgent,
    ),
    (
        "Tuition Payment Deadline",
        "2026-01-25T17:00:00",
        DeadlineKind::critical,
    ),
    ("Spring Break! 🌴", "2026-03-08T00:00:00", DeadlineKind::fun),
    (
        "Course Withdrawal Deadline (W Grade) ⚠️",
        "2026-04-05T23:59:00",
        DeadlineKind::critical,
    ),
    ("Classes End", "2026-05-01T23:59:00", DeadlineKind::warning),
    (
        "Finals Week Begins 📝",
        "2026-05-04T00:00:00",
        DeadlineKind::urgent,
    ),
    (
        "Spring Graduation 🎓",
        "2026-05-11T10:00:00",
        DeadlineKind::fun,
    ),
    // --- Summer 2026 ---
    (
        "Summer Session C Begins ☀️",
        "2026-05-18T08:00:00",
        DeadlineKind::info,
    ),
    (
        "Summer Drop Deadline",
        "2026-05-22T23:59:00",
        DeadlineKind::urgent,
    ),
    (
        "Summer Withdrawal Deadline",
        "2026-06-07T23:59:00",
        DeadlineKind::critical,
    ),
    (
        "Summer Classes End",
        "2026-07-10T23:59:00",
        DeadlineKind::warning,
    ),
    // --- Fall 2026 ---
    (
        "Fall Classes Begin 🍂",
        "2026-08-20T08:00:00",
        DeadlineKind::info,
    ),
    (
        "Fall Drop Deadline (Refund)",
        "2026-09-02T23:59:00",
        DeadlineKind::urgent,
    ),
    ("Fall Break 🎃", "2026-10-10T00:00:00", DeadlineKind::fun),
    (
        "Fall Withdrawal Deadline",
        "2026-11-04T23:59:00",
        DeadlineKind::critical,
    ),
    (
        "Thanksgiving Break 🦃",
        "2026-11-26T00:00:00",
        DeadlineKind::fun,
    ),
    (
        "Fall Finals Week",
        "2026-12-07T00:00:00",
        DeadlineKind::urgent,
    ),
];

static DEADLINES: Lazy<Vec<Deadline>> = Lazy::new(build_catalog);

fn build_catalog() -> Vec<Deadline> {
    let mut seen = HashSet::new();
    RAW_DEADLINES
        .iter()
        .map(|&(label, date, kind)| {
            let when = match NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S") {
                Ok(when) => when,
                Err(e) => panic!("Invalid deadline date '{}' for '{}': {}", date, label, e),
            };
            // Selection and the next-marker identify entries by instant
            if !seen.insert(when) {
                panic!("Duplicate deadline instant '{}' for '{}'", date, label);
            }
            Deadline {
                label: label.to_string(),
                when,
                kind,
            }
        })
        .collect()
}

/// The full deadline catalog in published order
pub fn deadlines() -> &'static [Deadline] {
    &DEADLINES
}

/// Get the current local date-time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Find the next upcoming deadline
///
/// Returns the entry with the smallest instant strictly after `now`, or
/// None once every entry has passed.
pub fn next_deadline(catalog: &[Deadline], now: NaiveDateTime) -> Option<&Deadline> {
    catalog
        .iter()
        .filter(|d| d.when > now)
        .min_by_key(|d| d.when)
}

/// Semester a deadline belongs to
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Semester {
    spring,
    summer,
    fall,
}

impl Semester {
    pub fn label(&self) -> &'static str {
        match self {
            Semester::spring => "Spring",
            Semester::summer => "Summer",
            Semester::fall => "Fall",
        }
    }
}

/// Classify an instant into a semester by calendar month
///
/// January through May is spring and May through August is summer; the
/// ranges overlap on May and the first match wins, so May always lands
/// in spring. Everything else is fall.
pub fn semester_of(when: NaiveDateTime) -> Semester {
    let month = when.month();
    if (1..=5).contains(&month) {
        Semester::spring
    } else if (5..=8).contains(&month) {
        Semester::summer
    } else {
        Semester::fall
    }
}

/// A catalog entry annotated for display
#[derive(Debug, Clone)]
pub struct AnnotatedDeadline<'a> {
    pub deadline: &'a Deadline,
    pub semester: Semester,
    /// Whether the instant is already behind `now`
    pub is_past: bool,
    /// Whether this entry is the one the selector currently points at.
    /// Entries are identified by instant, so at most one is marked.
    pub is_next: bool,
}

/// The catalog grouped into semester sections
#[derive(Debug, Clone)]
pub struct GroupedDeadlines<'a> {
    pub spring: Vec<AnnotatedDeadline<'a>>,
    pub summer: Vec<AnnotatedDeadline<'a>>,
    pub fall: Vec<AnnotatedDeadline<'a>>,
}

/// Annotate and group the catalog for the calendar view
///
/// Entries keep their published order inside each section. The catalog
/// itself is never reordered or mutated; annotations are recomputed on
/// every call.
pub fn grouped_deadlines(catalog: &[Deadline], now: NaiveDateTime) -> GroupedDeadlines<'_> {
    let next = next_deadline(catalog, now).map(|d| d.when);

    let mut grouped = GroupedDeadlines {
        spring: Vec::new(),
        summer: Vec::new(),
        fall: Vec::new(),
    };

    for deadline in catalog {
        let entry = AnnotatedDeadline {
            deadline,
            semester: semester_of(deadline.when),
            is_past: deadline.when < now,
            is_next: next == Some(deadline.when),
        };
        match entry.semester {
            Semester::spring => grouped.spring.push(entry),
            Semester::summer => grouped.summer.push(entry),
            Semester::fall => grouped.fall.push(entry),
        }
    }

    grouped
}

/// Time remaining until a deadline, decomposed for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub const ZERO: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == TimeLeft::ZERO
    }
}

/// Decompose the remaining time until `target` into days, hours, minutes,
/// and seconds
///
/// Works on the floor of the exact difference in whole seconds. Hours,
/// minutes, and seconds stay inside their carrying ranges; days absorb
/// the rest. A target at or before `now` yields all zeros.
pub fn time_left(target: NaiveDateTime, now: NaiveDateTime) -> TimeLeft {
    let total = (target - now).num_seconds();
    if total <= 0 {
        return TimeLeft::ZERO;
    }

    TimeLeft {
        days: total / 86_400,
        hours: total / 3_600 % 24,
        minutes: total / 60 % 60,
        seconds: total % 60,
    }
}
