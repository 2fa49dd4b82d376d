//! Formatting helper functions for the guide server
//!
//! This module renders directories, the calendar, and countdowns as the
//! plain text returned by the MCP tools and the terminal clock.

use crate::calendar::{ACADEMIC_YEAR, AnnotatedDeadline, Deadline, GroupedDeadlines, TimeLeft};
use crate::guide::{Class, Place, Suggestion};

/// Format the class directory into a display string
///
/// # Arguments
/// * `classes` - Classes that survived filtering, in directory order
/// * `directory_empty` - Whether the directory had no entries before
///   filtering, which reads differently from filters matching nothing
pub fn format_classes(classes: Vec<Class>, directory_empty: bool) -> String {
    if classes.is_empty() {
        return if directory_empty {
            "No classes in the guide yet. Check back soon!".to_string()
        } else {
            "No classes match the current filters".to_string()
        };
    }

    let mut result = format!("Found {} class(es):\n\n", classes.len());
    for class in classes {
        result.push_str(&format!(
            "- [{}] {} (professor: {})\n",
            class.code, class.name, class.professor
        ));
        result.push_str(&format!(
            "  Gen ed: {:?}, Difficulty: {}, Attendance: {}, Exams: {}\n",
            class.gen_ed,
            class.difficulty.label(),
            class.attendance.label(),
            class.exams.label()
        ));
        result.push_str(&format!("  Description: {}\n", class.description));
        if let Some(ref link) = class.rmp_link {
            result.push_str(&format!("  RMP: {}\n", link));
        }
    }

    result
}

/// Format the place directory into a display string
pub fn format_places(places: Vec<Place>, directory_empty: bool) -> String {
    if places.is_empty() {
        return if directory_empty {
            "No places in the guide yet. Check back soon!".to_string()
        } else {
            "No places match the current filters".to_string()
        };
    }

    let mut result = format!("Found {} place(s):\n\n", places.len());
    for place in places {
        match place.category {
            Some(category) => {
                result.push_str(&format!(
                    "- {} (category: {})\n",
                    place.name,
                    category.label()
                ));
            }
            None => result.push_str(&format!("- {}\n", place.name)),
        }
        if let Some(ref location) = place.location {
            result.push_str(&format!("  Location: {}\n", location));
        }
        let perks = place_perks(&place);
        if !perks.is_empty() {
            result.push_str(&format!("  Perks: {}\n", perks.join(", ")));
        }
        if let Some(ref deals) = place.deals {
            result.push_str(&format!("  Deals: {}\n", deals));
        }
    }

    result
}

fn place_perks(place: &Place) -> Vec<&'static str> {
    let mut perks = Vec::new();
    if place.flags.accepts_mng {
        perks.push("accepts M&G");
    }
    if place.flags.is_late_night {
        perks.push("late night");
    }
    if place.flags.is_budget {
        perks.push("budget friendly");
    }
    perks
}

/// Format the suggestion inbox into a display string
///
/// # Arguments
/// * `suggestions` - Suggestions in the order they should appear
///   (callers pass newest first)
pub fn format_suggestions(suggestions: Vec<Suggestion>) -> String {
    if suggestions.is_empty() {
        return "No suggestions in the inbox".to_string();
    }

    let mut result = format!("Found {} suggestion(s):\n\n", suggestions.len());
    for suggestion in suggestions {
        result.push_str(&format!(
            "- [{}] {} (from: {}, status: {:?})\n",
            suggestion.id, suggestion.content, suggestion.username, suggestion.status
        ));
        if let Some(kind) = suggestion.kind {
            result.push_str(&format!("  Kind: {:?}\n", kind));
        }
        if let Some(ref code) = suggestion.course_code {
            match suggestion.professor {
                Some(ref professor) => {
                    result.push_str(&format!("  Course: {} ({})\n", code, professor));
                }
                None => result.push_str(&format!("  Course: {}\n", code)),
            }
        }
        if let Some(ref reason) = suggestion.reason {
            result.push_str(&format!("  Reason: {}\n", reason));
        }
        result.push_str(&format!("  Submitted: {}\n", suggestion.created_at));
    }

    result
}

/// Format the grouped academic calendar into a display string
///
/// Past entries are tagged and the single upcoming entry the countdown
/// points at is marked as next.
pub fn format_calendar(grouped: &GroupedDeadlines<'_>) -> String {
    let mut result = format!("Academic Calendar {}\n", ACADEMIC_YEAR);

    format_semester_section(&mut result, "Spring", &grouped.spring);
    format_semester_section(&mut result, "Summer", &grouped.summer);
    format_semester_section(&mut result, "Fall", &grouped.fall);

    result
}

fn format_semester_section(result: &mut String, name: &str, entries: &[AnnotatedDeadline<'_>]) {
    if entries.is_empty() {
        return;
    }

    result.push_str(&format!("\n{} {}:\n", name, ACADEMIC_YEAR));
    for entry in entries {
        let mut line = format!(
            "  - {} [{:?}] {}",
            entry.deadline.label,
            entry.deadline.kind,
            entry.deadline.when.format("%Y-%m-%d %H:%M")
        );
        if entry.is_next {
            line.push_str(" (next up)");
        } else if entry.is_past {
            line.push_str(" (passed)");
        }
        line.push('\n');
        result.push_str(&line);
    }
}

/// Format the next-deadline countdown for the countdown tool
pub fn format_countdown(next: Option<(&Deadline, TimeLeft)>) -> String {
    match next {
        Some((deadline, left)) => format!(
            "Next deadline: {}\nWhen: {}\nTime left: {}d {:02}h {:02}m {:02}s",
            deadline.label,
            deadline.when.format("%A, %B %-d, %Y at %H:%M"),
            left.days,
            left.hours,
            left.minutes,
            left.seconds
        ),
        None => "No upcoming deadlines. The academic year is over!".to_string(),
    }
}

/// Format a single countdown line for the terminal clock
pub fn format_countdown_line(deadline: &Deadline, left: &TimeLeft) -> String {
    format!(
        "{}d {:02}:{:02}:{:02} until {}",
        left.days, left.hours, left.minutes, left.seconds, deadline.label
    )
}
