//! Validation helper functions for the guide server
//!
//! This module contains argument parsing for the directory filters and
//! admin operations, plus the shared access-code gate.

use crate::guide::{Attendance, Difficulty, ExamFormat, GenEd, PlaceCategory, SuggestionKind};
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate a difficulty parameter
pub fn parse_difficulty(s: &str) -> McpResult<Difficulty> {
    s.parse::<Difficulty>().map_err(invalid_params)
}

/// Parse and validate a gen ed category parameter
pub fn parse_gen_ed(s: &str) -> McpResult<GenEd> {
    s.parse::<GenEd>().map_err(invalid_params)
}

/// Parse and validate an attendance parameter
pub fn parse_attendance(s: &str) -> McpResult<Attendance> {
    s.parse::<Attendance>().map_err(invalid_params)
}

/// Parse and validate an exam format parameter
pub fn parse_exam_format(s: &str) -> McpResult<ExamFormat> {
    s.parse::<ExamFormat>().map_err(invalid_params)
}

/// Parse and validate a place category parameter
pub fn parse_category(s: &str) -> McpResult<PlaceCategory> {
    s.parse::<PlaceCategory>().map_err(invalid_params)
}

/// Parse and validate a suggestion kind parameter
pub fn parse_suggestion_kind(s: &str) -> McpResult<SuggestionKind> {
    s.parse::<SuggestionKind>().map_err(invalid_params)
}

/// Normalize a course code to its canonical stored form
///
/// Codes are compared and stored trimmed and uppercased, so "cse 110"
/// and "CSE 110" name the same directory entry.
pub fn normalize_course_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Check a supplied access code against the configured one
///
/// This is a plain shared-string comparison, a placeholder until real
/// accounts exist; it is not a security boundary. With no code
/// configured the gate fails closed on every check.
pub fn verify_access(configured: Option<&str>, supplied: &str) -> bool {
    match configured {
        Some(secret) if !secret.is_empty() => supplied == secret,
        _ => {
            log::warn!("Access check failed: no access code is configured");
            false
        }
    }
}
