//! Common test utilities for integration tests

use campus_mcp::GuideServerHandler;
use tempfile::NamedTempFile;

/// Access code every test handler is configured with
pub const TEST_ACCESS_CODE: &str = "test-code";

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (GuideServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = GuideServerHandler::new(
        temp_file.path().to_str().unwrap(),
        false,
        Some(TEST_ACCESS_CODE.to_string()),
    )
    .unwrap();
    (handler, temp_file)
}

/// Extract suggestion ID from suggest() response message
/// Response format: "Suggestion received with ID: <id> (status: pending)"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    // Fallback: try to get last whitespace-separated token without parentheses
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches(')')
        .to_string()
}

/// Add a small class directory through the handler
pub async fn add_sample_classes(handler: &GuideServerHandler) {
    handler
        .handle_add_class(
            TEST_ACCESS_CODE.to_string(),
            "CSE 110".to_string(),
            "Principles of Programming".to_string(),
            "Dr. Smith".to_string(),
            "Gentle intro to Java".to_string(),
            "QTRS".to_string(),
            "light_workload".to_string(),
            Some("optional".to_string()),
            Some("online".to_string()),
            None,
        )
        .await
        .unwrap();
    handler
        .handle_add_class(
            TEST_ACCESS_CODE.to_string(),
            "MAT 265".to_string(),
            "Calculus for Engineers I".to_string(),
            "Dr. Johnson".to_string(),
            "Weekly problem sets and three midterms".to_string(),
            "MATH".to_string(),
            "standard_pace".to_string(),
            None,
            Some("in_person".to_string()),
            None,
        )
        .await
        .unwrap();
}

/// Add a small place directory through the handler
pub async fn add_sample_places(handler: &GuideServerHandler) {
    handler
        .handle_add_place(
            TEST_ACCESS_CODE.to_string(),
            "Chick-fil-A MU".to_string(),
            Some("food".to_string()),
            Some("Memorial Union".to_string()),
            Some(true),
            None,
            None,
            Some("10% off on Tuesdays".to_string()),
        )
        .await
        .unwrap();
    handler
        .handle_add_place(
            TEST_ACCESS_CODE.to_string(),
            "Hayden Library".to_string(),
            Some("study".to_string()),
            Some("300 E Orange Mall".to_string()),
            None,
            Some(true),
            Some(true),
            None,
        )
        .await
        .unwrap();
}
