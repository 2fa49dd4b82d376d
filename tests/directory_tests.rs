//! Class and place directory browse/filter tests
mod common;

use common::*;

#[tokio::test]
async fn test_classes_empty_directory() {
    let (handler, _temp_file) = get_test_handler();

    let result = handler.handle_classes(None, None, None).await.unwrap();
    assert_eq!(result, "No classes in the guide yet. Check back soon!");
}

#[tokio::test]
async fn test_classes_lists_all_without_filters() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_classes(&handler).await;

    let result = handler.handle_classes(None, None, None).await.unwrap();
    assert!(result.contains("Found 2 class(es):"));
    assert!(result.contains("- [CSE 110] Principles of Programming (professor: Dr. Smith)"));
    assert!(result.contains("- [MAT 265] Calculus for Engineers I (professor: Dr. Johnson)"));
    assert!(result.contains("Gen ed: QTRS, Difficulty: Light Workload, Attendance: Optional, Exams: Online"));
}

#[tokio::test]
async fn test_classes_listed_in_code_order() {
    let (handler, _temp_file) = get_test_handler();

    // Insert out of order; the directory keeps course-code order
    handler
        .handle_add_class(
            TEST_ACCESS_CODE.to_string(),
            "MAT 265".to_string(),
            "Calculus for Engineers I".to_string(),
            "Dr. Johnson".to_string(),
            "Weekly problem sets".to_string(),
            "MATH".to_string(),
            "standard_pace".to_string(),
            None,
            None,
            None,
        )
        .await
        .unwrap();
    handler
        .handle_add_class(
            TEST_ACCESS_CODE.to_string(),
            "CSE 110".to_string(),
            "Principles of Programming".to_string(),
            "Dr. Smith".to_string(),
            "Gentle intro to Java".to_string(),
            "QTRS".to_string(),
            "light_workload".to_string(),
            None,
            None,
            None,
        )
        .await
        .unwrap();

    let result = handler.handle_classes(None, None, None).await.unwrap();
    let cse = result.find("[CSE 110]").unwrap();
    let mat = result.find("[MAT 265]").unwrap();
    assert!(cse < mat);
}

#[tokio::test]
async fn test_class_search_matches_code() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_classes(&handler).await;

    let result = handler
        .handle_classes(Some("CSE".to_string()), None, None)
        .await
        .unwrap();
    assert!(result.contains("CSE 110"));
    assert!(!result.contains("MAT 265"));
}

#[tokio::test]
async fn test_class_search_is_case_insensitive() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_classes(&handler).await;

    let result = handler
        .handle_classes(Some("dr. smith".to_string()), None, None)
        .await
        .unwrap();
    assert!(result.contains("CSE 110"));
    assert!(!result.contains("MAT 265"));
}

#[tokio::test]
async fn test_class_search_matches_description() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_classes(&handler).await;

    let result = handler
        .handle_classes(Some("problem sets".to_string()), None, None)
        .await
        .unwrap();
    assert!(result.contains("MAT 265"));
    assert!(!result.contains("CSE 110"));
}

#[tokio::test]
async fn test_class_difficulty_filter() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_classes(&handler).await;

    let result = handler
        .handle_classes(None, Some("light_workload".to_string()), None)
        .await
        .unwrap();
    assert!(result.contains("CSE 110"));
    assert!(!result.contains("MAT 265"));
}

#[tokio::test]
async fn test_class_gen_ed_filter() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_classes(&handler).await;

    let result = handler
        .handle_classes(None, None, Some("MATH".to_string()))
        .await
        .unwrap();
    assert!(result.contains("MAT 265"));
    assert!(!result.contains("CSE 110"));
}

#[tokio::test]
async fn test_class_filters_combine() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_classes(&handler).await;

    // Search matches both, difficulty narrows to one
    let result = handler
        .handle_classes(Some("dr.".to_string()), Some("standard_pace".to_string()), None)
        .await
        .unwrap();
    assert!(result.contains("MAT 265"));
    assert!(!result.contains("CSE 110"));
}

#[tokio::test]
async fn test_class_no_match_message() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_classes(&handler).await;

    let result = handler
        .handle_classes(Some("underwater basket weaving".to_string()), None, None)
        .await
        .unwrap();
    assert_eq!(result, "No classes match the current filters");
}

#[tokio::test]
async fn test_class_invalid_difficulty_filter() {
    let (handler, _temp_file) = get_test_handler();

    let result = handler
        .handle_classes(None, Some("impossible".to_string()), None)
        .await;
    assert!(result.is_err());
    let message = result.unwrap_err().to_error_object(true).message;
    assert!(message.contains("Invalid difficulty 'impossible'"));
    assert!(message.contains("light_workload"));
}

#[tokio::test]
async fn test_class_invalid_gen_ed_filter() {
    let (handler, _temp_file) = get_test_handler();

    let result = handler
        .handle_classes(None, None, Some("XXXX".to_string()))
        .await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_error_object(true).message.contains("Invalid gen ed category 'XXXX'"));
}

#[tokio::test]
async fn test_places_empty_directory() {
    let (handler, _temp_file) = get_test_handler();

    let result = handler
        .handle_places(None, None, None, None, None)
        .await
        .unwrap();
    assert_eq!(result, "No places in the guide yet. Check back soon!");
}

#[tokio::test]
async fn test_places_lists_all_without_filters() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_places(&handler).await;

    let result = handler
        .handle_places(None, None, None, None, None)
        .await
        .unwrap();
    assert!(result.contains("Found 2 place(s):"));
    assert!(result.contains("- Chick-fil-A MU (category: Food)"));
    assert!(result.contains("  Location: Memorial Union"));
    assert!(result.contains("  Perks: accepts M&G"));
    assert!(result.contains("  Deals: 10% off on Tuesdays"));
    assert!(result.contains("- Hayden Library (category: Study)"));
    assert!(result.contains("  Perks: late night, budget friendly"));
}

#[tokio::test]
async fn test_place_category_filter() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_places(&handler).await;

    let result = handler
        .handle_places(None, Some("study".to_string()), None, None, None)
        .await
        .unwrap();
    assert!(result.contains("Hayden Library"));
    assert!(!result.contains("Chick-fil-A MU"));
}

#[tokio::test]
async fn test_place_budget_flag_filter() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_places(&handler).await;

    let result = handler
        .handle_places(None, None, None, None, Some(true))
        .await
        .unwrap();
    assert!(result.contains("Hayden Library"));
    assert!(!result.contains("Chick-fil-A MU"));
}

#[tokio::test]
async fn test_place_flag_filter_false_means_unset() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_places(&handler).await;

    // budget=false does not mean "only non-budget places"
    let result = handler
        .handle_places(None, None, None, None, Some(false))
        .await
        .unwrap();
    assert!(result.contains("Hayden Library"));
    assert!(result.contains("Chick-fil-A MU"));
}

#[tokio::test]
async fn test_place_flag_filters_combine() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_places(&handler).await;

    // No single place carries both flags
    let result = handler
        .handle_places(None, None, Some(true), Some(true), None)
        .await
        .unwrap();
    assert_eq!(result, "No places match the current filters");
}

#[tokio::test]
async fn test_place_search_matches_name() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_places(&handler).await;

    let result = handler
        .handle_places(Some("hayden".to_string()), None, None, None, None)
        .await
        .unwrap();
    assert!(result.contains("Hayden Library"));
    assert!(!result.contains("Chick-fil-A MU"));
}

#[tokio::test]
async fn test_place_invalid_category_filter() {
    let (handler, _temp_file) = get_test_handler();

    let result = handler
        .handle_places(None, Some("arcade".to_string()), None, None, None)
        .await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_error_object(true).message.contains("Invalid category 'arcade'"));
}

#[tokio::test]
async fn test_places_listed_in_name_order() {
    let (handler, _temp_file) = get_test_handler();
    add_sample_places(&handler).await;

    // Lowercase name: case-sensitive order would put it last
    handler
        .handle_add_place(
            TEST_ACCESS_CODE.to_string(),
            "cartel coffee lab".to_string(),
            Some("cafe".to_string()),
            None,
            None,
            None,
            Some(true),
            None,
        )
        .await
        .unwrap();

    let result = handler
        .handle_places(None, None, None, None, None)
        .await
        .unwrap();
    let cartel = result.find("cartel coffee lab").unwrap();
    let chick = result.find("Chick-fil-A MU").unwrap();
    let hayden = result.find("Hayden Library").unwrap();
    assert!(cartel < chick);
    assert!(chick < hayden);
}
