//! Guide domain models and business logic
//!
//! This module contains the survival guide's core data structures.
//! It is split into submodules for better organization:
//! - `records`: Class, place, and suggestion records with their enums
//! - `guide_data`: Main data container with all directory operations
//! - `filters`: Directory filter criteria and application

mod filters;
mod guide_data;
mod records;

// Re-export all public types
pub use filters::{ClassFilters, PlaceFilters, apply_class_filters, apply_place_filters};
pub use guide_data::{CURRENT_FORMAT_VERSION, GuideData};
pub use records::{
    Attendance, Class, Difficulty, ExamFormat, GenEd, Place, PlaceCategory, PlaceFlags,
    Suggestion, SuggestionKind, SuggestionStatus, local_date_today,
};
