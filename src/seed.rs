//! Starter data for a fresh guide file
//!
//! The seed subcommand writes a small set of sample classes and places so
//! a new deployment has something to show before the real curation
//! starts. Seeding replaces whatever data file is already there.

use crate::guide::{
    Attendance, Class, Difficulty, ExamFormat, GenEd, GuideData, Place, PlaceCategory, PlaceFlags,
    local_date_today,
};
use crate::storage::Storage;
use anyhow::Result;

/// Build the starter guide data
pub fn starter_data() -> GuideData {
    let today = local_date_today();
    let mut data = GuideData::new();

    data.add_class(Class {
        code: "CSE 110".to_string(),
        name: "Principles of Programming".to_string(),
        professor: "Dr. Smith".to_string(),
        description: "Gentle introduction to programming with weekly labs".to_string(),
        gen_ed: GenEd::QTRS,
        difficulty: Difficulty::light_workload,
        attendance: Attendance::optional,
        exams: ExamFormat::online,
        rmp_link: None,
        created_at: today,
        updated_at: today,
    });
    data.add_class(Class {
        code: "MAT 265".to_string(),
        name: "Calculus for Engineers I".to_string(),
        professor: "Dr. Johnson".to_string(),
        description: "Limits, derivatives, and integrals with engineering applications"
            .to_string(),
        gen_ed: GenEd::MATH,
        difficulty: Difficulty::standard_pace,
        attendance: Attendance::unknown,
        exams: ExamFormat::in_person,
        rmp_link: None,
        created_at: today,
        updated_at: today,
    });
    data.add_class(Class {
        code: "CSE 340".to_string(),
        name: "Principles of Programming Languages".to_string(),
        professor: "Dr. Chen".to_string(),
        description:
            "Syntax, semantics, and implementation of programming languages. Heavy project load"
                .to_string(),
        gen_ed: GenEd::QTRS,
        difficulty: Difficulty::content_heavy,
        attendance: Attendance::mandatory,
        exams: ExamFormat::in_person,
        rmp_link: None,
        created_at: today,
        updated_at: today,
    });

    data.add_place(Place {
        name: "Chick-fil-A MU".to_string(),
        category: Some(PlaceCategory::food),
        location: Some("Memorial Union, Tempe Campus".to_string()),
        flags: PlaceFlags {
            accepts_mng: true,
            is_late_night: false,
            is_budget: false,
        },
        deals: Some("10% off on Tuesdays for students".to_string()),
        created_at: today,
        updated_at: today,
    });
    data.add_place(Place {
        name: "Hayden Library".to_string(),
        category: Some(PlaceCategory::study),
        location: Some("300 E Orange Mall, Tempe".to_string()),
        flags: PlaceFlags {
            accepts_mng: false,
            is_late_night: true,
            is_budget: true,
        },
        deals: None,
        created_at: today,
        updated_at: today,
    });
    data.add_place(Place {
        name: "Cartel Coffee Lab".to_string(),
        category: Some(PlaceCategory::cafe),
        location: Some("225 W University Dr, Tempe".to_string()),
        flags: PlaceFlags {
            accepts_mng: false,
            is_late_night: false,
            is_budget: true,
        },
        deals: Some("Happy hour 2-4pm - $1 off all drinks".to_string()),
        created_at: today,
        updated_at: today,
    });

    data
}

/// Write the starter data to the given file, replacing existing content
pub fn write_starter_file(path: &str) -> Result<GuideData> {
    let data = starter_data();
    let storage = Storage::new(path, false);
    storage.save_with_message(&data, "Seed guide data")?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_data_shape() {
        let data = starter_data();
        assert_eq!(data.classes.len(), 3);
        assert_eq!(data.places.len(), 3);
        assert!(data.suggestions.is_empty());

        // One class per difficulty rating
        for difficulty in [
            Difficulty::light_workload,
            Difficulty::standard_pace,
            Difficulty::content_heavy,
        ] {
            assert_eq!(
                data.classes
                    .iter()
                    .filter(|c| c.difficulty == difficulty)
                    .count(),
                1
            );
        }

        // Directory order is by key
        assert_eq!(data.classes[0].code, "CSE 110");
        assert_eq!(data.places[0].name, "Cartel Coffee Lab");
    }

    #[test]
    fn test_starter_file_round_trip() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_starter_file(path).unwrap();

        let loaded = Storage::new(path, false).load().unwrap();
        assert_eq!(loaded.classes.len(), 3);
        assert!(loaded.find_place("Hayden Library").is_some());
    }
}
