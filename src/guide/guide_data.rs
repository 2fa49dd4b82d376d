use crate::guide::records::{Class, Place, Suggestion, local_date_today};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current TOML file format version
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// The whole guide: class and place directories, the suggestion inbox,
/// and the visit counter, persisted together as one TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideData {
    /// Format version for the TOML file (current: 1)
    pub format_version: u32,

    /// Total visits recorded by track_visit
    pub visits: u64,

    /// Date of the most recent recorded visit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<NaiveDate>,

    /// Counter for generating unique suggestion IDs
    pub suggestion_counter: u32,

    /// Class directory, kept sorted by course code
    ///
    /// Vec keeps a stable order for TOML serialization, which keeps the
    /// file diff-friendly under Git sync. Lookups are linear scans; the
    /// directory is curated by hand and stays far below the size where an
    /// index would matter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<Class>,

    /// Place directory, kept sorted by name (case-insensitive)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub places: Vec<Place>,

    /// Suggestion inbox, kept in submission order (oldest first)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

impl Default for GuideData {
    fn default() -> Self {
        Self {
            format_version: CURRENT_FORMAT_VERSION,
            visits: 0,
            last_visit: None,
            suggestion_counter: 0,
            classes: Vec::new(),
            places: Vec::new(),
            suggestions: Vec::new(),
        }
    }
}

impl GuideData {
    /// Create a new empty GuideData instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a class by course code (codes are stored uppercased)
    pub fn find_class(&self, code: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.code == code)
    }

    /// Insert a class at its sorted position by course code
    ///
    /// Callers check for duplicate codes first; a duplicate would land
    /// next to the existing entry and shadow it in lookups.
    pub fn add_class(&mut self, class: Class) {
        let pos = self
            .classes
            .binary_search_by(|probe| probe.code.as_str().cmp(class.code.as_str()))
            .unwrap_or_else(|p| p);
        self.classes.insert(pos, class);
    }

    /// Remove a class by course code and return it
    pub fn remove_class(&mut self, code: &str) -> Option<Class> {
        let pos = self.classes.iter().position(|c| c.code == code)?;
        Some(self.classes.remove(pos))
    }

    /// Find a place by exact name
    pub fn find_place(&self, name: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.name == name)
    }

    /// Insert a place at its sorted position by case-insensitive name
    pub fn add_place(&mut self, place: Place) {
        let key = place.name.to_lowercase();
        let pos = self
            .places
            .binary_search_by(|probe| probe.name.to_lowercase().cmp(&key))
            .unwrap_or_else(|p| p);
        self.places.insert(pos, place);
    }

    /// Remove a place by exact name and return it
    pub fn remove_place(&mut self, name: &str) -> Option<Place> {
        let pos = self.places.iter().position(|p| p.name == name)?;
        Some(self.places.remove(pos))
    }

    /// Generate a new unique suggestion ID
    pub fn generate_suggestion_id(&mut self) -> String {
        self.suggestion_counter += 1;
        format!("suggestion-{}", self.suggestion_counter)
    }

    /// Find a suggestion by its ID
    pub fn find_suggestion(&self, id: &str) -> Option<&Suggestion> {
        self.suggestions.iter().find(|s| s.id == id)
    }

    /// Append a suggestion to the inbox
    pub fn add_suggestion(&mut self, suggestion: Suggestion) {
        self.suggestions.push(suggestion);
    }

    /// Remove a suggestion by its ID and return it
    pub fn remove_suggestion(&mut self, id: &str) -> Option<Suggestion> {
        let pos = self.suggestions.iter().position(|s| s.id == id)?;
        Some(self.suggestions.remove(pos))
    }

    /// Count suggestions still awaiting review
    pub fn pending_suggestion_count(&self) -> usize {
        self.suggestions.iter().filter(|s| s.is_pending()).count()
    }

    /// Record one visit, stamping today's date
    pub fn record_visit(&mut self) {
        self.visits += 1;
        self.last_visit = Some(local_date_today());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::records::{
        Attendance, Difficulty, ExamFormat, GenEd, PlaceFlags, SuggestionStatus,
    };

    fn sample_class(code: &str, name: &str) -> Class {
        Class {
            code: code.to_string(),
            name: name.to_string(),
            professor: "Dr. Smith".to_string(),
            description: "A class".to_string(),
            gen_ed: GenEd::MATH,
            difficulty: Difficulty::standard_pace,
            attendance: Attendance::default(),
            exams: ExamFormat::default(),
            rmp_link: None,
            created_at: local_date_today(),
            updated_at: local_date_today(),
        }
    }

    fn sample_place(name: &str) -> Place {
        Place {
            name: name.to_string(),
            category: None,
            location: None,
            flags: PlaceFlags::default(),
            deals: None,
            created_at: local_date_today(),
            updated_at: local_date_today(),
        }
    }

    fn sample_suggestion(id: &str, content: &str) -> Suggestion {
        Suggestion {
            id: id.to_string(),
            content: content.to_string(),
            kind: None,
            username: "Anonymous".to_string(),
            status: SuggestionStatus::default(),
            course_code: None,
            professor: None,
            reason: None,
            created_at: local_date_today(),
        }
    }

    #[test]
    fn test_new_data_is_empty() {
        let data = GuideData::new();
        assert_eq!(data.format_version, CURRENT_FORMAT_VERSION);
        assert!(data.classes.is_empty());
        assert!(data.places.is_empty());
        assert!(data.suggestions.is_empty());
        assert_eq!(data.visits, 0);
        assert!(data.last_visit.is_none());
    }

    #[test]
    fn test_add_class_keeps_code_order() {
        let mut data = GuideData::new();
        data.add_class(sample_class("MAT 265", "Calculus for Engineers I"));
        data.add_class(sample_class("CSE 110", "Principles of Programming"));
        data.add_class(sample_class("CSE 340", "Programming Languages"));

        let codes: Vec<&str> = data.classes.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["CSE 110", "CSE 340", "MAT 265"]);
    }

    #[test]
    fn test_find_and_remove_class() {
        let mut data = GuideData::new();
        data.add_class(sample_class("CSE 110", "Principles of Programming"));

        assert!(data.find_class("CSE 110").is_some());
        assert!(data.find_class("CSE 999").is_none());

        let removed = data.remove_class("CSE 110").unwrap();
        assert_eq!(removed.name, "Principles of Programming");
        assert!(data.classes.is_empty());
        assert!(data.remove_class("CSE 110").is_none());
    }

    #[test]
    fn test_add_place_sorts_case_insensitively() {
        let mut data = GuideData::new();
        data.add_place(sample_place("cartel Coffee Lab"));
        data.add_place(sample_place("Hayden Library"));
        data.add_place(sample_place("Chick-fil-A"));

        let names: Vec<&str> = data.places.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["cartel Coffee Lab", "Chick-fil-A", "Hayden Library"]
        );
    }

    #[test]
    fn test_suggestion_ids_increment() {
        let mut data = GuideData::new();
        assert_eq!(data.generate_suggestion_id(), "suggestion-1");
        assert_eq!(data.generate_suggestion_id(), "suggestion-2");

        // Counter does not reset when suggestions are removed
        data.add_suggestion(sample_suggestion("suggestion-2", "Add CSE 110"));
        data.remove_suggestion("suggestion-2").unwrap();
        assert_eq!(data.generate_suggestion_id(), "suggestion-3");
    }

    #[test]
    fn test_pending_suggestion_count() {
        let mut data = GuideData::new();
        data.add_suggestion(sample_suggestion("suggestion-1", "one"));
        let mut reviewed = sample_suggestion("suggestion-2", "two");
        reviewed.status = SuggestionStatus::approved;
        data.add_suggestion(reviewed);

        assert_eq!(data.pending_suggestion_count(), 1);
    }

    #[test]
    fn test_record_visit() {
        let mut data = GuideData::new();
        data.record_visit();
        data.record_visit();
        assert_eq!(data.visits, 2);
        assert_eq!(data.last_visit, Some(local_date_today()));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut data = GuideData::new();
        data.add_class(sample_class("CSE 110", "Principles of Programming"));
        data.add_place(sample_place("Hayden Library"));
        let id = data.generate_suggestion_id();
        data.add_suggestion(sample_suggestion(&id, "Add MAT 265"));
        data.record_visit();

        let toml_str = toml::to_string_pretty(&data).unwrap();
        let loaded: GuideData = toml::from_str(&toml_str).unwrap();

        assert_eq!(loaded.classes.len(), 1);
        assert_eq!(loaded.classes[0].code, "CSE 110");
        assert_eq!(loaded.places.len(), 1);
        assert_eq!(loaded.suggestions.len(), 1);
        assert_eq!(loaded.suggestion_counter, 1);
        assert_eq!(loaded.visits, 1);
    }

    #[test]
    fn test_empty_collections_not_serialized() {
        let data = GuideData::new();
        let toml_str = toml::to_string_pretty(&data).unwrap();
        assert!(!toml_str.contains("classes"));
        assert!(!toml_str.contains("places"));
        assert!(!toml_str.contains("suggestions = "));
        assert!(toml_str.contains("format_version"));
    }
}
