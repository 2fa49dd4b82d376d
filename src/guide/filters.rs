//! Directory filtering for classes and places
//!
//! Filters narrow an already-sorted directory, so element order is never
//! touched: with no criteria the input comes back unchanged.

use crate::guide::records::{Class, Difficulty, GenEd, Place, PlaceCategory};

/// Criteria for narrowing the class directory
///
/// Every field is optional; unset fields impose no constraint.
#[derive(Debug, Default)]
pub struct ClassFilters {
    /// Case-insensitive substring match over code, name, professor,
    /// and description
    pub search: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub gen_ed: Option<GenEd>,
}

/// Criteria for narrowing the place directory
///
/// Boolean flags only constrain when set: a place must carry the flag to
/// survive the filter. Unset flags pass everything.
#[derive(Debug, Default)]
pub struct PlaceFilters {
    /// Case-insensitive substring match over name and category
    pub search: Option<String>,
    pub category: Option<PlaceCategory>,
    pub accepts_mng: bool,
    pub is_late_night: bool,
    pub is_budget: bool,
}

/// Apply class filters in place
pub fn apply_class_filters(classes: &mut Vec<Class>, filters: &ClassFilters) {
    if let Some(ref search) = filters.search {
        let needle = search.trim().to_lowercase();
        // Blank search imposes no constraint
        if !needle.is_empty() {
            classes.retain(|class| {
                class.code.to_lowercase().contains(&needle)
                    || class.name.to_lowercase().contains(&needle)
                    || class.professor.to_lowercase().contains(&needle)
                    || class.description.to_lowercase().contains(&needle)
            });
        }
    }

    if let Some(difficulty) = filters.difficulty {
        classes.retain(|class| class.difficulty == difficulty);
    }

    if let Some(gen_ed) = filters.gen_ed {
        classes.retain(|class| class.gen_ed == gen_ed);
    }
}

/// Apply place filters in place
pub fn apply_place_filters(places: &mut Vec<Place>, filters: &PlaceFilters) {
    if let Some(ref search) = filters.search {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty() {
            places.retain(|place| {
                let name_matches = place.name.to_lowercase().contains(&needle);
                let category_matches = place
                    .category
                    .map(|c| c.label().to_lowercase().contains(&needle))
                    .unwrap_or(false);
                name_matches || category_matches
            });
        }
    }

    if let Some(category) = filters.category {
        places.retain(|place| place.category == Some(category));
    }

    if filters.accepts_mng {
        places.retain(|place| place.flags.accepts_mng);
    }

    if filters.is_late_night {
        places.retain(|place| place.flags.is_late_night);
    }

    if filters.is_budget {
        places.retain(|place| place.flags.is_budget);
    }
}
