//! Place directory handlers for the guide server

use crate::GuideServerHandler;
use crate::formatting;
use crate::guide::{self, Place, PlaceFilters, PlaceFlags, local_date_today};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl GuideServerHandler {
    /// Handles place directory lookups - applies filters and formats
    /// results for display.
    pub async fn handle_places(
        &self,
        search: Option<String>,
        category: Option<String>,
        accepts_mng: Option<bool>,
        late_night: Option<bool>,
        budget: Option<bool>,
    ) -> McpResult<String> {
        let category_filter = if let Some(ref category_str) = category {
            Some(validation::parse_category(category_str)?)
        } else {
            None
        };

        let filters = PlaceFilters {
            search,
            category: category_filter,
            accepts_mng: accepts_mng.unwrap_or(false),
            is_late_night: late_night.unwrap_or(false),
            is_budget: budget.unwrap_or(false),
        };

        let data = self.data.lock().unwrap();
        let directory_empty = data.places.is_empty();
        let mut places = data.places.clone();
        drop(data);

        guide::apply_place_filters(&mut places, &filters);

        Ok(formatting::format_places(places, directory_empty))
    }

    /// Adds a place to the directory (access-gated).
    #[allow(clippy::too_many_arguments)]
    pub async fn handle_add_place(
        &self,
        access_code: String,
        name: String,
        category: Option<String>,
        location: Option<String>,
        accepts_mng: Option<bool>,
        late_night: Option<bool>,
        budget: Option<bool>,
        deals: Option<String>,
    ) -> McpResult<String> {
        self.check_access(&access_code)?;

        let name = name.trim().to_string();
        if name.is_empty() {
            bail_public!(_, "Place name is required");
        }

        let category = if let Some(ref category_str) = category {
            Some(validation::parse_category(category_str)?)
        } else {
            None
        };
        let location = location
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        let deals = deals.map(|d| d.trim().to_string()).filter(|d| !d.is_empty());

        let mut data = self.data.lock().unwrap();

        if data.find_place(&name).is_some() {
            drop(data);
            bail_public!(
                _,
                "Place '{}' already exists in the directory. Remove it first to replace the entry.",
                name
            );
        }

        let today = local_date_today();
        data.add_place(Place {
            name: name.clone(),
            category,
            location,
            flags: PlaceFlags {
                accepts_mng: accepts_mng.unwrap_or(false),
                is_late_night: late_night.unwrap_or(false),
                is_budget: budget.unwrap_or(false),
            },
            deals,
            created_at: today,
            updated_at: today,
        });
        drop(data);

        if let Err(e) = self.save_data_with_message(&format!("Add place {}", name)) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Place added: {}", name))
    }

    /// Removes a place from the directory by name (access-gated).
    pub async fn handle_remove_place(
        &self,
        access_code: String,
        name: String,
    ) -> McpResult<String> {
        self.check_access(&access_code)?;

        let name = name.trim().to_string();
        let mut data = self.data.lock().unwrap();

        if data.remove_place(&name).is_none() {
            drop(data);
            bail_public!(_, "Place '{}' not found in the directory", name);
        }
        drop(data);

        if let Err(e) = self.save_data_with_message(&format!("Remove place {}", name)) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Place removed: {}", name))
    }
}
