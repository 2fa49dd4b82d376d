//! Visit tracking and stats handlers for the guide server

use crate::GuideServerHandler;
use mcp_attr::{Result as McpResult, bail_public};

impl GuideServerHandler {
    /// Records one guide visit.
    pub async fn handle_track_visit(&self) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        data.record_visit();
        let visits = data.visits;
        drop(data);

        if let Err(e) = self.save_data_with_message("Record visit") {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Visit recorded (total: {})", visits))
    }

    /// Reports directory sizes and visit counts (access-gated).
    pub async fn handle_stats(&self, access_code: String) -> McpResult<String> {
        self.check_access(&access_code)?;

        let data = self.data.lock().unwrap();
        let mut result = format!(
            "Guide stats:\n- Classes: {}\n- Places: {}\n- Suggestions: {} ({} pending)\n- Visits: {}",
            data.classes.len(),
            data.places.len(),
            data.suggestions.len(),
            data.pending_suggestion_count(),
            data.visits
        );
        if let Some(last_visit) = data.last_visit {
            result.push_str(&format!("\n- Last visit: {}", last_visit));
        }

        Ok(result)
    }
}
