//! Suggestion inbox handlers for the guide server

use crate::GuideServerHandler;
use crate::formatting;
use crate::guide::{Suggestion, SuggestionStatus, local_date_today};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl GuideServerHandler {
    /// Handles suggestion submission - anyone can drop an idea into the
    /// inbox, anonymously by default.
    pub async fn handle_suggest(
        &self,
        content: String,
        kind: Option<String>,
        username: Option<String>,
        course_code: Option<String>,
        professor: Option<String>,
        reason: Option<String>,
    ) -> McpResult<String> {
        let content = content.trim().to_string();
        if content.is_empty() {
            bail_public!(_, "Suggestion content is required");
        }

        let kind = if let Some(ref kind_str) = kind {
            Some(validation::parse_suggestion_kind(kind_str)?)
        } else {
            None
        };
        let username = username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| "Anonymous".to_string());
        let course_code = course_code
            .map(|c| validation::normalize_course_code(&c))
            .filter(|c| !c.is_empty());
        let professor = professor
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        let reason = reason.map(|r| r.trim().to_string()).filter(|r| !r.is_empty());

        let mut data = self.data.lock().unwrap();
        let id = data.generate_suggestion_id();
        data.add_suggestion(Suggestion {
            id: id.clone(),
            content,
            kind,
            username,
            status: SuggestionStatus::pending,
            course_code,
            professor,
            reason,
            created_at: local_date_today(),
        });
        drop(data);

        if let Err(e) = self.save_data_with_message(&format!("Add suggestion {}", id)) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Suggestion received with ID: {} (status: pending)", id))
    }

    /// Handles the inbox review listing, newest first (access-gated).
    pub async fn handle_suggestions(&self, access_code: String) -> McpResult<String> {
        self.check_access(&access_code)?;

        let data = self.data.lock().unwrap();
        let mut suggestions = data.suggestions.clone();
        drop(data);

        // Stored oldest first; reviewed newest first
        suggestions.reverse();

        Ok(formatting::format_suggestions(suggestions))
    }

    /// Removes a suggestion from the inbox by ID (access-gated).
    pub async fn handle_remove_suggestion(
        &self,
        access_code: String,
        id: String,
    ) -> McpResult<String> {
        self.check_access(&access_code)?;

        let id = id.trim().to_string();
        let mut data = self.data.lock().unwrap();

        if data.remove_suggestion(&id).is_none() {
            drop(data);
            bail_public!(_, "Suggestion '{}' not found in the inbox", id);
        }
        drop(data);

        if let Err(e) = self.save_data_with_message(&format!("Remove suggestion {}", id)) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Suggestion removed: {}", id))
    }
}
