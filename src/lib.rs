//! Campus MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a
//! university survival guide: a curated class directory, a food and study
//! place directory, a community suggestion inbox, and an academic
//! deadline calendar with live countdowns.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `GuideServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `guide` and `calendar` modules - Directory records,
//!   filters, and the deadline catalog
//! - **Persistence Layer**: `storage` module - File-based TOML storage with
//!   Git sync
//!
//! # Example
//!
//! ```no_run
//! use campus_mcp::GuideServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = GuideServerHandler::new("campus.toml", false, None)?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod calendar;
pub mod clock;
pub mod formatting;
mod git_ops;
pub mod guide;
mod handlers;
pub mod seed;
mod storage;
pub mod validation;

use anyhow::Result;
use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::{Result as McpResult, bail_public};
use std::sync::Mutex;

// Re-export commonly used types
pub use guide::{Class, GuideData, Place, Suggestion};
pub use storage::Storage;

/// MCP Server handler for the campus survival guide
///
/// Provides an MCP interface to the guide: directory browsing and
/// filtering, suggestion intake, access-gated curation, and the academic
/// calendar. All changes are automatically persisted to a TOML file and
/// optionally synchronized with Git.
pub struct GuideServerHandler {
    pub(crate) data: Mutex<GuideData>,
    pub(crate) storage: Storage,
    access_code: Option<String>,
}

impl GuideServerHandler {
    /// Create a new guide server handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the guide data file (TOML format)
    /// * `sync_git` - Enable automatic Git synchronization
    /// * `access_code` - Shared code unlocking the curation tools; with
    ///   None every gated tool refuses
    ///
    /// # Example
    /// ```no_run
    /// # use campus_mcp::GuideServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = GuideServerHandler::new("campus.toml", false, None)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str, sync_git: bool, access_code: Option<String>) -> Result<Self> {
        let storage = Storage::new(storage_path, sync_git);
        let data = Mutex::new(storage.load()?);
        Ok(Self {
            data,
            storage,
            access_code,
        })
    }

    /// Save guide data with a custom commit message
    fn save_data_with_message(&self, message: &str) -> Result<()> {
        let data = self.data.lock().unwrap();
        self.storage.save_with_message(&data, message)?;
        Ok(())
    }

    /// Check a supplied access code, refusing with a public error
    fn check_access(&self, supplied: &str) -> McpResult<()> {
        if !validation::verify_access(self.access_code.as_deref(), supplied) {
            bail_public!(_, "Invalid access code");
        }
        Ok(())
    }
}

impl Drop for GuideServerHandler {
    fn drop(&mut self) {
        // Push to git on shutdown if sync is enabled
        if let Err(e) = self.storage.shutdown() {
            eprintln!("Warning: Shutdown git sync failed: {}", e);
        }
    }
}

/// Campus survival guide server: crowd-curated class and place directories plus the academic calendar.
///
/// The guide helps students pick classes and find food, study spots, and cafes,
/// and keeps everyone pointed at the next academic deadline.
///
/// Key areas:
/// - **classes / places**: Browse the directories, with optional filters
/// - **calendar / countdown**: Academic deadlines by semester and the time left until the next one
/// - **suggest**: Drop an idea into the community inbox (anonymous welcome)
/// - **Curation**: add_/remove_ tools and the suggestion inbox review require the shared access code
///
/// Course codes look like "CSE 110" and are matched case-insensitively.
/// Suggestion IDs look like "suggestion-3".
#[mcp_server]
impl McpServer for GuideServerHandler {
    /// **Browse classes**: List the class directory, optionally filtered. No filters = everything.
    /// **Search** matches code, name, professor, and description, case-insensitively.
    #[tool]
    async fn classes(
        &self,
        /// Search text (optional)
        search: Option<String>,
        /// Difficulty filter: light_workload/standard_pace/content_heavy (optional)
        difficulty: Option<String>,
        /// Gen ed filter: HUAD/SOBE/SCIT/QTRS/MATH/AMIT/CIVI/GCSI/SUST (optional)
        gen_ed: Option<String>,
    ) -> McpResult<String> {
        self.handle_classes(search, difficulty, gen_ed).await
    }

    /// **Browse places**: List food, study, and cafe spots, optionally filtered.
    /// Flag filters keep only places carrying the flag; leave unset to not constrain.
    #[tool]
    async fn places(
        &self,
        /// Search text over name and category (optional)
        search: Option<String>,
        /// Category filter: food/study/cafe (optional)
        category: Option<String>,
        /// Only places accepting M&G dollars (optional)
        accepts_mng: Option<bool>,
        /// Only late-night places (optional)
        late_night: Option<bool>,
        /// Only budget-friendly places (optional)
        budget: Option<bool>,
    ) -> McpResult<String> {
        self.handle_places(search, category, accepts_mng, late_night, budget)
            .await
    }

    /// **Academic calendar**: All deadlines of the year grouped by semester,
    /// with passed entries tagged and the next one marked.
    #[tool]
    async fn calendar(&self) -> McpResult<String> {
        self.handle_calendar().await
    }

    /// **Countdown**: The next academic deadline and the days/hours/minutes/seconds left until it.
    #[tool]
    async fn countdown(&self) -> McpResult<String> {
        self.handle_countdown().await
    }

    /// **Suggest**: Drop a suggestion into the community inbox. Anyone can; no access code needed.
    /// Suggestions start pending and are reviewed by the curators.
    #[tool]
    async fn suggest(
        &self,
        /// What should be added or changed
        content: String,
        /// Kind: class/food/other (optional)
        kind: Option<String>,
        /// Your name; defaults to Anonymous (optional)
        username: Option<String>,
        /// Course code, for class suggestions (optional)
        course_code: Option<String>,
        /// Professor, for class suggestions (optional)
        professor: Option<String>,
        /// Why it belongs in the guide (optional)
        reason: Option<String>,
    ) -> McpResult<String> {
        self.handle_suggest(content, kind, username, course_code, professor, reason)
            .await
    }

    /// **Review suggestions**: List the whole inbox, newest first. Requires the access code.
    #[tool]
    async fn suggestions(
        &self,
        /// Shared access code
        access_code: String,
    ) -> McpResult<String> {
        self.handle_suggestions(access_code).await
    }

    /// **Add class**: Put a class into the directory. Requires the access code.
    /// Codes are stored uppercased and must be unique.
    #[allow(clippy::too_many_arguments)]
    #[tool]
    async fn add_class(
        &self,
        /// Shared access code
        access_code: String,
        /// Course code (e.g., "CSE 110")
        code: String,
        /// Course title
        name: String,
        /// Professor
        professor: String,
        /// What to expect, in a sentence or two
        description: String,
        /// Gen ed category: HUAD/SOBE/SCIT/QTRS/MATH/AMIT/CIVI/GCSI/SUST
        gen_ed: String,
        /// Difficulty: light_workload/standard_pace/content_heavy
        difficulty: String,
        /// Attendance: mandatory/optional/unknown; defaults to unknown (optional)
        attendance: Option<String>,
        /// Exams: in_person/online/none/unknown; defaults to unknown (optional)
        exams: Option<String>,
        /// RateMyProfessors link (optional)
        rmp_link: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_class(
            access_code,
            code,
            name,
            professor,
            description,
            gen_ed,
            difficulty,
            attendance,
            exams,
            rmp_link,
        )
        .await
    }

    /// **Add place**: Put a food/study/cafe spot into the directory. Requires the access code.
    /// Names must be unique.
    #[allow(clippy::too_many_arguments)]
    #[tool]
    async fn add_place(
        &self,
        /// Shared access code
        access_code: String,
        /// Place name
        name: String,
        /// Category: food/study/cafe (optional)
        category: Option<String>,
        /// Where to find it (optional)
        location: Option<String>,
        /// Accepts M&G dollars (optional)
        accepts_mng: Option<bool>,
        /// Open late (optional)
        late_night: Option<bool>,
        /// Budget friendly (optional)
        budget: Option<bool>,
        /// Current student deals (optional)
        deals: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_place(
            access_code,
            name,
            category,
            location,
            accepts_mng,
            late_night,
            budget,
            deals,
        )
        .await
    }

    /// **Remove class**: Delete a directory entry by course code. Requires the access code.
    #[tool]
    async fn remove_class(
        &self,
        /// Shared access code
        access_code: String,
        /// Course code of the entry to remove
        code: String,
    ) -> McpResult<String> {
        self.handle_remove_class(access_code, code).await
    }

    /// **Remove place**: Delete a directory entry by name. Requires the access code.
    #[tool]
    async fn remove_place(
        &self,
        /// Shared access code
        access_code: String,
        /// Name of the entry to remove
        name: String,
    ) -> McpResult<String> {
        self.handle_remove_place(access_code, name).await
    }

    /// **Remove suggestion**: Delete an inbox entry by ID. Requires the access code.
    #[tool]
    async fn remove_suggestion(
        &self,
        /// Shared access code
        access_code: String,
        /// Suggestion ID (e.g., "suggestion-3")
        id: String,
    ) -> McpResult<String> {
        self.handle_remove_suggestion(access_code, id).await
    }

    /// **Track visit**: Record one guide visit. Clients call this once per session.
    #[tool]
    async fn track_visit(&self) -> McpResult<String> {
        self.handle_track_visit().await
    }

    /// **Stats**: Directory sizes, pending suggestions, and visit counts. Requires the access code.
    #[tool]
    async fn stats(
        &self,
        /// Shared access code
        access_code: String,
    ) -> McpResult<String> {
        self.handle_stats(access_code).await
    }
}
