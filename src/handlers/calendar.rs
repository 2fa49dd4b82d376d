//! Academic calendar handlers for the guide server

use crate::GuideServerHandler;
use crate::calendar;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl GuideServerHandler {
    /// Handles the calendar view - groups the deadline catalog into
    /// semester sections with past and next markers.
    pub async fn handle_calendar(&self) -> McpResult<String> {
        let grouped = calendar::grouped_deadlines(calendar::deadlines(), calendar::local_now());
        Ok(formatting::format_calendar(&grouped))
    }

    /// Handles the countdown view - one selector pass against the
    /// current time, no server-side timer.
    pub async fn handle_countdown(&self) -> McpResult<String> {
        let now = calendar::local_now();
        let next = calendar::next_deadline(calendar::deadlines(), now)
            .map(|deadline| (deadline, calendar::time_left(deadline.when, now)));
        Ok(formatting::format_countdown(next))
    }
}
