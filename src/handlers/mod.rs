//! MCP tool handlers for the guide server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod calendar;
pub mod classes;
pub mod places;
pub mod stats;
pub mod suggestions;
