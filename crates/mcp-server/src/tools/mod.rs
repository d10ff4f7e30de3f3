//! Confluence MCP tool surface.
//!
//! `schemas` holds the typed requests, `dispatch` binds them to the flows and turns
//! outcomes into tool results.

mod dispatch;
mod render;
pub mod schemas;

pub use dispatch::ConfluenceService;
