//! Confluence MCP server.
//!
//! Exposes Confluence pages, comments and spaces as MCP tools over stdio.
//!
//! ## Tools
//!
//! - `search_page` / `search_space` - CQL search
//! - `get_page` - page body with direct children and other descendants
//! - `create_page` / `update_page` - writes; updates compute the next version
//! - `get_comments` / `create_comment` - page comments
//! - `list_spaces` - paginated space listing
//!
//! ## Usage
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "confluence": {
//!       "command": "confluence-mcp",
//!       "args": ["--env", "/path/to/.env"]
//!     }
//!   }
//! }
//! ```

mod cli;
pub mod error;
pub mod flows;
#[cfg(test)]
mod test_support;
mod tools;

pub use cli::main_entry;
pub use tools::schemas;
pub use tools::ConfluenceService;
