//! Typed tool requests. The derived JSON schemas are what clients see in `tools/list`.

pub mod comments;
pub mod lenient;
pub mod pages;
pub mod search;
pub mod spaces;
