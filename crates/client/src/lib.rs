//! Confluence REST client.
//!
//! [`ConfluenceApi`] is the seam the tool flows depend on; [`ConfluenceClient`] implements it
//! over HTTP with basic authentication, and [`ClientProvider`] builds one lazily from the
//! `ATLASSIAN_*` credentials.

mod api;
mod client;
pub mod credentials;
mod error;
pub mod models;
mod provider;

pub use api::ConfluenceApi;
pub use client::{ConfluenceClient, DEFAULT_TIMEOUT};
pub use credentials::{missing_env_vars, Credentials, REQUIRED_VARS};
pub use error::{ApiError, CredentialError, Result};
pub use provider::ClientProvider;
