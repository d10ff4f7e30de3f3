use std::fmt;

use crate::error::CredentialError;

pub const HOST_VAR: &str = "ATLASSIAN_HOST";
pub const EMAIL_VAR: &str = "ATLASSIAN_EMAIL";
pub const TOKEN_VAR: &str = "ATLASSIAN_TOKEN";

pub const REQUIRED_VARS: [&str; 3] = [HOST_VAR, EMAIL_VAR, TOKEN_VAR];

/// Host, account and API token for basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub host: String,
    pub email: String,
    pub token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Reads the three credentials through `source`. Blank values count as missing.
    pub fn from_source<F>(source: F) -> Result<Self, CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            source(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let host = read(HOST_VAR);
        let email = read(EMAIL_VAR);
        let token = read(TOKEN_VAR);

        match (host, email, token) {
            (Some(host), Some(email), Some(token)) => Ok(Self { host, email, token }),
            (host, email, token) => {
                let vars = [
                    (HOST_VAR, host.is_none()),
                    (EMAIL_VAR, email.is_none()),
                    (TOKEN_VAR, token.is_none()),
                ]
                .into_iter()
                .filter_map(|(var, missing)| missing.then_some(var))
                .collect();
                Err(CredentialError::Missing { vars })
            }
        }
    }
}

/// Names of the required variables that are unset or blank in the process environment.
pub fn missing_env_vars() -> Vec<&'static str> {
    REQUIRED_VARS
        .into_iter()
        .filter(|key| {
            std::env::var(key)
                .map(|v| v.trim().is_empty())
                .unwrap_or(true)
        })
        .collect()
}
