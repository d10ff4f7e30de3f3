use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crate::api::ConfluenceApi;
use crate::client::{ConfluenceClient, DEFAULT_TIMEOUT};
use crate::credentials::Credentials;
use crate::error::CredentialError;

type ApiResult = Result<Arc<dyn ConfluenceApi>, CredentialError>;
type ApiFactory = Box<dyn Fn() -> ApiResult + Send + Sync>;

/// Builds the API handle on first use and hands out the same handle afterwards.
///
/// Initialization runs at most once, even under concurrent first calls. A failed
/// initialization is cached too: every later call returns the same error without
/// consulting the credential source again.
pub struct ClientProvider {
    slot: OnceLock<ApiResult>,
    factory: ApiFactory,
}

impl std::fmt::Debug for ClientProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientProvider")
            .field("initialized", &self.slot.get().is_some())
            .finish_non_exhaustive()
    }
}

impl ClientProvider {
    /// Reads `ATLASSIAN_HOST`, `ATLASSIAN_EMAIL` and `ATLASSIAN_TOKEN` on first use.
    pub fn from_env() -> Self {
        Self::from_env_with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn from_env_with_timeout(timeout: Duration) -> Self {
        Self::from_source(|key| std::env::var(key).ok(), timeout)
    }

    pub fn from_source<F>(source: F, timeout: Duration) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self::lazy(move || {
            let credentials = Credentials::from_source(&source)?;
            let client = ConfluenceClient::with_timeout(credentials, timeout)?;
            Ok(Arc::new(client) as Arc<dyn ConfluenceApi>)
        })
    }

    pub fn lazy<F>(factory: F) -> Self
    where
        F: Fn() -> ApiResult + Send + Sync + 'static,
    {
        Self {
            slot: OnceLock::new(),
            factory: Box::new(factory),
        }
    }

    /// Wraps an already constructed handle.
    pub fn ready(api: Arc<dyn ConfluenceApi>) -> Self {
        Self::lazy(move || Ok(api.clone()))
    }

    pub fn client(&self) -> ApiResult {
        let slot = self.slot.get_or_init(|| {
            let result = (self.factory)();
            match &result {
                Ok(_) => log::debug!("Confluence client initialized"),
                Err(err) => log::warn!("Failed to initialize Confluence client: {err}"),
            }
            result
        });
        slot.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{EMAIL_VAR, HOST_VAR, TOKEN_VAR};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_source(
        token: &'static str,
        reads: Arc<AtomicUsize>,
    ) -> impl Fn(&str) -> Option<String> + Send + Sync + 'static {
        move |key| {
            reads.fetch_add(1, Ordering::SeqCst);
            match key {
                HOST_VAR => Some("https://acme.atlassian.net".to_string()),
                EMAIL_VAR => Some("dev@acme.test".to_string()),
                TOKEN_VAR => Some(token.to_string()),
                _ => None,
            }
        }
    }

    #[test]
    fn second_call_reuses_the_first_handle() {
        let reads = Arc::new(AtomicUsize::new(0));
        let provider = ClientProvider::from_source(
            counting_source("secret", reads.clone()),
            DEFAULT_TIMEOUT,
        );

        let first = provider.client().unwrap();
        let reads_after_first = reads.load(Ordering::SeqCst);
        let second = provider.client().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(reads.load(Ordering::SeqCst), reads_after_first);
    }

    #[test]
    fn empty_token_fails_and_stays_failed() {
        let reads = Arc::new(AtomicUsize::new(0));
        let provider =
            ClientProvider::from_source(counting_source("", reads.clone()), DEFAULT_TIMEOUT);

        let first = provider.client().err().expect("expected error");
        assert_eq!(
            first,
            CredentialError::Missing {
                vars: vec![TOKEN_VAR]
            }
        );
        let reads_after_first = reads.load(Ordering::SeqCst);

        let second = provider.client().err().expect("expected error");
        assert_eq!(first, second);
        assert_eq!(reads.load(Ordering::SeqCst), reads_after_first);
    }

    #[test]
    fn concurrent_first_calls_construct_once() {
        let builds = Arc::new(AtomicUsize::new(0));
        let provider = Arc::new(ClientProvider::lazy({
            let builds = builds.clone();
            move || {
                builds.fetch_add(1, Ordering::SeqCst);
                std::thread::sleep(Duration::from_millis(20));
                let client = ConfluenceClient::new(Credentials {
                    host: "https://acme.atlassian.net".into(),
                    email: "dev@acme.test".into(),
                    token: "secret".into(),
                })?;
                Ok(Arc::new(client) as Arc<dyn ConfluenceApi>)
            }
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider = provider.clone();
                std::thread::spawn(move || provider.client().is_ok())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn ready_hands_out_the_wrapped_handle() {
        let client = ConfluenceClient::new(Credentials {
            host: "https://acme.atlassian.net".into(),
            email: "dev@acme.test".into(),
            token: "secret".into(),
        })
        .unwrap();
        let api = Arc::new(client) as Arc<dyn ConfluenceApi>;
        let provider = ClientProvider::ready(api.clone());

        assert!(Arc::ptr_eq(&provider.client().unwrap(), &api));
        assert!(Arc::ptr_eq(&provider.client().unwrap(), &api));
    }
}
