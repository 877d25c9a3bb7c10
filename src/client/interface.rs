use std::collections::HashMap;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

pub type FetchResult<A> = std::result::Result<A, FetchError>;

/// The network capability injected into [`super::SpotifyClient`].
///
/// One call issues one asynchronous HTTP request; calls are independent and
/// uncorrelated. Test doubles substitute this trait instead of patching any
/// process-wide state.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FetchClient {
    async fn fetch(
        &self,
        url: String,
        options: FetchOptions,
    ) -> FetchResult<reqwest::Response>;
}

/// Options forwarded alongside the URL, currently a plain header map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
}

/// Opaque carrier for whatever the transport surfaced. The client neither
/// catches nor translates failures.
#[derive(Debug)]
pub struct FetchError(pub Box<dyn std::error::Error + Send + Sync>);

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return std::fmt::Display::fmt(&self.0, f);
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        return self.0.source();
    }
}
