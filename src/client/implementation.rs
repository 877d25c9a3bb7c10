use std::future::Future;
use std::time::Instant;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderName};
use reqwest::Client;

use super::interface::{FetchClient, FetchError, FetchOptions, FetchResult};

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> FetchError {
        return FetchError(Box::new(err));
    }
}

pub const FETCH_CLIENT: FetchClientImpl = FetchClientImpl {};

pub struct FetchClientImpl {}

impl FetchClientImpl {
    pub fn new() -> Self {
        return FetchClientImpl {};
    }
}

#[async_trait]
impl FetchClient for FetchClientImpl {
    async fn fetch(&self, url: String, options: FetchOptions) -> FetchResult<reqwest::Response> {
        return timed(format!("GET {}", url), || async {
            let client = Client::new();
            let response = client.get(url)
                .headers(headers(&options))
                .send()
                .await
                .map_err(FetchError::from)?;

            return Ok(response);
        }).await;
    }
}

fn headers(options: &FetchOptions) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in &options.headers {
        headers.insert(HeaderName::from_bytes(name.as_bytes()).unwrap(), value.parse().unwrap());
    }
    return headers;
}

async fn timed<F, Fut, T>(description: String, action: F) -> T where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let start = Instant::now();
    debug!("{}", description);
    let result = action().await;
    debug!("{} (done in {}ms)", description, (Instant::now() - start).as_millis());
    return result;
}

#[cfg(test)]
mod test {
    use tokio::runtime::Builder;

    use super::*;

    #[test]
    fn headers_with_entries_then_carry_them_verbatim() {
        let mut entries = std::collections::HashMap::new();
        entries.insert("Authorization".to_string(), "'Bearer foo'".to_string());

        let map = headers(&FetchOptions { headers: entries });

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Authorization").map(|value| value.to_str().unwrap()), Some("'Bearer foo'"));
    }

    #[test]
    fn headers_with_no_entries_then_build_an_empty_map() {
        let map = headers(&FetchOptions::default());
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn fetch_with_a_malformed_url_then_surface_the_transport_error() {
        let _ = env_logger::builder().is_test(true).try_init();

        Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(async move {
                let result = FETCH_CLIENT.fetch("http://".to_string(), FetchOptions::default()).await;

                assert!(result.is_err());
            });
    }
}
