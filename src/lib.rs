pub mod client;

pub use client::{Config, FetchClient, FetchClientImpl, FetchError, FetchOptions, FetchResult, SpotifyClient, DEFAULT_API_URL};
