//! Page Fetcher Module
//!
//! The network side of the page cache.

use std::time::Duration;

use tracing::debug;

use crate::error::Result;

// == Fetcher Trait ==
/// Retrieves the body of a URL as text.
pub trait Fetcher {
    /// Fetches `url` and returns the response body.
    fn fetch(&mut self, url: &str) -> Result<String>;
}

impl<F: Fetcher + ?Sized> Fetcher for &mut F {
    fn fetch(&mut self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn fetch(&mut self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

// == HTTP Fetcher ==
/// Blocking HTTP GET client.
///
/// No timeout and no retry are configured, and the status code is not
/// checked: a 404 page is returned like any other body.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Builds a client without a request timeout.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&mut self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;
        debug!("GET {} -> {}", url, response.status());
        Ok(response.text()?)
    }
}
