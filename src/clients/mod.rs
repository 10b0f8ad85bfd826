/// Client for the translation API at funtranslations.com
pub mod funtranslations;

/// Client for the species endpoint of pokeapi.co
pub mod pokeapi;

use anyhow::{Result, bail};
use reqwest::Url;
use std::time::Duration;

/// Parses an upstream base URL, rejecting URLs that cannot carry path segments
fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        bail!("'{}' cannot be used as a base URL", base_url);
    }
    Ok(url)
}

/// Appends each segment to the base path, escaping them as path segments
fn join_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // base URLs are checked by parse_base_url, so this never fails
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}
