//! Acquire dictionary text from disk or the network, going through the cache.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cache;

/// Dictionary format/version tag. Bump to invalidate cached snapshots.
pub const DICTIONARY_VERSION: &str = "0.7";

pub const DEFAULT_DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/cmusphinx/cmudict/master/cmudict.dict";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Url(String),
}

/// Load dictionary text.
///
/// Local files are read directly. URL sources are served from the cache when
/// it holds a snapshot for `version`; otherwise they are fetched and, when
/// `use_cache` is set, stored. A failed cache write only logs a warning.
pub fn load_dictionary(source: &DictionarySource, version: &str, use_cache: bool) -> Result<String> {
    match source {
        DictionarySource::File(path) => {
            log::info!("Reading dictionary: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read dictionary: {}", path.display()))
        }
        DictionarySource::Url(url) => {
            if use_cache {
                if let Some(text) = cache::get_cached_dictionary(version) {
                    return Ok(text);
                }
            }
            let text = fetch_dictionary(url)?;
            if use_cache {
                if let Err(e) = cache::store_dictionary_cache(version, &text) {
                    log::warn!("Could not cache dictionary: {:#}", e);
                }
            }
            Ok(text)
        }
    }
}

/// Download dictionary text over HTTP.
#[cfg(feature = "fetch")]
pub fn fetch_dictionary(url: &str) -> Result<String> {
    log::info!("Fetching dictionary from {} ...", url);

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(300))
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to fetch dictionary from {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Dictionary fetch failed: HTTP {} for {}", response.status(), url);
    }

    let text = response.text().context("Error reading dictionary response")?;
    log::info!("Fetched dictionary: {:.1} MB", text.len() as f64 / 1_048_576.0);
    Ok(text)
}

#[cfg(not(feature = "fetch"))]
pub fn fetch_dictionary(url: &str) -> Result<String> {
    anyhow::bail!(
        "Cannot fetch {}: built without the `fetch` feature; pass a local dictionary file",
        url
    )
}
