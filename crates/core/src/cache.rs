//! File-based cache for the downloaded pronunciation dictionary.
//!
//! One snapshot is kept: the dictionary text plus a JSON metadata file
//! recording the version tag it was fetched for and its SHA-256.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const DICT_FILE: &str = "cmudict.dict";
const META_FILE: &str = "cmudict.json";

/// Get the cache directory.
///
/// Uses `HETEROGRAPH_CACHE_DIR` env var if set, otherwise `~/.cache/heterograph`.
pub fn cache_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("HETEROGRAPH_CACHE_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".cache").join("heterograph")
}

/// SHA-256 of `text` as a 64-character hex string.
pub fn text_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryMeta {
    pub version: String,
    pub sha256: String,
    pub bytes: usize,
}

/// Atomically write data to a file via temp file + rename.
fn atomic_write(target: &Path, data: &[u8]) -> Result<()> {
    let parent = target.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create cache directory: {}", parent.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).context("Failed to create temp file")?;
    tmp.write_all(data)?;
    tmp.persist(target)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", target.display(), e))?;
    Ok(())
}

/// Return the cached dictionary text, or None if missing, stale or corrupt.
pub fn get_cached_dictionary(version: &str) -> Option<String> {
    get_cached_dictionary_in(&cache_dir().join("dictionary"), version)
}

pub fn get_cached_dictionary_in(dir: &Path, version: &str) -> Option<String> {
    let meta = std::fs::read_to_string(dir.join(META_FILE)).ok()?;
    let meta: DictionaryMeta = serde_json::from_str(&meta).ok()?;
    if meta.version != version {
        log::info!(
            "Cached dictionary is version {}, wanted {}",
            meta.version,
            version
        );
        return None;
    }

    let text = std::fs::read_to_string(dir.join(DICT_FILE)).ok()?;
    if text_hash(&text) != meta.sha256 {
        log::warn!("Cached dictionary does not match its checksum, ignoring it");
        return None;
    }
    log::info!("Cache hit: dictionary v{} ({}...)", version, &meta.sha256[..12]);
    Some(text)
}

/// Store dictionary text in the cache, tagged with `version`.
pub fn store_dictionary_cache(version: &str, text: &str) -> Result<()> {
    store_dictionary_cache_in(&cache_dir().join("dictionary"), version, text)
}

pub fn store_dictionary_cache_in(dir: &Path, version: &str, text: &str) -> Result<()> {
    let meta = DictionaryMeta {
        version: version.to_string(),
        sha256: text_hash(text),
        bytes: text.len(),
    };
    // Text first, so a crash in between leaves a checksum mismatch rather
    // than metadata vouching for the old text.
    atomic_write(&dir.join(DICT_FILE), text.as_bytes())?;
    let json = serde_json::to_string(&meta)?;
    atomic_write(&dir.join(META_FILE), json.as_bytes())?;
    log::info!("Cached dictionary v{} ({} bytes)", version, meta.bytes);
    Ok(())
}
