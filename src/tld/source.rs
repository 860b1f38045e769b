//! Catalog providers: built-in list, JSON file, IANA download

use async_trait::async_trait;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::{classify_tld, TldCatalog, BUILTIN_TLDS};
use crate::error::{FindTheNameError, Result};
use crate::types::TldEntry;

/// Official IANA listing, one TLD per line
pub const IANA_TLD_URL: &str = "https://data.iana.org/TLD/tlds-alpha-by-domain.txt";

/// Anything that can produce the raw TLD entry list
#[async_trait]
pub trait TldSource: Send + Sync {
    /// Fetch every entry
    async fn load(&self) -> Result<Vec<TldEntry>>;

    /// Short name for logs and error messages
    fn name(&self) -> &'static str;
}

/// Load a source and build the catalog from it
pub async fn load_catalog(source: &dyn TldSource) -> Result<TldCatalog> {
    let start = Instant::now();
    let entries = source.load().await?;
    let catalog = TldCatalog::new(entries)
        .map_err(|e| FindTheNameError::catalog(e.to_string(), Some(source.name().to_string())))?;

    tracing::debug!(
        source = source.name(),
        tlds = catalog.len(),
        duration_ms = %start.elapsed().as_millis(),
        "TLD catalog loaded"
    );
    Ok(catalog)
}

/// Compiled-in list
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

#[async_trait]
impl TldSource for BuiltinSource {
    async fn load(&self) -> Result<Vec<TldEntry>> {
        Ok(BUILTIN_TLDS
            .iter()
            .map(|tld| TldEntry::new(*tld, classify_tld(tld)))
            .collect())
    }

    fn name(&self) -> &'static str {
        "builtin"
    }
}

/// JSON array of `{"tld": .., "type": ..}` records
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TldSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<TldEntry>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            FindTheNameError::io(e.to_string(), Some(self.path.to_string_lossy().to_string()))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            FindTheNameError::catalog(
                format!("{} is not a TLD list: {}", self.path.display(), e),
                Some(self.name().to_string()),
            )
        })
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}

/// Live download from data.iana.org
#[cfg(feature = "iana")]
#[derive(Debug, Clone)]
pub struct IanaSource {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "iana")]
impl IanaSource {
    pub fn new() -> Self {
        Self::with_url(IANA_TLD_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent(concat!("findthename/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create HTTP client: {}. Using default.", e);
                reqwest::Client::new()
            });
        Self {
            client,
            url: url.into(),
        }
    }
}

#[cfg(feature = "iana")]
impl Default for IanaSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "iana")]
#[async_trait]
impl TldSource for IanaSource {
    async fn load(&self) -> Result<Vec<TldEntry>> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FindTheNameError::network(
                format!("IANA listing request failed with {}", status),
                Some(status.as_u16()),
                Some(self.url.clone()),
            ));
        }

        let text = response.text().await?;
        let entries = parse_iana_listing(&text)?;
        if entries.is_empty() {
            return Err(FindTheNameError::catalog(
                "IANA listing contained no ASCII TLDs",
                Some(self.name().to_string()),
            ));
        }
        Ok(entries)
    }

    fn name(&self) -> &'static str {
        "iana"
    }
}

/// Parse the IANA plain-text listing.
///
/// Comment lines start with `#`; internationalized (`xn--`) names are skipped.
pub fn parse_iana_listing(text: &str) -> Result<Vec<TldEntry>> {
    let ascii_only = Regex::new(r"^[a-z]+$")
        .map_err(|e| FindTheNameError::internal(e.to_string()))?;

    Ok(text
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_lowercase())
        .filter(|tld| ascii_only.is_match(tld))
        .map(|tld| {
            let tld_type = classify_tld(&tld);
            TldEntry::new(tld, tld_type)
        })
        .collect())
}

/// Write entries as pretty JSON, creating parent directories
pub async fn save_entries(entries: &[TldEntry], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            FindTheNameError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
        })?;
    }

    let content = serde_json::to_string_pretty(entries)
        .map_err(|e| FindTheNameError::internal(format!("Failed to serialize TLD list: {}", e)))?;

    tokio::fs::write(path, content).await.map_err(|e| {
        FindTheNameError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })
}
