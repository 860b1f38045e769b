//! Favorite suggestions, kept in memory and persisted as JSON

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{FindTheNameError, Result};
use crate::types::Suggestion;

/// On-disk layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FavoritesFile {
    favorites: Vec<Suggestion>,
    updated_at: DateTime<Utc>,
}

/// Thread-safe favorites list backed by a JSON file
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
    favorites: Arc<RwLock<Vec<Suggestion>>>,
}

impl FavoritesStore {
    /// Open the store at `path`. A missing or unreadable file starts an empty list.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let favorites = match Self::load(&path) {
            Ok(file) => file.favorites,
            Err(e) => {
                if path.exists() {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable favorites file");
                }
                Vec::new()
            }
        };
        tracing::debug!(path = %path.display(), count = favorites.len(), "favorites opened");

        Self {
            path,
            favorites: Arc::new(RwLock::new(favorites)),
        }
    }

    fn load(path: &Path) -> Result<FavoritesFile> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FindTheNameError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        serde_json::from_str(&content).map_err(|e| FindTheNameError::parse(e.to_string(), Some(content)))
    }

    /// Write the current list, creating parent directories
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    FindTheNameError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
                })?;
            }
        }

        let file = FavoritesFile {
            favorites: self.list(),
            updated_at: Utc::now(),
        };
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| FindTheNameError::internal(format!("Failed to serialize favorites: {}", e)))?;

        std::fs::write(&self.path, content).map_err(|e| {
            FindTheNameError::io(e.to_string(), Some(self.path.to_string_lossy().to_string()))
        })?;
        tracing::debug!(path = %self.path.display(), count = file.favorites.len(), "favorites saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot in insertion order
    pub fn list(&self) -> Vec<Suggestion> {
        self.favorites.read().clone()
    }

    pub fn len(&self) -> usize {
        self.favorites.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.read().is_empty()
    }

    pub fn is_favorite(&self, suggestion: &Suggestion) -> bool {
        self.favorites.read().iter().any(|f| f.key() == suggestion.key())
    }

    /// Add or remove `suggestion`; returns whether it is a favorite afterwards
    pub fn toggle(&self, suggestion: &Suggestion) -> bool {
        let mut favorites = self.favorites.write();

        match favorites.iter().position(|f| f.key() == suggestion.key()) {
            Some(i) => {
                favorites.remove(i);
                false
            }
            None => {
                favorites.push(suggestion.clone());
                true
            }
        }
    }

    pub fn clear(&self) {
        self.favorites.write().clear();
    }
}
