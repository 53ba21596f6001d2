//! Widget HTML asset loading.
//!
//! Widget markup is produced by a separate frontend build and dropped into an
//! assets directory, either as `<component>.html` or as a content-hashed
//! variant like `<component>-3f9a1c.html`. The store resolves the exact name
//! first and falls back to the newest hashed variant in sorted order.
//!
//! Assets are read once at startup while the widget catalog is built. A
//! missing asset is a configuration error and must abort startup.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors that can occur while resolving widget assets.
#[derive(Debug, Error)]
pub enum AssetError {
    /// No HTML file for the component exists in the assets directory.
    #[error(
        "widget HTML for {component:?} not found in {dir:?}. \
         Build the widget bundle before starting the server"
    )]
    NotFound { component: String, dir: PathBuf },

    /// The asset file exists but could not be read.
    #[error("failed to read asset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolves widget HTML files from a build output directory.
pub struct AssetStore {
    dir: PathBuf,
}

impl AssetStore {
    /// Create a store rooted at the given assets directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store resolves assets from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the HTML body for a widget component.
    ///
    /// Resolution order: `<component>.html`, then the last `<component>-*.html`
    /// candidate in sorted order (hashed build outputs sort by hash, so "last"
    /// is merely deterministic, not newest-by-mtime).
    pub fn load_html(&self, component: &str) -> Result<String, AssetError> {
        let exact = self.dir.join(format!("{component}.html"));
        if exact.is_file() {
            debug!("Loading widget asset {:?}", exact);
            return read_asset(&exact);
        }

        if let Some(fallback) = self.latest_variant(component) {
            debug!("Loading hashed widget asset {:?}", fallback);
            return read_asset(&fallback);
        }

        Err(AssetError::NotFound {
            component: component.to_string(),
            dir: self.dir.clone(),
        })
    }

    /// Find the last sorted `<component>-*.html` variant, if any.
    fn latest_variant(&self, component: &str) -> Option<PathBuf> {
        let prefix = format!("{component}-");

        let entries = fs::read_dir(&self.dir).ok()?;
        let mut candidates: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix) && name.ends_with(".html"))
            })
            .collect();

        candidates.sort();
        candidates.pop()
    }
}

fn read_asset(path: &Path) -> Result<String, AssetError> {
    fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_exact_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pizzaz.html"), "<div>map</div>").unwrap();

        let store = AssetStore::new(dir.path());
        assert_eq!(store.load_html("pizzaz").unwrap(), "<div>map</div>");
    }

    #[test]
    fn test_exact_file_wins_over_variants() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pizzaz.html"), "exact").unwrap();
        fs::write(dir.path().join("pizzaz-abc123.html"), "hashed").unwrap();

        let store = AssetStore::new(dir.path());
        assert_eq!(store.load_html("pizzaz").unwrap(), "exact");
    }

    #[test]
    fn test_fallback_picks_last_sorted_variant() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("star-aaa.html"), "first").unwrap();
        fs::write(dir.path().join("star-zzz.html"), "last").unwrap();
        fs::write(dir.path().join("star-mmm.html"), "middle").unwrap();

        let store = AssetStore::new(dir.path());
        assert_eq!(store.load_html("star").unwrap(), "last");
    }

    #[test]
    fn test_fallback_ignores_other_components() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pizzaz-list-abc.html"), "list").unwrap();

        let store = AssetStore::new(dir.path());
        assert_eq!(store.load_html("pizzaz-list").unwrap(), "list");
        // "pizzaz-list-abc.html" also matches the "pizzaz-" prefix, so it
        // doubles as a variant of "pizzaz".
        assert!(store.load_html("pizzaz").is_ok());
    }

    #[test]
    fn test_missing_component_errors() {
        let dir = TempDir::new().unwrap();
        let store = AssetStore::new(dir.path());

        let err = store.load_html("nope").unwrap_err();
        assert!(matches!(err, AssetError::NotFound { .. }));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_missing_directory_errors() {
        let store = AssetStore::new("/nonexistent/assets/dir/12345");
        assert!(matches!(
            store.load_html("pizzaz"),
            Err(AssetError::NotFound { .. })
        ));
    }
}
