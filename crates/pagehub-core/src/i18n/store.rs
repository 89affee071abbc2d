//! Process-wide locale table.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use thiserror::Error;
use tracing::info;

/// `locale -> (key -> template)`
type Catalog = HashMap<String, HashMap<String, String>>;

/// Failure while loading a locale definition.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The locale file does not exist.
    #[error("localization file not found at path: {}", .path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// The locale file exists but could not be read.
    #[error("failed to read locales file {}: {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The content is not a `locale -> key -> template` JSON object.
    #[error("failed to parse locales definition: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Message table shared by every request.
///
/// Read-mostly: the table is replaced wholesale by [`LocaleStore::load_str`]
/// (last write wins, no merge) and otherwise only read. Both the table and
/// the default locale sit behind reader/writer locks.
#[derive(Debug)]
pub struct LocaleStore {
    catalog: RwLock<Catalog>,
    default_locale: RwLock<String>,
}

impl LocaleStore {
    /// Creates an empty store with the given fallback locale.
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            catalog: RwLock::new(HashMap::new()),
            default_locale: RwLock::new(default_locale.into()),
        }
    }

    /// Creates a store and loads the given JSON definition into it.
    pub fn from_json(source: &str, default_locale: impl Into<String>) -> Result<Self, LoadError> {
        let store = Self::new(default_locale);
        store.load_str(source)?;
        Ok(store)
    }

    /// Loads the locale definition file at `path`, replacing the current table.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LoadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        self.load_str(&raw)?;
        info!(path = %path.display(), "Locale definition loaded");
        Ok(())
    }

    /// Parses a JSON definition and replaces the current table with it.
    ///
    /// On error the previous table is left untouched.
    pub fn load_str(&self, source: &str) -> Result<(), LoadError> {
        let catalog: Catalog = serde_json::from_str(source).map_err(LoadError::Malformed)?;
        let locales = catalog.len();

        *self
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner) = catalog;

        info!(locales, "Locale catalog replaced");
        Ok(())
    }

    /// Replaces the fallback locale used when a caller does not name one.
    pub fn set_default_locale(&self, locale: impl Into<String>) {
        *self
            .default_locale
            .write()
            .unwrap_or_else(PoisonError::into_inner) = locale.into();
    }

    /// Returns the current fallback locale.
    pub fn default_locale(&self) -> String {
        self.default_locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns whether the table has a section for `locale`.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.read_catalog().contains_key(locale)
    }

    /// Returns the loaded locales, sorted.
    pub fn locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.read_catalog().keys().cloned().collect();
        locales.sort();
        locales
    }

    /// Resolves `key` under `locale`, substituting `{0}`, `{1}`, … with
    /// `placeholders`.
    ///
    /// A placeholder that is itself a key of the same locale is replaced by
    /// its template. Unknown locales and keys resolve to `key` verbatim.
    pub fn lookup(&self, locale: &str, key: &str, placeholders: &[&str]) -> String {
        let catalog = self.read_catalog();

        match catalog
            .get(locale)
            .and_then(|messages| messages.get(key).map(|template| (messages, template)))
        {
            Some((messages, template)) => substitute(template, messages, placeholders),
            None => key.to_string(),
        }
    }

    /// Picks the locale for an `Accept-Language` header value.
    ///
    /// Language ranges are tried in header order; each matches either
    /// exactly or by its primary subtag (`ar-EG` -> `ar`). A missing or
    /// empty header, or one with no loaded match, yields the default locale.
    pub fn negotiate(&self, accept_language: Option<&str>) -> String {
        let Some(header) = accept_language.map(str::trim).filter(|h| !h.is_empty()) else {
            return self.default_locale();
        };

        let catalog = self.read_catalog();
        for range in header.split(',') {
            let tag = range.split(';').next().unwrap_or_default().trim();
            if tag.is_empty() || tag == "*" {
                continue;
            }
            if catalog.contains_key(tag) {
                return tag.to_string();
            }
            let primary = tag
                .split(['-', '_'])
                .next()
                .unwrap_or_default()
                .to_ascii_lowercase();
            if catalog.contains_key(&primary) {
                return primary;
            }
        }
        drop(catalog);

        self.default_locale()
    }

    fn read_catalog(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }
}

fn substitute(template: &str, messages: &HashMap<String, String>, placeholders: &[&str]) -> String {
    let mut message = template.to_string();
    for (index, placeholder) in placeholders.iter().copied().enumerate() {
        let token = format!("{{{index}}}");
        let value = messages
            .get(placeholder)
            .map(String::as_str)
            .unwrap_or(placeholder);
        message = message.replace(&token, value);
    }
    message
}
