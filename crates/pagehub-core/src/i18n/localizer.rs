use std::sync::Arc;

use super::store::LocaleStore;

/// Request-scoped view of the [`LocaleStore`] bound to one locale.
///
/// Built once per request from its `Accept-Language` header and passed by
/// reference to everything that produces user-facing text.
#[derive(Debug, Clone)]
pub struct Localizer {
    store: Arc<LocaleStore>,
    locale: String,
}

impl Localizer {
    /// Binds `store` to an explicit locale.
    pub fn new(store: Arc<LocaleStore>, locale: impl Into<String>) -> Self {
        Self {
            store,
            locale: locale.into(),
        }
    }

    /// Binds `store` to its current default locale.
    pub fn for_default(store: Arc<LocaleStore>) -> Self {
        let locale = store.default_locale();
        Self { store, locale }
    }

    /// Binds `store` to the best match for an `Accept-Language` value.
    pub fn negotiate(store: Arc<LocaleStore>, accept_language: Option<&str>) -> Self {
        let locale = store.negotiate(accept_language);
        Self { store, locale }
    }

    /// The locale this handle resolves against.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The underlying shared store.
    pub fn store(&self) -> &Arc<LocaleStore> {
        &self.store
    }

    /// Resolves `key` without placeholders.
    pub fn text(&self, key: &str) -> String {
        self.store.lookup(&self.locale, key, &[])
    }

    /// Resolves `key`, substituting `{0}`, `{1}`, … positionally.
    pub fn text_with(&self, key: &str, placeholders: &[&str]) -> String {
        self.store.lookup(&self.locale, key, placeholders)
    }
}
