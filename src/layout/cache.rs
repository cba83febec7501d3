use crate::{
    config::settings::DEFAULT_LAYOUT_KEY,
    foundation::core::Viewport,
    foundation::error::CalendarResult,
    layout::model::Layout,
    layout::store::KeyValueStore,
};

/// Persists the current [`Layout`] under one storage key.
///
/// Reads never fail: a missing, unreadable, unparsable or invalid entry is a miss.
#[derive(Debug)]
pub struct LayoutCache<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LayoutCache<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_LAYOUT_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[tracing::instrument(skip(self), fields(key = %self.key))]
    pub fn load(&self) -> Option<Layout> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "layout cache read failed, treating as miss");
                return None;
            }
        };
        let layout: Layout = match serde_json::from_str(&raw) {
            Ok(layout) => layout,
            Err(e) => {
                tracing::warn!(error = %e, "stored layout does not parse, treating as miss");
                return None;
            }
        };
        if let Err(e) = layout.validate() {
            tracing::warn!(error = %e, "stored layout is invalid, treating as miss");
            return None;
        }
        Some(layout)
    }

    /// Cached layout, only if it was computed for exactly `viewport`.
    pub fn load_for(&self, viewport: Viewport) -> Option<Layout> {
        self.load().filter(|l| l.viewport_size == viewport)
    }

    #[tracing::instrument(skip(self, layout), fields(key = %self.key))]
    pub fn save(&mut self, layout: &Layout) -> CalendarResult<()> {
        let json = serde_json::to_string(layout)?;
        self.store.set_item(&self.key, &json)
    }

    pub fn clear(&mut self) -> CalendarResult<()> {
        self.store.remove_item(&self.key)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cache.rs"]
mod tests;
