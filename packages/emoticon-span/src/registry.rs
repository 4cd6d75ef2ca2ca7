//! Emoticon icon registry
//!
//! Maps emoticon keys (unicode sequences or shortcodes) to their icon
//! images and hands out ready-to-layout spans. Ownership follows the span
//! pipeline's single-threaded contract: mutation requires `&mut self`,
//! lookups are plain borrows.

use std::sync::Arc;

use ahash::AHashMap;
use peniko::Image;

use crate::error::SpanError;
use crate::span::EmoticonSpan;

/// Icon-image provider for emoticon spans.
#[derive(Debug, Default)]
pub struct EmoticonRegistry {
    icons: AHashMap<String, Arc<Image>>,
}

impl EmoticonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `image` as the icon for `key`, replacing any previous entry.
    pub fn register(&mut self, key: impl Into<String>, image: Arc<Image>) {
        self.icons.insert(key.into(), image);
    }

    /// Look up the icon registered for `key`.
    pub fn get(&self, key: &str) -> Option<&Arc<Image>> {
        let icon = self.icons.get(key);
        if icon.is_none() {
            log::debug!("no icon registered for emoticon {key:?}");
        }
        icon
    }

    /// Build a span rendering `key`'s icon in a `size` x `size` box.
    pub fn span_for(&self, key: &str, size: f32) -> Result<EmoticonSpan, SpanError> {
        let image = self
            .get(key)
            .ok_or_else(|| SpanError::IconNotFound(key.to_string()))?;
        EmoticonSpan::new(Arc::clone(image), size)
    }

    /// Number of registered emoticons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
