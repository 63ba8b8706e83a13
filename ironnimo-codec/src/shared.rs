//! Hot-swappable dictionary handle.
//!
//! A loaded [`Dictionary`] is never mutated. Reloading builds a new one and
//! swaps the shared reference; calls already holding the previous snapshot
//! finish against it.

use ironnimo_schema::Dictionary;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared, atomically replaceable reference to a [`Dictionary`].
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct SharedDictionary {
    current: Arc<RwLock<Arc<Dictionary>>>,
}

impl SharedDictionary {
    /// Creates a handle holding `dictionary`.
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(dictionary))),
        }
    }

    /// Returns a snapshot of the current dictionary.
    ///
    /// The read lock is held only while the `Arc` is cloned.
    #[must_use]
    pub fn load(&self) -> Arc<Dictionary> {
        Arc::clone(&self.current.read())
    }

    /// Installs a new dictionary and returns the previous one.
    pub fn replace(&self, dictionary: Dictionary) -> Arc<Dictionary> {
        tracing::debug!(
            "Reloading dictionary: {} services, {} messages",
            dictionary.services().len(),
            dictionary.message_count()
        );
        let next = Arc::new(dictionary);
        std::mem::replace(&mut *self.current.write(), next)
    }
}

impl From<Dictionary> for SharedDictionary {
    fn from(dictionary: Dictionary) -> Self {
        Self::new(dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironnimo_schema::{MessageDef, ServiceDef};

    fn dictionary(sin: u8) -> Dictionary {
        Dictionary::builder()
            .service(ServiceDef::new("svc", sin).returns(MessageDef::new("ping", 1)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let shared = SharedDictionary::new(dictionary(200));
        let before = shared.load();

        let previous = shared.replace(dictionary(201));
        assert!(Arc::ptr_eq(&before, &previous));
        assert!(before.service(200).is_some());

        let after = shared.load();
        assert!(after.service(200).is_none());
        assert!(after.service(201).is_some());
    }

    #[test]
    fn test_clones_share_slot() {
        let shared = SharedDictionary::new(dictionary(200));
        let other = shared.clone();
        shared.replace(dictionary(201));
        assert!(other.load().service(201).is_some());
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(SharedDictionary::default().load().message_count(), 0);
    }
}
