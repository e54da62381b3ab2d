//! Best-score tracking
//!
//! The store is read once when the tracker is built and written only when a
//! finished run beats the record. Storage problems never reach the player:
//! they are logged and the record lives on in memory for the session.

use crate::consts::HIGH_SCORE_KEY;
use crate::persistence::KeyValueStore;

/// Best score, backed by a key-value store
#[derive(Debug)]
pub struct HighScore<S: KeyValueStore> {
    best: u32,
    store: S,
}

impl<S: KeyValueStore> HighScore<S> {
    /// Read the stored record; absent, malformed or unreadable values count as 0
    pub fn load(store: S) -> Self {
        let best = match store.get(HIGH_SCORE_KEY) {
            Ok(Some(raw)) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                log::warn!("Ignoring malformed high score {:?}", raw);
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                log::warn!("High score unavailable, starting from 0: {}", e);
                0
            }
        };
        log::info!("Loaded high score {}", best);
        Self { best, store }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a finished run; returns true if it set a new record
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(e) = self.store.set(HIGH_SCORE_KEY, &score.to_string()) {
            log::warn!("Could not save high score {}: {}", score, e);
        } else {
            log::info!("New high score {}", score);
        }
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::persistence::MemoryStore;

    /// Backend that is never available
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("disabled".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disabled".into()))
        }
    }

    fn stored(value: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, value).unwrap();
        store
    }

    #[test]
    fn test_empty_store_starts_at_zero() {
        let scores = HighScore::load(MemoryStore::new());
        assert_eq!(scores.best(), 0);
    }

    #[test]
    fn test_reads_existing_record() {
        let scores = HighScore::load(stored("17"));
        assert_eq!(scores.best(), 17);
    }

    #[test]
    fn test_malformed_record_counts_as_absent() {
        assert_eq!(HighScore::load(stored("lots")).best(), 0);
        assert_eq!(HighScore::load(stored("-3")).best(), 0);
        assert_eq!(HighScore::load(stored("")).best(), 0);
    }

    #[test]
    fn test_record_keeps_maximum() {
        let mut scores = HighScore::load(stored("5"));
        assert!(!scores.record(3));
        assert!(!scores.record(5));
        assert_eq!(scores.store().get(HIGH_SCORE_KEY).unwrap().as_deref(), Some("5"));

        assert!(scores.record(8));
        assert_eq!(scores.best(), 8);
        assert_eq!(scores.store().get(HIGH_SCORE_KEY).unwrap().as_deref(), Some("8"));
    }

    #[test]
    fn test_broken_store_is_not_fatal() {
        let mut scores = HighScore::load(BrokenStore);
        assert_eq!(scores.best(), 0);
        assert!(scores.record(4));
        assert_eq!(scores.best(), 4);
        assert!(!scores.record(2));
    }
}
