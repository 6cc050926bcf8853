use std::sync::RwLock;

use super::ApiKey;

/// Single-slot holder for the most recently fetched key.
///
/// Writes are last-write-wins; callers that need stronger ordering
/// between concurrent fetches must serialize them themselves.
#[derive(Debug, Default)]
pub struct ApiKeyCache {
    slot: RwLock<Option<ApiKey>>,
}

impl ApiKeyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: ApiKey) -> Self {
        Self {
            slot: RwLock::new(Some(key)),
        }
    }

    pub fn get(&self) -> Option<ApiKey> {
        match self.slot.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set(&self, key: ApiKey) {
        match self.slot.write() {
            Ok(mut guard) => *guard = Some(key),
            Err(poisoned) => *poisoned.into_inner() = Some(key),
        }
    }

    /// Drop the cached key, e.g. after a revoke
    pub fn clear(&self) {
        match self.slot.write() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.get().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_cache_starts_empty() {
        let cache = ApiKeyCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let cache = ApiKeyCache::new();
        cache.set(ApiKey::parse("AAAA").unwrap());
        cache.set(ApiKey::parse("BBBB").unwrap());

        assert_eq!(cache.get().unwrap().as_str(), "BBBB");
    }

    #[test]
    fn test_clear() {
        let cache = ApiKeyCache::with_key(ApiKey::parse("ABCD").unwrap());
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_writers() {
        let cache = Arc::new(ApiKeyCache::new());
        let keys = ["AAAA", "BBBB", "CCCC", "DDDD"];

        let handles: Vec<_> = keys
            .iter()
            .map(|k| {
                let cache = Arc::clone(&cache);
                let key = ApiKey::parse(*k).unwrap();
                std::thread::spawn(move || cache.set(key))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let stored = cache.get().unwrap();
        assert!(keys.contains(&stored.as_str()));
    }
}
