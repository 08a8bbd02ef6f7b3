use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory key-value store
///
/// Every access goes through a single lock over the whole map. The lock is
/// held only for the lookup or insert itself, so a caller that is cancelled
/// while waiting for it has applied nothing.
pub struct Store {
    data: RwLock<HashMap<String, String>>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Set a key to the given value, replacing any previous value
    pub async fn set(&self, key: String, value: String) {
        let mut data = self.data.write().await;
        data.insert(key, value);
    }

    /// Get a copy of the value for a key
    pub async fn get(&self, key: &str) -> Option<String> {
        let data = self.data.read().await;
        data.get(key).cloned()
    }

    /// Number of keys currently held
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
