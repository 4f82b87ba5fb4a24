//! Keyed response cache standing in for a data-fetching query layer.
//!
//! Responses are stored as JSON values under a [`QueryKey`], so one cache can
//! hold every reference-data shape the flow reads. Only successful responses
//! are cached.

use std::cell::RefCell;
use std::future::Future;
use std::num::NonZeroUsize;
use std::rc::Rc;

use lru::LruCache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::errors::ClientResult;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum QueryKey {
    Categories,
    FollowingList(u64),
    ListDetail(u64),
}

#[derive(Clone)]
pub struct QueryClient {
    cache: Rc<RefCell<LruCache<QueryKey, serde_json::Value>>>,
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cache, &other.cache)
    }
}

impl QueryClient {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            cache: Rc::new(RefCell::new(LruCache::new(capacity))),
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let cached = self.cache.borrow_mut().get(key).cloned()?;
        match serde_json::from_value(cached) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Dropping undecodable cache entry {:?}: {}", key, e);
                self.cache.borrow_mut().pop(key);
                None
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: QueryKey, value: &T) -> ClientResult<()> {
        let json = serde_json::to_value(value)?;
        self.cache.borrow_mut().put(key, json);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Returns the cached value for `key`, or runs `fetch` and caches its success.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetch: F) -> ClientResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        if let Some(value) = self.get(&key) {
            debug!("Query cache hit: {:?}", key);
            return Ok(value);
        }

        debug!("Query cache miss: {:?}", key);
        let value = fetch().await?;
        self.set(key, &value)?;
        Ok(value)
    }
}
