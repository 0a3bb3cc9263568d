/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Front-end memo of match results keyed by the exact subject string.

use lru::LruCache;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::config::CachePolicy;
use crate::observability::events;

const COMPONENT: &str = "result_cache";

/// Immutable fan-out snapshot shared between the cache and its callers.
pub type FanOut<S> = Arc<[S]>;

#[derive(Debug)]
enum CacheStore<S> {
    Unbounded(HashMap<String, FanOut<S>>),
    // Locked so shared readers can still record recency.
    Bounded(Mutex<LruCache<String, FanOut<S>>>),
}

impl<S> CacheStore<S> {
    fn new(policy: CachePolicy) -> Self {
        match policy {
            CachePolicy::Unbounded => Self::Unbounded(HashMap::new()),
            CachePolicy::Bounded { capacity } => {
                Self::Bounded(Mutex::new(LruCache::new(capacity)))
            }
        }
    }

    fn get(&self, subject: &str) -> Option<FanOut<S>> {
        match self {
            Self::Unbounded(entries) => entries.get(subject).cloned(),
            Self::Bounded(entries) => entries.lock().get(subject).cloned(),
        }
    }

    fn peek(&self, subject: &str) -> Option<FanOut<S>> {
        match self {
            Self::Unbounded(entries) => entries.get(subject).cloned(),
            Self::Bounded(entries) => entries.lock().peek(subject).cloned(),
        }
    }

    fn put(&mut self, subject: &str, fan_out: FanOut<S>) {
        match self {
            Self::Unbounded(entries) => {
                entries.insert(subject.to_owned(), fan_out);
            }
            Self::Bounded(entries) => {
                entries.get_mut().put(subject.to_owned(), fan_out);
            }
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Unbounded(entries) => entries.clear(),
            Self::Bounded(entries) => entries.get_mut().clear(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Unbounded(entries) => entries.len(),
            Self::Bounded(entries) => entries.lock().len(),
        }
    }
}

/// Result cache with an on/off switch.
///
/// A disabled cache holds no storage at all: lookups miss and stores are dropped.
/// Re-enabling always starts from an empty store.
#[derive(Debug)]
pub struct ResultCache<S> {
    policy: CachePolicy,
    store: Option<CacheStore<S>>,
}

impl<S> ResultCache<S> {
    pub fn new(policy: CachePolicy, enabled: bool) -> Self {
        Self {
            policy,
            store: enabled.then(|| CacheStore::new(policy)),
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Starts a fresh empty store. No-op when already enabled.
    pub fn enable(&mut self) {
        if self.store.is_none() {
            self.store = Some(CacheStore::new(self.policy));
            debug!(
                event = events::CACHE_ENABLED,
                component = COMPONENT,
                policy = ?self.policy,
                "result cache enabled"
            );
        }
    }

    /// Drops the store; subsequent matches always recompute.
    pub fn disable(&mut self) {
        if self.store.take().is_some() {
            debug!(
                event = events::CACHE_DISABLED,
                component = COMPONENT,
                "result cache disabled"
            );
        }
    }

    /// Drops every entry without changing the enabled state.
    pub fn clear(&mut self) {
        if let Some(store) = self.store.as_mut() {
            let cached_entries = store.len();
            store.clear();
            debug!(
                event = events::CACHE_CLEARED,
                component = COMPONENT,
                cached_entries,
                "result cache cleared"
            );
        }
    }

    /// Wholesale invalidation after a trie mutation.
    pub(crate) fn invalidate(&mut self) {
        if let Some(store) = self.store.as_mut() {
            let cached_entries = store.len();
            if cached_entries > 0 {
                store.clear();
                trace!(
                    event = events::CACHE_INVALIDATED,
                    component = COMPONENT,
                    cached_entries,
                    "result cache invalidated by mutation"
                );
            }
        }
    }

    /// Looks up a subject, refreshing its recency under the bounded policy.
    ///
    /// Takes `&self` so callers holding only shared access still keep the
    /// bounded store in least-recently-used order.
    pub fn get(&self, subject: &str) -> Option<FanOut<S>> {
        self.store.as_ref().and_then(|store| store.get(subject))
    }

    /// Looks up a subject without touching recency.
    pub fn peek(&self, subject: &str) -> Option<FanOut<S>> {
        self.store.as_ref().and_then(|store| store.peek(subject))
    }

    pub fn store(&mut self, subject: &str, fan_out: FanOut<S>) {
        if let Some(store) = self.store.as_mut() {
            store.put(subject, fan_out);
        }
    }

    pub fn len(&self) -> usize {
        self.store.as_ref().map_or(0, CacheStore::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::{FanOut, ResultCache};
    use crate::config::CachePolicy;

    fn fan_out(ids: &[u64]) -> FanOut<u64> {
        ids.to_vec().into()
    }

    fn lru(capacity: usize) -> CachePolicy {
        CachePolicy::bounded(capacity).expect("non-zero capacity")
    }

    #[test]
    fn disabled_cache_never_stores() {
        let mut cache = ResultCache::new(CachePolicy::Unbounded, false);
        cache.store("a.b", fan_out(&[1]));

        assert!(!cache.is_enabled());
        assert!(cache.get("a.b").is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn enable_starts_empty_and_is_idempotent() {
        let mut cache = ResultCache::new(CachePolicy::Unbounded, true);
        cache.store("a.b", fan_out(&[1]));

        cache.enable();
        assert_eq!(cache.len(), 1);

        cache.disable();
        cache.enable();
        assert!(cache.is_enabled());
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_keeps_enabled_state() {
        let mut cache = ResultCache::new(CachePolicy::Unbounded, true);
        cache.store("a.b", fan_out(&[1, 2]));
        cache.clear();

        assert!(cache.is_enabled());
        assert!(cache.peek("a.b").is_none());

        let mut disabled = ResultCache::<u64>::new(CachePolicy::Unbounded, false);
        disabled.clear();
        assert!(!disabled.is_enabled());
    }

    #[test]
    fn cached_snapshot_is_shared_not_copied() {
        let mut cache = ResultCache::new(CachePolicy::Unbounded, true);
        let stored = fan_out(&[7, 7, 8]);
        cache.store("x", stored.clone());

        let fetched = cache.get("x").expect("entry should be cached");
        assert!(std::sync::Arc::ptr_eq(&stored, &fetched));
    }

    #[test]
    fn bounded_policy_evicts_least_recently_used() {
        let mut cache = ResultCache::new(lru(2), true);
        cache.store("a", fan_out(&[1]));
        cache.store("b", fan_out(&[2]));

        // Touch "a" so "b" becomes the eviction candidate.
        assert!(cache.get("a").is_some());
        cache.store("c", fan_out(&[3]));

        assert_eq!(cache.len(), 2);
        assert!(cache.peek("a").is_some());
        assert!(cache.peek("b").is_none());
        assert!(cache.peek("c").is_some());
    }

    #[test]
    fn shared_reference_lookup_refreshes_recency() {
        let mut cache = ResultCache::new(lru(2), true);
        cache.store("a", fan_out(&[1]));
        cache.store("b", fan_out(&[2]));

        let reader = &cache;
        assert!(reader.get("a").is_some());
        cache.store("c", fan_out(&[3]));

        assert!(cache.peek("a").is_some());
        assert!(cache.peek("b").is_none());
    }

    #[test]
    fn peek_does_not_refresh_recency() {
        let mut cache = ResultCache::new(lru(2), true);
        cache.store("a", fan_out(&[1]));
        cache.store("b", fan_out(&[2]));

        assert!(cache.peek("a").is_some());
        cache.store("c", fan_out(&[3]));

        assert!(cache.peek("a").is_none());
        assert!(cache.peek("b").is_some());
    }

    #[test]
    fn invalidate_empties_enabled_store() {
        let mut cache = ResultCache::new(lru(4), true);
        cache.store("a", fan_out(&[1]));
        cache.invalidate();

        assert!(cache.is_enabled());
        assert!(cache.is_empty());
    }
}
