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

//! Reader/writer wrapper for sharing one trie across threads.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

use crate::config::TrieConfig;
use crate::observability::events;
use crate::result_cache::FanOut;
use crate::trie::SubjectTrie;

const COMPONENT: &str = "shared_subject_trie";

struct SharedState<S> {
    trie: RwLock<SubjectTrie<S>>,
    version: AtomicU64,
}

/// Thread-safe handle over a [`SubjectTrie`].
///
/// Cache hits, and every match while the cache is disabled, run under the shared
/// read lock; hits still refresh recency in a bounded cache. Cache misses, inserts
/// and removes take the exclusive write lock. Each insert/remove advances a
/// mutation version that is reported alongside match results. Clones share the
/// same trie.
pub struct SharedSubjectTrie<S> {
    inner: Arc<SharedState<S>>,
}

impl<S> Clone for SharedSubjectTrie<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Clone + PartialEq> Default for SharedSubjectTrie<S> {
    fn default() -> Self {
        Self::new(SubjectTrie::new())
    }
}

impl<S: Clone + PartialEq> SharedSubjectTrie<S> {
    pub fn new(trie: SubjectTrie<S>) -> Self {
        Self {
            inner: Arc::new(SharedState {
                trie: RwLock::new(trie),
                version: AtomicU64::new(0),
            }),
        }
    }

    pub fn with_config(config: &TrieConfig) -> Self {
        Self::new(SubjectTrie::with_config(config))
    }

    pub fn insert(&self, subject: &str, subscriber: S) {
        let mut trie = self.inner.trie.write();
        trie.insert(subject, subscriber);
        self.advance_version();
    }

    pub fn remove(&self, subject: &str, subscriber: &S) -> bool {
        let mut trie = self.inner.trie.write();
        let removed = trie.remove(subject, subscriber);
        self.advance_version();
        removed
    }

    pub fn match_subject(&self, subject: &str) -> FanOut<S> {
        self.match_with_version(subject).1
    }

    /// Resolves `subject` and returns the mutation version the result reflects.
    pub fn match_with_version(&self, subject: &str) -> (u64, FanOut<S>) {
        {
            let trie = self.inner.trie.read();
            if let Some(hit) = trie.lookup_cached(subject) {
                return (self.version(), hit);
            }
            if !trie.is_cache_enabled() {
                return (self.version(), trie.match_uncached(subject).into());
            }
        }

        trace!(
            event = events::MATCH_CACHE_MISS,
            component = COMPONENT,
            subject,
            "escalating to write lock"
        );
        let mut trie = self.inner.trie.write();
        let fan_out = trie.match_subject(subject);
        (self.version(), fan_out)
    }
}

impl<S> SharedSubjectTrie<S> {
    /// Current mutation version; starts at 0.
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Acquire)
    }

    pub fn count(&self) -> u64 {
        self.inner.trie.read().count()
    }

    pub fn live_subscriptions(&self) -> usize {
        self.inner.trie.read().live_subscriptions()
    }

    pub fn enable_cache(&self) {
        self.inner.trie.write().enable_cache();
    }

    pub fn disable_cache(&self) {
        self.inner.trie.write().disable_cache();
    }

    pub fn clear_cache(&self) {
        self.inner.trie.write().clear_cache();
    }

    /// Cached result for `subject` without refreshing its recency.
    pub fn cached(&self, subject: &str) -> Option<FanOut<S>> {
        self.inner.trie.read().cached(subject)
    }

    pub fn is_cache_enabled(&self) -> bool {
        self.inner.trie.read().is_cache_enabled()
    }

    /// Must be called with the write lock held so readers never observe a
    /// version newer than the trie state they are reading.
    fn advance_version(&self) {
        let snapshot_version = self.inner.version.fetch_add(1, Ordering::AcqRel) + 1;
        trace!(
            event = events::SHARED_VERSION_ADVANCED,
            component = COMPONENT,
            snapshot_version,
            "mutation version advanced"
        );
    }
}
