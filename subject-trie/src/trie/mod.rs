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

//! The subject trie: registration, removal and cached fan-out resolution.

mod level;
mod matching;

use tracing::{debug, trace, warn};

use crate::config::{RemovalPolicy, TrieConfig};
use crate::observability::{events, fields};
use crate::result_cache::{FanOut, ResultCache};
use crate::subject::tokenize;
use level::{Level, Removal};

const COMPONENT: &str = "subject_trie";

/// Wildcard-aware subscription trie with a front-end result cache.
///
/// Not internally synchronized; see [`crate::SharedSubjectTrie`] for a
/// reader/writer wrapper.
#[derive(Debug)]
pub struct SubjectTrie<S> {
    root: Level<S>,
    cache: ResultCache<S>,
    removal: RemovalPolicy,
    total_inserts: u64,
    live_subscriptions: usize,
}

impl<S: Clone + PartialEq> Default for SubjectTrie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + PartialEq> SubjectTrie<S> {
    /// Creates a trie with an enabled, unbounded cache that retains emptied nodes.
    pub fn new() -> Self {
        Self::with_config(&TrieConfig::default())
    }

    pub fn with_config(config: &TrieConfig) -> Self {
        Self {
            root: Level::default(),
            cache: ResultCache::new(config.cache.policy, config.cache.enabled),
            removal: config.removal,
            total_inserts: 0,
            live_subscriptions: 0,
        }
    }

    /// Registers `subscriber` under `subject`.
    ///
    /// The same subscriber may be inserted repeatedly; every insert is kept. A
    /// zero-token subject registers nothing.
    pub fn insert(&mut self, subject: &str, subscriber: S) {
        let tokens = tokenize(subject);
        if tokens.is_empty() {
            warn!(
                event = events::SUBSCRIPTION_INSERT_IGNORED,
                component = COMPONENT,
                subject = fields::format_subject(subject),
                reason = fields::REASON_ZERO_TOKENS,
                "ignoring insert for subject without tokens"
            );
            return;
        }

        self.root.insert_path(&tokens, subscriber);
        self.total_inserts += 1;
        self.live_subscriptions += 1;
        self.cache.invalidate();

        debug!(
            event = events::SUBSCRIPTION_INSERT,
            component = COMPONENT,
            subject,
            total_inserts = self.total_inserts,
            live_subscriptions = self.live_subscriptions,
            "subscription inserted"
        );
    }

    /// Removes one occurrence of `subscriber` registered under exactly `subject`.
    ///
    /// `subject` must be the pattern used at insert time. Returns `true` only when
    /// a subscriber was actually removed. The cache is invalidated either way.
    pub fn remove(&mut self, subject: &str, subscriber: &S) -> bool {
        let tokens = tokenize(subject);
        let prune = self.removal == RemovalPolicy::Prune;
        let outcome = self.root.remove_path(&tokens, subscriber, prune);
        self.cache.invalidate();

        match outcome {
            Removal::Removed { pruned_nodes } => {
                self.live_subscriptions -= 1;
                debug!(
                    event = events::SUBSCRIPTION_REMOVE_OK,
                    component = COMPONENT,
                    subject,
                    live_subscriptions = self.live_subscriptions,
                    "subscription removed"
                );
                if pruned_nodes > 0 {
                    debug!(
                        event = events::SUBSCRIPTION_PATH_PRUNED,
                        component = COMPONENT,
                        subject,
                        pruned_nodes,
                        "vacant nodes reclaimed"
                    );
                }
                true
            }
            Removal::PathAbsent | Removal::SubscriberAbsent => {
                let reason = if outcome == Removal::PathAbsent {
                    fields::REASON_PATH_ABSENT
                } else {
                    fields::REASON_SUBSCRIBER_ABSENT
                };
                debug!(
                    event = events::SUBSCRIPTION_REMOVE_MISS,
                    component = COMPONENT,
                    subject = fields::format_subject(subject),
                    reason,
                    "nothing removed"
                );
                false
            }
        }
    }

    /// Resolves `subject` to its fan-out set, serving and filling the cache.
    ///
    /// The result is a multiset in traversal order: duplicates are kept and the
    /// order carries no meaning.
    pub fn match_subject(&mut self, subject: &str) -> FanOut<S> {
        if let Some(hit) = self.lookup_cached(subject) {
            return hit;
        }

        let fan_out: FanOut<S> = self.match_uncached(subject).into();
        self.cache.store(subject, fan_out.clone());
        fan_out
    }

    /// Runs the matching algorithm without reading or writing the cache.
    pub fn match_uncached(&self, subject: &str) -> Vec<S> {
        let tokens = tokenize(subject);
        let mut out = Vec::new();
        matching::collect_matches(&self.root, &tokens, &mut out);
        trace!(
            event = events::MATCH_COMPUTED,
            component = COMPONENT,
            subject = fields::format_subject(subject),
            token_count = tokens.len(),
            fan_out = out.len(),
            "fan-out computed"
        );
        out
    }
}

impl<S> SubjectTrie<S> {
    /// Cached result for `subject`, if any, without refreshing its recency.
    pub fn cached(&self, subject: &str) -> Option<FanOut<S>> {
        self.cache.peek(subject)
    }

    /// Serves `subject` from the cache, counting the hit as a use for
    /// least-recently-used eviction.
    pub fn lookup_cached(&self, subject: &str) -> Option<FanOut<S>> {
        let hit = self.cache.get(subject)?;
        trace!(
            event = events::MATCH_CACHE_HIT,
            component = COMPONENT,
            subject,
            fan_out = hit.len(),
            "served from cache"
        );
        Some(hit)
    }

    /// Total successful inserts over the trie's lifetime; never decremented.
    pub fn count(&self) -> u64 {
        self.total_inserts
    }

    pub fn total_inserts(&self) -> u64 {
        self.total_inserts
    }

    /// Subscriptions currently registered: inserts minus effective removes.
    pub fn live_subscriptions(&self) -> usize {
        self.live_subscriptions
    }

    pub fn enable_cache(&mut self) {
        self.cache.enable();
    }

    pub fn disable_cache(&mut self) {
        self.cache.disable();
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn is_cache_enabled(&self) -> bool {
        self.cache.is_enabled()
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal
    }

    /// Nodes currently held by the tree, emptied ones included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Levels currently held by the tree, the root included.
    pub fn level_count(&self) -> usize {
        self.root.level_count()
    }
}
