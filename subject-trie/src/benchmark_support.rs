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

//! Fixtures shared by the Criterion benchmarks.

use crate::config::{CachePolicy, TrieConfig};
use crate::result_cache::FanOut;
use crate::subscriber::SubscriberId;
use crate::trie::SubjectTrie;

const REGIONS: [&str; 4] = ["us", "eu", "ap", "sa"];

fn pattern_for(row: usize) -> String {
    let region = REGIONS[row % REGIONS.len()];
    match row % 4 {
        0 => format!("orders.{row}.{region}"),
        1 => format!("orders.*.{region}"),
        2 => format!("orders.{row}.>"),
        _ => format!("*.{row}.*"),
    }
}

/// A trie preloaded with `rows` mixed literal and wildcard subscriptions.
pub struct MatchFixture {
    trie: SubjectTrie<SubscriberId>,
    subjects: Vec<String>,
}

impl MatchFixture {
    pub fn new(rows: usize, cache_policy: CachePolicy) -> Self {
        let mut config = TrieConfig::default();
        config.cache.policy = cache_policy;
        let mut trie = SubjectTrie::with_config(&config);

        for row in 0..rows {
            trie.insert(&pattern_for(row), SubscriberId(row as u64));
        }
        let subjects = (0..rows)
            .map(|row| format!("orders.{row}.{}", REGIONS[row % REGIONS.len()]))
            .collect();

        Self { trie, subjects }
    }

    pub fn subjects(&self) -> usize {
        self.subjects.len()
    }

    /// Resolves the subject at `index` through the cache.
    pub fn match_cached(&mut self, index: usize) -> FanOut<SubscriberId> {
        let subject = &self.subjects[index % self.subjects.len()];
        self.trie.match_subject(subject)
    }

    /// Resolves the subject at `index` with the raw algorithm.
    pub fn match_uncached(&self, index: usize) -> usize {
        let subject = &self.subjects[index % self.subjects.len()];
        self.trie.match_uncached(subject).len()
    }

    /// Registers and unregisters one extra subscription, invalidating the cache twice.
    pub fn churn(&mut self, row: usize) -> bool {
        let pattern = pattern_for(row);
        let subscriber = SubscriberId(u64::MAX);
        self.trie.insert(&pattern, subscriber);
        self.trie.remove(&pattern, &subscriber)
    }
}
