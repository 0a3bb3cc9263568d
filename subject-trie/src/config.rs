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

//! Engine settings, deserializable from the router's JSON5 file.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Capacity the bounded cache uses when none is configured.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TrieConfig {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub removal: RemovalPolicy,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub policy: CachePolicy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            policy: CachePolicy::default(),
        }
    }
}

fn enabled_by_default() -> bool {
    true
}

/// Storage strategy for memoized match results.
///
/// Both variants are cleared wholesale on every insert and remove; `Bounded`
/// additionally evicts the least recently used subject once `capacity` is reached.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CachePolicy {
    #[default]
    Unbounded,
    Bounded { capacity: NonZeroUsize },
}

impl CachePolicy {
    /// LRU-bounded policy holding at most `capacity` subjects.
    ///
    /// Returns `None` for a zero capacity; no bound is ever assumed on the
    /// caller's behalf.
    pub fn bounded(capacity: usize) -> Option<Self> {
        NonZeroUsize::new(capacity).map(|capacity| Self::Bounded { capacity })
    }
}

/// What `remove` does with nodes whose leaf set and continuation become empty.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Leave emptied nodes and levels in place.
    #[default]
    Retain,
    /// Reclaim vacant nodes and levels bottom-up along the removed path.
    Prune,
}
