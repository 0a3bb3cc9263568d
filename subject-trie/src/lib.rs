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

//! # subject-trie
//!
//! `subject-trie` is the subject-matching core of a publish/subscribe router: it
//! resolves a published subject to every subscriber whose pattern matches it.
//!
//! Subjects are `.`-delimited token sequences. Subscription patterns may use `*`
//! (exactly one token) and `>` (one or more trailing tokens).
//!
//! ```
//! use subject_trie::{validate_pattern, validate_subject, SubjectTrie, SubscriberId};
//!
//! let mut trie = SubjectTrie::new();
//! for (pattern, id) in [("orders.*", 1), ("orders.created", 2), ("orders.>", 3)] {
//!     validate_pattern(pattern).unwrap();
//!     trie.insert(pattern, SubscriberId(id));
//! }
//!
//! validate_subject("orders.created").unwrap();
//! let mut fan_out = trie.match_subject("orders.created").to_vec();
//! fan_out.sort();
//! assert_eq!(fan_out, vec![SubscriberId(1), SubscriberId(2), SubscriberId(3)]);
//!
//! // Removal targets the registered pattern, not a concrete subject.
//! assert!(!trie.remove("orders.created", &SubscriberId(1)));
//! assert!(trie.remove("orders.*", &SubscriberId(1)));
//! assert_eq!(trie.count(), 3);
//! assert_eq!(trie.live_subscriptions(), 2);
//! ```
//!
//! ## Sharing across threads
//!
//! [`SubjectTrie`] performs no locking. [`SharedSubjectTrie`] serves cache hits
//! under a read lock and serializes mutations under a write lock.
//!
//! ```
//! use std::thread;
//! use subject_trie::{SharedSubjectTrie, SubscriberId};
//!
//! let shared = SharedSubjectTrie::default();
//! shared.insert("sensors.>", SubscriberId(1));
//!
//! thread::scope(|scope| {
//!     let reader = shared.clone();
//!     scope.spawn(move || {
//!         assert_eq!(&*reader.match_subject("sensors.temp"), &[SubscriberId(1)]);
//!     });
//! });
//! ```
//!
//! ## Internal architecture map
//!
//! - Subject: tokenization and wildcard classification
//! - Validation: caller-side checks, never invoked by the trie itself
//! - Trie: owning level/node tree, insert/remove, recursive matching
//! - Result cache: exact-subject memo, unbounded or LRU-bounded, cleared on every mutation
//! - Shared: reader/writer wrapper with a mutation version
//!
//! ## Observability model
//!
//! Library code emits `tracing` events carrying `event` and `component` fields and
//! never initializes a global subscriber. Binaries and tests own the one-time
//! `tracing_subscriber` setup.

mod config;
pub use config::{CacheConfig, CachePolicy, RemovalPolicy, TrieConfig, DEFAULT_CACHE_CAPACITY};

mod result_cache;
pub use result_cache::{FanOut, ResultCache};

mod shared;
pub use shared::SharedSubjectTrie;

pub mod subject;

mod subscriber;
pub use subscriber::SubscriberId;

mod trie;
pub use trie::SubjectTrie;

mod validation;
pub use validation::{validate_pattern, validate_subject, SubjectError};

#[doc(hidden)]
pub mod benchmark_support;
#[doc(hidden)]
pub mod observability;
