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

use subject_trie::{SubjectTrie, SubscriberId};

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[allow(dead_code)]
pub(crate) fn trie_with(patterns: &[(&str, u64)]) -> SubjectTrie<SubscriberId> {
    init_tracing();
    let mut trie = SubjectTrie::new();
    for (pattern, id) in patterns {
        trie.insert(pattern, SubscriberId(*id));
    }
    trie
}

/// Fan-out as a sorted multiset of raw ids.
pub(crate) fn multiset(fan_out: &[SubscriberId]) -> Vec<u64> {
    let mut ids: Vec<u64> = fan_out.iter().map(|id| id.0).collect();
    ids.sort_unstable();
    ids
}

#[allow(dead_code)]
pub(crate) fn assert_matches(
    trie: &mut SubjectTrie<SubscriberId>,
    subject: &str,
    expected: &[u64],
) {
    let mut expected = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(
        multiset(&trie.match_subject(subject)),
        expected,
        "unexpected fan-out for subject '{subject}'"
    );
}
