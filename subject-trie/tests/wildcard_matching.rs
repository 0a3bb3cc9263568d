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

mod support;

use subject_trie::SubscriberId;
use support::{assert_matches, trie_with};

#[test]
fn multi_wildcard_matches_one_or_more_trailing_tokens() {
    let mut trie = trie_with(&[("a.>", 1)]);

    assert_matches(&mut trie, "a.b", &[1]);
    assert_matches(&mut trie, "a.b.c", &[1]);
    assert_matches(&mut trie, "a.b.c.d", &[1]);
    assert_matches(&mut trie, "a", &[]);
    assert_matches(&mut trie, "x.b", &[]);
}

#[test]
fn single_wildcard_matches_exactly_one_token() {
    let mut trie = trie_with(&[("a.*.c", 1)]);

    assert_matches(&mut trie, "a.b.c", &[1]);
    assert_matches(&mut trie, "a.x.c", &[1]);
    assert_matches(&mut trie, "a.b.b.c", &[]);
    assert_matches(&mut trie, "a.c", &[]);
}

#[test]
fn literal_pattern_matches_only_itself() {
    let mut trie = trie_with(&[("a.b.c", 1)]);

    assert_matches(&mut trie, "a.b.c", &[1]);
    assert_matches(&mut trie, "a.b", &[]);
    assert_matches(&mut trie, "a.b.c.d", &[]);
    assert_matches(&mut trie, "a.b.x", &[]);
    assert_matches(&mut trie, "x.b.c", &[]);
}

#[test]
fn overlapping_wildcard_and_literal_yield_two_element_multiset() {
    let mut trie = trie_with(&[("foo.*", 1), ("foo.bar", 2)]);

    let fan_out = trie.match_subject("foo.bar");
    assert_eq!(fan_out.len(), 2);
    assert_matches(&mut trie, "foo.bar", &[1, 2]);
    assert_matches(&mut trie, "foo.baz", &[1]);
}

#[test]
fn mixed_patterns_resolve_every_matching_branch() {
    let mut trie = trie_with(&[
        ("orders.created.us", 1),
        ("orders.*.us", 2),
        ("orders.>", 3),
        ("*.created.*", 4),
        (">", 5),
        ("orders.created", 6),
    ]);

    assert_matches(&mut trie, "orders.created.us", &[1, 2, 3, 4, 5]);
    assert_matches(&mut trie, "orders.created", &[3, 5, 6]);
    assert_matches(&mut trie, "orders", &[5]);
    assert_matches(&mut trie, "billing.created.eu", &[4, 5]);
}

#[test]
fn duplicate_registrations_are_not_deduplicated() {
    let mut trie = trie_with(&[("a.b", 1), ("a.b", 1), ("a.*", 1)]);

    assert_matches(&mut trie, "a.b", &[1, 1, 1]);

    assert!(trie.remove("a.b", &SubscriberId(1)));
    assert_matches(&mut trie, "a.b", &[1, 1]);
}

#[test]
fn insert_then_remove_drops_subscriber_from_fan_out() {
    let mut trie = trie_with(&[("a.*.c", 1), ("a.b.c", 2)]);

    assert!(trie.remove("a.*.c", &SubscriberId(1)));
    assert_matches(&mut trie, "a.b.c", &[2]);
    assert!(!trie.remove("a.*.c", &SubscriberId(1)));
}

#[test]
fn removal_on_unknown_path_is_a_silent_no_op() {
    let mut trie = trie_with(&[("a.b", 1)]);

    assert!(!trie.remove("x.y.z", &SubscriberId(1)));
    assert!(!trie.remove("a.b.c", &SubscriberId(1)));
    assert!(!trie.remove("", &SubscriberId(1)));
    assert_matches(&mut trie, "a.b", &[1]);
}

#[test]
fn empty_subject_matches_nothing() {
    let mut trie = trie_with(&[(">", 1), ("*", 2)]);

    assert_matches(&mut trie, "", &[]);
    assert_matches(&mut trie, "a", &[1, 2]);
}

#[test]
fn empty_tokens_are_distinct_literals() {
    let mut trie = trie_with(&[("a..c", 1), ("a.*.c", 2), ("a.b.c", 3)]);

    assert_matches(&mut trie, "a..c", &[1, 2]);
    assert_matches(&mut trie, "a.b.c", &[2, 3]);
}

#[test]
fn wildcards_in_published_subjects_are_not_expanded() {
    let mut trie = trie_with(&[("a.b", 1), ("a.*", 2)]);

    assert_matches(&mut trie, "a.*", &[2]);
    assert_matches(&mut trie, "a.>", &[2]);
}

#[test]
fn count_reports_lifetime_inserts_and_live_count_tracks_removes() {
    let mut trie = trie_with(&[("a", 1), ("b", 2), ("c", 3)]);

    assert!(trie.remove("a", &SubscriberId(1)));
    assert!(trie.remove("b", &SubscriberId(2)));

    assert_eq!(trie.count(), 3);
    assert_eq!(trie.live_subscriptions(), 1);
}
