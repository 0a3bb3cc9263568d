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

//! Owning tree of levels and nodes.
//!
//! A [`Level`] exclusively owns its literal children plus at most one
//! single-wildcard and one multi-wildcard child. A [`Node`] exclusively owns at
//! most one continuation level. There are no back-pointers.

use std::collections::HashMap;

use crate::subject::Token;

/// Result of resolving and editing one removal path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Removal {
    PathAbsent,
    SubscriberAbsent,
    Removed { pruned_nodes: usize },
}

impl Removal {
    pub(crate) fn is_removed(&self) -> bool {
        matches!(self, Removal::Removed { .. })
    }
}

/// One token position in a registered pattern path.
#[derive(Debug)]
pub(crate) struct Node<S> {
    subscribers: Vec<S>,
    next: Option<Box<Level<S>>>,
}

impl<S> Default for Node<S> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            next: None,
        }
    }
}

impl<S> Node<S> {
    /// Subscribers registered exactly at this path, in insertion order.
    pub(crate) fn subscribers(&self) -> &[S] {
        &self.subscribers
    }

    pub(crate) fn next_level(&self) -> Option<&Level<S>> {
        self.next.as_deref()
    }

    fn next_level_or_create(&mut self) -> &mut Level<S> {
        self.next.get_or_insert_with(Box::default)
    }

    fn is_vacant(&self) -> bool {
        self.subscribers.is_empty() && self.next.is_none()
    }
}

impl<S: PartialEq> Node<S> {
    /// Drops the first occurrence of `subscriber`; duplicates stay registered.
    fn remove_subscriber(&mut self, subscriber: &S) -> Removal {
        match self.subscribers.iter().position(|s| s == subscriber) {
            Some(index) => {
                self.subscribers.remove(index);
                Removal::Removed { pruned_nodes: 0 }
            }
            None => Removal::SubscriberAbsent,
        }
    }
}

/// The set of possible next tokens at one depth.
#[derive(Debug)]
pub(crate) struct Level<S> {
    literals: HashMap<String, Node<S>>,
    single_wildcard: Option<Box<Node<S>>>,
    multi_wildcard: Option<Box<Node<S>>>,
}

impl<S> Default for Level<S> {
    fn default() -> Self {
        Self {
            literals: HashMap::new(),
            single_wildcard: None,
            multi_wildcard: None,
        }
    }
}

impl<S> Level<S> {
    pub(crate) fn literal(&self, token: &str) -> Option<&Node<S>> {
        self.literals.get(token)
    }

    pub(crate) fn single_wildcard(&self) -> Option<&Node<S>> {
        self.single_wildcard.as_deref()
    }

    pub(crate) fn multi_wildcard(&self) -> Option<&Node<S>> {
        self.multi_wildcard.as_deref()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.single_wildcard.is_none() && self.multi_wildcard.is_none()
    }

    /// Nodes reachable from this level, including nested levels.
    pub(crate) fn node_count(&self) -> usize {
        self.children()
            .map(|node| 1 + node.next_level().map_or(0, Level::node_count))
            .sum()
    }

    /// This level plus every nested continuation level.
    pub(crate) fn level_count(&self) -> usize {
        1 + self
            .children()
            .filter_map(Node::next_level)
            .map(Level::level_count)
            .sum::<usize>()
    }

    /// Appends `subscriber` at the end of `tokens`, creating missing nodes and levels.
    ///
    /// `tokens` must be non-empty.
    pub(crate) fn insert_path(&mut self, tokens: &[&str], subscriber: S) {
        let Some((last, prefix)) = tokens.split_last() else {
            return;
        };

        let mut level = self;
        for raw in prefix {
            level = level
                .child_or_create(Token::from(*raw))
                .next_level_or_create();
        }
        level
            .child_or_create(Token::from(*last))
            .subscribers
            .push(subscriber);
    }

    fn children(&self) -> impl Iterator<Item = &Node<S>> {
        self.literals
            .values()
            .chain(self.single_wildcard.as_deref())
            .chain(self.multi_wildcard.as_deref())
    }

    fn child_mut(&mut self, token: Token<'_>) -> Option<&mut Node<S>> {
        match token {
            Token::Literal(literal) => self.literals.get_mut(literal),
            Token::SingleWildcard => self.single_wildcard.as_deref_mut(),
            Token::MultiWildcard => self.multi_wildcard.as_deref_mut(),
        }
    }

    fn child_or_create(&mut self, token: Token<'_>) -> &mut Node<S> {
        match token {
            Token::Literal(literal) => self.literals.entry(literal.to_owned()).or_default(),
            Token::SingleWildcard => self.single_wildcard.get_or_insert_with(Box::default).as_mut(),
            Token::MultiWildcard => self.multi_wildcard.get_or_insert_with(Box::default).as_mut(),
        }
    }

    fn detach(&mut self, token: Token<'_>) {
        match token {
            Token::Literal(literal) => {
                self.literals.remove(literal);
            }
            Token::SingleWildcard => self.single_wildcard = None,
            Token::MultiWildcard => self.multi_wildcard = None,
        }
    }
}

impl<S: PartialEq> Level<S> {
    /// Resolves `tokens` without creating anything and removes one occurrence of
    /// `subscriber` from the terminal node.
    ///
    /// With `prune` set, nodes left without subscribers and without a
    /// continuation are detached on the way back up, and emptied levels dropped.
    pub(crate) fn remove_path(&mut self, tokens: &[&str], subscriber: &S, prune: bool) -> Removal {
        let Some((first, rest)) = tokens.split_first() else {
            return Removal::PathAbsent;
        };
        let token = Token::from(*first);
        let Some(node) = self.child_mut(token) else {
            return Removal::PathAbsent;
        };

        let mut outcome = if rest.is_empty() {
            node.remove_subscriber(subscriber)
        } else {
            match node.next.as_deref_mut() {
                None => Removal::PathAbsent,
                Some(next) => {
                    let outcome = next.remove_path(rest, subscriber, prune);
                    if prune && outcome.is_removed() && next.is_empty() {
                        node.next = None;
                    }
                    outcome
                }
            }
        };

        if prune && node.is_vacant() {
            if let Removal::Removed { pruned_nodes } = &mut outcome {
                self.detach(token);
                *pruned_nodes += 1;
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::{Level, Removal};
    use crate::subject::tokenize;

    fn level_with(paths: &[(&str, u32)]) -> Level<u32> {
        let mut level = Level::default();
        for (path, subscriber) in paths {
            level.insert_path(&tokenize(path), *subscriber);
        }
        level
    }

    #[test]
    fn insert_creates_nodes_lazily_and_shares_prefixes() {
        let level = level_with(&[("a.b", 1), ("a.c", 2), ("a.*", 3)]);

        assert_eq!(level.node_count(), 4);
        assert_eq!(level.level_count(), 2);

        let a = level.literal("a").expect("literal a");
        let next = a.next_level().expect("a continues");
        assert_eq!(next.literal("b").map(|n| n.subscribers()), Some(&[1][..]));
        assert_eq!(next.single_wildcard().map(|n| n.subscribers()), Some(&[3][..]));
        assert!(next.multi_wildcard().is_none());
    }

    #[test]
    fn duplicate_inserts_are_kept_in_order() {
        let level = level_with(&[("a", 1), ("a", 2), ("a", 1)]);
        let node = level.literal("a").expect("literal a");
        assert_eq!(node.subscribers(), &[1, 2, 1]);
    }

    #[test]
    fn remove_takes_a_single_occurrence() {
        let mut level = level_with(&[("a", 1), ("a", 2), ("a", 1)]);

        assert!(level.remove_path(&["a"], &1, false).is_removed());
        assert_eq!(level.literal("a").map(|n| n.subscribers()), Some(&[2, 1][..]));
    }

    #[test]
    fn remove_distinguishes_absent_path_from_absent_subscriber() {
        let mut level = level_with(&[("a.b", 1)]);

        assert_eq!(level.remove_path(&["a", "x"], &1, false), Removal::PathAbsent);
        assert_eq!(level.remove_path(&["a", "b", "c"], &1, false), Removal::PathAbsent);
        assert_eq!(level.remove_path(&["a", "b"], &9, false), Removal::SubscriberAbsent);
        assert_eq!(level.remove_path(&[], &1, false), Removal::PathAbsent);
    }

    #[test]
    fn retain_leaves_structure_in_place() {
        let mut level = level_with(&[("a.b.c", 1)]);
        let before = (level.node_count(), level.level_count());

        assert_eq!(
            level.remove_path(&["a", "b", "c"], &1, false),
            Removal::Removed { pruned_nodes: 0 }
        );
        assert_eq!((level.node_count(), level.level_count()), before);
    }

    #[test]
    fn prune_reclaims_vacant_chain_but_keeps_shared_prefix() {
        let mut level = level_with(&[("a.b.c", 1), ("a.x", 2)]);
        assert_eq!(level.node_count(), 4);

        assert_eq!(
            level.remove_path(&["a", "b", "c"], &1, true),
            Removal::Removed { pruned_nodes: 2 }
        );
        assert_eq!(level.node_count(), 2);
        assert_eq!(level.level_count(), 2);

        assert_eq!(
            level.remove_path(&["a", "x"], &2, true),
            Removal::Removed { pruned_nodes: 2 }
        );
        assert!(level.is_empty());
        assert_eq!(level.level_count(), 1);
    }

    #[test]
    fn prune_keeps_nodes_that_still_hold_subscribers() {
        let mut level = level_with(&[("a", 1), ("a.b", 2)]);

        assert_eq!(
            level.remove_path(&["a", "b"], &2, true),
            Removal::Removed { pruned_nodes: 1 }
        );
        let a = level.literal("a").expect("a still holds subscriber 1");
        assert!(a.next_level().is_none());
        assert_eq!(a.subscribers(), &[1]);
    }

    #[test]
    fn prune_detaches_wildcard_branches() {
        let mut level = level_with(&[("*.>", 1)]);

        assert!(level.remove_path(&["*", ">"], &1, true).is_removed());
        assert!(level.single_wildcard().is_none());
        assert!(level.is_empty());
    }
}
