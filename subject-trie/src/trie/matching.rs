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

//! Recursive fan-out resolution over the level tree.

use super::level::{Level, Node};

/// Appends every subscriber whose pattern matches `tokens`, starting at `level`.
///
/// At each depth the multi-wildcard leaf set is taken unconditionally, the
/// single-wildcard branch is explored recursively for the remaining tokens, and
/// traversal continues along the literal branch. Once the tokens are exhausted the
/// single-wildcard and literal leaf sets of the final level contribute. A branch
/// that runs out of levels before the tokens are consumed contributes nothing more.
pub(super) fn collect_matches<S: Clone>(level: &Level<S>, tokens: &[&str], out: &mut Vec<S>) {
    let mut current = Some(level);
    let mut literal: Option<&Node<S>> = None;
    let mut single: Option<&Node<S>> = None;

    for (depth, token) in tokens.iter().enumerate() {
        let Some(level) = current else {
            return;
        };

        if let Some(multi) = level.multi_wildcard() {
            out.extend_from_slice(multi.subscribers());
        }

        single = level.single_wildcard();
        let remaining = &tokens[depth + 1..];
        if !remaining.is_empty() {
            if let Some(next) = single.and_then(Node::next_level) {
                collect_matches(next, remaining, out);
            }
        }

        literal = level.literal(token);
        current = literal.and_then(Node::next_level);
    }

    if let Some(node) = single {
        out.extend_from_slice(node.subscribers());
    }
    if let Some(node) = literal {
        out.extend_from_slice(node.subscribers());
    }
}
