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

//! Subject tokenization shared by insert, remove and match.

/// Token delimiter inside a subject.
pub const DELIMITER: char = '.';
/// Single-level wildcard: matches exactly one token at its position.
pub const SINGLE_WILDCARD: &str = "*";
/// Multi-level wildcard: matches one or more trailing tokens.
pub const MULTI_WILDCARD: &str = ">";

/// Classification of one subject token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Token<'a> {
    Literal(&'a str),
    SingleWildcard,
    MultiWildcard,
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(raw: &'a str) -> Self {
        match raw {
            SINGLE_WILDCARD => Token::SingleWildcard,
            MULTI_WILDCARD => Token::MultiWildcard,
            literal => Token::Literal(literal),
        }
    }
}

impl Token<'_> {
    pub fn is_wildcard(&self) -> bool {
        !matches!(self, Token::Literal(_))
    }
}

/// Splits a subject into its raw tokens.
///
/// An empty subject has zero tokens. Otherwise every delimiter separates two
/// tokens, so `"a..b"` and `"a."` both carry an empty-string token.
pub fn tokenize(subject: &str) -> Vec<&str> {
    if subject.is_empty() {
        return Vec::new();
    }
    subject.split(DELIMITER).collect()
}
