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

//! Caller-side subject validation.
//!
//! The trie accepts any string and applies its algorithm literally. Publish and
//! subscribe handlers run these checks first and reject ill-formed input with a
//! [`SubjectError`] before it reaches `insert`/`match_subject`.

use thiserror::Error;

use crate::subject::{tokenize, Token, MULTI_WILDCARD, SINGLE_WILDCARD};

/// Structured reason a subject or pattern was rejected. Positions are 0-based token indices.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SubjectError {
    #[error("subject is empty")]
    Empty,

    #[error("token {position} is empty")]
    EmptyToken { position: usize },

    #[error("token {position} contains a control or whitespace character")]
    InvalidCharacter { position: usize },

    #[error("multi-level wildcard at token {position} must be the final token")]
    MisplacedMultiWildcard { position: usize },

    #[error("token {position} embeds a wildcard character inside a literal")]
    EmbeddedWildcard { position: usize },

    #[error("publish subject carries a wildcard at token {position}")]
    WildcardInPublishSubject { position: usize },
}

/// Validates a subscription pattern: wildcards allowed, `>` only in final position.
pub fn validate_pattern(pattern: &str) -> Result<(), SubjectError> {
    let tokens = tokenize(pattern);
    if tokens.is_empty() {
        return Err(SubjectError::Empty);
    }

    let last = tokens.len() - 1;
    for (position, raw) in tokens.iter().enumerate() {
        check_token_shape(position, raw)?;
        if Token::from(*raw) == Token::MultiWildcard && position != last {
            return Err(SubjectError::MisplacedMultiWildcard { position });
        }
    }
    Ok(())
}

/// Validates a concrete publish subject: same rules as a pattern, no wildcards at all.
pub fn validate_subject(subject: &str) -> Result<(), SubjectError> {
    validate_pattern(subject)?;
    match tokenize(subject)
        .into_iter()
        .position(|raw| Token::from(raw).is_wildcard())
    {
        Some(position) => Err(SubjectError::WildcardInPublishSubject { position }),
        None => Ok(()),
    }
}

fn check_token_shape(position: usize, raw: &str) -> Result<(), SubjectError> {
    if raw.is_empty() {
        return Err(SubjectError::EmptyToken { position });
    }
    if raw.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(SubjectError::InvalidCharacter { position });
    }
    if raw.len() > 1 && (raw.contains(SINGLE_WILDCARD) || raw.contains(MULTI_WILDCARD)) {
        return Err(SubjectError::EmbeddedWildcard { position });
    }
    Ok(())
}
