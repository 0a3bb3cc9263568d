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

//! Canonical structured field values and value-format helpers.

pub const NONE: &str = "none";
pub const REASON_ZERO_TOKENS: &str = "zero_tokens";
pub const REASON_PATH_ABSENT: &str = "path_absent";
pub const REASON_SUBSCRIBER_ABSENT: &str = "subscriber_absent";

/// Renders a subject for log output; the empty subject is shown as [`NONE`].
pub fn format_subject(subject: &str) -> &str {
    if subject.is_empty() {
        NONE
    } else {
        subject
    }
}
