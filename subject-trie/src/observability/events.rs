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

//! Canonical structured event names used across the subject-trie workspace.

// Trie mutation events.
pub const SUBSCRIPTION_INSERT: &str = "subscription_insert";
pub const SUBSCRIPTION_INSERT_IGNORED: &str = "subscription_insert_ignored";
pub const SUBSCRIPTION_REMOVE_OK: &str = "subscription_remove_ok";
pub const SUBSCRIPTION_REMOVE_MISS: &str = "subscription_remove_miss";
pub const SUBSCRIPTION_PATH_PRUNED: &str = "subscription_path_pruned";

// Matching events.
pub const MATCH_CACHE_HIT: &str = "match_cache_hit";
pub const MATCH_CACHE_MISS: &str = "match_cache_miss";
pub const MATCH_COMPUTED: &str = "match_computed";

// Result-cache administration events.
pub const CACHE_ENABLED: &str = "cache_enabled";
pub const CACHE_DISABLED: &str = "cache_disabled";
pub const CACHE_CLEARED: &str = "cache_cleared";
pub const CACHE_INVALIDATED: &str = "cache_invalidated";

// Shared-trie events.
pub const SHARED_VERSION_ADVANCED: &str = "shared_version_advanced";

// Router binary events.
pub const ROUTER_STARTED: &str = "router_started";
pub const ROUTER_SUBSCRIPTIONS_REGISTERED: &str = "router_subscriptions_registered";
pub const ROUTER_PUBLISH_UNROUTED: &str = "router_publish_unrouted";
