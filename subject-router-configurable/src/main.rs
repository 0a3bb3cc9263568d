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

mod config;

use crate::config::Config;
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use subject_trie::observability::events;
use subject_trie::{validate_pattern, validate_subject, SubjectTrie, SubscriberId};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const COMPONENT: &str = "subject_router";

#[derive(Parser)]
#[command()]
struct RouterArgs {
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Subjects to publish; overrides the `publish` list in the config file.
    #[arg(short, long = "subject", value_name = "SUBJECT")]
    subjects: Vec<String>,

    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize, Debug)]
struct PublishReport {
    subject: String,
    fan_out: Vec<SubscriberId>,
}

#[derive(Serialize, Debug)]
struct RouterReport {
    total_inserts: u64,
    live_subscriptions: usize,
    cached_entries: usize,
    publishes: Vec<PublishReport>,
}

fn build_trie(config: &Config) -> Result<SubjectTrie<SubscriberId>> {
    let mut trie = SubjectTrie::with_config(&config.trie);
    for subscription in &config.subscriptions {
        validate_pattern(&subscription.pattern).with_context(|| {
            format!(
                "Invalid subscription pattern '{}' for {}",
                subscription.pattern, subscription.subscriber
            )
        })?;
        trie.insert(&subscription.pattern, subscription.subscriber);
    }
    Ok(trie)
}

fn route(trie: &mut SubjectTrie<SubscriberId>, subjects: &[String]) -> Result<Vec<PublishReport>> {
    let mut publishes = Vec::with_capacity(subjects.len());
    for subject in subjects {
        validate_subject(subject)
            .with_context(|| format!("Invalid publish subject '{subject}'"))?;

        let fan_out = trie.match_subject(subject);
        if fan_out.is_empty() {
            warn!(
                event = events::ROUTER_PUBLISH_UNROUTED,
                component = COMPONENT,
                subject = subject.as_str(),
                "no subscribers for subject"
            );
        }
        publishes.push(PublishReport {
            subject: subject.clone(),
            fan_out: fan_out.to_vec(),
        });
    }
    Ok(publishes)
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    info!(
        event = events::ROUTER_STARTED,
        component = COMPONENT,
        "Started subject-router-configurable"
    );

    let args = RouterArgs::parse();
    let config = Config::load(&args.config)?;

    let mut trie = build_trie(&config)?;
    info!(
        event = events::ROUTER_SUBSCRIPTIONS_REGISTERED,
        component = COMPONENT,
        subscriptions = config.subscriptions.len(),
        cache_enabled = trie.is_cache_enabled(),
        "Subscriptions registered"
    );

    let subjects = if args.subjects.is_empty() {
        &config.publish
    } else {
        &args.subjects
    };
    let publishes = route(&mut trie, subjects)?;

    let report = RouterReport {
        total_inserts: trie.total_inserts(),
        live_subscriptions: trie.live_subscriptions(),
        cached_entries: trie.cached_entries(),
        publishes,
    };
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{rendered}");

    Ok(())
}
