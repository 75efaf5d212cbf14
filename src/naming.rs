// Copyright (c) 2025 - Cowboy AI, Inc.
//! Label naming registry
//!
//! Produces deterministic unique names from requested base names. The first
//! request for a base returns it unchanged; the k-th returns the base
//! followed by k:
//!
//! ```text
//! foo -> foo
//! foo -> foo2
//! foo -> foo3
//! ```
//!
//! Names depend on call order only. If a suffixed candidate was already
//! handed out (someone asked for `foo2` directly), the running count for
//! that base keeps climbing until the candidate is free.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct LabelNameRegistry {
    counts: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl LabelNameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve and return the next unique name for `base`
    pub fn unique_name(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        loop {
            *count += 1;
            let candidate = if *count == 1 {
                base.to_string()
            } else {
                format!("{}{}", base, count)
            };
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Number of times `base` has been requested or skipped past
    pub fn usage(&self, base: &str) -> usize {
        self.counts.get(base).copied().unwrap_or(0)
    }

    pub fn is_issued(&self, name: &str) -> bool {
        self.issued.contains(name)
    }
}
