// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Label Naming

use std::collections::{HashMap, HashSet};

use cim_stitch::BuildContext;
use proptest::prelude::*;

/// Base names drawn from a small pool so collisions are frequent,
/// including bases that look like suffixed names
fn base_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("foo".to_string()),
            Just("foo2".to_string()),
            Just("bar".to_string()),
            Just("public".to_string()),
            "[a-c]{1,2}[0-9]?",
        ],
        0..40,
    )
}

proptest! {
    /// Property: no two labels in one context share a name
    #[test]
    fn prop_label_names_unique(bases in base_names()) {
        let mut ctx = BuildContext::new();
        for base in &bases {
            ctx.new_label(base, Vec::new());
        }

        let names: HashSet<&str> = ctx.labels().iter().map(|l| l.name()).collect();
        prop_assert_eq!(names.len(), bases.len() + 1);
    }

    /// Property: the first use of a base keeps it verbatim when nothing
    /// else claimed it, later uses carry the running count
    #[test]
    fn prop_running_count_without_lookalikes(bases in prop::collection::vec("[a-z]{1,4}", 0..40)) {
        let mut ctx = BuildContext::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for base in &bases {
            let id = ctx.new_label(base, Vec::new());
            let count = seen.entry(base.clone()).or_insert(0);
            *count += 1;

            // Bases here are too short to collide with the sentinel
            let expected = if *count == 1 {
                base.clone()
            } else {
                format!("{}{}", base, count)
            };
            prop_assert_eq!(ctx.label(id).unwrap().name(), expected.as_str());
        }
    }

    /// Property: hostname is always name + ".q" and children match the
    /// container count
    #[test]
    fn prop_hostname_and_children(base in "[a-z]{1,8}", n in 0usize..16) {
        let mut ctx = BuildContext::new();
        let template = ctx.docker("image");
        let replicas = ctx.replicate(&template, n);
        let id = ctx.new_label(&base, replicas);
        let label = ctx.label(id).unwrap();

        prop_assert_eq!(label.hostname(), format!("{}.q", label.name()));
        let children = label.children();
        prop_assert_eq!(children.len(), n);
        for (i, child) in children.iter().enumerate() {
            prop_assert_eq!(child, &format!("{}.{}.q", i + 1, label.name()));
        }
    }
}
