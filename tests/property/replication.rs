// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Container Replication

use cim_stitch::BuildContext;
use proptest::prelude::*;

fn image_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9/-]{0,15}"
}

fn arg_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9-]{1,8}", 0..5)
}

proptest! {
    /// Property: replicas have strictly increasing, distinct ids
    #[test]
    fn prop_replica_ids_strictly_increase(n in 0usize..64, image in image_name(), args in arg_list()) {
        let mut ctx = BuildContext::new();
        let template = ctx.docker(image.clone()).with_args(args.clone());
        let replicas = ctx.replicate(&template, n);

        prop_assert_eq!(replicas.len(), n);
        for pair in replicas.windows(2) {
            prop_assert!(pair[0].id() < pair[1].id());
        }
        for replica in &replicas {
            prop_assert!(replica.id() > template.id());
            prop_assert_eq!(replica.image(), image.as_str());
            prop_assert_eq!(replica.args(), args.as_slice());
        }
    }

    /// Property: ids are never reused across docker, clone and replicate
    #[test]
    fn prop_container_ids_never_reused(counts in prop::collection::vec(0usize..8, 1..10)) {
        let mut ctx = BuildContext::new();
        let mut ids = Vec::new();
        for n in counts {
            let template = ctx.docker("image");
            ids.push(template.id());
            ids.extend(ctx.replicate(&template, n).iter().map(|c| c.id()));
        }

        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted, ids);
    }

    /// Property: replica env maps are independent copies
    #[test]
    fn prop_replica_env_independent(n in 2usize..10, key in "[A-Z]{1,6}", value in "[a-z]{0,6}") {
        let mut ctx = BuildContext::new();
        let template = ctx.docker("image").with_env([("BASE", "1")]);
        let mut replicas = ctx.replicate(&template, n);

        replicas[0].set_env(key.clone(), value);
        for replica in &replicas[1..] {
            prop_assert_eq!(replica.env(), template.env());
        }
        prop_assert!(replicas[0].env().contains_key(&key));
    }
}
