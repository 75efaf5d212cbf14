// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Connection Validation

use cim_stitch::{BuildContext, Range, StitchError};
use proptest::prelude::*;

fn port_range() -> impl Strategy<Value = Range> {
    (0u32..70000, 0u32..70000).prop_map(|(a, b)| {
        Range::new(a.min(b), a.max(b)).expect("ordered bounds")
    })
}

proptest! {
    /// Property: private labels accept any range
    #[test]
    fn prop_private_connections_accept_ranges(ports in port_range()) {
        let mut ctx = BuildContext::new();
        let a = ctx.new_label("a", Vec::new());
        let b = ctx.new_label("b", Vec::new());

        prop_assert!(ctx.connect(ports, a, b).is_ok());
        prop_assert_eq!(ctx.connections().len(), 1);
    }

    /// Property: the public internet accepts exactly the single-port ranges
    #[test]
    fn prop_public_connections_need_single_port(ports in port_range(), inbound in any::<bool>()) {
        let mut ctx = BuildContext::new();
        let public = ctx.public_internet();
        let app = ctx.new_label("app", Vec::new());
        let (from, to) = if inbound { (public, app) } else { (app, public) };

        let result = ctx.connect(ports, from, to);
        if ports.is_port() {
            prop_assert!(result.is_ok());
            prop_assert_eq!(ctx.connections().len(), 1);
        } else {
            prop_assert_eq!(
                result,
                Err(StitchError::PublicPortRange { min: ports.min(), max: ports.max() })
            );
            prop_assert!(ctx.connections().is_empty());
        }
    }

    /// Property: the public internet never connects to itself
    #[test]
    fn prop_public_loop_always_rejected(ports in port_range()) {
        let mut ctx = BuildContext::new();
        let public = ctx.public_internet();

        prop_assert_eq!(ctx.connect(ports, public, public), Err(StitchError::PublicSelfConnection));
        prop_assert!(ctx.connections().is_empty());
    }

    /// Property: accepted connections keep insertion order
    #[test]
    fn prop_connection_order_preserved(ports in prop::collection::vec(1u32..65535, 0..20)) {
        let mut ctx = BuildContext::new();
        let a = ctx.new_label("a", Vec::new());
        let b = ctx.new_label("b", Vec::new());

        for port in &ports {
            ctx.connect(*port, a, b).unwrap();
        }
        let recorded: Vec<u32> = ctx.connections().iter().map(|c| c.ports().min()).collect();
        prop_assert_eq!(recorded, ports);
    }
}
