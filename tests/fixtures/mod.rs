// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shared test fixtures

#![allow(dead_code)]

use cim_stitch::{Machine, MachineConfig, Range};

/// Machine template used across the integration tests
pub fn base_machine() -> Machine {
    Machine::new(MachineConfig {
        provider: "AmazonSpot".to_string(),
        region: "us-west-1".to_string(),
        size: "m4.large".to_string(),
        cpu: Range::port(2),
        ram: Range::ZERO,
        disk_size: 32,
        keys: vec!["ssh-rsa AAAA test@example".to_string()],
        ..Default::default()
    })
}
