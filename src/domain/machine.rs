// Copyright (c) 2025 - Cowboy AI, Inc.
//! Machine Value Object
//!
//! Describes the kind of VM the external scheduler should boot. Machines are
//! immutable: role assignment derives a new value and leaves the receiver
//! untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Range;

/// Cluster role of a deployed machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Master,
    Worker,
}

impl Role {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Master => "Master",
            Self::Worker => "Worker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every recognized machine option with its default
///
/// ```rust
/// use cim_stitch::domain::{Machine, MachineConfig};
///
/// let machine = Machine::new(MachineConfig {
///     provider: "Amazon".to_string(),
///     size: "m4.large".to_string(),
///     disk_size: 32,
///     ..Default::default()
/// });
/// assert_eq!(machine.provider(), "Amazon");
/// assert!(machine.role().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineConfig {
    pub provider: String,
    pub role: Option<Role>,
    pub region: String,
    pub size: String,
    pub cpu: Range,
    pub ram: Range,
    pub disk_size: u32,
    pub keys: Vec<String>,
}

/// A machine specification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    provider: String,
    role: Option<Role>,
    region: String,
    size: String,
    cpu: Range,
    ram: Range,
    disk_size: u32,
    keys: Vec<String>,
}

impl Machine {
    pub fn new(config: MachineConfig) -> Self {
        Self {
            provider: config.provider,
            role: config.role,
            region: config.region,
            size: config.size,
            cpu: config.cpu,
            ram: config.ram,
            disk_size: config.disk_size,
            keys: config.keys,
        }
    }

    /// Derive a copy of this machine carrying `role`
    pub fn with_role(&self, role: Role) -> Self {
        Self {
            role: Some(role),
            ..self.clone()
        }
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn cpu(&self) -> Range {
        self.cpu
    }

    pub fn ram(&self) -> Range {
        self.ram
    }

    pub fn disk_size(&self) -> u32 {
        self.disk_size
    }

    /// SSH public keys installed on the machine
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl From<MachineConfig> for Machine {
    fn from(config: MachineConfig) -> Self {
        Machine::new(config)
    }
}
