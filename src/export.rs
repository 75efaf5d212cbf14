// Copyright (c) 2025 - Cowboy AI, Inc.
//! Export document consumed by the external compiler
//!
//! The field names and shapes here are the compatibility surface with the
//! downstream compiler and must not change:
//!
//! ```text
//! {
//!   "labels":      [{ name, hostname, containerIds, annotations }],
//!   "connections": [{ minPort, maxPort, from, to }],
//!   "machines":    [{ provider, role, region, size, cpu, ram, diskSize, keys }],
//!   "placements":  [{ targetLabel, exclusive, otherLabel | provider, size, region }],
//!   "invariants":  [{ type, from, to | between, desired }],
//!   "namespace":   string,
//!   "adminACL":    [string],
//!   "maxPrice":    number
//! }
//! ```
//!
//! Labels, connections and placements refer to labels by name.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Assertion, Connection, Invariant, Label, LabelId, Machine, Placement, PlacementRule, Range,
};
use crate::errors::StitchResult;

/// The whole declared graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StitchGraph {
    pub labels: Vec<LabelDoc>,
    pub connections: Vec<ConnectionDoc>,
    pub machines: Vec<MachineDoc>,
    pub placements: Vec<PlacementDoc>,
    pub invariants: Vec<InvariantDoc>,
    pub namespace: String,
    #[serde(rename = "adminACL")]
    pub admin_acl: Vec<String>,
    pub max_price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelDoc {
    pub name: String,
    pub hostname: String,
    pub container_ids: Vec<u64>,
    pub annotations: Vec<String>,
}

impl From<&Label> for LabelDoc {
    fn from(label: &Label) -> Self {
        Self {
            name: label.name().to_string(),
            hostname: label.hostname(),
            container_ids: label.containers().iter().map(|c| c.id().as_u64()).collect(),
            annotations: label.annotations().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDoc {
    pub min_port: u32,
    pub max_port: u32,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineDoc {
    pub provider: String,
    /// `"Master"`, `"Worker"`, or empty when unassigned
    pub role: String,
    pub region: String,
    pub size: String,
    pub cpu: Range,
    pub ram: Range,
    pub disk_size: u32,
    pub keys: Vec<String>,
}

impl From<&Machine> for MachineDoc {
    fn from(machine: &Machine) -> Self {
        Self {
            provider: machine.provider().to_string(),
            role: machine
                .role()
                .map(|role| role.as_str().to_string())
                .unwrap_or_default(),
            region: machine.region().to_string(),
            size: machine.size().to_string(),
            cpu: machine.cpu(),
            ram: machine.ram(),
            disk_size: machine.disk_size(),
            keys: machine.keys().to_vec(),
        }
    }
}

/// Flattened placement: either `otherLabel` or machine attributes are set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementDoc {
    pub target_label: String,
    pub exclusive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantDoc {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub between: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub desired: bool,
}

/// Resolves a label handle to its unique name
pub(crate) trait LabelNames {
    fn label_name(&self, id: LabelId) -> StitchResult<String>;
}

impl ConnectionDoc {
    pub(crate) fn resolve(conn: &Connection, names: &impl LabelNames) -> StitchResult<Self> {
        Ok(Self {
            min_port: conn.ports().min(),
            max_port: conn.ports().max(),
            from: names.label_name(conn.from())?,
            to: names.label_name(conn.to())?,
        })
    }
}

impl PlacementDoc {
    pub(crate) fn resolve(placement: &Placement, names: &impl LabelNames) -> StitchResult<Self> {
        let target_label = names.label_name(placement.target())?;
        let doc = match placement.rule() {
            PlacementRule::Label(rule) => Self {
                target_label,
                exclusive: rule.exclusive,
                other_label: Some(names.label_name(rule.other_label)?),
                provider: None,
                size: None,
                region: None,
            },
            PlacementRule::Machine(rule) => Self {
                target_label,
                exclusive: rule.exclusive,
                other_label: None,
                provider: rule.provider.clone(),
                size: rule.size.clone(),
                region: rule.region.clone(),
            },
        };
        Ok(doc)
    }
}

impl InvariantDoc {
    pub(crate) fn resolve(assertion: &Assertion, names: &impl LabelNames) -> StitchResult<Self> {
        let kind = assertion.invariant.kind().as_str().to_string();
        let desired = assertion.desired;
        let doc = match assertion.invariant {
            Invariant::Reachable { from, to }
            | Invariant::AclReachable { from, to }
            | Invariant::Neighborship { from, to } => Self {
                kind,
                from: Some(names.label_name(from)?),
                between: None,
                to: Some(names.label_name(to)?),
                desired,
            },
            Invariant::Between { from, between, to } => Self {
                kind,
                from: Some(names.label_name(from)?),
                between: Some(names.label_name(between)?),
                to: Some(names.label_name(to)?),
                desired,
            },
            Invariant::Enough => Self {
                kind,
                from: None,
                between: None,
                to: None,
                desired,
            },
        };
        Ok(doc)
    }
}

impl StitchGraph {
    /// Encode as pretty-printed JSON
    pub fn to_json(&self) -> StitchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a previously exported document
    pub fn from_json(json: &str) -> StitchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
