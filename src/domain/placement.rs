// Copyright (c) 2025 - Cowboy AI, Inc.
//! Placement Constraints
//!
//! A placement guides where the containers of a label may be scheduled,
//! either relative to another label or to machine attributes.

use serde::{Deserialize, Serialize};

use super::LabelId;

/// Affinity or anti-affinity against another label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LabelRule {
    pub exclusive: bool,
    pub other_label: LabelId,
}

impl LabelRule {
    pub fn new(exclusive: bool, other_label: LabelId) -> Self {
        Self {
            exclusive,
            other_label,
        }
    }
}

/// Constraint on the machine a label's containers run on
///
/// Unset attributes do not constrain placement.
///
/// ```rust
/// use cim_stitch::domain::MachineRule;
///
/// let rule = MachineRule::new(false).with_provider("Amazon").with_size("m4.large");
/// assert_eq!(rule.provider.as_deref(), Some("Amazon"));
/// assert!(rule.region.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MachineRule {
    pub exclusive: bool,
    pub provider: Option<String>,
    pub size: Option<String>,
    pub region: Option<String>,
}

impl MachineRule {
    pub fn new(exclusive: bool) -> Self {
        Self {
            exclusive,
            ..Default::default()
        }
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// Rule half of a placement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum PlacementRule {
    Label(LabelRule),
    Machine(MachineRule),
}

impl PlacementRule {
    pub fn is_exclusive(&self) -> bool {
        match self {
            PlacementRule::Label(rule) => rule.exclusive,
            PlacementRule::Machine(rule) => rule.exclusive,
        }
    }
}

impl From<LabelRule> for PlacementRule {
    fn from(rule: LabelRule) -> Self {
        PlacementRule::Label(rule)
    }
}

impl From<MachineRule> for PlacementRule {
    fn from(rule: MachineRule) -> Self {
        PlacementRule::Machine(rule)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    target: LabelId,
    rule: PlacementRule,
}

impl Placement {
    pub(crate) fn new(target: LabelId, rule: PlacementRule) -> Self {
        Self { target, rule }
    }

    pub fn target(&self) -> LabelId {
        self.target
    }

    pub fn rule(&self) -> &PlacementRule {
        &self.rule
    }

    /// Labels this placement refers to
    pub(crate) fn labels(&self) -> Vec<LabelId> {
        match &self.rule {
            PlacementRule::Label(rule) => vec![self.target, rule.other_label],
            PlacementRule::Machine(_) => vec![self.target],
        }
    }
}
