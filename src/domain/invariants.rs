// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Invariants
//!
//! Invariants are correctness predicates over the realized topology. They
//! are declared here and checked by the external compiler, never by this
//! crate.
//!
//! # Invariant Kinds
//!
//! | Variant        | Export `type`  | Meaning                                     |
//! |----------------|----------------|---------------------------------------------|
//! | `Reachable`    | `reach`        | `from` can reach `to`                       |
//! | `AclReachable` | `reachACL`     | `from` can reach `to` through ACLs          |
//! | `Neighborship` | `reachDirect`  | `from` reaches `to` with no hop in between  |
//! | `Between`      | `between`      | every path `from` → `to` crosses `between`  |
//! | `Enough`       | `enough`       | the declared machines can host everything   |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::LabelId;

/// Discriminator of an [`Invariant`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvariantKind {
    Reach,
    ReachAcl,
    ReachDirect,
    Between,
    Enough,
}

impl InvariantKind {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reach => "reach",
            Self::ReachAcl => "reachACL",
            Self::ReachDirect => "reachDirect",
            Self::Between => "between",
            Self::Enough => "enough",
        }
    }
}

impl fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A predicate over the final topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Invariant {
    Reachable { from: LabelId, to: LabelId },
    AclReachable { from: LabelId, to: LabelId },
    Neighborship { from: LabelId, to: LabelId },
    Between {
        from: LabelId,
        between: LabelId,
        to: LabelId,
    },
    Enough,
}

impl Invariant {
    pub fn reachable(from: LabelId, to: LabelId) -> Self {
        Self::Reachable { from, to }
    }

    pub fn acl_reachable(from: LabelId, to: LabelId) -> Self {
        Self::AclReachable { from, to }
    }

    pub fn neighborship(from: LabelId, to: LabelId) -> Self {
        Self::Neighborship { from, to }
    }

    pub fn between(from: LabelId, between: LabelId, to: LabelId) -> Self {
        Self::Between { from, between, to }
    }

    pub fn enough() -> Self {
        Self::Enough
    }

    pub fn kind(&self) -> InvariantKind {
        match self {
            Self::Reachable { .. } => InvariantKind::Reach,
            Self::AclReachable { .. } => InvariantKind::ReachAcl,
            Self::Neighborship { .. } => InvariantKind::ReachDirect,
            Self::Between { .. } => InvariantKind::Between,
            Self::Enough => InvariantKind::Enough,
        }
    }

    /// Labels referenced by this invariant, in declaration order
    pub fn labels(&self) -> Vec<LabelId> {
        match *self {
            Self::Reachable { from, to }
            | Self::AclReachable { from, to }
            | Self::Neighborship { from, to } => vec![from, to],
            Self::Between { from, between, to } => vec![from, between, to],
            Self::Enough => Vec::new(),
        }
    }
}

/// An invariant together with whether it should hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Assertion {
    pub invariant: Invariant,
    pub desired: bool,
}

impl Assertion {
    pub fn new(invariant: Invariant, desired: bool) -> Self {
        Self { invariant, desired }
    }
}
