// Copyright (c) 2025 - Cowboy AI, Inc.
//! Declarative infrastructure specification builder for the Composable
//! Information Machine
//!
//! A specification describes containers grouped under labels, the traffic
//! allowed between labels, the machines to boot, placement constraints and
//! topology invariants. Everything is accumulated in a [`BuildContext`] and
//! handed to an external compiler as a [`StitchGraph`] once the evaluation
//! finishes.
//!
//! ```rust
//! use cim_stitch::{BuildContext, Invariant, Machine, MachineConfig, Range};
//!
//! # fn main() -> cim_stitch::StitchResult<()> {
//! let mut ctx = BuildContext::new();
//!
//! let master = ctx.docker("quilt/spark").with_args(["run", "master"]);
//! let masters = ctx.new_label("spark-ms", vec![master]);
//!
//! let worker = ctx.docker("quilt/spark").with_args(["run", "worker"]);
//! let workers = ctx.replicate(&worker, 3);
//! let workers = ctx.new_label("spark-wk", workers);
//!
//! ctx.connect(Range::new(1000, 65535)?, workers, masters)?;
//! ctx.connect(Range::new(1000, 65535)?, masters, workers)?;
//! ctx.connect(7077u32, workers, masters)?;
//! ctx.connect(8080u32, ctx.public_internet(), masters)?;
//! ctx.assert(Invariant::reachable(ctx.public_internet(), masters), true)?;
//!
//! let base = Machine::new(MachineConfig {
//!     provider: "Amazon".to_string(),
//!     ..Default::default()
//! });
//! ctx.deploy_masters(1, &base);
//! ctx.deploy_workers(3, &base);
//!
//! let graph = ctx.finish().graph()?;
//! assert_eq!(graph.connections.len(), 4);
//! assert_eq!(graph.machines.len(), 4);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod domain;
pub mod errors;
pub mod export;
pub mod naming;
pub mod stitch;
pub mod validation;

// Re-export commonly used types
pub use config::StitchConfig;
pub use context::BuildContext;
pub use domain::{
    Assertion, Connection, Container, ContainerId, Invariant, InvariantKind, Label, LabelId,
    LabelRule, Machine, MachineConfig, MachineRule, Placement, PlacementRule, Range, Role,
};
pub use errors::{StitchError, StitchResult};
pub use export::StitchGraph;
pub use stitch::Stitch;
