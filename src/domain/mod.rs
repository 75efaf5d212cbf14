// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stitch Domain Models
//!
//! Value objects and entities declared by an infrastructure specification.
//!
//! # Value Objects
//!
//! - [`Range`] - Inclusive interval for ports and machine bounds
//! - [`Machine`] - VM description, immutable apart from derived role copies
//! - [`Invariant`] / [`Assertion`] - Topology predicates for the compiler
//! - [`PlacementRule`] - Label or machine affinity rule
//!
//! # Entities
//!
//! - [`Container`] - Docker container with a context-assigned id
//! - [`Label`] - Uniquely named group of containers, addressed by [`LabelId`]
//! - [`Connection`] - Directional traffic policy between two labels
//! - [`Placement`] - Scheduling constraint on a label

pub mod connection;
pub mod container;
pub mod invariants;
pub mod label;
pub mod machine;
pub mod placement;
pub mod range;

pub use connection::Connection;
pub use container::{Container, ContainerId};
pub use invariants::{Assertion, Invariant, InvariantKind};
pub use label::{Label, LabelId, HOSTNAME_SUFFIX, PUBLIC_INTERNET_LABEL};
pub use machine::{Machine, MachineConfig, Role};
pub use placement::{LabelRule, MachineRule, Placement, PlacementRule};
pub use range::Range;
