// Copyright (c) 2025 - Cowboy AI, Inc.
//! Finished stitch
//!
//! A [`Stitch`] is what remains of a [`BuildContext`](crate::BuildContext)
//! after [`finish`](crate::BuildContext::finish): the declared graph, frozen
//! and queryable, ready to be exported to the compiler.

use std::collections::{BTreeMap, HashSet};

use crate::domain::{
    Assertion, Connection, Container, Label, LabelId, LabelRule, Machine, Placement,
};
use crate::errors::{StitchError, StitchResult};
use crate::export::{
    ConnectionDoc, InvariantDoc, LabelDoc, LabelNames, MachineDoc, PlacementDoc, StitchGraph,
};

/// Read-only result of one specification evaluation
#[derive(Debug)]
pub struct Stitch {
    context: u64,
    labels: Vec<Label>,
    connections: Vec<Connection>,
    machines: Vec<Machine>,
    placements: Vec<Placement>,
    invariants: Vec<Assertion>,
    namespace: String,
    admin_acl: Vec<String>,
    max_price: f64,
}

impl Stitch {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        context: u64,
        labels: Vec<Label>,
        connections: Vec<Connection>,
        machines: Vec<Machine>,
        placements: Vec<Placement>,
        invariants: Vec<Assertion>,
        namespace: String,
        admin_acl: Vec<String>,
        max_price: f64,
    ) -> Self {
        Self {
            context,
            labels,
            connections,
            machines,
            placements,
            invariants,
            namespace,
            admin_acl,
            max_price,
        }
    }

    pub fn label(&self, id: LabelId) -> StitchResult<&Label> {
        id.slot(self.context)
            .and_then(|i| self.labels.get(i))
            .ok_or(StitchError::UnknownLabel(id))
    }

    /// Find a label by its unique name
    pub fn label_by_name(&self, name: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.name() == name)
    }

    /// All labels, the public internet first
    pub fn query_labels(&self) -> &[Label] {
        &self.labels
    }

    /// Every container attached to a label, in label order
    pub fn query_containers(&self) -> Vec<&Container> {
        self.labels
            .iter()
            .flat_map(|label| label.containers())
            .collect()
    }

    pub fn query_connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn query_machines(&self) -> &[Machine] {
        &self.machines
    }

    /// Declared placements followed by the derived port rules
    pub fn query_placements(&self) -> Vec<Placement> {
        let mut seen = HashSet::new();
        self.placements
            .iter()
            .cloned()
            .chain(self.port_placements())
            .filter(|p| seen.insert(p.clone()))
            .collect()
    }

    /// Exclusivity rules implied by public ports.
    ///
    /// Labels exposed to the public internet on the same port cannot share
    /// a machine, including two replicas of one label. For each public
    /// port, every ordered pair of exposed labels gets an exclusive rule.
    pub fn port_placements(&self) -> Vec<Placement> {
        let mut by_port: BTreeMap<u32, Vec<LabelId>> = BTreeMap::new();
        for conn in self.connections.iter().filter(|c| c.is_public()) {
            let target = if conn.from().is_public() {
                conn.to()
            } else {
                conn.from()
            };
            by_port.entry(conn.ports().min()).or_default().push(target);
        }

        let mut seen = HashSet::new();
        let mut rules = Vec::new();
        for targets in by_port.values() {
            for &target in targets {
                for &other in targets {
                    let placement = Placement::new(target, LabelRule::new(true, other).into());
                    if seen.insert(placement.clone()) {
                        rules.push(placement);
                    }
                }
            }
        }
        rules
    }

    pub fn query_invariants(&self) -> &[Assertion] {
        &self.invariants
    }

    pub fn query_namespace(&self) -> &str {
        &self.namespace
    }

    pub fn query_admin_acl(&self) -> &[String] {
        &self.admin_acl
    }

    pub fn query_max_price(&self) -> f64 {
        self.max_price
    }

    /// Build the export document
    pub fn graph(&self) -> StitchResult<StitchGraph> {
        Ok(StitchGraph {
            labels: self.labels.iter().map(LabelDoc::from).collect(),
            connections: self
                .connections
                .iter()
                .map(|c| ConnectionDoc::resolve(c, self))
                .collect::<StitchResult<_>>()?,
            machines: self.machines.iter().map(MachineDoc::from).collect(),
            placements: self
                .placements
                .iter()
                .map(|p| PlacementDoc::resolve(p, self))
                .collect::<StitchResult<_>>()?,
            invariants: self
                .invariants
                .iter()
                .map(|a| InvariantDoc::resolve(a, self))
                .collect::<StitchResult<_>>()?,
            namespace: self.namespace.clone(),
            admin_acl: self.admin_acl.clone(),
            max_price: self.max_price,
        })
    }

    /// Export document as pretty-printed JSON
    pub fn to_json(&self) -> StitchResult<String> {
        self.graph()?.to_json()
    }
}

impl LabelNames for Stitch {
    fn label_name(&self, id: LabelId) -> StitchResult<String> {
        Ok(self.label(id)?.name().to_string())
    }
}
