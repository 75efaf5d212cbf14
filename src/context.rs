// Copyright (c) 2025 - Cowboy AI, Inc.
//! Build Context
//!
//! The build context accumulates everything a specification declares:
//! labels, connections, machines, placements and invariants, plus the
//! namespace, admin ACL and max price settings. It also owns the label
//! naming registry and the container id counter, so independent contexts
//! never interfere with each other.
//!
//! # Lifecycle
//!
//! ```text
//! BuildContext::new() ──builder calls──▶ finish() ──▶ Stitch (read-only)
//! ```
//!
//! `finish` consumes the context, so nothing can be declared after export.
//!
//! # Example
//!
//! ```rust
//! use cim_stitch::{BuildContext, Range};
//!
//! let mut ctx = BuildContext::new();
//! let web_container = ctx.docker("nginx");
//! let replicas = ctx.replicate(&web_container, 2);
//! let web = ctx.new_label("web", replicas);
//!
//! ctx.connect(80u32, ctx.public_internet(), web).unwrap();
//! assert!(ctx.connect(Range::new(1, 100).unwrap(), ctx.public_internet(), web).is_err());
//!
//! let stitch = ctx.finish();
//! assert_eq!(stitch.query_connections().len(), 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use crate::config::StitchConfig;
use crate::domain::{
    Assertion, Connection, Container, ContainerId, Invariant, Label, LabelId, Machine, Placement,
    PlacementRule, Range, Role, PUBLIC_INTERNET_LABEL,
};
use crate::errors::{StitchError, StitchResult};
use crate::naming::LabelNameRegistry;
use crate::stitch::Stitch;
use crate::validation::validate_connection;

/// Source of context tags. Zero is reserved for the public sentinel.
static NEXT_CONTEXT: AtomicU64 = AtomicU64::new(1);

/// Accumulator for one specification evaluation
#[derive(Debug)]
pub struct BuildContext {
    context: u64,
    labels: Vec<Label>,
    connections: Vec<Connection>,
    machines: Vec<Machine>,
    placements: Vec<Placement>,
    invariants: Vec<Assertion>,
    namespace: String,
    admin_acl: Vec<String>,
    max_price: f64,
    names: LabelNameRegistry,
    last_container_id: u64,
}

impl BuildContext {
    /// Create an empty context holding only the public internet label
    pub fn new() -> Self {
        Self::with_config(StitchConfig::default())
    }

    /// Create a context seeded with the given settings
    pub fn with_config(config: StitchConfig) -> Self {
        let mut ctx = Self {
            context: NEXT_CONTEXT.fetch_add(1, Ordering::Relaxed),
            labels: Vec::new(),
            connections: Vec::new(),
            machines: Vec::new(),
            placements: Vec::new(),
            invariants: Vec::new(),
            namespace: config.namespace,
            admin_acl: config.admin_acl,
            max_price: config.max_price,
            names: LabelNameRegistry::new(),
            last_container_id: 0,
        };
        let name = ctx.names.unique_name(PUBLIC_INTERNET_LABEL);
        ctx.labels.push(Label::new(LabelId::PUBLIC, name, Vec::new()));
        debug!(context = ctx.context, "Created build context");
        ctx
    }

    /// Handle of the public internet sentinel
    pub fn public_internet(&self) -> LabelId {
        LabelId::PUBLIC
    }

    // ------------------------------------------------------------------
    // Containers
    // ------------------------------------------------------------------

    fn next_container_id(&mut self) -> ContainerId {
        self.last_container_id += 1;
        ContainerId::new(self.last_container_id)
    }

    /// Create a container running `image` with the next container id
    pub fn docker(&mut self, image: impl Into<String>) -> Container {
        let id = self.next_container_id();
        Container::new(id, image)
    }

    /// Copy `template` under a fresh id
    pub fn clone_container(&mut self, template: &Container) -> Container {
        let id = self.next_container_id();
        template.cloned_as(id)
    }

    /// `n` copies of `template`, each with its own id and env map
    pub fn replicate(&mut self, template: &Container, n: usize) -> Vec<Container> {
        (0..n).map(|_| self.clone_container(template)).collect()
    }

    // ------------------------------------------------------------------
    // Labels
    // ------------------------------------------------------------------

    /// Register a label, returning its handle.
    ///
    /// The stored name is `name` made unique within this context.
    pub fn new_label(&mut self, name: &str, containers: Vec<Container>) -> LabelId {
        let id = LabelId::new(self.context, self.labels.len());
        let unique = self.names.unique_name(name);
        debug!(
            label = %unique,
            containers = containers.len(),
            "Registered label"
        );
        self.labels.push(Label::new(id, unique, containers));
        id
    }

    /// Look up a label issued by this context
    pub fn label(&self, id: LabelId) -> StitchResult<&Label> {
        id.slot(self.context)
            .and_then(|i| self.labels.get(i))
            .ok_or(StitchError::UnknownLabel(id))
    }

    pub fn label_mut(&mut self, id: LabelId) -> StitchResult<&mut Label> {
        id.slot(self.context)
            .and_then(|i| self.labels.get_mut(i))
            .ok_or(StitchError::UnknownLabel(id))
    }

    /// Append an annotation to a label
    pub fn annotate(&mut self, id: LabelId, annotation: impl Into<String>) -> StitchResult<()> {
        self.label_mut(id)?.annotate(annotation);
        Ok(())
    }

    fn ensure_labels(&self, ids: &[LabelId]) -> StitchResult<()> {
        for id in ids {
            self.label(*id)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Topology
    // ------------------------------------------------------------------

    /// Allow `from` to reach `to` on `ports`.
    ///
    /// A bare `u32` is treated as a single port.
    ///
    /// # Errors
    /// - [`StitchError::UnknownLabel`] if a handle is not from this context
    /// - [`StitchError::PublicSelfConnection`] if both ends are the public internet
    /// - [`StitchError::PublicPortRange`] if the public internet is given a range
    pub fn connect(
        &mut self,
        ports: impl Into<Range>,
        from: LabelId,
        to: LabelId,
    ) -> StitchResult<()> {
        let ports = ports.into();
        self.ensure_labels(&[from, to])?;

        if let Err(e) = validate_connection(ports, from, to) {
            warn!(%from, %to, %ports, "Rejected connection: {}", e);
            return Err(e);
        }

        debug!(%from, %to, %ports, "Added connection");
        self.connections.push(Connection::new(ports, from, to));
        Ok(())
    }

    /// Declare a placement constraint on `target`
    pub fn place(&mut self, target: LabelId, rule: impl Into<PlacementRule>) -> StitchResult<()> {
        let placement = Placement::new(target, rule.into());
        self.ensure_labels(&placement.labels())?;

        debug!(%target, exclusive = placement.rule().is_exclusive(), "Added placement");
        self.placements.push(placement);
        Ok(())
    }

    /// Declare that `invariant` should (or should not) hold
    pub fn assert(&mut self, invariant: Invariant, desired: bool) -> StitchResult<()> {
        self.ensure_labels(&invariant.labels())?;

        debug!(kind = %invariant.kind(), desired, "Added assertion");
        self.invariants.push(Assertion::new(invariant, desired));
        Ok(())
    }

    // ------------------------------------------------------------------
    // Machines
    // ------------------------------------------------------------------

    pub fn deploy_machines(&mut self, machines: impl IntoIterator<Item = Machine>) {
        let before = self.machines.len();
        self.machines.extend(machines);
        debug!(count = self.machines.len() - before, "Deployed machines");
    }

    /// Deploy `n` master copies of `template`
    pub fn deploy_masters(&mut self, n: usize, template: &Machine) {
        self.deploy_role(n, template, Role::Master);
    }

    /// Deploy `n` worker copies of `template`
    pub fn deploy_workers(&mut self, n: usize, template: &Machine) {
        self.deploy_role(n, template, Role::Worker);
    }

    fn deploy_role(&mut self, n: usize, template: &Machine, role: Role) {
        self.deploy_machines((0..n).map(|_| template.with_role(role)));
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.namespace = namespace.into();
        debug!(namespace = %self.namespace, "Set namespace");
    }

    pub fn set_admin_acl<I, S>(&mut self, acl: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.admin_acl = acl.into_iter().map(Into::into).collect();
        debug!(entries = self.admin_acl.len(), "Set admin ACL");
    }

    pub fn set_max_price(&mut self, max_price: f64) {
        self.max_price = max_price;
        debug!(max_price, "Set max price");
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn invariants(&self) -> &[Assertion] {
        &self.invariants
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn admin_acl(&self) -> &[String] {
        &self.admin_acl
    }

    pub fn max_price(&self) -> f64 {
        self.max_price
    }

    /// End the evaluation and hand the result over read-only
    pub fn finish(self) -> Stitch {
        info!(
            labels = self.labels.len(),
            connections = self.connections.len(),
            machines = self.machines.len(),
            placements = self.placements.len(),
            invariants = self.invariants.len(),
            "Finished stitch evaluation"
        );
        Stitch::new(
            self.context,
            self.labels,
            self.connections,
            self.machines,
            self.placements,
            self.invariants,
            self.namespace,
            self.admin_acl,
            self.max_price,
        )
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new()
    }
}
