// Copyright (c) 2025 - Cowboy AI, Inc.
//! Label Entity
//!
//! A label is a named group of container replicas. Labels live inside the
//! build context and are addressed through [`LabelId`] handles.

use serde::Serialize;
use std::fmt;

use super::Container;

/// Suffix appended to label names to form hostnames
pub const HOSTNAME_SUFFIX: &str = ".q";

/// Name reserved for the public internet sentinel
pub const PUBLIC_INTERNET_LABEL: &str = "public";

/// Handle to a label registered in a build context.
///
/// A handle carries the tag of the context that issued it and only resolves
/// there. [`LabelId::PUBLIC`] is the exception: it names the public
/// internet in every context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LabelId {
    context: u64,
    index: usize,
}

impl LabelId {
    /// The public internet sentinel, registered first in every context
    pub const PUBLIC: LabelId = LabelId {
        context: 0,
        index: 0,
    };

    pub(crate) fn new(context: u64, index: usize) -> Self {
        Self { context, index }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    /// Position of this label in the table of context `context`, if the
    /// handle belongs there
    pub(crate) fn slot(&self, context: u64) -> Option<usize> {
        if self.is_public() {
            Some(Self::PUBLIC.index)
        } else if self.context == context {
            Some(self.index)
        } else {
            None
        }
    }

    pub fn is_public(&self) -> bool {
        *self == Self::PUBLIC
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "label#{}", self.index)
    }
}

/// A logical group of containers
///
/// Not `Clone`: a copy would repeat the container ids of its members.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Label {
    id: LabelId,
    name: String,
    containers: Vec<Container>,
    annotations: Vec<String>,
}

impl Label {
    pub(crate) fn new(id: LabelId, name: String, containers: Vec<Container>) -> Self {
        Self {
            id,
            name,
            containers,
            annotations: Vec::new(),
        }
    }

    pub fn id(&self) -> LabelId {
        self.id
    }

    /// Unique name assigned at registration
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_public(&self) -> bool {
        self.id.is_public()
    }

    pub fn hostname(&self) -> String {
        format!("{}{}", self.name, HOSTNAME_SUFFIX)
    }

    /// Per-replica hostnames, 1-indexed, for the current container count
    pub fn children(&self) -> Vec<String> {
        (1..=self.containers.len())
            .map(|i| format!("{}.{}{}", i, self.name, HOSTNAME_SUFFIX))
            .collect()
    }

    pub fn annotate(&mut self, annotation: impl Into<String>) -> &mut Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Mutable access to the member containers
    pub fn containers_mut(&mut self) -> &mut Vec<Container> {
        &mut self.containers
    }
}
