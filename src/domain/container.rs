// Copyright (c) 2025 - Cowboy AI, Inc.
//! Container Entity
//!
//! Containers are created through a [`BuildContext`](crate::BuildContext),
//! which hands out ids from a monotonically increasing counter. Once
//! attached to a label the label owns them.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Container identity, unique within one build context
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ContainerId(u64);

impl ContainerId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A docker container to run
///
/// Containers do not implement `Clone`. A copy needs a fresh id, so it has
/// to come from [`BuildContext::clone_container`](crate::BuildContext::clone_container):
///
/// ```compile_fail
/// use cim_stitch::BuildContext;
///
/// let mut ctx = BuildContext::new();
/// let web = ctx.docker("nginx");
/// let copy = web.clone();
/// ```
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Container {
    id: ContainerId,
    image: String,
    args: Vec<String>,
    env: BTreeMap<String, String>,
}

impl Container {
    pub(crate) fn new(id: ContainerId, image: impl Into<String>) -> Self {
        Self {
            id,
            image: image.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    /// Copy of this container under a new identity.
    ///
    /// The env map is copied, not shared: later changes to either container
    /// are invisible to the other.
    pub(crate) fn cloned_as(&self, id: ContainerId) -> Self {
        Self {
            id,
            image: self.image.clone(),
            args: self.args.clone(),
            env: self.env.clone(),
        }
    }

    /// Set the command arguments
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the entire environment
    pub fn with_env<I, K, V>(mut self, env: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = env
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Set a single environment variable
    pub fn set_env(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_container_is_bare() {
        let container = Container::new(ContainerId::new(1), "alpine");
        assert_eq!(container.id().as_u64(), 1);
        assert_eq!(container.image(), "alpine");
        assert!(container.args().is_empty());
        assert!(container.env().is_empty());
    }

    #[test]
    fn test_with_env_replaces() {
        let container = Container::new(ContainerId::new(1), "alpine")
            .with_env([("a", "1"), ("b", "2")])
            .with_env([("c", "3")]);

        assert_eq!(container.env().len(), 1);
        assert_eq!(container.env().get("c").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_set_env() {
        let mut container = Container::new(ContainerId::new(1), "alpine").with_env([("a", "1")]);
        container.set_env("a", "2").set_env("b", "3");

        assert_eq!(container.env().get("a").map(String::as_str), Some("2"));
        assert_eq!(container.env().get("b").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_cloned_env_is_independent() {
        let template = Container::new(ContainerId::new(1), "spark")
            .with_args(["run", "master"])
            .with_env([("JOB", "none")]);
        let mut copy = template.cloned_as(ContainerId::new(2));
        copy.set_env("JOB", "pi");

        assert_eq!(copy.id().as_u64(), 2);
        assert_eq!(copy.args(), template.args());
        assert_eq!(template.env().get("JOB").map(String::as_str), Some("none"));
        assert_eq!(copy.env().get("JOB").map(String::as_str), Some("pi"));
    }
}
