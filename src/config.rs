// Copyright (c) 2025 - Cowboy AI, Inc.
//! Build context configuration

use serde::{Deserialize, Serialize};

use crate::errors::{StitchError, StitchResult};

/// Environment variable holding the deployment namespace
pub const NAMESPACE_ENV: &str = "STITCH_NAMESPACE";

/// Environment variable holding the comma-separated admin ACL
pub const ADMIN_ACL_ENV: &str = "STITCH_ADMIN_ACL";

/// Environment variable holding the maximum machine price
pub const MAX_PRICE_ENV: &str = "STITCH_MAX_PRICE";

/// Initial scalar settings of a build context
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StitchConfig {
    /// Namespace isolating this deployment on a shared cloud account
    pub namespace: String,

    /// Addresses allowed to reach the admin interfaces of machines
    pub admin_acl: Vec<String>,

    /// Maximum hourly machine price (0 means no limit)
    pub max_price: f64,
}

impl StitchConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    pub fn with_admin_acl<I, S>(mut self, acl: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.admin_acl = acl.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = max_price;
        self
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> StitchResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> StitchResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace = lookup(NAMESPACE_ENV).unwrap_or_default();

        let admin_acl = lookup(ADMIN_ACL_ENV)
            .map(|acl| {
                acl.split(',')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let max_price = match lookup(MAX_PRICE_ENV) {
            Some(raw) => raw.trim().parse::<f64>().map_err(|e| {
                StitchError::Configuration(format!("{} must be a number: {}", MAX_PRICE_ENV, e))
            })?,
            None => 0.0,
        };

        Ok(Self {
            namespace,
            admin_acl,
            max_price,
        })
    }
}
