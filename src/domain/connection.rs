// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection Entity

use serde::Serialize;

use super::{LabelId, Range};

/// Allows containers of the `from` label to reach containers of the `to`
/// label on ports in `ports`.
///
/// Only [`BuildContext::connect`](crate::BuildContext::connect) creates
/// connections, after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Connection {
    ports: Range,
    from: LabelId,
    to: LabelId,
}

impl Connection {
    pub(crate) fn new(ports: Range, from: LabelId, to: LabelId) -> Self {
        Self { ports, from, to }
    }

    pub fn ports(&self) -> Range {
        self.ports
    }

    pub fn from(&self) -> LabelId {
        self.from
    }

    pub fn to(&self) -> LabelId {
        self.to
    }

    /// True when either endpoint is the public internet
    pub fn is_public(&self) -> bool {
        self.from.is_public() || self.to.is_public()
    }
}
