// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Connection Rules
//!
//! Construction-time checks applied by
//! [`BuildContext::connect`](crate::BuildContext::connect). All functions are
//! pure and return the first rule violated.
//!
//! # Rules, in order
//!
//! 1. The public internet cannot connect to itself.
//! 2. A connection touching the public internet must name a single port.

use crate::domain::{LabelId, Range};
use crate::errors::{StitchError, StitchResult};

/// Validate a connection between two registered labels
pub fn validate_connection(ports: Range, from: LabelId, to: LabelId) -> StitchResult<()> {
    validate_not_public_loop(from, to)?;
    validate_public_port(ports, from, to)
}

/// Reject a connection from the public internet to itself
pub fn validate_not_public_loop(from: LabelId, to: LabelId) -> StitchResult<()> {
    if from.is_public() && to.is_public() {
        return Err(StitchError::PublicSelfConnection);
    }
    Ok(())
}

/// Reject port ranges on connections that touch the public internet
pub fn validate_public_port(ports: Range, from: LabelId, to: LabelId) -> StitchResult<()> {
    if (from.is_public() || to.is_public()) && !ports.is_port() {
        return Err(StitchError::PublicPortRange {
            min: ports.min(),
            max: ports.max(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn app() -> LabelId {
        LabelId::new(1, 1)
    }

    #[test_case(Range::port(80), LabelId::PUBLIC, app() ; "port from public")]
    #[test_case(Range::port(80), app(), LabelId::PUBLIC ; "port to public")]
    #[test_case(Range::ZERO, app(), LabelId::PUBLIC ; "zero range is a port")]
    fn test_public_single_port_allowed(ports: Range, from: LabelId, to: LabelId) {
        assert!(validate_connection(ports, from, to).is_ok());
    }

    #[test]
    fn test_ranges_between_private_labels_allowed() {
        let ports = Range::new(1000, 65535).unwrap();
        assert!(validate_connection(ports, app(), LabelId::new(1, 2)).is_ok());
        assert!(validate_connection(ports, app(), app()).is_ok());
    }

    #[test]
    fn test_public_range_rejected() {
        let ports = Range::new(1, 100).unwrap();
        assert_eq!(
            validate_connection(ports, LabelId::PUBLIC, app()),
            Err(StitchError::PublicPortRange { min: 1, max: 100 })
        );
        assert!(validate_connection(ports, app(), LabelId::PUBLIC).is_err());
    }

    #[test]
    fn test_public_loop_checked_first() {
        assert_eq!(
            validate_connection(Range::port(1), LabelId::PUBLIC, LabelId::PUBLIC),
            Err(StitchError::PublicSelfConnection)
        );
        // A range would also violate rule 2, but rule 1 wins
        assert_eq!(
            validate_connection(
                Range::new(1, 100).unwrap(),
                LabelId::PUBLIC,
                LabelId::PUBLIC
            ),
            Err(StitchError::PublicSelfConnection)
        );
    }
}
