// logo/turtle/src/error.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::events::ChangeKind;
use thiserror::Error;

/// Failures reported by the turtle state and commander. None of them leave a
/// partial mutation behind.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TurtleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("a {0} change is still waiting for acknowledgement")]
    ChangeInFlight(ChangeKind),

    #[error("unexpected {expected} acknowledgement (pending: {})", describe_pending(.pending))]
    UnexpectedAcknowledgement {
        expected: ChangeKind,
        pending: Option<ChangeKind>,
    },
}

fn describe_pending(pending: &Option<ChangeKind>) -> String {
    match pending {
        Some(kind) => kind.to_string(),
        None => "nothing".to_owned(),
    }
}

/// Rejects NaN and infinities with a message naming the offending argument.
pub(crate) fn require_finite(name: &str, value: f64) -> Result<f64, TurtleError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TurtleError::InvalidArgument(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        TurtleError::ChangeInFlight(ChangeKind::Movement).to_string(),
        "a movement change is still waiting for acknowledgement"
    );
    assert_eq!(
        TurtleError::UnexpectedAcknowledgement {
            expected: ChangeKind::Rotation,
            pending: None,
        }
        .to_string(),
        "unexpected rotation acknowledgement (pending: nothing)"
    );
    assert!(require_finite("distance", std::f64::NAN).is_err());
    assert_eq!(require_finite("distance", 3.0), Ok(3.0));
}
