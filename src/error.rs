//! Configuration errors.
//!
//! Everything that can go wrong here is a configuration error caught
//! before any grid work begins; nothing is retried or recovered mid-run.

use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No coefficient set exists for the requested stencil order.
    UnsupportedOrder { order: usize },
    /// The halo is too narrow for the stencil radius,
    /// interior points would read outside the backing buffer.
    InsufficientPadding { padding: i32, required: i32 },
    /// The logical domain contains no points.
    EmptyDomain,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOrder { order } => {
                write!(
                    f,
                    "unsupported stencil order {order}, expected an even order in 2..=16"
                )
            }
            Self::InsufficientPadding { padding, required } => {
                write!(
                    f,
                    "padding {padding} is narrower than the stencil radius {required}"
                )
            }
            Self::EmptyDomain => write!(f, "domain has no interior points"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = ConfigError::UnsupportedOrder { order: 7 };
        assert!(e.to_string().contains("7"));

        let e = ConfigError::InsufficientPadding {
            padding: 2,
            required: 8,
        };
        let msg = e.to_string();
        assert!(msg.contains("2") && msg.contains("8"));
    }
}
