//! Error types for transition configuration parsing

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("unknown switch mode: {0:?} (expected \"out-in\" or \"in-out\")")]
    UnknownSwitchMode(String),
}
