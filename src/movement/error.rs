use thiserror::Error;

use crate::movement::ProbeKind;

/// Construction-time failures. A controller that exists is always runnable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error("tuning field `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("tuning field `{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("tuning field `{field}` must lie within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },

    #[error("sensor probe `{0}` is missing")]
    MissingProbe(ProbeKind),

    #[error("sensor probe `{0}` is defined more than once")]
    DuplicateProbe(ProbeKind),
}
