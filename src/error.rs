use thiserror::Error;

/// Invalid-argument failures raised by configuration setters and geometry
/// computations. Every variant is a caller error; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("angle count can not be less than or equal to 2 (got {0})")]
    InvalidAngleCount(i64),

    #[error("hierarchy count can not be less than or equal to 0 (got {0})")]
    InvalidHierarchyCount(i64),

    #[error("max score can not be less than or equal to 0 (got {0})")]
    InvalidMaxScore(f32),

    #[error("scores can not be empty")]
    EmptyScores,

    #[error("expected {expected} scores, got {actual}")]
    ScoreCountMismatch { expected: usize, actual: usize },

    #[error("angle {0} is outside [0, 360)")]
    AngleOutOfRange(f32),

    #[error("invalid value '{value}' for attribute '{name}'")]
    InvalidAttribute { name: String, value: String },

    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;
