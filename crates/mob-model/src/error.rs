use mob_core::{CoreError, EntityId};
use thiserror::Error;

/// Errors raised while validating or running a mobility model.
///
/// Two classes exist.  Configuration errors are detected before generation
/// starts and mean no entity was produced.  Invariant errors mean the
/// generator itself misbehaved; the partial trace is discarded.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{entities} entities cannot be split evenly into {groups} groups")]
    GroupCountMismatch { entities: usize, groups: usize },

    #[error(
        "a column of {per_group} reference points spaced {separation} m apart spans {extent} m, \
         which exceeds the {width} x {height} m area"
    )]
    GroupExtentExceedsArea {
        per_group:  usize,
        separation: f64,
        extent:     f64,
        width:      f64,
        height:     f64,
    },

    #[error("predecessor scenario has {got} entities, expected {expected}")]
    PredecessorMismatch { expected: usize, got: usize },

    #[error("{0} is not part of this scenario")]
    UnknownEntity(EntityId),

    #[error("heading {0} rad does not fall into any quadrant")]
    UnclassifiedHeading(f64),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ModelError {
    /// `true` for errors caused by user input.
    pub fn is_config(&self) -> bool {
        match self {
            ModelError::InvalidConfig(_)
            | ModelError::GroupCountMismatch { .. }
            | ModelError::GroupExtentExceedsArea { .. }
            | ModelError::PredecessorMismatch { .. }
            | ModelError::UnknownEntity(_) => true,
            ModelError::Core(e) => e.is_config(),
            ModelError::UnclassifiedHeading(_) => false,
        }
    }

    /// `true` for generator defects (non-monotonic appends, impossible
    /// headings).
    pub fn is_invariant(&self) -> bool {
        !self.is_config()
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
