use mob_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("could not start a pool of {threads} worker threads: {reason}")]
    ThreadPool { threads: usize, reason: String },
}

impl SynthError {
    /// `true` if the run failed before any unit was generated.
    pub fn is_config(&self) -> bool {
        match self {
            SynthError::ThreadPool { .. } => true,
            SynthError::Model(e) => e.is_config(),
        }
    }
}

pub type SynthResult<T> = Result<T, SynthError>;
