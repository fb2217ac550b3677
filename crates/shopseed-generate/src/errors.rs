use thiserror::Error;

use shopseed_eval::EvalError;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("cannot sample {child} without {parent}")]
    EmptyParent {
        child: &'static str,
        parent: &'static str,
    },
    #[error("eval error: {0}")]
    Eval(#[from] EvalError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
