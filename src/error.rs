use thiserror::Error;

pub type Result<T> = std::result::Result<T, SplitError>;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("solver error: {0}")]
    Solver(#[from] SolverError),
}

/// Rejected before any solve attempt; fatal to the whole run.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid hex value `{value}`: {reason}")]
    BadHexValue { value: String, reason: String },
    #[error("invalid bad-character list `{list}`: {reason}")]
    BadCharList { list: String, reason: String },
    #[error("unknown operation `{0}`, expected add, subtract or xor")]
    UnknownOperation(String),
}

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("z3 operation failed: {0}")]
    Operation(String),
}
