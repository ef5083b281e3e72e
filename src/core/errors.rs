use thiserror::Error;

/// Errors raised while generating a script.
///
/// Lines emitted before an error stay emitted; discarding a partial script is
/// up to the caller.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to write script output: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid script configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A port was rendered before it was given a role name.
    #[error("port on module '{module}' has no role name")]
    UnresolvedPort { module: String },

    /// A positional role was asked for a position it does not declare.
    #[error("port index {index} is out of range for role '{role}' of operator '{operator}' ({available} positions)")]
    PortIndexOutOfRange {
        operator: String,
        role: String,
        index: usize,
        available: usize,
    },

    /// An offset role cannot number a port this far out.
    #[error("port index {index} overflows role '{role}' of operator '{operator}'")]
    PortIndexOverflow {
        operator: String,
        role: String,
        index: usize,
    },
}

pub type Result<T> = std::result::Result<T, ScriptError>;
