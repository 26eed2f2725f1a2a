use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("required command not found: {0}")]
    CompilerNotFound(&'static str),

    #[error("spawn {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} failed with {status}")]
    CompilerFailed { command: String, status: ExitStatus },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HookResult<T> = Result<T, HookError>;
