use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PyenvError {
    #[error(
        "Either the environment variable 'PYENV_ROOT' or 'pyenv_root' option is required"
    )]
    RootNotConfigured,

    #[error("{subcommand} subcommand requires the '{parameter}' parameter")]
    MissingParameter {
        subcommand: &'static str,
        parameter: &'static str,
    },

    #[error("Command failed: {stderr}")]
    CommandFailed { stderr: String, stdout: String },

    #[error("{name} already exists but version differs")]
    VirtualenvConflict { name: String },

    #[error("Unexpected pyenv output: {reason}")]
    UnexpectedOutput { reason: String },

    #[error("IO error ({kind}): {message}")]
    IoError {
        kind: std::io::ErrorKind,
        message: String,
    },
}

impl PyenvError {
    pub fn unexpected_output(reason: impl Into<String>) -> Self {
        Self::UnexpectedOutput {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for PyenvError {
    fn from(err: std::io::Error) -> Self {
        PyenvError::IoError {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
