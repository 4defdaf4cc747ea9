use serde::Serialize;

use pyvm_backend::{Outcome, PyenvError};

/// The single external response document, printed as JSON on stdout.
///
/// Success and failure share one shape: `failed` plus either the operation's
/// outcome or the error message, with the external tool's own text preserved
/// unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub failed: bool,
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    pub stdout: String,
    pub stderr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtualenvs: Option<Vec<String>>,
}

impl Response {
    /// The one place a `Result` becomes an external response.
    #[must_use]
    pub fn from_result(result: Result<Outcome, PyenvError>) -> Self {
        match result {
            Ok(outcome) => Self {
                failed: false,
                changed: outcome.changed,
                msg: None,
                stdout: outcome.stdout,
                stderr: outcome.stderr,
                versions: outcome.versions,
                virtualenvs: outcome.virtualenvs,
            },
            // Keep the tool's stderr verbatim as the message and carry its
            // stdout for diagnostics.
            Err(PyenvError::CommandFailed { stderr, stdout }) => Self {
                failed: true,
                changed: false,
                msg: Some(stderr),
                stdout,
                stderr: String::new(),
                versions: None,
                virtualenvs: None,
            },
            Err(error) => Self {
                failed: true,
                changed: false,
                msg: Some(error.to_string()),
                stdout: String::new(),
                stderr: String::new(),
                versions: None,
                virtualenvs: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pyvm_backend::{Outcome, PyenvError};

    use super::Response;

    #[test]
    fn success_carries_outcome_fields() {
        let response = Response::from_result(Ok(Outcome {
            changed: true,
            stdout: "Installed Python-3.6.1\n".to_string(),
            stderr: String::new(),
            versions: None,
            virtualenvs: None,
        }));

        assert!(!response.failed);
        assert!(response.changed);
        assert_eq!(response.stdout, "Installed Python-3.6.1\n");
        assert_eq!(response.msg, None);
    }

    #[test]
    fn command_failure_preserves_tool_stderr_as_message() {
        let response = Response::from_result(Err(PyenvError::CommandFailed {
            stderr: "pyenv: version `9.9.9' not installed\n".to_string(),
            stdout: "partial".to_string(),
        }));

        assert!(response.failed);
        assert!(!response.changed);
        assert_eq!(
            response.msg.as_deref(),
            Some("pyenv: version `9.9.9' not installed\n")
        );
        assert_eq!(response.stdout, "partial");
    }

    #[test]
    fn configuration_failure_uses_the_error_display() {
        let response = Response::from_result(Err(PyenvError::RootNotConfigured));

        assert!(response.failed);
        assert_eq!(
            response.msg.as_deref(),
            Some("Either the environment variable 'PYENV_ROOT' or 'pyenv_root' option is required")
        );
    }

    #[test]
    fn json_omits_absent_lists_and_message() {
        let encoded = serde_json::to_string(&Response::from_result(Ok(Outcome {
            versions: Some(vec!["3.6.1".to_string()]),
            ..Outcome::unchanged()
        })))
        .expect("response should encode");

        assert_eq!(
            encoded,
            r#"{"failed":false,"changed":false,"stdout":"","stderr":"","versions":["3.6.1"]}"#
        );
    }
}
