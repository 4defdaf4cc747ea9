use serde::{Deserialize, Serialize};

/// The pyenv subcommand a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subcommand {
    #[default]
    Install,
    Uninstall,
    Versions,
    Global,
    Virtualenv,
    Virtualenvs,
}

/// One declarative invocation of the adapter.
///
/// Mirrors the option table of the wrapped module: every recognized option is
/// an explicit field, and unknown keys are rejected at deserialization time.
/// `force` and `skip_existing` are tri-state because the install mode
/// tie-break distinguishes "explicitly false" from "unset".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct Request {
    pub subcommand: Subcommand,
    pub version: Option<String>,
    pub versions: Option<Vec<String>>,
    pub virtualenv_name: Option<String>,
    pub pyenv_root: Option<String>,
    pub expanduser: bool,
    pub force: Option<bool>,
    pub skip_existing: Option<bool>,
    pub list: bool,
    pub bare: bool,
    pub skip_aliases: bool,
    pub no_pip: bool,
    pub no_setuptools: bool,
    pub no_wheel: bool,
    pub symlinks: bool,
    pub copies: bool,
    pub clear: bool,
    pub without_pip: bool,
    pub always_copy: bool,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            subcommand: Subcommand::default(),
            version: None,
            versions: None,
            virtualenv_name: None,
            pyenv_root: None,
            expanduser: true,
            force: None,
            skip_existing: None,
            list: false,
            bare: true,
            skip_aliases: true,
            no_pip: false,
            no_setuptools: false,
            no_wheel: false,
            symlinks: false,
            copies: false,
            clear: false,
            without_pip: false,
            always_copy: false,
        }
    }
}

/// Terminal result of one successful invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub changed: bool,
    pub stdout: String,
    pub stderr: String,
    pub versions: Option<Vec<String>>,
    pub virtualenvs: Option<Vec<String>>,
}

impl Outcome {
    #[must_use]
    pub fn unchanged() -> Self {
        Self::default()
    }
}
