use std::path::PathBuf;

use pyvm_backend::PyenvError;

/// Resolve the pyenv root directory.
///
/// An explicit `pyenv_root` option wins over the `PYENV_ROOT` environment
/// value; neither being present is a terminal configuration error. A leading
/// `~` is expanded only when `expanduser` is set, and only after precedence
/// has been decided, so an explicit root shadows the environment even when
/// both need expansion.
///
/// # Errors
/// Returns [`PyenvError::RootNotConfigured`] when no root is available.
pub fn resolve_root(
    explicit: Option<&str>,
    env_value: Option<&str>,
    expanduser: bool,
) -> Result<PathBuf, PyenvError> {
    let raw = explicit
        .or(env_value)
        .ok_or(PyenvError::RootNotConfigured)?;

    if expanduser {
        Ok(expand_home(raw))
    } else {
        Ok(PathBuf::from(raw))
    }
}

fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}
