//! Pure argument builders for the wrapped `pyenv` subcommands.

/// Mode flag chosen for `pyenv install`.
///
/// `skip_existing` not explicitly `false` always wins, `force` applies only
/// when explicitly `true`, and the remaining combination (`skip_existing`
/// explicitly `false`, `force` unset or `false`) builds a command with no
/// mode flag at all, as the wrapped module does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    SkipExisting,
    Force,
    Unflagged,
}

impl InstallMode {
    #[must_use]
    pub fn decide(skip_existing: Option<bool>, force: Option<bool>) -> Self {
        if skip_existing != Some(false) {
            Self::SkipExisting
        } else if force == Some(true) {
            Self::Force
        } else {
            Self::Unflagged
        }
    }
}

/// Boolean options of `pyenv virtualenv`, in the order they are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct VirtualenvFlags {
    pub force: bool,
    pub no_pip: bool,
    pub no_setuptools: bool,
    pub no_wheel: bool,
    pub symlinks: bool,
    pub copies: bool,
    pub clear: bool,
    pub without_pip: bool,
    pub always_copy: bool,
}

impl VirtualenvFlags {
    fn rendered(self) -> Vec<&'static str> {
        let table: [(bool, &'static str); 9] = [
            (self.force, "--force"),
            (self.no_pip, "--no-pip"),
            (self.no_setuptools, "--no-setuptools"),
            (self.no_wheel, "--no-wheel"),
            (self.symlinks, "--symlinks"),
            (self.copies, "--copies"),
            (self.clear, "--clear"),
            (self.without_pip, "--without-pip"),
            (self.always_copy, "--always-copy"),
        ];

        table
            .into_iter()
            .filter_map(|(enabled, flag)| enabled.then_some(flag))
            .collect()
    }
}

pub(crate) fn install_list_args() -> Vec<String> {
    vec!["install".to_string(), "-l".to_string()]
}

pub(crate) fn install_args(mode: InstallMode, version: &str) -> Vec<String> {
    let mut args = vec!["install".to_string()];
    match mode {
        InstallMode::SkipExisting => args.push("--skip-existing".to_string()),
        InstallMode::Force => args.push("--force".to_string()),
        InstallMode::Unflagged => {}
    }
    args.push(version.to_string());
    args
}

pub(crate) fn uninstall_args(version: &str) -> Vec<String> {
    vec![
        "uninstall".to_string(),
        "-f".to_string(),
        version.to_string(),
    ]
}

pub(crate) fn versions_args(bare: bool) -> Vec<String> {
    let mut args = vec!["versions".to_string()];
    if bare {
        args.push("--bare".to_string());
    }
    args
}

pub(crate) fn global_get_args() -> Vec<String> {
    vec!["global".to_string()]
}

pub(crate) fn global_set_args(versions: &[String]) -> Vec<String> {
    let mut args = vec!["global".to_string()];
    args.extend(versions.iter().cloned());
    args
}

pub(crate) fn virtualenvs_args(skip_aliases: bool, bare: bool) -> Vec<String> {
    let mut args = vec!["virtualenvs".to_string()];
    if skip_aliases {
        args.push("--skip-aliases".to_string());
    }
    if bare {
        args.push("--bare".to_string());
    }
    args
}

pub(crate) fn virtualenv_args(flags: VirtualenvFlags, version: &str, name: &str) -> Vec<String> {
    let mut args = vec!["virtualenv".to_string()];
    args.extend(flags.rendered().into_iter().map(str::to_string));
    if flags.force {
        // The wrapped module appends --force a second time on its force
        // short-circuit path; kept verbatim since the vector is observable.
        args.push("--force".to_string());
    }
    args.push(version.to_string());
    args.push(name.to_string());
    args
}
