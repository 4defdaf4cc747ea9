use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, error, info, trace};

use pyvm_backend::{
    CommandOutput, CommandRunner, Outcome, ProcessRunner, PyenvError, Request, Subcommand,
};

use crate::command::{
    InstallMode, VirtualenvFlags, global_get_args, global_set_args, install_args,
    install_list_args, uninstall_args, versions_args, virtualenv_args, virtualenvs_args,
};
use crate::output::{parse_install_list, parse_lines};

/// Stateless adapter around one resolved pyenv installation.
///
/// Every operation is a single subprocess invocation, plus at most one
/// read-before-write query for the mutating subcommands. The binary is
/// expected at `<root>/bin/pyenv` and the child environment always carries
/// `PYENV_ROOT` pointing at the resolved root.
#[derive(Clone)]
pub struct PyenvClient {
    root: PathBuf,
    cmd_path: PathBuf,
    runner: Arc<dyn CommandRunner>,
}

impl PyenvClient {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self::with_runner(root, Arc::new(ProcessRunner))
    }

    #[must_use]
    pub fn with_runner(root: PathBuf, runner: Arc<dyn CommandRunner>) -> Self {
        let cmd_path = root.join("bin").join("pyenv");
        Self {
            root,
            cmd_path,
            runner,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn execute(&self, args: &[String]) -> Result<CommandOutput, PyenvError> {
        info!("executing pyenv {}", args.join(" "));

        let envs = [(
            "PYENV_ROOT".to_string(),
            self.root.to_string_lossy().into_owned(),
        )];
        let output = self.runner.run(&self.cmd_path, args, &envs).await?;

        debug!("pyenv exit code: {:?}", output.code);
        trace!("pyenv stdout: {}", output.stdout);
        if !output.stderr.is_empty() {
            trace!("pyenv stderr: {}", output.stderr);
        }

        if output.success {
            Ok(output)
        } else {
            error!("pyenv command failed: args={args:?}, stderr='{}'", output.stderr);
            Err(PyenvError::CommandFailed {
                stderr: output.stderr,
                stdout: output.stdout,
            })
        }
    }

    /// `pyenv install -l`
    ///
    /// # Errors
    /// Fails when the listing command fails or its output is malformed.
    pub async fn install_list(&self) -> Result<Outcome, PyenvError> {
        let out = self.execute(&install_list_args()).await?;
        let versions = parse_install_list(&out.stdout)?;
        Ok(Outcome {
            changed: false,
            stdout: out.stdout,
            stderr: out.stderr,
            versions: Some(versions),
            virtualenvs: None,
        })
    }

    /// `pyenv install [--skip-existing | --force] <version>`
    ///
    /// A skipped already-installed version prints nothing, so an empty stdout
    /// on the skip-existing path reports `changed = false`; a forced install
    /// always reports a change.
    ///
    /// # Errors
    /// Fails when the install command fails.
    pub async fn install(
        &self,
        version: &str,
        skip_existing: Option<bool>,
        force: Option<bool>,
    ) -> Result<Outcome, PyenvError> {
        let mode = InstallMode::decide(skip_existing, force);
        let out = self.execute(&install_args(mode, version)).await?;
        Ok(Outcome {
            changed: mode == InstallMode::Force || !out.stdout.is_empty(),
            stdout: out.stdout,
            stderr: out.stderr,
            versions: None,
            virtualenvs: None,
        })
    }

    /// `pyenv uninstall -f <version>`, preceded by an installed-versions
    /// read; an absent version is a successful no-op.
    ///
    /// # Errors
    /// Fails when the read query or the uninstall command fails.
    pub async fn uninstall(&self, version: &str) -> Result<Outcome, PyenvError> {
        let current = self.versions(true).await?;
        let installed = current.versions.unwrap_or_default();
        if !installed.iter().any(|v| v == version) {
            debug!("version {version} not installed, nothing to uninstall");
            return Ok(Outcome::unchanged());
        }

        let out = self.execute(&uninstall_args(version)).await?;
        Ok(Outcome {
            changed: true,
            stdout: out.stdout,
            stderr: out.stderr,
            versions: None,
            virtualenvs: None,
        })
    }

    /// `pyenv versions [--bare]`
    ///
    /// # Errors
    /// Fails when the command fails or its output is malformed.
    pub async fn versions(&self, bare: bool) -> Result<Outcome, PyenvError> {
        let out = self.execute(&versions_args(bare)).await?;
        let versions = parse_lines(&out.stdout)?;
        Ok(Outcome {
            changed: false,
            stdout: out.stdout,
            stderr: out.stderr,
            versions: Some(versions),
            virtualenvs: None,
        })
    }

    /// `pyenv global`
    ///
    /// # Errors
    /// Fails when the command fails or its output is malformed.
    pub async fn global(&self) -> Result<Outcome, PyenvError> {
        let out = self.execute(&global_get_args()).await?;
        let versions = parse_lines(&out.stdout)?;
        Ok(Outcome {
            changed: false,
            stdout: out.stdout,
            stderr: out.stderr,
            versions: Some(versions),
            virtualenvs: None,
        })
    }

    /// `pyenv global <version>...`, preceded by a current-global read; equal
    /// desired and current sets (order ignored) make this a no-op.
    ///
    /// # Errors
    /// Fails when the read query or the mutation fails.
    pub async fn set_global(&self, versions: &[String]) -> Result<Outcome, PyenvError> {
        let current = self.global().await?;
        let current_set: HashSet<&str> = current
            .versions
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect();
        let desired_set: HashSet<&str> = versions.iter().map(String::as_str).collect();

        if current_set == desired_set {
            debug!("global versions already set to {versions:?}");
            return Ok(Outcome {
                versions: Some(versions.to_vec()),
                ..Outcome::unchanged()
            });
        }

        let out = self.execute(&global_set_args(versions)).await?;
        Ok(Outcome {
            changed: true,
            stdout: out.stdout,
            stderr: out.stderr,
            versions: Some(versions.to_vec()),
            virtualenvs: None,
        })
    }

    /// `pyenv virtualenvs [--skip-aliases] [--bare]`
    ///
    /// # Errors
    /// Fails when the command fails or its output is malformed.
    pub async fn virtualenvs(&self, skip_aliases: bool, bare: bool) -> Result<Outcome, PyenvError> {
        let out = self.execute(&virtualenvs_args(skip_aliases, bare)).await?;
        let virtualenvs = parse_lines(&out.stdout)?;
        Ok(Outcome {
            changed: false,
            stdout: out.stdout,
            stderr: out.stderr,
            versions: None,
            virtualenvs: Some(virtualenvs),
        })
    }

    /// `pyenv virtualenv [flags] <version> <name>`
    ///
    /// `--force` and `--clear` skip the existence check and always report a
    /// change, working around upstream behavior of pyenv-virtualenv (see
    /// pyenv/pyenv-virtualenv#161). Otherwise an existing environment is a
    /// no-op when its recorded `<version>/envs/<name>` entry matches, and a
    /// conflict when it does not.
    ///
    /// # Errors
    /// Fails when the read query or the creation fails, or on a version
    /// conflict with an existing environment.
    pub async fn create_virtualenv(
        &self,
        version: &str,
        name: &str,
        flags: VirtualenvFlags,
    ) -> Result<Outcome, PyenvError> {
        let args = virtualenv_args(flags, version, name);

        if flags.force || flags.clear {
            let out = self.execute(&args).await?;
            return Ok(Outcome {
                changed: true,
                stdout: out.stdout,
                stderr: out.stderr,
                versions: None,
                virtualenvs: None,
            });
        }

        let current = self.virtualenvs(false, true).await?;
        let existing: HashSet<&str> = current
            .virtualenvs
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect();
        if existing.contains(name) {
            if existing.contains(format!("{version}/envs/{name}").as_str()) {
                debug!("virtualenv {name} already exists at {version}");
                return Ok(Outcome {
                    stdout: format!("{name} already exists"),
                    ..Outcome::unchanged()
                });
            }
            return Err(PyenvError::VirtualenvConflict {
                name: name.to_string(),
            });
        }

        let out = self.execute(&args).await?;
        Ok(Outcome {
            changed: true,
            stdout: out.stdout,
            stderr: out.stderr,
            versions: None,
            virtualenvs: None,
        })
    }

    /// Route a declarative request to the matching operation, validating the
    /// per-subcommand required parameters first.
    ///
    /// # Errors
    /// Fails on missing required parameters or any operation failure.
    pub async fn dispatch(&self, request: &Request) -> Result<Outcome, PyenvError> {
        match request.subcommand {
            Subcommand::Install => {
                if request.list {
                    return self.install_list().await;
                }
                let version = require(request.version.as_deref(), "install", "version")?;
                self.install(version, request.skip_existing, request.force)
                    .await
            }
            Subcommand::Uninstall => {
                let version = require(request.version.as_deref(), "uninstall", "version")?;
                self.uninstall(version).await
            }
            Subcommand::Versions => self.versions(request.bare).await,
            Subcommand::Global => match request.versions.as_deref() {
                Some(versions) if !versions.is_empty() => self.set_global(versions).await,
                _ => self.global().await,
            },
            Subcommand::Virtualenv => {
                let version = require(request.version.as_deref(), "virtualenv", "version")?;
                let name = require(
                    request.virtualenv_name.as_deref(),
                    "virtualenv",
                    "virtualenv_name",
                )?;
                let flags = VirtualenvFlags {
                    force: request.force == Some(true),
                    no_pip: request.no_pip,
                    no_setuptools: request.no_setuptools,
                    no_wheel: request.no_wheel,
                    symlinks: request.symlinks,
                    copies: request.copies,
                    clear: request.clear,
                    without_pip: request.without_pip,
                    always_copy: request.always_copy,
                };
                self.create_virtualenv(version, name, flags).await
            }
            Subcommand::Virtualenvs => {
                self.virtualenvs(request.skip_aliases, request.bare).await
            }
        }
    }
}

fn require<'a>(
    value: Option<&'a str>,
    subcommand: &'static str,
    parameter: &'static str,
) -> Result<&'a str, PyenvError> {
    value.ok_or(PyenvError::MissingParameter {
        subcommand,
        parameter,
    })
}
