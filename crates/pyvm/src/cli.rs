use clap::{ArgAction, Parser, Subcommand as ClapSubcommand};

use pyvm_backend::{Request, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "pyvm",
    version,
    about = "Declarative wrapper around the pyenv command-line tool"
)]
pub struct Cli {
    /// Explicit pyenv root; falls back to the PYENV_ROOT environment variable.
    #[arg(long, global = true, value_name = "PATH")]
    pub pyenv_root: Option<String>,

    /// Expand a leading ~ in the pyenv root.
    #[arg(long, global = true, action = ArgAction::Set, default_value_t = true, value_name = "BOOL")]
    pub expanduser: bool,

    /// Enable debug logging on stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, ClapSubcommand)]
pub enum Command {
    /// Install a Python version (or list installable versions with --list).
    Install {
        version: Option<String>,
        /// List installable versions instead of installing.
        #[arg(long)]
        list: bool,
        /// Reinstall even when the version is already installed.
        #[arg(long)]
        force: bool,
        /// Skip versions that are already installed (the default). Pass
        /// `false` to make an explicit --force win.
        #[arg(long, value_name = "BOOL")]
        skip_existing: Option<bool>,
    },
    /// Uninstall a Python version; a no-op when it is not installed.
    Uninstall { version: String },
    /// List installed Python versions.
    Versions {
        #[arg(long, action = ArgAction::Set, default_value_t = true, value_name = "BOOL")]
        bare: bool,
    },
    /// Get the global version(s), or set them when versions are given.
    Global { versions: Vec<String> },
    /// Create a virtualenv for a version; a no-op when it already exists.
    Virtualenv {
        version: String,
        name: String,
        #[arg(long)]
        force: bool,
        #[arg(long)]
        no_pip: bool,
        #[arg(long)]
        no_setuptools: bool,
        #[arg(long)]
        no_wheel: bool,
        #[arg(long)]
        symlinks: bool,
        #[arg(long)]
        copies: bool,
        #[arg(long)]
        clear: bool,
        #[arg(long)]
        without_pip: bool,
        #[arg(long)]
        always_copy: bool,
    },
    /// List virtualenvs.
    Virtualenvs {
        #[arg(long, action = ArgAction::Set, default_value_t = true, value_name = "BOOL")]
        skip_aliases: bool,
        #[arg(long, action = ArgAction::Set, default_value_t = true, value_name = "BOOL")]
        bare: bool,
    },
}

impl Cli {
    /// Translate the parsed command line into the adapter's request record.
    #[must_use]
    pub fn into_request(self) -> Request {
        let mut request = Request {
            pyenv_root: self.pyenv_root,
            expanduser: self.expanduser,
            ..Request::default()
        };

        match self.command {
            Command::Install {
                version,
                list,
                force,
                skip_existing,
            } => {
                request.subcommand = Subcommand::Install;
                request.version = version;
                request.list = list;
                request.force = force.then_some(true);
                request.skip_existing = skip_existing;
            }
            Command::Uninstall { version } => {
                request.subcommand = Subcommand::Uninstall;
                request.version = Some(version);
            }
            Command::Versions { bare } => {
                request.subcommand = Subcommand::Versions;
                request.bare = bare;
            }
            Command::Global { versions } => {
                request.subcommand = Subcommand::Global;
                if !versions.is_empty() {
                    request.versions = Some(versions);
                }
            }
            Command::Virtualenv {
                version,
                name,
                force,
                no_pip,
                no_setuptools,
                no_wheel,
                symlinks,
                copies,
                clear,
                without_pip,
                always_copy,
            } => {
                request.subcommand = Subcommand::Virtualenv;
                request.version = Some(version);
                request.virtualenv_name = Some(name);
                request.force = force.then_some(true);
                request.no_pip = no_pip;
                request.no_setuptools = no_setuptools;
                request.no_wheel = no_wheel;
                request.symlinks = symlinks;
                request.copies = copies;
                request.clear = clear;
                request.without_pip = without_pip;
                request.always_copy = always_copy;
            }
            Command::Virtualenvs { skip_aliases, bare } => {
                request.subcommand = Subcommand::Virtualenvs;
                request.skip_aliases = skip_aliases;
                request.bare = bare;
            }
        }

        request
    }
}
