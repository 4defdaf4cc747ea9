mod error;
mod runner;
mod types;

pub use error::PyenvError;
pub use runner::{CommandOutput, CommandRunner, ProcessRunner};
pub use types::{Outcome, Request, Subcommand};
