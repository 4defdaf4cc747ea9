mod client;
mod command;
mod output;
mod root;

pub use client::PyenvClient;
pub use command::{InstallMode, VirtualenvFlags};
pub use root::resolve_root;
