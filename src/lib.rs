//! Crate entry point for **commitlint**.
//!
//! This library provides the implementation behind the `commitlint` CLI,
//! which installs a Conventional Commits `commit-msg` hook into a Git
//! repository. Each submodule owns one concern (config parsing, repository
//! discovery, the bundled stub, the installer itself).
//! The `pub use` re-exports make the commands and the installer API
//! reachable from the crate root.

mod config;
mod error;
mod git;
mod install;
mod paths;
mod stub;

pub use config::{CONFIG_FILE, Config, HookConfig, load_config};
pub use error::InstallError;
pub use install::{
    Confirm, HookFs, InstallArgs, InstallOutcome, InstallRequest, LocalFs, Overwrite,
    TerminalPrompt, cmd_install, install,
};
pub use paths::{HOOK_NAME, Paths, cmd_path, paths, paths_from};
pub use stub::{BUNDLED_STUB, Stub, cmd_stub};
