//! # commitlint
//!
//! **commitlint** installs a `commit-msg` hook that rejects commit messages
//! not following Conventional Commits.
//!
//! Features:
//! - `commitlint install [HOOK_PATH] [STUB_PATH]` copies the hook into place
//!   and marks it executable, asking before it replaces an existing hook
//! - `commitlint stub` prints the bundled hook script
//! - `commitlint path` prints where `install` writes by default
//!
//! This CLI is built with [clap](https://docs.rs/clap).

use clap::{Parser, Subcommand};
use colored::Colorize;
use commitlint::{InstallArgs, Overwrite, cmd_install, cmd_path, cmd_stub};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line interface definition.
#[derive(Parser, Debug)]
#[command(
    name = "commitlint",
    version,
    about = "commitlint - install a Conventional Commits commit-msg hook",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Install the commit-msg Git hook for Conventional Commits
    Install {
        /// Custom path to install the commit-msg hook
        hook_path: Option<PathBuf>,
        /// Custom path to the stub file
        stub_path: Option<PathBuf>,
        /// Overwrite an existing hook without asking
        #[arg(short, long)]
        force: bool,
        /// Never prompt; keep an existing hook
        #[arg(short, long, conflicts_with = "force")]
        no_interaction: bool,
    },
    /// Print the bundled commit-msg hook script
    Stub,
    /// Print the path the hook is installed to by default
    Path,
}

fn main() -> ExitCode {
    // Usage errors exit 1 like every other failure; help and version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    let res = match cli.cmd {
        Cmd::Install {
            hook_path,
            stub_path,
            force,
            no_interaction,
        } => {
            let overwrite = if force {
                Overwrite::Always
            } else if no_interaction {
                Overwrite::Never
            } else {
                Overwrite::Ask
            };
            cmd_install(InstallArgs {
                hook_path,
                stub_path,
                overwrite,
            })
        }
        Cmd::Stub => cmd_stub(),
        Cmd::Path => cmd_path(),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "✘".red(), e);
            ExitCode::FAILURE
        }
    }
}
