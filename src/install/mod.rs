mod fs;
mod prompt;

use anyhow::Result;
use colored::Colorize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::error::InstallError;
use crate::paths::paths;
use crate::stub::{BUNDLED_STUB, Stub};

use fs::sha256_bytes;

pub use fs::{HookFs, LocalFs};
pub use prompt::{Confirm, TerminalPrompt};

const OVERWRITE_PROMPT: &str = "commit-msg hook already exists. Overwrite?";

/// What to do when a hook is already present at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Ask, defaulting to "no".
    #[default]
    Ask,
    /// Replace without asking.
    Always,
    /// Keep the existing hook without asking.
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    /// The destination already held the same executable script.
    Unchanged,
    /// An existing hook was kept.
    Declined,
}

/// A single install invocation.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub hook_path: PathBuf,
    pub stub: Stub,
    pub overwrite: Overwrite,
}

/// Arguments of `commitlint install` as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct InstallArgs {
    pub hook_path: Option<PathBuf>,
    pub stub_path: Option<PathBuf>,
    pub overwrite: Overwrite,
}

/// CLI command: install the `commit-msg` hook.
///
/// Paths come from the positional arguments first, then `.commitlint.toml`,
/// then the defaults (`<repo>/.git/hooks/commit-msg` and the bundled stub).
///
/// # Errors
/// Returns an error if path resolution or the config file fails, or any
/// [`InstallError`] raised by [`install`].
pub fn cmd_install(args: InstallArgs) -> Result<()> {
    let req = match (args.hook_path, args.stub_path) {
        // Both given: repository discovery and config are never consulted.
        (Some(hook_path), Some(stub_path)) => InstallRequest {
            hook_path,
            stub: Stub::File(stub_path),
            overwrite: args.overwrite,
        },
        (hook_path, stub_path) => {
            let p = paths()?;
            let cfg = load_config(&p.config)?;
            InstallRequest {
                hook_path: hook_path.or(cfg.hook.path).unwrap_or(p.hook),
                stub: Stub::from_path(stub_path.or(cfg.hook.stub)),
                overwrite: args.overwrite,
            }
        }
    };

    match install(&LocalFs, &mut TerminalPrompt, &req)? {
        InstallOutcome::Installed => {
            println!(
                "{} commit-msg hook installed at {}",
                "✔".green(),
                req.hook_path.display()
            );
            println!("  Commit messages must follow Conventional Commits from now on.");
        }
        InstallOutcome::Unchanged => {
            println!(
                "{} commit-msg hook already up to date ({})",
                "✔".green(),
                req.hook_path.display()
            );
        }
        InstallOutcome::Declined => {
            println!("{}", "Aborted. Existing hook not overwritten.".yellow());
        }
    }
    Ok(())
}

/// Install the stub at `req.hook_path`.
///
/// Checks, in order: the hooks directory exists, the stub file exists, and
/// (if the destination is taken) the overwrite decision. Nothing is written
/// before all three pass.
///
/// The stub is copied to a `<hook>.new` sibling, made executable and then
/// renamed over the destination, so a failed chmod never leaves a
/// half-installed hook behind. When the destination is a symlink, the
/// file it points to is replaced and the link stays.
///
/// # Errors
/// One [`InstallError`] variant per failure; all of them are terminal.
pub fn install(
    files: &dyn HookFs,
    prompt: &mut dyn Confirm,
    req: &InstallRequest,
) -> Result<InstallOutcome, InstallError> {
    let hook = req.hook_path.as_path();
    let hooks_dir = hooks_dir_of(hook);
    if !files.is_dir(hooks_dir) {
        return Err(InstallError::HooksDirMissing(hooks_dir.to_path_buf()));
    }

    if let Stub::File(src) = &req.stub
        && !files.is_file(src)
    {
        return Err(InstallError::StubMissing(src.clone()));
    }

    if files.exists(hook) {
        if files.is_executable(hook) && same_contents(files, hook, &req.stub) {
            return Ok(InstallOutcome::Unchanged);
        }
        let replace = match req.overwrite {
            Overwrite::Ask => prompt
                .confirm(OVERWRITE_PROMPT, false)
                .map_err(InstallError::Prompt)?,
            Overwrite::Always => true,
            Overwrite::Never => false,
        };
        if !replace {
            return Ok(InstallOutcome::Declined);
        }
    }

    // An existing symlinked hook is written through, keeping the link.
    let target = files.resolve_link(hook);
    let staged = staging_path(&target);
    if files.exists(&staged) {
        let _ = files.remove_file(&staged);
    }

    let copied = match &req.stub {
        Stub::Bundled => files.write(&staged, BUNDLED_STUB.as_bytes()),
        Stub::File(src) => files.copy(src, &staged),
    };
    if let Err(e) = copied {
        let _ = files.remove_file(&staged);
        return Err(InstallError::Copy(e));
    }

    if let Err(e) = files.set_executable(&staged) {
        let _ = files.remove_file(&staged);
        return Err(InstallError::Chmod(e));
    }

    if let Err(e) = files.rename(&staged, &target) {
        let _ = files.remove_file(&staged);
        return Err(InstallError::Copy(e));
    }

    Ok(InstallOutcome::Installed)
}

fn hooks_dir_of(hook: &Path) -> &Path {
    match hook.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

fn staging_path(hook: &Path) -> PathBuf {
    let mut name = hook
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("commit-msg"));
    name.push(".new");
    hook.with_file_name(name)
}

fn same_contents(files: &dyn HookFs, hook: &Path, stub: &Stub) -> bool {
    let Ok(current) = files.digest(hook) else {
        return false;
    };
    let wanted = match stub {
        Stub::Bundled => sha256_bytes(BUNDLED_STUB.as_bytes()),
        Stub::File(src) => match files.digest(src) {
            Ok(d) => d,
            Err(_) => return false,
        },
    };
    current == wanted
}
