use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Terminal failures of a hook installation.
///
/// Each variant maps to one user-facing message; the CLI turns any of them
/// into exit code 1.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("No .git/hooks directory found at {}. Is this a Git repository?", .0.display())]
    HooksDirMissing(PathBuf),

    #[error("Stub file not found at {}", .0.display())]
    StubMissing(PathBuf),

    #[error("Failed to copy hook file. Check permissions.")]
    Copy(#[source] io::Error),

    #[error("Failed to set hook file as executable.")]
    Chmod(#[source] io::Error),

    #[error("Failed to read overwrite confirmation.")]
    Prompt(#[source] io::Error),
}
