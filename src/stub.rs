use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

/// The `commit-msg` script shipped inside the binary.
pub const BUNDLED_STUB: &str = include_str!("../assets/commit-msg");

/// Where the hook script is copied from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stub {
    /// The script embedded at compile time.
    Bundled,
    /// A script on disk chosen by the user or by `.commitlint.toml`.
    File(PathBuf),
}

impl Stub {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(Stub::File).unwrap_or(Stub::Bundled)
    }
}

/// Print the bundled `commit-msg` script.
///
/// The script is written verbatim so it can be redirected into a hooks
/// directory managed by some other tool:
///
/// ```sh
/// commitlint stub > .githooks/commit-msg
/// ```
///
/// # Errors
/// Returns an error if writing to `stdout` fails.
pub fn cmd_stub() -> Result<()> {
    io::stdout().write_all(BUNDLED_STUB.as_bytes())?;
    Ok(())
}
