use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::config::{CONFIG_FILE, load_config};
use crate::git::{ceiling_dirs_from_env, discover};

/// Name of the hook file inside the hooks directory.
pub const HOOK_NAME: &str = "commit-msg";

#[derive(Clone, Debug)]
pub struct Paths {
    pub root: PathBuf,
    pub hooks_dir: PathBuf,
    pub hook: PathBuf,
    pub config: PathBuf,
}

/// Resolve paths for the repository enclosing `start`.
///
/// Outside a repository everything is anchored at `start`, which makes the
/// default hook path `<start>/.git/hooks/commit-msg`.
pub fn paths_from(start: &Path) -> Result<Paths> {
    let ceilings = ceiling_dirs_from_env(env::var_os("GIT_CEILING_DIRECTORIES"));
    let (root, hooks_dir) = match discover(start, &ceilings)? {
        Some(layout) => (layout.root, layout.hooks_dir),
        None => (start.to_path_buf(), start.join(".git").join("hooks")),
    };
    Ok(Paths {
        hook: hooks_dir.join(HOOK_NAME),
        config: root.join(CONFIG_FILE),
        root,
        hooks_dir,
    })
}

pub fn paths() -> Result<Paths> {
    let cwd = env::current_dir().context("failed to read current directory")?;
    paths_from(&cwd)
}

/// CLI command: print the hook path `install` would write to by default.
///
/// Takes `.commitlint.toml` into account.
pub fn cmd_path() -> Result<()> {
    let p = paths()?;
    let cfg = load_config(&p.config)?;
    println!("{}", cfg.hook.path.unwrap_or(p.hook).display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn paths_inside_repository() {
        let td = tempdir().unwrap();
        let root = td.path().canonicalize().unwrap();
        git2::Repository::init(&root).unwrap();

        let p = paths_from(&root).unwrap();
        assert_eq!(p.root.canonicalize().unwrap(), root);
        assert_eq!(p.hook, p.hooks_dir.join(HOOK_NAME));
        assert_eq!(p.config, p.root.join(CONFIG_FILE));
    }

    #[test]
    fn hook_is_named_commit_msg() {
        let td = tempdir().unwrap();
        let dir = td.path().join("work");
        fs::create_dir_all(&dir).unwrap();

        let p = paths_from(&dir).unwrap();
        assert_eq!(p.hook.file_name().unwrap(), HOOK_NAME);
        assert!(p.hooks_dir.ends_with("hooks"));
    }
}
