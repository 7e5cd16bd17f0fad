use anyhow::{Context, Result};
use git2::{ErrorCode, Repository};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Locations inside a discovered repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    /// Working tree root, or the git directory itself for bare repositories.
    pub root: PathBuf,
    /// Directory Git runs hooks from.
    pub hooks_dir: PathBuf,
}

/// Discover the repository enclosing `start`.
///
/// The search walks up from `start` and stops at any directory listed in
/// `ceiling_dirs` (the same semantics as `GIT_CEILING_DIRECTORIES`).
///
/// Returns `Ok(None)` when no repository is found.
///
/// # Errors
/// Returns an error if a repository is found but cannot be opened.
pub fn discover(start: &Path, ceiling_dirs: &[PathBuf]) -> Result<Option<RepoLayout>> {
    let git_dir = match Repository::discover_path(start, ceiling_dirs) {
        Ok(p) => p,
        Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("git discover {}", start.display()));
        }
    };

    let repo = Repository::open(&git_dir)
        .with_context(|| format!("git open {}", git_dir.display()))?;

    let root = repo
        .workdir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| repo.path().to_path_buf());
    let hooks_dir = configured_hooks_path(&repo, &root)
        .unwrap_or_else(|| repo.commondir().join("hooks"));

    Ok(Some(RepoLayout { root, hooks_dir }))
}

/// Read `core.hooksPath`, resolving relative values against `root`.
fn configured_hooks_path(repo: &Repository, root: &Path) -> Option<PathBuf> {
    let cfg = repo.config().ok()?;
    let p = cfg.get_path("core.hooksPath").ok()?;
    if p.is_absolute() {
        Some(p)
    } else {
        Some(root.join(p))
    }
}

/// Ceiling directories taken from `GIT_CEILING_DIRECTORIES`, if set.
pub fn ceiling_dirs_from_env(value: Option<OsString>) -> Vec<PathBuf> {
    value
        .map(|v| {
            std::env::split_paths(&v)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn ceiling_above(dir: &Path) -> Vec<PathBuf> {
        dir.parent().map(Path::to_path_buf).into_iter().collect()
    }

    #[test]
    fn discover_finds_default_hooks_dir() {
        let td = tempdir().unwrap();
        let root = td.path().canonicalize().unwrap();
        Repository::init(&root).unwrap();

        let layout = discover(&root, &ceiling_above(&root)).unwrap().unwrap();
        assert_eq!(layout.root.canonicalize().unwrap(), root);
        assert!(layout.hooks_dir.ends_with(Path::new(".git").join("hooks")));
    }

    #[test]
    fn discover_walks_up_from_subdirectory() {
        let td = tempdir().unwrap();
        let root = td.path().canonicalize().unwrap();
        Repository::init(&root).unwrap();
        let nested = root.join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        let layout = discover(&nested, &ceiling_above(&root)).unwrap().unwrap();
        assert_eq!(layout.root.canonicalize().unwrap(), root);
    }

    #[test]
    fn discover_honours_relative_core_hooks_path() {
        let td = tempdir().unwrap();
        let root = td.path().canonicalize().unwrap();
        let repo = Repository::init(&root).unwrap();
        repo.config()
            .unwrap()
            .set_str("core.hooksPath", ".githooks")
            .unwrap();

        let layout = discover(&root, &ceiling_above(&root)).unwrap().unwrap();
        assert_eq!(layout.hooks_dir, layout.root.join(".githooks"));
    }

    #[test]
    fn discover_returns_none_outside_repository() {
        let td = tempdir().unwrap();
        let base = td.path().canonicalize().unwrap();
        let dir = base.join("plain");
        fs::create_dir_all(&dir).unwrap();

        let got = discover(&dir, &[base.clone()]).unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn ceiling_dirs_split_like_path_lists() {
        let joined = std::env::join_paths(["/a", "/b/c"]).unwrap();
        let got = ceiling_dirs_from_env(Some(joined));
        assert_eq!(got, vec![PathBuf::from("/a"), PathBuf::from("/b/c")]);
        assert!(ceiling_dirs_from_env(None).is_empty());
    }
}
