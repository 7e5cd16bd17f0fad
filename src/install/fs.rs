use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// File-system operations the installer performs.
///
/// Every method has a working default backed by `std::fs`, so [`LocalFs`]
/// is an empty impl and test doubles override only the call they want to
/// fail.
pub trait HookFs {
    /// True for anything at `p`, including a dangling symlink.
    fn exists(&self, p: &Path) -> bool {
        fs::symlink_metadata(p).is_ok()
    }

    /// Final target of `p` when it is a symlink that resolves, else `p`.
    fn resolve_link(&self, p: &Path) -> PathBuf {
        match fs::symlink_metadata(p) {
            Ok(m) if m.file_type().is_symlink() => {
                fs::canonicalize(p).unwrap_or_else(|_| p.to_path_buf())
            }
            _ => p.to_path_buf(),
        }
    }

    fn is_dir(&self, p: &Path) -> bool {
        p.is_dir()
    }

    fn is_file(&self, p: &Path) -> bool {
        p.is_file()
    }

    fn is_executable(&self, p: &Path) -> bool {
        is_executable(p)
    }

    fn digest(&self, p: &Path) -> io::Result<String> {
        sha256_file(p)
    }

    fn copy(&self, src: &Path, dst: &Path) -> io::Result<()> {
        fs::copy(src, dst).map(|_| ())
    }

    fn write(&self, dst: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(dst, contents)
    }

    fn set_executable(&self, p: &Path) -> io::Result<()> {
        make_executable(p)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn remove_file(&self, p: &Path) -> io::Result<()> {
        fs::remove_file(p)
    }
}

/// The real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl HookFs for LocalFs {}

pub fn sha256_file(path: &Path) -> io::Result<String> {
    let mut f = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = f.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

pub fn sha256_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

#[cfg(unix)]
pub fn make_executable(p: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perm = fs::metadata(p)?.permissions();
    perm.set_mode(0o755);
    fs::set_permissions(p, perm)
}

#[cfg(not(unix))]
pub fn make_executable(p: &Path) -> io::Result<()> {
    fs::metadata(p).map(|_| ())
}

#[cfg(unix)]
fn is_executable(p: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(p)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(p: &Path) -> bool {
    p.is_file()
}
