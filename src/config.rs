use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name looked up in the repository root.
pub const CONFIG_FILE: &str = ".commitlint.toml";

/// Top-level configuration structure loaded from `.commitlint.toml`.
///
/// The file is optional. Only the `hook` section is supported.
///
/// Example TOML:
/// ```toml
/// [hook]
/// path = ".githooks/commit-msg"
/// stub = "tools/commit-msg.sh"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub hook: HookConfig,
}

/// Overrides for where the hook goes and which script is copied.
///
/// Relative paths are resolved against the directory holding the config
/// file when it is loaded.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HookConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub stub: Option<PathBuf>,
}

/// Load `.commitlint.toml` from `path`.
///
/// # Errors
/// - Returns an error if the file exists but cannot be read.
/// - Returns an error if parsing the TOML fails.
///
/// # Notes
/// - A missing file yields [`Config::default`].
pub fn load_config(path: &Path) -> Result<Config> {
    let txt = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let mut cfg: Config =
        toml::from_str(&txt).with_context(|| format!("failed to parse {}", path.display()))?;

    let base = path.parent().unwrap_or(Path::new("."));
    cfg.hook.path = cfg.hook.path.map(|p| base.join(p));
    cfg.hook.stub = cfg.hook.stub.map(|p| base.join(p));
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let td = tempdir().unwrap();
        let cfg = load_config(&td.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let td = tempdir().unwrap();
        let file = td.path().join(CONFIG_FILE);
        fs::write(
            &file,
            "[hook]\npath = \".githooks/commit-msg\"\nstub = \"/opt/stubs/commit-msg\"\n",
        )
        .unwrap();

        let cfg = load_config(&file).unwrap();
        assert_eq!(
            cfg.hook.path,
            Some(td.path().join(".githooks").join("commit-msg"))
        );
        assert_eq!(cfg.hook.stub, Some(PathBuf::from("/opt/stubs/commit-msg")));
    }

    #[test]
    fn empty_file_is_valid() {
        let td = tempdir().unwrap();
        let file = td.path().join(CONFIG_FILE);
        fs::write(&file, "").unwrap();
        assert_eq!(load_config(&file).unwrap(), Config::default());
    }

    #[test]
    fn malformed_file_names_the_path() {
        let td = tempdir().unwrap();
        let file = td.path().join(CONFIG_FILE);
        fs::write(&file, "[hook\npath = 1").unwrap();

        let err = load_config(&file).unwrap_err();
        assert!(format!("{}", err).contains(CONFIG_FILE));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let td = tempdir().unwrap();
        let file = td.path().join(CONFIG_FILE);
        fs::write(&file, "[hook]\ndestination = \"x\"\n").unwrap();
        assert!(load_config(&file).is_err());
    }
}
