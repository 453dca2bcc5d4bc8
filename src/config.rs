use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::action::ConfigAction;
use crate::polkadots_error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const REPO_FILE_NAME: &str = "dotfile_repo";

/// Take a path string and get the absolute, user expanded, variable expanded
/// version. Unknown environment variables leave the path tilde-expanded only.
pub fn expand_path(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path)
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| shellexpand::tilde(path).into_owned());
    PathBuf::from(expanded)
}

/// The dotfile repository root. Resolved once per run and read-only for the
/// duration of it; every relative `source` field is resolved against it.
#[derive(Debug, Clone)]
pub struct DotfileRepo {
    root: PathBuf,
}

impl DotfileRepo {
    pub fn new(root: &str) -> Self {
        Self {
            root: expand_path(root),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Expand `path` and resolve it against the repository root. An absolute
    /// (or tilde-expanded) path wins over the root, matching `Path::join`.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(expand_path(path))
    }
}

impl From<PathBuf> for DotfileRepo {
    fn from(root: PathBuf) -> Self {
        Self { root }
    }
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub repo: DotfileRepo,
    pub actions: Vec<ConfigAction>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    dotfile_repo: String,
    #[serde(default)]
    actions: Vec<ConfigAction>,
}

/// Base directory holding the default config, `<user config dir>/polkadots`.
pub fn default_base_dir() -> Result<PathBuf, ConfigError> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("polkadots"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Find the correct path to pull a config from. A profile moves the lookup
/// under `profiles/<name>`; `config2` selects the directory itself instead of
/// the `config.json` inside it.
pub fn config_path(base: &Path, profile: Option<&str>, config2: bool) -> PathBuf {
    let mut path = base.to_path_buf();
    if let Some(profile) = profile {
        path = path.join("profiles").join(profile);
    }
    if config2 { path } else { path.join(CONFIG_FILE_NAME) }
}

/// Load the legacy JSON config: a single file, or a directory whose `*.json`
/// files are merged in lexicographic filename order (later keys win).
pub fn load_json_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let value = read_merged(path)?;
    let raw: RawConfig = serde_json::from_value(value)
        .map_err(|e| ConfigError::SerdeJsonError(path.to_path_buf(), e))?;
    Ok(LoadedConfig {
        repo: DotfileRepo::new(&raw.dotfile_repo),
        actions: raw.actions,
    })
}

/// Load the config-directory format: a `dotfile_repo` file holding a single
/// path line next to a `config.json` whose top level is the actions array.
pub fn load_config_dir(dir: &Path) -> Result<LoadedConfig, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::NotADirectory(dir.to_path_buf()));
    }
    let repo_file = dir.join(REPO_FILE_NAME);
    let root = std::fs::read_to_string(&repo_file).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::MissingRepoFile(dir.to_path_buf())
        } else {
            ConfigError::IoError(repo_file.clone(), e)
        }
    })?;
    let actions_file = dir.join(CONFIG_FILE_NAME);
    let content = std::fs::read_to_string(&actions_file)
        .map_err(|e| ConfigError::IoError(actions_file.clone(), e))?;
    let actions: Vec<ConfigAction> = serde_json::from_str(&content)
        .map_err(|e| ConfigError::SerdeJsonError(actions_file, e))?;
    Ok(LoadedConfig {
        repo: DotfileRepo::new(root.trim_end()),
        actions,
    })
}

fn read_merged(path: &Path) -> Result<serde_json::Value, ConfigError> {
    if !path.is_dir() {
        return read_value(path);
    }
    let entries = std::fs::read_dir(path).map_err(|e| ConfigError::IoError(path.to_path_buf(), e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::IoError(path.to_path_buf(), e))?;
        let file = entry.path();
        if file.extension().is_some_and(|ext| ext == "json") {
            files.push(file);
        }
    }
    files.sort();
    let mut merged = serde_json::Map::new();
    for file in files {
        match read_value(&file)? {
            serde_json::Value::Object(map) => merged.extend(map),
            _ => return Err(ConfigError::NotAnObject(file)),
        }
    }
    Ok(serde_json::Value::Object(merged))
}

fn read_value(path: &Path) -> Result<serde_json::Value, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(path.to_path_buf(), e))?;
    serde_json::from_str(&content).map_err(|e| ConfigError::SerdeJsonError(path.to_path_buf(), e))
}
