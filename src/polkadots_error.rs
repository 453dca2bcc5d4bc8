use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolkadotsError {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    ActionError(#[from] ActionError),
}

/// Per-link-request failures of the symlink engine. Each variant is recorded
/// in the execution report for one request and never aborts the run.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("source does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("dir_mode source is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("destination parent does not exist: {}", .0.display())]
    MissingParent(PathBuf),
    #[error("destination {} is already occupied by {}", .destination.display(), .occupant)]
    Conflict {
        destination: PathBuf,
        occupant: String,
    },
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("IO error on {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
}

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("source does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("dir_mode source is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("IO error on {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
}

#[derive(Debug, Error)]
pub enum MkdirError {
    #[error("failed to create directory {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
}

#[derive(Debug, Error)]
pub enum CatError {
    #[error("source does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("IO error on {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    LinkError(#[from] LinkError),
    #[error(transparent)]
    CopyError(#[from] CopyError),
    #[error(transparent)]
    MkdirError(#[from] MkdirError),
    #[error(transparent)]
    CatError(#[from] CatError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config found in {}", .0.display())]
    NotFound(PathBuf),
    #[error("config path {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("expected a JSON object in {}", .0.display())]
    NotAnObject(PathBuf),
    #[error("missing dotfile_repo file in {}", .0.display())]
    MissingRepoFile(PathBuf),
    #[error("could not determine the user configuration directory")]
    NoConfigDir,
    #[error("an error occurred while loading the configuration file {}: {}", .0.display(), .1)]
    IoError(PathBuf, #[source] std::io::Error),
    #[error("an error occurred while parsing the configuration file {}: {}", .0.display(), .1)]
    SerdeJsonError(PathBuf, #[source] serde_json::Error),
}
