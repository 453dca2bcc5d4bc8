use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::action::Action;
use crate::execution_plan::{Applied, ExecutionReport, RunContext};
use crate::polkadots_error::CopyError;

/// Copy a file out of the dotfile repository instead of linking it, for
/// destinations where a symlink will not do. Existing destination files are
/// skipped with a warning unless `overwrite` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct CopyAction {
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub dir_mode: bool,
    #[serde(default)]
    pub overwrite: bool,
}

impl Action for CopyAction {
    fn short_description(&self) -> String {
        format!("Copy {} -> {}", self.source, self.destination)
    }

    fn execute(&self, ctx: &RunContext, report: &mut ExecutionReport) {
        let source = ctx.repo.resolve(&self.source);
        if !source.exists() {
            report.record(
                self.short_description(),
                Err(CopyError::SourceNotFound(source).into()),
            );
            return;
        }
        let destination = ctx.repo.resolve(&self.destination);
        let files = if self.dir_mode {
            match direct_children(&source) {
                Ok(files) => files,
                Err(e) => {
                    report.record(self.short_description(), Err(e.into()));
                    return;
                }
            }
        } else {
            vec![source]
        };
        for file in files {
            let target = if destination.is_dir() {
                file.file_name()
                    .map(|name| destination.join(name))
                    .unwrap_or_else(|| destination.clone())
            } else {
                destination.clone()
            };
            let description = format!("Copy {} -> {}", file.display(), target.display());
            if target.exists() && !self.overwrite {
                log::warn!(
                    "Skipping {} because overwrite is false and it exists in the destination",
                    file.display()
                );
                report.record(description, Ok(Applied::SkippedExisting));
                continue;
            }
            let outcome = std::fs::copy(&file, &target)
                .map(|_| Applied::Copied)
                .map_err(|e| CopyError::Io(target, e).into());
            report.record(description, outcome);
        }
    }
}

fn direct_children(source: &Path) -> Result<Vec<PathBuf>, CopyError> {
    if !source.is_dir() {
        return Err(CopyError::NotADirectory(source.to_path_buf()));
    }
    let entries = source
        .read_dir()
        .map_err(|e| CopyError::Io(source.to_path_buf(), e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CopyError::Io(source.to_path_buf(), e))?;
        files.push(entry.path());
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DotfileRepo;
    use crate::file_ops::ConflictPolicy;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn run(action: &CopyAction, repo_root: &std::path::Path) -> ExecutionReport {
        let ctx = RunContext {
            repo: DotfileRepo::from(repo_root.to_path_buf()),
            policy: ConflictPolicy::Skip,
        };
        let mut report = ExecutionReport::default();
        action.execute(&ctx, &mut report);
        report
    }

    #[test]
    fn test_copy_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("conf"), b"data").unwrap();
        let dst = tmp.path().join("out");
        let action = CopyAction {
            source: "conf".to_string(),
            destination: dst.display().to_string(),
            dir_mode: false,
            overwrite: false,
        };
        let report = run(&action, tmp.path());
        assert!(report.is_success());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "data");
    }

    #[test]
    fn test_copy_skips_existing_without_overwrite() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("conf"), b"new").unwrap();
        let dst = tmp.path().join("out");
        fs::write(&dst, b"old").unwrap();
        let action = CopyAction {
            source: "conf".to_string(),
            destination: dst.display().to_string(),
            dir_mode: false,
            overwrite: false,
        };
        let report = run(&action, tmp.path());
        assert!(report.is_success());
        assert!(matches!(
            report.results()[0].outcome,
            Ok(Applied::SkippedExisting)
        ));
        assert_eq!(fs::read_to_string(&dst).unwrap(), "old");
    }

    #[test]
    fn test_copy_overwrites_when_asked() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("conf"), b"new").unwrap();
        let dst = tmp.path().join("out");
        fs::write(&dst, b"old").unwrap();
        let action = CopyAction {
            source: "conf".to_string(),
            destination: dst.display().to_string(),
            dir_mode: false,
            overwrite: true,
        };
        let report = run(&action, tmp.path());
        assert!(report.is_success());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
    }

    #[test]
    fn test_copy_dir_mode_into_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("bundle")).unwrap();
        fs::write(tmp.path().join("bundle/a"), b"a").unwrap();
        fs::write(tmp.path().join("bundle/b"), b"b").unwrap();
        let dst = tmp.path().join("out");
        fs::create_dir(&dst).unwrap();
        let action = CopyAction {
            source: "bundle".to_string(),
            destination: dst.display().to_string(),
            dir_mode: true,
            overwrite: false,
        };
        let report = run(&action, tmp.path());
        assert!(report.is_success());
        assert_eq!(report.len(), 2);
        assert_eq!(fs::read_to_string(dst.join("a")).unwrap(), "a");
        assert_eq!(fs::read_to_string(dst.join("b")).unwrap(), "b");
    }

    #[test]
    fn test_copy_missing_source() {
        let tmp = TempDir::new().unwrap();
        let action = CopyAction {
            source: "absent".to_string(),
            destination: tmp.path().join("out").display().to_string(),
            dir_mode: false,
            overwrite: false,
        };
        let report = run(&action, tmp.path());
        assert!(!report.is_success());
    }
}
