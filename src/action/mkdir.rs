use serde::Deserialize;

use crate::action::Action;
use crate::execution_plan::{Applied, ExecutionReport, RunContext};
use crate::polkadots_error::MkdirError;

fn default_parents() -> bool {
    true
}

/// Create a directory if it does not exist already, so that later actions
/// have somewhere to link or copy into.
#[derive(Debug, Clone, Deserialize)]
pub struct MkdirAction {
    pub directory: String,
    #[serde(default = "default_parents")]
    pub parents: bool,
}

impl Action for MkdirAction {
    fn short_description(&self) -> String {
        format!("Mkdir {}", self.directory)
    }

    fn execute(&self, ctx: &RunContext, report: &mut ExecutionReport) {
        let directory = ctx.repo.resolve(&self.directory);
        let description = format!("Mkdir {}", directory.display());
        if directory.is_dir() {
            report.record(description, Ok(Applied::Unchanged));
            return;
        }
        log::info!("Mkdir {}", directory.display());
        let result = if self.parents {
            std::fs::create_dir_all(&directory)
        } else {
            std::fs::create_dir(&directory)
        };
        let outcome = result
            .map(|()| Applied::Created)
            .map_err(|e| MkdirError::Io(directory, e).into());
        report.record(description, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DotfileRepo;
    use crate::file_ops::ConflictPolicy;
    use tempfile::TempDir;

    fn run(action: &MkdirAction, repo_root: &std::path::Path) -> ExecutionReport {
        let ctx = RunContext {
            repo: DotfileRepo::from(repo_root.to_path_buf()),
            policy: ConflictPolicy::Skip,
        };
        let mut report = ExecutionReport::default();
        action.execute(&ctx, &mut report);
        report
    }

    #[test]
    fn test_mkdir_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let action = MkdirAction {
            directory: "a/b/c".to_string(),
            parents: true,
        };
        let report = run(&action, tmp.path());
        assert!(report.is_success());
        assert!(tmp.path().join("a/b/c").is_dir());
    }

    #[test]
    fn test_mkdir_existing_is_a_noop() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("a")).unwrap();
        let action = MkdirAction {
            directory: "a".to_string(),
            parents: false,
        };
        let report = run(&action, tmp.path());
        assert!(report.is_success());
        assert!(matches!(report.results()[0].outcome, Ok(Applied::Unchanged)));
    }

    #[test]
    fn test_mkdir_without_parents_fails_on_missing_parent() {
        let tmp = TempDir::new().unwrap();
        let action = MkdirAction {
            directory: "a/b".to_string(),
            parents: false,
        };
        let report = run(&action, tmp.path());
        assert!(!report.is_success());
    }
}
