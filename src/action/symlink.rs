use std::path::PathBuf;

use serde::Deserialize;

use crate::action::Action;
use crate::config::DotfileRepo;
use crate::execution_plan::{Applied, ExecutionReport, RunContext};
use crate::file_ops;
use crate::polkadots_error::LinkError;

/// Symlink a file or directory out of the dotfile repository, or with
/// `dir_mode` one link per direct child of a source directory.
#[derive(Debug, Clone, Deserialize)]
pub struct SymlinkAction {
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub dir_mode: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LinkRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl SymlinkAction {
    /// Expand this action into its link requests. `dir_mode` lists the direct
    /// children of the source, sorted by name so runs are reproducible; there
    /// is no recursion into grandchildren.
    pub fn link_requests(&self, repo: &DotfileRepo) -> Result<Vec<LinkRequest>, LinkError> {
        let source = repo.resolve(&self.source);
        if !source.exists() {
            return Err(LinkError::SourceNotFound(source));
        }
        let destination = repo.resolve(&self.destination);
        if !self.dir_mode {
            return Ok(vec![LinkRequest {
                source,
                destination,
            }]);
        }
        if !source.is_dir() {
            return Err(LinkError::NotADirectory(source));
        }
        let entries = source
            .read_dir()
            .map_err(|e| file_ops::classify_io(source.clone(), e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| file_ops::classify_io(source.clone(), e))?;
            names.push(entry.file_name());
        }
        names.sort();
        Ok(names
            .into_iter()
            .map(|name| LinkRequest {
                source: source.join(&name),
                destination: destination.join(&name),
            })
            .collect())
    }
}

impl Action for SymlinkAction {
    fn short_description(&self) -> String {
        if self.dir_mode {
            format!("Symlink {}/* -> {}/*", self.source, self.destination)
        } else {
            format!("Symlink {} -> {}", self.source, self.destination)
        }
    }

    fn execute(&self, ctx: &RunContext, report: &mut ExecutionReport) {
        let requests = match self.link_requests(&ctx.repo) {
            Ok(requests) => requests,
            Err(e) => {
                report.record(self.short_description(), Err(e.into()));
                return;
            }
        };
        for request in requests {
            let description = format!(
                "Symlink {} -> {}",
                request.source.display(),
                request.destination.display()
            );
            let outcome =
                file_ops::ensure_symlink(&request.source, &request.destination, ctx.policy)
                    .map(Applied::from)
                    .map_err(Into::into);
            report.record(description, outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn repo_with(entries: &[&str]) -> (TempDir, DotfileRepo) {
        let tmp = TempDir::new().unwrap();
        for entry in entries {
            let path = tmp.path().join(entry);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"x").unwrap();
        }
        let repo = DotfileRepo::from(tmp.path().to_path_buf());
        (tmp, repo)
    }

    #[test]
    fn test_single_link_request() {
        let (tmp, repo) = repo_with(&["vimrc"]);
        let action = SymlinkAction {
            source: "vimrc".to_string(),
            destination: "/home/u/.vimrc".to_string(),
            dir_mode: false,
        };
        let requests = action.link_requests(&repo).unwrap();
        assert_eq!(
            requests,
            vec![LinkRequest {
                source: tmp.path().join("vimrc"),
                destination: PathBuf::from("/home/u/.vimrc"),
            }]
        );
    }

    #[test]
    fn test_dir_mode_expands_sorted_children() {
        let (tmp, repo) = repo_with(&["main/b", "main/a", "main/c/nested"]);
        let action = SymlinkAction {
            source: "main".to_string(),
            destination: "/home/u".to_string(),
            dir_mode: true,
        };
        let requests = action.link_requests(&repo).unwrap();
        // One request per direct child, sorted, no recursion into c/nested.
        assert_eq!(
            requests
                .iter()
                .map(|r| r.destination.clone())
                .collect::<Vec<_>>(),
            vec![
                PathBuf::from("/home/u/a"),
                PathBuf::from("/home/u/b"),
                PathBuf::from("/home/u/c"),
            ]
        );
        assert_eq!(requests[0].source, tmp.path().join("main/a"));
    }

    #[test]
    fn test_dir_mode_on_file_is_an_error() {
        let (_tmp, repo) = repo_with(&["vimrc"]);
        let action = SymlinkAction {
            source: "vimrc".to_string(),
            destination: "/home/u".to_string(),
            dir_mode: true,
        };
        let result = action.link_requests(&repo);
        assert!(matches!(result, Err(LinkError::NotADirectory(_))));
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let (_tmp, repo) = repo_with(&[]);
        let action = SymlinkAction {
            source: "absent".to_string(),
            destination: "/home/u/.absent".to_string(),
            dir_mode: false,
        };
        let result = action.link_requests(&repo);
        assert!(matches!(result, Err(LinkError::SourceNotFound(_))));
    }
}
