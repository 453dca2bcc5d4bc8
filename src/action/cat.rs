use itertools::Itertools;
use serde::Deserialize;

use crate::action::Action;
use crate::execution_plan::{Applied, ExecutionReport, RunContext};
use crate::polkadots_error::CatError;

/// Concatenate repository files into one destination file, in the given
/// order, overwriting whatever was there. Useful for programs that want a
/// single rc file assembled from fragments.
#[derive(Debug, Clone, Deserialize)]
pub struct CatAction {
    pub sources: Vec<String>,
    pub destination: String,
}

impl CatAction {
    fn concatenate(&self, ctx: &RunContext) -> Result<Applied, CatError> {
        let destination = ctx.repo.resolve(&self.destination);
        let mut combined = Vec::new();
        for source in &self.sources {
            let path = ctx.repo.resolve(source);
            if !path.is_file() {
                return Err(CatError::SourceNotFound(path));
            }
            let content = std::fs::read(&path).map_err(|e| CatError::Io(path, e))?;
            combined.extend(content);
        }
        std::fs::write(&destination, combined).map_err(|e| CatError::Io(destination, e))?;
        Ok(Applied::Written)
    }
}

impl Action for CatAction {
    fn short_description(&self) -> String {
        format!(
            "Cat {} -> {}",
            self.sources.iter().join(", "),
            self.destination
        )
    }

    fn execute(&self, ctx: &RunContext, report: &mut ExecutionReport) {
        let outcome = self.concatenate(ctx).map_err(Into::into);
        report.record(self.short_description(), outcome);
    }
}
