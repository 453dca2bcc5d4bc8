use enum_dispatch::enum_dispatch;
use serde::Deserialize;

use crate::execution_plan::{ExecutionReport, RunContext};

pub mod cat;
pub mod copy;
pub mod mkdir;
pub mod symlink;

pub use cat::CatAction;
pub use copy::CopyAction;
pub use mkdir::MkdirAction;
pub use symlink::SymlinkAction;

#[enum_dispatch]
pub trait Action {
    fn short_description(&self) -> String;
    /// Apply the action's filesystem side effects, recording one outcome per
    /// touched target. Implementations report failures instead of returning
    /// them so that a bad request never stops the rest of the run.
    fn execute(&self, ctx: &RunContext, report: &mut ExecutionReport);
}

/// The closed set of configurable actions, tagged by the `type` field of the
/// config entry. New kinds get a variant here and an arm nowhere else.
#[enum_dispatch(Action)]
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ConfigAction {
    SymlinkAction(SymlinkAction),
    CopyAction(CopyAction),
    MkdirAction(MkdirAction),
    CatAction(CatAction),
}
