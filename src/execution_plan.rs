// SPDX-FileCopyrightText: 2026 The polkadots developers
//
// SPDX-License-Identifier: MIT

use std::fmt::Display;

use crate::action::{Action, ConfigAction};
use crate::config::DotfileRepo;
use crate::file_ops::{ConflictPolicy, LinkStatus};
use crate::polkadots_error::ActionError;

/// Read-only state shared by every action of a run.
#[derive(Debug)]
pub struct RunContext {
    pub repo: DotfileRepo,
    pub policy: ConflictPolicy,
}

/// What actually happened to one filesystem target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Created,
    Replaced,
    Unchanged,
    Copied,
    SkippedExisting,
    Written,
}

impl From<LinkStatus> for Applied {
    fn from(status: LinkStatus) -> Self {
        match status {
            LinkStatus::Created => Applied::Created,
            LinkStatus::Unchanged => Applied::Unchanged,
            LinkStatus::Replaced => Applied::Replaced,
        }
    }
}

impl Display for Applied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Applied::Created => write!(f, "created"),
            Applied::Replaced => write!(f, "replaced"),
            Applied::Unchanged => write!(f, "already correct"),
            Applied::Copied => write!(f, "copied"),
            Applied::SkippedExisting => write!(f, "skipped, destination exists"),
            Applied::Written => write!(f, "written"),
        }
    }
}

#[derive(Debug)]
pub struct RequestResult {
    pub description: String,
    pub outcome: Result<Applied, ActionError>,
}

/// Append-only record of every link request and file operation of a run.
#[derive(Debug, Default)]
pub struct ExecutionReport {
    results: Vec<RequestResult>,
}

impl ExecutionReport {
    pub fn record(&mut self, description: impl Into<String>, outcome: Result<Applied, ActionError>) {
        self.results.push(RequestResult {
            description: description.into(),
            outcome,
        });
    }

    pub fn results(&self) -> &[RequestResult] {
        &self.results
    }

    pub fn failures(&self) -> impl Iterator<Item = &RequestResult> {
        self.results.iter().filter(|r| r.outcome.is_err())
    }

    /// True when no request ended in a conflict or error.
    pub fn is_success(&self) -> bool {
        self.results.iter().all(|r| r.outcome.is_ok())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[derive(Debug)]
pub struct ExecutionPlan {
    actions: Vec<ConfigAction>,
}

impl ExecutionPlan {
    pub fn new(actions: Vec<ConfigAction>) -> Self {
        Self { actions }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigAction> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Run every action in list order. A failed request is recorded in the
    /// report and never stops the remaining actions.
    pub fn execute(&self, ctx: &RunContext) -> ExecutionReport {
        let mut report = ExecutionReport::default();
        for action in &self.actions {
            log::debug!("Exec {}", action.short_description());
            action.execute(ctx, &mut report);
        }
        report
    }
}

impl<'a> IntoIterator for &'a ExecutionPlan {
    type Item = &'a ConfigAction;
    type IntoIter = std::slice::Iter<'a, ConfigAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
