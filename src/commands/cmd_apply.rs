// SPDX-FileCopyrightText: 2026 The polkadots developers
//
// SPDX-License-Identifier: MIT

use crate::action::Action;
use crate::commands::Cli;
use crate::config::LoadedConfig;
use crate::execution_plan::{ExecutionPlan, ExecutionReport, RunContext};
use crate::file_ops::ConflictPolicy;
use crate::{error, polkadots_info, step, success};

pub fn run(loaded: LoadedConfig, cli: &Cli) -> ExecutionReport {
    let LoadedConfig { repo, actions } = loaded;
    polkadots_info!("Dotfile repository: {}", repo.root().display());
    let plan = ExecutionPlan::new(actions);
    present_execution_plan(&plan);
    if cli.dry_run {
        polkadots_info!("Dry run, nothing executed");
        return ExecutionReport::default();
    }
    let ctx = RunContext {
        repo,
        policy: if cli.relink {
            ConflictPolicy::Relink
        } else {
            ConflictPolicy::Skip
        },
    };
    let report = plan.execute(&ctx);
    summarize(&report, cli.verbose > 0);
    report
}

fn present_execution_plan(plan: &ExecutionPlan) {
    polkadots_info!("Execution plan:");
    for (i, action) in plan.iter().enumerate() {
        step!("[{:>2}] {}", i + 1, action.short_description());
    }
}

fn summarize(report: &ExecutionReport, verbose: bool) {
    polkadots_info!("Summary:");
    for result in report.results() {
        match &result.outcome {
            Ok(applied) => {
                if verbose {
                    success!("{} ({})", result.description, applied);
                }
            }
            Err(e) => error!("{}: {}", result.description, e),
        }
    }
    let failed = report.failures().count();
    if report.is_success() {
        success!("{} requests, all applied", report.len());
    } else {
        error!("{} of {} requests failed", failed, report.len());
    }
}
