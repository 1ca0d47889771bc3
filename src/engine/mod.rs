pub mod compiler;
pub mod incremental;
pub mod report;

use crate::domain::BuildTarget;
use crate::fs;
use anyhow::Result;
use compiler::CompileStatus;
use incremental::{run_incrementally, IncrementalRunResult};
use report::{BuildOutcome, BuildReport, BuildSummary};
use std::path::PathBuf;

/// Walks the source root and recompiles every target that is missing or stale.
pub struct IncrementalBuilder {
    source_root: PathBuf,
    build_root: PathBuf,
}

impl IncrementalBuilder {
    pub fn new(source_root: PathBuf, build_root: PathBuf) -> Self {
        Self {
            source_root,
            build_root,
        }
    }

    /// Processes sources one at a time, waiting on `compile` before moving on.
    ///
    /// A failed compilation is recorded in the summary and the loop carries on.
    /// Errors returned by `compile` or by the filesystem abort the run.
    pub fn build<F>(&self, mut compile: F) -> Result<BuildSummary>
    where
        F: FnMut(&BuildTarget) -> Result<CompileStatus>,
    {
        let mut summary = BuildSummary::new();

        for source in fs::list_source_files(&self.source_root)? {
            let target = BuildTarget::new(source, &self.source_root, &self.build_root)?;

            let result = run_incrementally(&target, || {
                fs::create_parent_dir(&target.destination)?;
                println!("Building {}...", target);
                compile(&target)
            })?;

            let outcome = match result {
                IncrementalRunResult::Skipped => {
                    println!("Skipping {}", target);
                    BuildOutcome::Skipped
                }
                IncrementalRunResult::Run(CompileStatus::Success) => BuildOutcome::Built,
                IncrementalRunResult::Run(status) => BuildOutcome::Failed(status),
            };

            summary.push(BuildReport {
                source: target.source.path,
                destination: target.destination,
                outcome,
            });
        }

        Ok(summary)
    }
}
