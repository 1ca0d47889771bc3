use super::compiler::CompileStatus;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    Skipped,
    Built,
    Failed(CompileStatus),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub outcome: BuildOutcome,
}

/// Per-target results of one builder run, in processing order.
#[derive(Debug, Default)]
pub struct BuildSummary {
    reports: Vec<BuildReport>,
}

impl BuildSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, report: BuildReport) {
        self.reports.push(report);
    }

    pub fn reports(&self) -> &[BuildReport] {
        &self.reports
    }

    fn count(&self, predicate: impl Fn(&BuildOutcome) -> bool) -> usize {
        self.reports
            .iter()
            .filter(|report| predicate(&report.outcome))
            .count()
    }

    pub fn built_count(&self) -> usize {
        self.count(|outcome| *outcome == BuildOutcome::Built)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|outcome| *outcome == BuildOutcome::Skipped)
    }

    pub fn failures(&self) -> impl Iterator<Item = &BuildReport> {
        self.reports
            .iter()
            .filter(|report| matches!(report.outcome, BuildOutcome::Failed(_)))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn log(&self) {
        let failures: Vec<_> = self.failures().collect();
        log::info!(
            "{} built, {} skipped, {} failed",
            self.built_count(),
            self.skipped_count(),
            failures.len()
        );

        for report in failures {
            if let BuildOutcome::Failed(status) = report.outcome {
                log::warn!(
                    "{} - Build failed ({}), {} was not produced",
                    report.source.display(),
                    status,
                    report.destination.display()
                );
            }
        }
    }
}
