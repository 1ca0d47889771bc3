use crate::domain::BuildTarget;
use crate::fs;
use anyhow::Result;

#[derive(Debug, PartialEq)]
pub enum IncrementalRunResult<T> {
    Skipped,
    Run(T),
}

/// Runs `function` unless the target's destination is at least as recent as its source.
pub fn run_incrementally<T, F>(target: &BuildTarget, function: F) -> Result<IncrementalRunResult<T>>
where
    F: FnOnce() -> Result<T>,
{
    let destination_modified = fs::modification_time(&target.destination)?;
    log::trace!(
        "{} - Source modified at {:?}, destination modified at {:?}",
        target,
        target.source.modified,
        destination_modified
    );

    if target.is_up_to_date(destination_modified) {
        return Ok(IncrementalRunResult::Skipped);
    }

    function().map(IncrementalRunResult::Run)
}
