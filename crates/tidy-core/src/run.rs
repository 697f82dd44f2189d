//! Orchestrator: drives selector → resolver → executor → logger per object.

use crate::config::{Policy, RunContext};
use crate::error::Result;
use crate::logger::{self, LogRecord};
use crate::types::{ActionKind, RunSummary};
use crate::warehouse::Warehouse;
use crate::{executor, resolver, selector};
use tracing::info;

/// Run the tidy routine once: classify every violating object in the
/// object-ages view, remediate it (or simulate under dry-run), and append one
/// audit row per object. The first fatal error aborts the whole run.
pub fn run<W: Warehouse + ?Sized>(warehouse: &mut W, policy: &Policy) -> Result<RunSummary> {
    policy.validate()?;
    let ctx = RunContext::new(policy)?;
    run_with_context(warehouse, policy, &ctx)
}

/// Same as [`run`], with the per-invocation context supplied by the caller.
/// Lets tests pin the date and inspect the run id up front.
pub fn run_with_context<W: Warehouse + ?Sized>(
    warehouse: &mut W,
    policy: &Policy,
    ctx: &RunContext,
) -> Result<RunSummary> {
    let candidates = selector::fetch_candidates(warehouse, policy, ctx)?;
    info!(
        run_id = %ctx.run_id,
        candidates = candidates.len(),
        dry_run = policy.dry_run,
        "starting tidy run"
    );

    let mut summary = RunSummary {
        run_id: ctx.run_id.clone(),
        processed: 0,
        dropped: 0,
        retagged: 0,
        dry_run: policy.dry_run,
    };

    for candidate in &candidates {
        let resolved = resolver::resolve(candidate, policy, ctx)?;
        let result = executor::execute(warehouse, &resolved, policy.dry_run)?;
        let record = LogRecord::new(candidate, &resolved, &result);
        logger::append(warehouse, &policy.log_table, &ctx.run_id, &record)?;

        info!(
            object = %candidate.display_path(),
            status = %candidate.status,
            action = %resolved.action,
            result = %result,
            "processed object"
        );
        match resolved.action {
            ActionKind::DropObject => summary.dropped += 1,
            ActionKind::AlterExpiryDate => summary.retagged += 1,
        }
        summary.processed += 1;
    }

    info!(run_id = %ctx.run_id, processed = summary.processed, "tidy run complete");
    Ok(summary)
}
