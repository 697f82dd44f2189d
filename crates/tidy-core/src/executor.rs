use crate::error::{Result, TidyError};
use crate::types::ResolvedAction;
use crate::warehouse::Warehouse;

/// Literal result recorded for statements suppressed by dry-run mode.
pub const DRY_RUN_RESULT: &str = "DRY_RUN";

/// Execute the resolved statement, or simulate it under dry-run.
///
/// No retry, no partial-success bookkeeping: any failure is fatal for the
/// run. Permission-denied is not special-cased.
pub fn execute<W: Warehouse + ?Sized>(
    warehouse: &mut W,
    action: &ResolvedAction,
    dry_run: bool,
) -> Result<String> {
    if dry_run {
        return Ok(DRY_RUN_RESULT.to_string());
    }
    warehouse
        .execute(&action.statement)
        .map_err(|e| TidyError::Execution {
            statement: action.statement.clone(),
            message: e.to_string(),
        })
}
