//! Audit logging: one append-only row per processed object.

use crate::error::{Result, TidyError};
use crate::statement::{quote_literal, quote_path};
use crate::types::{ActionKind, CandidateObject, ResolvedAction};
use crate::warehouse::Warehouse;
use chrono::NaiveDate;
use serde::Serialize;

/// Why the object qualified, as observed by the selector.
#[derive(Debug, Clone, Serialize)]
pub struct Justification {
    /// Days since creation.
    pub age: i64,
    pub days_since_last_alteration: Option<i64>,
    pub expiry_date: Option<NaiveDate>,
}

/// JSON payload persisted in the audit row's `record` column.
///
/// `reason` is the human-readable justification and `statement` the exact
/// text executed; they are distinct fields.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub statement: String,
    pub action: ActionKind,
    pub object_type: String,
    pub status: String,
    pub reason: String,
    pub justification: Justification,
    pub result: String,
}

impl LogRecord {
    pub fn new(candidate: &CandidateObject, resolved: &ResolvedAction, result: &str) -> LogRecord {
        LogRecord {
            statement: resolved.statement.clone(),
            action: resolved.action,
            object_type: candidate.object_type.clone(),
            status: candidate.status.clone(),
            reason: resolved.reason.clone(),
            justification: Justification {
                age: candidate.days_since_creation,
                days_since_last_alteration: candidate.days_since_last_alteration,
                expiry_date: candidate.expiry_date,
            },
            result: result.to_string(),
        }
    }
}

/// Append one audit row stamped with the current timestamp and the run's
/// shared identifier. A failed append is fatal for the run.
pub fn append<W: Warehouse + ?Sized>(
    warehouse: &mut W,
    log_table: &str,
    run_id: &str,
    record: &LogRecord,
) -> Result<()> {
    let payload = serde_json::to_string(record)?;
    let sql = format!(
        "INSERT INTO {} (event_time, run_id, record) VALUES (CURRENT_TIMESTAMP, {}, {})",
        quote_path(log_table),
        quote_literal(run_id),
        quote_literal(&payload),
    );
    warehouse
        .execute(&sql)
        .map(|_| ())
        .map_err(|e| TidyError::LogAppend {
            table: log_table.to_string(),
            message: e.to_string(),
        })
}
