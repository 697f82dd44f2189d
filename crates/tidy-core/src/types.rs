use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Classification of a candidate object, computed by the selector query.
///
/// Priority-ordered: an object matching more than one condition carries
/// the first status in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Older than the no-tag threshold with no expiry tag set.
    ExpiredObject,
    /// Expiry tag date is in the past.
    ExpiredTag,
    /// Expiry tag date is beyond the permitted cutoff.
    IllegalTag,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::ExpiredObject => "EXPIRED_OBJECT",
            Status::ExpiredTag => "EXPIRED_TAG",
            Status::IllegalTag => "ILLEGAL_TAG",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = crate::error::TidyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EXPIRED_OBJECT" => Ok(Status::ExpiredObject),
            "EXPIRED_TAG" => Ok(Status::ExpiredTag),
            "ILLEGAL_TAG" => Ok(Status::IllegalTag),
            _ => Err(crate::error::TidyError::UnknownStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ActionKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    DropObject,
    AlterExpiryDate,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::DropObject => "DROP_OBJECT",
            ActionKind::AlterExpiryDate => "ALTER_EXPIRY_DATE",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CandidateObject
// ---------------------------------------------------------------------------

/// One row from the selector query. Produced fresh each run, never persisted.
///
/// `status` is kept as the raw string the warehouse returned; the resolver
/// parses it, so an out-of-range value fails there as `UnknownStatus`.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateObject {
    pub database: Option<String>,
    pub schema: Option<String>,
    pub name: String,
    /// Object kind, doubling as the DDL verb (TABLE, VIEW, TASK, ...).
    pub object_type: String,
    pub sql_object_type: Option<String>,
    pub domain: Option<String>,
    pub days_since_creation: i64,
    pub days_since_last_alteration: Option<i64>,
    pub expiry_date: Option<NaiveDate>,
    pub owner: Option<String>,
    pub status: String,
}

impl CandidateObject {
    /// Dotted, unquoted path for log and trace output.
    pub fn display_path(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(db) = self.database.as_deref().filter(|s| !s.is_empty()) {
            parts.push(db);
        }
        if let Some(schema) = self.schema.as_deref().filter(|s| !s.is_empty()) {
            parts.push(schema);
        }
        parts.push(&self.name);
        parts.join(".")
    }
}

// ---------------------------------------------------------------------------
// ResolvedAction
// ---------------------------------------------------------------------------

/// Output of the resolver: why, what, and the exact statement to run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAction {
    pub reason: String,
    pub action: ActionKind,
    pub statement: String,
}

// ---------------------------------------------------------------------------
// RunSummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: String,
    pub processed: usize,
    pub dropped: usize,
    pub retagged: usize,
    pub dry_run: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Success. Processed {} object(s): {} dropped, {} retagged.",
            self.processed, self.dropped, self.retagged
        )?;
        if self.dry_run {
            write!(f, " (dry run)")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
