use crate::error::{Result, TidyError};
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Retention policy for one tidy run. Immutable once the run starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Classify and log, but execute no remediation statements.
    #[serde(default)]
    pub dry_run: bool,
    /// Qualified path of the expiry-date tag, e.g. `ADMIN.TAGS.EXPIRY_DATE`.
    #[serde(default)]
    pub expiry_date_tag: String,
    /// Maximum number of days in the future an expiry tag may be set.
    #[serde(default = "default_max_expiry_days")]
    pub max_expiry_days: i64,
    /// Maximum age in days for an object carrying no expiry tag.
    #[serde(default = "default_max_age_without_tag")]
    pub max_object_age_without_tag: i64,
    /// Qualified path of the object-ages view.
    #[serde(default)]
    pub object_ages_view: String,
    /// Qualified path of the audit-log table.
    #[serde(default)]
    pub log_table: String,
}

fn default_max_expiry_days() -> i64 {
    90
}

fn default_max_age_without_tag() -> i64 {
    31
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            dry_run: false,
            expiry_date_tag: String::new(),
            max_expiry_days: default_max_expiry_days(),
            max_object_age_without_tag: default_max_age_without_tag(),
            object_ages_view: String::new(),
            log_table: String::new(),
        }
    }
}

impl Policy {
    pub fn load(path: &Path) -> Result<Policy> {
        let raw = std::fs::read_to_string(path)?;
        let policy: Policy = serde_yaml::from_str(&raw)?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        if self.expiry_date_tag.trim().is_empty() {
            return Err(TidyError::InvalidPolicy(
                "expiry_date_tag must be set".to_string(),
            ));
        }
        if self.object_ages_view.trim().is_empty() {
            return Err(TidyError::InvalidPolicy(
                "object_ages_view must be set".to_string(),
            ));
        }
        if self.log_table.trim().is_empty() {
            return Err(TidyError::InvalidPolicy("log_table must be set".to_string()));
        }
        if self.max_expiry_days <= 0 {
            return Err(TidyError::InvalidPolicy(
                "max_expiry_days must be positive".to_string(),
            ));
        }
        if self.max_object_age_without_tag <= 0 {
            return Err(TidyError::InvalidPolicy(
                "max_object_age_without_tag must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RunContext
// ---------------------------------------------------------------------------

/// Per-invocation derived values, computed once and shared by every object
/// processed in that run.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub today: NaiveDate,
    /// Ceiling for legal future expiry tags: today + max_object_age_without_tag.
    pub cutoff_date: NaiveDate,
    /// Correlates every audit row emitted by this run.
    pub run_id: String,
}

impl RunContext {
    pub fn new(policy: &Policy) -> Result<RunContext> {
        RunContext::for_date(policy, Local::now().date_naive())
    }

    pub fn for_date(policy: &Policy, today: NaiveDate) -> Result<RunContext> {
        let cutoff_date = Duration::try_days(policy.max_object_age_without_tag)
            .and_then(|d| today.checked_add_signed(d))
            .ok_or_else(|| {
                TidyError::InvalidPolicy(format!(
                    "max_object_age_without_tag of {} days overflows the cutoff date",
                    policy.max_object_age_without_tag
                ))
            })?;
        Ok(RunContext {
            today,
            cutoff_date,
            run_id: Uuid::new_v4().to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
