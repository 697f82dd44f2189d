//! Status → action resolution. Pure: never touches the warehouse.

use crate::config::{Policy, RunContext};
use crate::error::Result;
use crate::statement;
use crate::types::{ActionKind, CandidateObject, ResolvedAction, Status};

/// Map a candidate's status to the remediation to apply: a human-readable
/// reason, the action kind, and the exact statement to execute.
///
/// A status outside the three known values fails with `UnknownStatus`, which
/// aborts the run; a silently skipped object would never reach the audit log.
pub fn resolve(
    candidate: &CandidateObject,
    policy: &Policy,
    ctx: &RunContext,
) -> Result<ResolvedAction> {
    let status: Status = candidate.status.parse()?;
    match status {
        Status::ExpiredObject => Ok(ResolvedAction {
            reason: format!(
                "Object older than {} days without expiry tag.",
                policy.max_object_age_without_tag
            ),
            action: ActionKind::DropObject,
            statement: statement::drop_statement(candidate)?,
        }),
        Status::ExpiredTag => Ok(ResolvedAction {
            reason: "Expiry date for object has passed.".to_string(),
            action: ActionKind::DropObject,
            statement: statement::drop_statement(candidate)?,
        }),
        Status::IllegalTag => Ok(ResolvedAction {
            reason: format!(
                "Expiry tag date is more than {} days in the future.",
                policy.max_expiry_days
            ),
            action: ActionKind::AlterExpiryDate,
            statement: statement::alter_expiry_statement(
                candidate,
                &policy.expiry_date_tag,
                ctx.cutoff_date,
            )?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TidyError;
    use chrono::NaiveDate;

    fn policy() -> Policy {
        Policy {
            dry_run: false,
            expiry_date_tag: "ADMIN.TAGS.EXPIRY_DATE".to_string(),
            max_expiry_days: 90,
            max_object_age_without_tag: 31,
            object_ages_view: "OBJECT_AGES".to_string(),
            log_table: "TIDY_LOG".to_string(),
        }
    }

    fn ctx(policy: &Policy) -> RunContext {
        RunContext::for_date(policy, NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()).unwrap()
    }

    fn candidate(status: &str, age: i64, expiry: Option<&str>) -> CandidateObject {
        CandidateObject {
            database: Some("PLAYGROUND".to_string()),
            schema: Some("GROUND".to_string()),
            name: "OBJ_1".to_string(),
            object_type: "VIEW".to_string(),
            sql_object_type: Some("VIEW".to_string()),
            domain: Some("VIEW".to_string()),
            days_since_creation: age,
            days_since_last_alteration: Some(0),
            expiry_date: expiry.map(|d| d.parse().unwrap()),
            owner: Some("SYSADMIN".to_string()),
            status: status.to_string(),
        }
    }

    #[test]
    fn expired_object_drops() {
        let policy = policy();
        let resolved = resolve(&candidate("EXPIRED_OBJECT", 32, None), &policy, &ctx(&policy)).unwrap();
        assert_eq!(resolved.action, ActionKind::DropObject);
        assert_eq!(
            resolved.reason,
            "Object older than 31 days without expiry tag."
        );
        assert_eq!(
            resolved.statement,
            r#"DROP VIEW "PLAYGROUND"."GROUND"."OBJ_1""#
        );
    }

    #[test]
    fn expired_tag_drops_regardless_of_age() {
        let policy = policy();
        let resolved = resolve(
            &candidate("EXPIRED_TAG", 3, Some("2020-01-01")),
            &policy,
            &ctx(&policy),
        )
        .unwrap();
        assert_eq!(resolved.action, ActionKind::DropObject);
        assert_eq!(resolved.reason, "Expiry date for object has passed.");
        assert!(resolved.statement.starts_with("DROP VIEW"));
    }

    #[test]
    fn illegal_tag_retags_to_cutoff() {
        let policy = policy();
        let ctx = ctx(&policy);
        let resolved = resolve(
            &candidate("ILLEGAL_TAG", 50, Some("9999-12-31")),
            &policy,
            &ctx,
        )
        .unwrap();
        assert_eq!(resolved.action, ActionKind::AlterExpiryDate);
        assert_eq!(
            resolved.reason,
            "Expiry tag date is more than 90 days in the future."
        );
        // Cutoff = 2026-06-01 + 31 days.
        assert_eq!(
            resolved.statement,
            r#"ALTER VIEW "PLAYGROUND"."GROUND"."OBJ_1" SET TAG "ADMIN"."TAGS"."EXPIRY_DATE" = '2026-07-02'"#
        );
        assert_eq!(ctx.cutoff_date.to_string(), "2026-07-02");
    }

    #[test]
    fn unknown_status_is_fatal() {
        let policy = policy();
        let err = resolve(&candidate("RETIRED", 10, None), &policy, &ctx(&policy)).unwrap_err();
        assert!(matches!(err, TidyError::UnknownStatus(s) if s == "RETIRED"));
    }
}
