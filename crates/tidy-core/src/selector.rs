//! Candidate selection: one read-only query against the object-ages view.
//!
//! The CASE arms and the WHERE clause mirror each other, so a row is returned
//! if and only if it carries a status. The arms are priority-ordered: a row
//! matching more than one condition gets the first matching status. Dates are
//! computed here (not by the warehouse) and embedded as quoted literals, which
//! keeps the query portable across dialects and deterministic under test.

use crate::config::{Policy, RunContext};
use crate::error::Result;
use crate::statement::{quote_literal, quote_path};
use crate::types::CandidateObject;
use crate::warehouse::Warehouse;

pub fn candidate_query(policy: &Policy, ctx: &RunContext) -> String {
    let view = quote_path(&policy.object_ages_view);
    let max_age = policy.max_object_age_without_tag;
    let today = quote_literal(&ctx.today.to_string());
    let cutoff = quote_literal(&ctx.cutoff_date.to_string());
    format!(
        "SELECT \
           OBJECT_DATABASE, \
           OBJECT_SCHEMA, \
           OBJECT_NAME, \
           OBJECT_TYPE, \
           SQL_OBJECT_TYPE, \
           OBJECT_DOMAIN, \
           DAYS_SINCE_CREATION, \
           DAYS_SINCE_LAST_ALTERATION, \
           EXPIRY_DATE, \
           OBJECT_OWNER, \
           CASE \
             WHEN DAYS_SINCE_CREATION > {max_age} AND EXPIRY_DATE IS NULL THEN 'EXPIRED_OBJECT' \
             WHEN EXPIRY_DATE < {today} THEN 'EXPIRED_TAG' \
             WHEN EXPIRY_DATE > {cutoff} THEN 'ILLEGAL_TAG' \
           END AS STATUS \
         FROM {view} \
         WHERE (DAYS_SINCE_CREATION > {max_age} AND EXPIRY_DATE IS NULL) \
            OR EXPIRY_DATE < {today} \
            OR EXPIRY_DATE > {cutoff}"
    )
}

pub fn fetch_candidates<W: Warehouse + ?Sized>(
    warehouse: &mut W,
    policy: &Policy,
    ctx: &RunContext,
) -> Result<Vec<CandidateObject>> {
    warehouse.query_candidates(&candidate_query(policy, ctx))
}
