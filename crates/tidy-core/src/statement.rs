//! Statement construction. Every identifier and literal that reaches
//! statement text passes through the quoting helpers here; nothing is
//! interpolated raw.

use crate::error::{Result, TidyError};
use crate::types::CandidateObject;
use chrono::NaiveDate;

/// Double-quote an identifier, doubling any embedded quotes.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Single-quote a string literal, doubling any embedded quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Quote each dot-separated component of a qualified path.
pub fn quote_path(path: &str) -> String {
    path.split('.')
        .map(quote_ident)
        .collect::<Vec<_>>()
        .join(".")
}

/// Fully qualified, fully quoted path of a candidate object. Database and
/// schema are omitted when absent so the same builders serve both three-part
/// warehouse paths and bare local names.
pub fn qualified_path(obj: &CandidateObject) -> String {
    let mut parts = Vec::new();
    if let Some(db) = obj.database.as_deref().filter(|s| !s.is_empty()) {
        parts.push(quote_ident(db));
    }
    if let Some(schema) = obj.schema.as_deref().filter(|s| !s.is_empty()) {
        parts.push(quote_ident(schema));
    }
    parts.push(quote_ident(&obj.name));
    parts.join(".")
}

/// Validate the object kind before it is used as a DDL verb. The kind comes
/// back from warehouse data, so it is held to a strict character set rather
/// than being trusted.
fn ddl_verb(object_type: &str) -> Result<String> {
    let verb = object_type.trim();
    if verb.is_empty()
        || !verb
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '_' || c == ' ')
    {
        return Err(TidyError::InvalidObjectType(object_type.to_string()));
    }
    Ok(verb.to_ascii_uppercase())
}

/// `DROP <KIND> "DB"."SCHEMA"."NAME"`
pub fn drop_statement(obj: &CandidateObject) -> Result<String> {
    Ok(format!(
        "DROP {} {}",
        ddl_verb(&obj.object_type)?,
        qualified_path(obj)
    ))
}

/// `ALTER <KIND> "DB"."SCHEMA"."NAME" SET TAG "T"."PATH" = 'YYYY-MM-DD'`
pub fn alter_expiry_statement(
    obj: &CandidateObject,
    expiry_date_tag: &str,
    cutoff_date: NaiveDate,
) -> Result<String> {
    Ok(format!(
        "ALTER {} {} SET TAG {} = {}",
        ddl_verb(&obj.object_type)?,
        qualified_path(obj),
        quote_path(expiry_date_tag),
        quote_literal(&cutoff_date.to_string())
    ))
}
