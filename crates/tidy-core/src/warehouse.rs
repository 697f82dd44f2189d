use crate::error::Result;
use crate::types::CandidateObject;
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::Connection;
use std::path::Path;

// ---------------------------------------------------------------------------
// Warehouse
// ---------------------------------------------------------------------------

/// Seam between the pipeline and the backing warehouse. One session per run;
/// every call blocks until the warehouse responds.
pub trait Warehouse {
    /// Read-only candidate query; returns every qualifying row in one batch.
    /// Row order is unspecified.
    fn query_candidates(&mut self, sql: &str) -> Result<Vec<CandidateObject>>;

    /// Run a statement and capture the warehouse's response: the first row,
    /// first column of the result when the statement returns rows, otherwise
    /// a rows-affected message.
    fn execute(&mut self, sql: &str) -> Result<String>;
}

// ---------------------------------------------------------------------------
// SqliteWarehouse
// ---------------------------------------------------------------------------

/// Warehouse backed by a local SQLite database. Qualified three-part paths
/// collapse to plain identifiers in this backend; the candidate view and the
/// audit-log table are ordinary tables or views in the same file.
pub struct SqliteWarehouse {
    conn: Connection,
}

impl SqliteWarehouse {
    pub fn open(path: &Path) -> Result<SqliteWarehouse> {
        Ok(SqliteWarehouse {
            conn: Connection::open(path)?,
        })
    }

    pub fn open_in_memory() -> Result<SqliteWarehouse> {
        Ok(SqliteWarehouse {
            conn: Connection::open_in_memory()?,
        })
    }

    pub fn from_connection(conn: Connection) -> SqliteWarehouse {
        SqliteWarehouse { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl Warehouse for SqliteWarehouse {
    fn query_candidates(&mut self, sql: &str) -> Result<Vec<CandidateObject>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(CandidateObject {
                database: row.get(0)?,
                schema: row.get(1)?,
                name: row.get(2)?,
                object_type: row.get(3)?,
                sql_object_type: row.get(4)?,
                domain: row.get(5)?,
                days_since_creation: row.get(6)?,
                days_since_last_alteration: row.get(7)?,
                expiry_date: row.get::<_, Option<NaiveDate>>(8)?,
                owner: row.get(9)?,
                status: row.get(10)?,
            })
        })?;
        let candidates = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(candidates)
    }

    fn execute(&mut self, sql: &str) -> Result<String> {
        let mut stmt = self.conn.prepare(sql)?;
        if stmt.column_count() > 0 {
            let mut rows = stmt.query([])?;
            return match rows.next()? {
                Some(row) => Ok(match row.get::<_, Value>(0)? {
                    Value::Null => String::new(),
                    Value::Integer(i) => i.to_string(),
                    Value::Real(r) => r.to_string(),
                    Value::Text(s) => s,
                    Value::Blob(_) => "<binary>".to_string(),
                }),
                None => Ok(String::new()),
            };
        }
        let affected = stmt.execute([])?;
        Ok(format!("{affected} rows affected."))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
