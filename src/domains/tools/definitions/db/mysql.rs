//! MySQL backend, compiled with the `mysql` feature.
//!
//! Statements without parameters go over the text protocol (`raw_sql`):
//! MySQL refuses to prepare some introspection statements.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::mysql::{MySql, MySqlArguments, MySqlConnection, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, Connection, Row, ValueRef};
use tracing::warn;

use super::gateway::{
    MYSQL_READ_KEYWORDS, NULL_CELL, SqlParam, is_read_statement, render_affected, render_rows,
};
use crate::domains::tools::{ToolError, ToolResult};

const BACKEND: &str = "MySQL";

fn mysql_error(err: impl std::fmt::Display) -> ToolError {
    ToolError::backend(BACKEND, err)
}

/// Run one statement on a fresh connection to `url`.
pub async fn execute(url: &str, query: &str, params: &[SqlParam]) -> ToolResult<String> {
    let mut conn = MySqlConnection::connect(url).await.map_err(mysql_error)?;
    let outcome = run_statement(&mut conn, query, params).await;
    if let Err(e) = conn.close().await {
        warn!("Failed to close MySQL connection: {}", e);
    }
    outcome
}

fn bind_params<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &[SqlParam],
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = match param {
            SqlParam::Bool(v) => query.bind(*v),
            SqlParam::Integer(v) => query.bind(*v),
            SqlParam::Real(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.clone()),
            SqlParam::Null => query.bind(None::<String>),
        };
    }
    query
}

async fn run_statement(
    conn: &mut MySqlConnection,
    query: &str,
    params: &[SqlParam],
) -> ToolResult<String> {
    let read = is_read_statement(query, MYSQL_READ_KEYWORDS);

    if !read {
        let done = if params.is_empty() {
            sqlx::raw_sql(query).execute(&mut *conn).await
        } else {
            bind_params(sqlx::query::<MySql>(query), params)
                .execute(&mut *conn)
                .await
        }
        .map_err(mysql_error)?;
        return Ok(render_affected(done.rows_affected()));
    }

    let rows: Vec<MySqlRow> = if params.is_empty() {
        sqlx::raw_sql(query).fetch_all(&mut *conn).await
    } else {
        bind_params(sqlx::query::<MySql>(query), params)
            .fetch_all(&mut *conn)
            .await
    }
    .map_err(mysql_error)?;

    let columns: Vec<String> = rows
        .first()
        .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
        .unwrap_or_default();
    let cells = rows
        .iter()
        .map(|row| (0..row.len()).map(|i| render_cell(row, i)).collect())
        .collect::<ToolResult<Vec<Vec<String>>>>()?;

    Ok(render_rows(&columns, &cells))
}

/// Render a cell by trying the decodings MySQL column types map to.
///
/// `try_get` checks type compatibility before decoding, so a mismatch just
/// moves on to the next candidate. DECIMAL and other text-encoded values end
/// in the unchecked byte fallback.
fn render_cell(row: &MySqlRow, index: usize) -> ToolResult<String> {
    let raw = row.try_get_raw(index).map_err(mysql_error)?;
    if raw.is_null() {
        return Ok(NULL_CELL.to_string());
    }

    if let Ok(v) = row.try_get::<i64, _>(index) {
        return Ok(v.to_string());
    }
    if let Ok(v) = row.try_get::<u64, _>(index) {
        return Ok(v.to_string());
    }
    if let Ok(v) = row.try_get::<f64, _>(index) {
        return Ok(v.to_string());
    }
    if let Ok(v) = row.try_get::<f32, _>(index) {
        return Ok(v.to_string());
    }
    if let Ok(v) = row.try_get::<NaiveDateTime, _>(index) {
        return Ok(v.to_string());
    }
    if let Ok(v) = row.try_get::<NaiveDate, _>(index) {
        return Ok(v.to_string());
    }
    if let Ok(v) = row.try_get::<NaiveTime, _>(index) {
        return Ok(v.to_string());
    }
    if let Ok(v) = row.try_get::<String, _>(index) {
        return Ok(v);
    }

    row.try_get_unchecked::<Vec<u8>, _>(index)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .map_err(mysql_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Requires a reachable MySQL server, run with: cargo test --features mysql -- --ignored
    #[ignore]
    #[tokio::test]
    async fn test_select_literal() {
        let url = std::env::var("MCP_MYSQL_URL")
            .unwrap_or_else(|_| "mysql://root@localhost:3306/test_db".to_string());
        let text = execute(&url, "SELECT 1 AS one", &[]).await.unwrap();
        assert_eq!(text, "Columns: one\n\n1\n");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_backend_error() {
        let err = execute("mysql://root@127.0.0.1:1/none", "SELECT 1", &[])
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("MySQL error:"));
    }
}
