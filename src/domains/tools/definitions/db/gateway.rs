//! Backend selection and result rendering shared by the database tools.

use schemars::JsonSchema;
use serde::Deserialize;
use std::fmt;
use tracing::debug;

use super::sqlite::SqliteBackend;
use crate::core::config::DatabaseConfig;
use crate::domains::tools::{ToolError, ToolResult};

/// Leading keywords of statements that return rows on SQLite.
pub const SQLITE_READ_KEYWORDS: &[&str] = &["SELECT", "WITH", "PRAGMA"];

/// Leading keywords of statements that return rows on MySQL.
pub const MYSQL_READ_KEYWORDS: &[&str] = &["SELECT", "WITH", "SHOW", "DESCRIBE", "DESC", "EXPLAIN"];

/// Text returned for a read statement without rows.
pub const NO_RESULTS: &str = "No results found";

/// Rendering of SQL NULL cells.
pub const NULL_CELL: &str = "NULL";

/// Which backend a database tool targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    /// The local file-backed SQLite database.
    #[default]
    Sqlite,
    /// The optional MySQL server.
    Mysql,
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => f.write_str("sqlite"),
            Self::Mysql => f.write_str("mysql"),
        }
    }
}

/// A positional statement parameter, bound with its JSON type.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SqlParam {
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    Null,
}

/// Upper-cased leading keyword of a statement (empty if none).
pub fn leading_keyword(query: &str) -> String {
    query
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_uppercase()
}

/// Whether `query` starts with one of the row-returning `keywords`.
pub fn is_read_statement(query: &str, keywords: &[&str]) -> bool {
    let keyword = leading_keyword(query);
    keywords.contains(&keyword.as_str())
}

/// Render a result set: a column header line, a blank line, one line per row.
pub fn render_rows(columns: &[String], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut result = format!("Columns: {}\n\n", columns.join(", "));
    for row in rows {
        result.push_str(&row.join(" | "));
        result.push('\n');
    }
    result
}

/// Summary for statements that do not return rows.
pub fn render_affected(rows_affected: u64) -> String {
    format!("Query executed successfully. Rows affected: {}", rows_affected)
}

/// Split and validate a possibly schema-qualified table name.
///
/// Identifiers cannot be bound as statement parameters, so only plain
/// names (`[A-Za-z0-9_$]`, at most one `schema.` prefix) are accepted before
/// they are quoted into introspection statements.
pub fn identifier_parts(name: &str) -> ToolResult<Vec<&str>> {
    let parts: Vec<&str> = name.split('.').collect();
    let valid = parts.len() <= 2
        && parts.iter().all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        });

    if valid {
        Ok(parts)
    } else {
        Err(ToolError::invalid_arguments(format!(
            "'{}' is not a valid table name (letters, digits, '_' and '$' only)",
            name
        )))
    }
}

/// Entry point of the database tools: one method per operation, routed by
/// [`DatabaseKind`].
pub struct SqlGateway {
    sqlite: SqliteBackend,
    #[cfg_attr(not(feature = "mysql"), allow(dead_code))]
    mysql_url: String,
}

impl SqlGateway {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            sqlite: SqliteBackend::new(config.sqlite_path.clone()),
            mysql_url: config.mysql_url.clone(),
        }
    }

    /// Execute one statement and render its outcome.
    pub async fn execute(
        &self,
        database: DatabaseKind,
        query: &str,
        params: &[SqlParam],
    ) -> ToolResult<String> {
        debug!(%database, params = params.len(), "Executing statement");
        match database {
            DatabaseKind::Sqlite => self.sqlite.execute(query, params).await,
            DatabaseKind::Mysql => self.execute_mysql(query, params).await,
        }
    }

    /// Drop, recreate and seed the sample schema.
    pub async fn init_sample_data(&self, database: DatabaseKind) -> ToolResult<String> {
        match database {
            DatabaseKind::Sqlite => self.sqlite.init_sample_data().await,
            DatabaseKind::Mysql => Ok(
                "MySQL sample data initialization not implemented yet. Use SQLite for now."
                    .to_string(),
            ),
        }
    }

    #[cfg(feature = "mysql")]
    async fn execute_mysql(&self, query: &str, params: &[SqlParam]) -> ToolResult<String> {
        super::mysql::execute(&self.mysql_url, query, params).await
    }

    #[cfg(not(feature = "mysql"))]
    async fn execute_mysql(&self, _query: &str, _params: &[SqlParam]) -> ToolResult<String> {
        Err(ToolError::unsupported(
            "MySQL support is not enabled in this build. Rebuild with `--features mysql`.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_keyword() {
        assert_eq!(leading_keyword("  select * from t"), "SELECT");
        assert_eq!(leading_keyword("\nPRAGMA table_info(t)"), "PRAGMA");
        assert_eq!(leading_keyword("(SELECT 1)"), "");
    }

    #[test]
    fn test_read_classification_per_backend() {
        assert!(is_read_statement("WITH x AS (SELECT 1) SELECT * FROM x", SQLITE_READ_KEYWORDS));
        assert!(!is_read_statement("SHOW TABLES", SQLITE_READ_KEYWORDS));
        assert!(is_read_statement("show tables", MYSQL_READ_KEYWORDS));
        assert!(is_read_statement("DESCRIBE customers", MYSQL_READ_KEYWORDS));
        assert!(!is_read_statement("UPDATE t SET a = 1", MYSQL_READ_KEYWORDS));
        assert!(!is_read_statement("SELECTED", SQLITE_READ_KEYWORDS));
    }

    #[test]
    fn test_render_rows() {
        let columns = vec!["id".to_string(), "name".to_string()];
        let rows = vec![
            vec!["1".to_string(), "John Doe".to_string()],
            vec!["2".to_string(), "Jane Smith".to_string()],
        ];
        assert_eq!(
            render_rows(&columns, &rows),
            "Columns: id, name\n\n1 | John Doe\n2 | Jane Smith\n"
        );
        assert_eq!(render_rows(&columns, &[]), NO_RESULTS);
    }

    #[test]
    fn test_identifier_parts() {
        assert_eq!(identifier_parts("customers").unwrap(), vec!["customers"]);
        assert_eq!(identifier_parts("shop.orders").unwrap(), vec!["shop", "orders"]);
        assert!(identifier_parts("orders; DROP TABLE customers").is_err());
        assert!(identifier_parts("a.b.c").is_err());
        assert!(identifier_parts("shop.").is_err());
    }

    #[test]
    fn test_sql_param_deserializes_by_json_type() {
        let params: Vec<SqlParam> =
            serde_json::from_str(r#"["abc", 42, 1.5, true, null]"#).unwrap();
        assert_eq!(
            params,
            vec![
                SqlParam::Text("abc".to_string()),
                SqlParam::Integer(42),
                SqlParam::Real(1.5),
                SqlParam::Bool(true),
                SqlParam::Null,
            ]
        );
    }

    #[test]
    fn test_database_kind_default_and_names() {
        assert_eq!(DatabaseKind::default(), DatabaseKind::Sqlite);
        let kind: DatabaseKind = serde_json::from_str(r#""mysql""#).unwrap();
        assert_eq!(kind, DatabaseKind::Mysql);
        assert!(serde_json::from_str::<DatabaseKind>(r#""postgres""#).is_err());
    }

    #[cfg(not(feature = "mysql"))]
    #[tokio::test]
    async fn test_mysql_without_feature_is_descriptive_error() {
        let gateway = SqlGateway::new(&DatabaseConfig::default());
        let err = gateway
            .execute(DatabaseKind::Mysql, "SELECT 1", &[])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("--features mysql"));
    }

    #[tokio::test]
    async fn test_mysql_sample_data_is_a_stub() {
        let gateway = SqlGateway::new(&DatabaseConfig::default());
        let text = gateway.init_sample_data(DatabaseKind::Mysql).await.unwrap();
        assert!(text.contains("not implemented"));
    }
}
