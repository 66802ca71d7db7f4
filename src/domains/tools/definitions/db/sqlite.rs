//! SQLite backend: one connection per call to a single database file.

use sqlx::query::Query;
use sqlx::sqlite::{
    Sqlite, SqliteArguments, SqliteConnectOptions, SqliteConnection, SqliteRow,
};
use sqlx::{Column, ConnectOptions, Connection, Row, TypeInfo, ValueRef};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::gateway::{
    NULL_CELL, SQLITE_READ_KEYWORDS, SqlParam, is_read_statement, render_affected, render_rows,
};
use crate::domains::tools::{ToolError, ToolResult};

const BACKEND: &str = "SQLite";

const DROP_TABLES: &[&str] = &[
    "DROP TABLE IF EXISTS orders",
    "DROP TABLE IF EXISTS customers",
    "DROP TABLE IF EXISTS products",
];

const CREATE_TABLES: &[&str] = &[
    "CREATE TABLE customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT UNIQUE NOT NULL,
        city TEXT,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price DECIMAL(10, 2) NOT NULL,
        category TEXT,
        stock INTEGER DEFAULT 0
    )",
    "CREATE TABLE orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_id INTEGER,
        product_id INTEGER,
        quantity INTEGER NOT NULL,
        order_date DATETIME DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (customer_id) REFERENCES customers (id),
        FOREIGN KEY (product_id) REFERENCES products (id)
    )",
];

const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("John Doe", "john@example.com", "New York"),
    ("Jane Smith", "jane@example.com", "Los Angeles"),
    ("Mike Johnson", "mike@example.com", "Chicago"),
    ("Sarah Williams", "sarah@example.com", "Houston"),
    ("David Brown", "david@example.com", "Phoenix"),
];

const PRODUCTS: &[(&str, f64, &str, i64)] = &[
    ("Laptop", 999.99, "Electronics", 50),
    ("Smartphone", 699.99, "Electronics", 100),
    ("Desk Chair", 199.99, "Furniture", 25),
    ("Coffee Mug", 15.99, "Kitchen", 200),
    ("Notebook", 5.99, "Stationery", 150),
];

/// (customer_id, product_id, quantity)
const ORDERS: &[(i64, i64, i64)] = &[
    (1, 1, 2),
    (2, 2, 1),
    (3, 3, 5),
    (1, 4, 3),
    (4, 1, 1),
    (5, 5, 10),
];

fn sqlite_error(err: impl std::fmt::Display) -> ToolError {
    ToolError::backend(BACKEND, err)
}

/// A file-backed SQLite database, opened and closed around every call.
pub struct SqliteBackend {
    path: PathBuf,
}

impl SqliteBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn connect(&self) -> ToolResult<SqliteConnection> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await.map_err(sqlite_error)?;
        }

        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .foreign_keys(false)
            .connect()
            .await
            .map_err(sqlite_error)
    }

    /// Run one statement on a fresh connection.
    pub async fn execute(&self, query: &str, params: &[SqlParam]) -> ToolResult<String> {
        let mut conn = self.connect().await?;
        let outcome = run_statement(&mut conn, query, params).await;
        close(conn).await;
        outcome
    }

    /// Drop and recreate the sample tables, then insert the seed rows.
    pub async fn init_sample_data(&self) -> ToolResult<String> {
        let mut conn = self.connect().await?;
        let outcome = seed(&mut conn).await.map_err(sqlite_error);
        close(conn).await;
        outcome?;

        info!("Sample data initialized at {}", self.path.display());
        Ok(format!(
            "SQLite sample data initialized successfully at {}",
            self.path.display()
        ))
    }
}

async fn close(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close SQLite connection: {}", e);
    }
}

fn bind_params<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &[SqlParam],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
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
    conn: &mut SqliteConnection,
    query: &str,
    params: &[SqlParam],
) -> ToolResult<String> {
    let statement = bind_params(sqlx::query::<Sqlite>(query), params);

    if !is_read_statement(query, SQLITE_READ_KEYWORDS) {
        let done = statement.execute(&mut *conn).await.map_err(sqlite_error)?;
        return Ok(render_affected(done.rows_affected()));
    }

    let rows = statement.fetch_all(&mut *conn).await.map_err(sqlite_error)?;
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

fn render_cell(row: &SqliteRow, index: usize) -> ToolResult<String> {
    let raw = row.try_get_raw(index).map_err(sqlite_error)?;
    if raw.is_null() {
        return Ok(NULL_CELL.to_string());
    }

    // storage class of the value itself, not the declared column type
    let storage = raw.type_info().name().to_string();
    let rendered = match storage.as_str() {
        "INTEGER" => row.try_get::<i64, _>(index).map(|v| v.to_string()),
        "REAL" => row.try_get::<f64, _>(index).map(|v| v.to_string()),
        "BLOB" => row
            .try_get::<Vec<u8>, _>(index)
            .map(|v| String::from_utf8_lossy(&v).into_owned()),
        _ => row.try_get::<String, _>(index),
    };
    rendered.map_err(sqlite_error)
}

async fn seed(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    let mut tx = conn.begin().await?;

    for statement in DROP_TABLES.iter().chain(CREATE_TABLES) {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    for (name, email, city) in CUSTOMERS {
        sqlx::query("INSERT INTO customers (name, email, city) VALUES (?, ?, ?)")
            .bind(*name)
            .bind(*email)
            .bind(*city)
            .execute(&mut *tx)
            .await?;
    }

    for (name, price, category, stock) in PRODUCTS {
        sqlx::query("INSERT INTO products (name, price, category, stock) VALUES (?, ?, ?, ?)")
            .bind(*name)
            .bind(*price)
            .bind(*category)
            .bind(*stock)
            .execute(&mut *tx)
            .await?;
    }

    for (customer_id, product_id, quantity) in ORDERS {
        sqlx::query("INSERT INTO orders (customer_id, product_id, quantity) VALUES (?, ?, ?)")
            .bind(*customer_id)
            .bind(*product_id)
            .bind(*quantity)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn backend(dir: &TempDir) -> SqliteBackend {
        SqliteBackend::new(dir.path().join("nested").join("test.db"))
    }

    #[tokio::test]
    async fn test_creates_missing_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let db = backend(&dir);
        let text = db.execute("SELECT 1 AS one", &[]).await.unwrap();
        assert_eq!(text, "Columns: one\n\n1\n");
        assert!(db.path().exists());
    }

    #[tokio::test]
    async fn test_write_reports_rows_affected() {
        let dir = TempDir::new().unwrap();
        let db = backend(&dir);
        db.execute("CREATE TABLE t (a INTEGER, b TEXT)", &[]).await.unwrap();
        let text = db
            .execute(
                "INSERT INTO t (a, b) VALUES (?, ?), (?, ?)",
                &[
                    SqlParam::Integer(1),
                    SqlParam::Text("x".into()),
                    SqlParam::Integer(2),
                    SqlParam::Null,
                ],
            )
            .await
            .unwrap();
        assert_eq!(text, "Query executed successfully. Rows affected: 2");

        let rows = db.execute("SELECT a, b FROM t ORDER BY a", &[]).await.unwrap();
        assert_eq!(rows, "Columns: a, b\n\n1 | x\n2 | NULL\n");
    }

    #[tokio::test]
    async fn test_empty_read_is_no_results() {
        let dir = TempDir::new().unwrap();
        let db = backend(&dir);
        db.execute("CREATE TABLE t (a INTEGER)", &[]).await.unwrap();
        assert_eq!(db.execute("SELECT * FROM t", &[]).await.unwrap(), "No results found");
    }

    #[tokio::test]
    async fn test_syntax_error_is_backend_error() {
        let dir = TempDir::new().unwrap();
        let err = backend(&dir).execute("SELEC nonsense", &[]).await.unwrap_err();
        assert!(err.to_string().starts_with("SQLite error:"));
    }

    #[tokio::test]
    async fn test_seed_prices_render_as_reals() {
        let dir = TempDir::new().unwrap();
        let db = backend(&dir);
        db.init_sample_data().await.unwrap();
        let text = db
            .execute("SELECT name, price FROM products WHERE id = ?", &[SqlParam::Integer(1)])
            .await
            .unwrap();
        assert_eq!(text, "Columns: name, price\n\nLaptop | 999.99\n");
    }

    #[tokio::test]
    async fn test_foreign_keys_are_not_enforced() {
        let dir = TempDir::new().unwrap();
        let db = backend(&dir);
        db.init_sample_data().await.unwrap();

        let inserted = db
            .execute(
                "INSERT INTO orders (customer_id, product_id, quantity) VALUES (99, 99, 1)",
                &[],
            )
            .await
            .unwrap();
        assert_eq!(inserted, "Query executed successfully. Rows affected: 1");

        let deleted = db.execute("DELETE FROM customers WHERE id = 1", &[]).await.unwrap();
        assert_eq!(deleted, "Query executed successfully. Rows affected: 1");
    }
}
