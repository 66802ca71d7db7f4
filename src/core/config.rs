//! Configuration management for the MCP servers.
//!
//! All servers share one configuration structure. Values come from
//! defaults, optionally overridden by `MCP_`-prefixed environment variables
//! (a `.env` file is honored through `dotenvy`).

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The tool table a server process exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerKind {
    /// SQL tools over SQLite (and MySQL with the `mysql` feature).
    Database,
    /// Medical and public-health HTTP APIs.
    MedicalApi,
    /// Generic HTTP request tools.
    WebApi,
    /// Shell command execution inside a workspace directory.
    Terminal,
}

impl ServerKind {
    /// Default server name reported to clients.
    pub fn default_name(self) -> &'static str {
        match self {
            Self::Database => "database-server",
            Self::MedicalApi => "medical-api-server",
            Self::WebApi => "webapi-server",
            Self::Terminal => "terminal",
        }
    }

    /// Whether the tools of this server make outbound HTTP calls.
    pub fn uses_http(self) -> bool {
        matches!(self, Self::MedicalApi | Self::WebApi)
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Database backends for the database server.
    pub database: DatabaseConfig,

    /// Shared outbound HTTP client settings.
    pub http: HttpClientConfig,

    /// Endpoints of the medical API server.
    pub medical: MedicalApiConfig,

    /// Terminal server settings.
    pub terminal: TerminalConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Which tool table this process serves.
    pub kind: ServerKind,

    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Database configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Location of the SQLite file, created on first use.
    pub sqlite_path: PathBuf,

    /// Connection URL for the optional MySQL backend.
    pub mysql_url: String,
}

/// The MySQL URL may embed a password, keep it out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("sqlite_path", &self.sqlite_path)
            .field("mysql_url", &"[REDACTED]")
            .finish()
    }
}

/// Outbound HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Whole-request timeout. `None` keeps the client default (no timeout).
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

/// Base URLs of the third-party services used by the medical API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalApiConfig {
    pub icd11_base_url: String,
    pub fda_base_url: String,
    pub infermedica_base_url: String,
    pub nutritionix_base_url: String,
    pub npi_base_url: String,
    pub cms_base_url: String,
    pub disease_base_url: String,
    pub nhs_scotland_base_url: String,
}

/// Terminal server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Working directory for every command.
    pub workspace: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            sqlite_path: PathBuf::from("databases").join("sample.db"),
            mysql_url: "mysql://root@localhost:3306/test_db".to_string(),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for MedicalApiConfig {
    fn default() -> Self {
        Self {
            icd11_base_url: "https://icd11restapi-developer-test.azurewebsites.net".to_string(),
            fda_base_url: "https://api.fda.gov".to_string(),
            infermedica_base_url: "https://api.infermedica.com".to_string(),
            nutritionix_base_url: "https://trackapi.nutritionix.com".to_string(),
            npi_base_url: "https://npiregistry.cms.hhs.gov".to_string(),
            cms_base_url: "https://marketplace.api.healthcare.gov".to_string(),
            disease_base_url: "https://disease.sh".to_string(),
            nhs_scotland_base_url: "https://www.opendata.nhs.scot".to_string(),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            workspace: home.join("mcp").join("workspace"),
        }
    }
}

impl Config {
    /// Default configuration for one server kind.
    pub fn for_server(kind: ServerKind) -> Self {
        Self {
            server: ServerConfig {
                kind,
                name: kind.default_name().to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            database: DatabaseConfig::default(),
            http: HttpClientConfig::default(),
            medical: MedicalApiConfig::default(),
            terminal: TerminalConfig::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_SQLITE_PATH`.
    ///
    /// Logging is not up yet while this runs, so values that had to be
    /// ignored are returned as warnings for the caller to log.
    pub fn from_env(kind: ServerKind) -> (Self, Vec<String>) {
        dotenvy::dotenv().ok();

        let mut config = Self::for_server(kind);
        let mut warnings = Vec::new();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            match timestamps.parse() {
                Ok(on) => config.logging.with_timestamps = on,
                Err(_) => warnings.push(format!(
                    "Ignoring invalid MCP_LOG_TIMESTAMPS value: {}",
                    timestamps
                )),
            }
        }

        config.transport = TransportConfig::from_env();

        if let Ok(path) = std::env::var("MCP_SQLITE_PATH") {
            config.database.sqlite_path = PathBuf::from(path);
        }

        if let Ok(url) = std::env::var("MCP_MYSQL_URL") {
            config.database.mysql_url = url;
        }

        if let Ok(timeout) = std::env::var("MCP_HTTP_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.http.timeout_secs = Some(secs),
                Err(_) => warnings.push(format!(
                    "Ignoring invalid MCP_HTTP_TIMEOUT_SECS value: {}",
                    timeout
                )),
            }
        }

        if let Ok(agent) = std::env::var("MCP_HTTP_USER_AGENT") {
            config.http.user_agent = agent;
        }

        let medical = &mut config.medical;
        for (var, slot) in [
            ("MCP_ICD11_BASE_URL", &mut medical.icd11_base_url),
            ("MCP_FDA_BASE_URL", &mut medical.fda_base_url),
            ("MCP_INFERMEDICA_BASE_URL", &mut medical.infermedica_base_url),
            ("MCP_NUTRITIONIX_BASE_URL", &mut medical.nutritionix_base_url),
            ("MCP_NPI_BASE_URL", &mut medical.npi_base_url),
            ("MCP_CMS_BASE_URL", &mut medical.cms_base_url),
            ("MCP_DISEASE_BASE_URL", &mut medical.disease_base_url),
            ("MCP_NHS_SCOTLAND_BASE_URL", &mut medical.nhs_scotland_base_url),
        ] {
            if let Ok(url) = std::env::var(var) {
                *slot = url;
            }
        }

        if let Ok(workspace) = std::env::var("MCP_TERMINAL_WORKSPACE") {
            config.terminal.workspace = PathBuf::from(workspace);
        }

        (config, warnings)
    }
}
