//! TCP transport implementation.
//!
//! Raw TCP socket transport with line-delimited JSON-RPC messages.
//! Every connection gets its own rmcp service over a clone of the server.

use rmcp::ServiceExt;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind the configured address.
    pub async fn bind(&self) -> TransportResult<TcpListener> {
        let addr = self.address();
        TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))
    }

    /// Run the TCP transport, accepting connections until the process exits.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let listener = self.bind().await?;
        Self::serve(listener, server).await
    }

    /// Accept connections on `listener`, one rmcp session per client.
    ///
    /// Sessions share the tool registry through clones of `server`.
    pub async fn serve(listener: TcpListener, server: McpServer) -> TransportResult<()> {
        let local = listener
            .local_addr()
            .map_err(|e| TransportError::init(e.to_string()))?;
        info!(
            "{} ready with {} tools on {} (JSON-RPC over TCP)",
            server.name(),
            server.tool_count(),
            local
        );

        loop {
            match listener.accept().await {
                Ok((stream, peer_addr)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
                    }
                    tokio::spawn(Self::handle_connection(server.clone(), stream, peer_addr));
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    // persistent accept errors (e.g. EMFILE) would otherwise spin
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                }
            }
        }
    }

    async fn handle_connection(
        server: McpServer,
        stream: tokio::net::TcpStream,
        peer_addr: std::net::SocketAddr,
    ) {
        let service = match server.serve(stream).await {
            Ok(s) => {
                info!("Client {} connected, serving...", peer_addr);
                s
            }
            Err(e) => {
                warn!("Failed to initialize service for {}: {}", peer_addr, e);
                return;
            }
        };

        if let Err(e) = service.waiting().await {
            warn!("Error while serving client {}: {}", peer_addr, e);
        } else {
            info!("Client {} disconnected cleanly", peer_addr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Config, ServerKind};
    use serde_json::{Value, json};
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::net::TcpStream;
    use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

    type ResponseLines = tokio::io::Lines<BufReader<OwnedReadHalf>>;

    #[test]
    fn test_address_formatting() {
        let transport = TcpTransport::new(TcpConfig {
            port: 4100,
            host: "0.0.0.0".to_string(),
        });
        assert_eq!(transport.address(), "0.0.0.0:4100");
    }

    #[tokio::test]
    async fn test_bind_conflict_is_bind_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let transport = TcpTransport::new(TcpConfig {
            port,
            host: "127.0.0.1".to_string(),
        });
        let err = transport.bind().await.unwrap_err();
        assert!(matches!(err, TransportError::BindError { .. }));
    }

    async fn send(stream: &mut OwnedWriteHalf, message: Value) {
        let mut line = message.to_string();
        line.push('\n');
        stream.write_all(line.as_bytes()).await.unwrap();
    }

    async fn receive(lines: &mut ResponseLines) -> Value {
        let line = lines.next_line().await.unwrap().unwrap();
        serde_json::from_str(&line).unwrap()
    }

    #[tokio::test]
    async fn test_session_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = McpServer::new(Config::for_server(ServerKind::WebApi)).unwrap();
        tokio::spawn(TcpTransport::serve(listener, server));

        let (read, mut write) = TcpStream::connect(addr).await.unwrap().into_split();
        let mut lines = BufReader::new(read).lines();

        send(
            &mut write,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": { "name": "tcp-test", "version": "0.0.1" }
                }
            }),
        )
        .await;
        let init = receive(&mut lines).await;
        assert_eq!(init["id"], 1);
        assert_eq!(init["result"]["serverInfo"]["name"], "webapi-server");

        send(
            &mut write,
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
        )
        .await;
        send(
            &mut write,
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list", "params": {} }),
        )
        .await;
        let listed = receive(&mut lines).await;
        assert_eq!(listed["id"], 2);
        assert_eq!(listed["result"]["tools"].as_array().unwrap().len(), 6);
        assert_eq!(listed["result"]["tools"][0]["name"], "get_request");
    }
}
