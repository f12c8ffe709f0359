use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to (e.g., "127.0.0.1")
    pub host: String,

    /// Port number to bind to (e.g., 8000)
    pub port: u16,
}

impl ServerConfig {
    /// Socket address string in `host:port` form
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}
