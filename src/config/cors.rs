use crate::error::{AppError, AppResult};
use serde::Deserialize;
use url::Url;

/// Origin value that allows every origin
pub const WILDCARD_ORIGIN: &str = "*";

/// Origins granted access when `ALLOWED_ORIGINS` is not set: the local
/// front-end dev server under both of its usual host names.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// CORS configuration
///
/// Methods and request headers are always allowed wholesale; only the origin
/// list is configurable. Credentialed requests are never allowed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CorsConfig {
    /// Ordered list of exact-match origins (use ["*"] for all origins)
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl CorsConfig {
    /// Build from a comma-separated origin list such as the `ALLOWED_ORIGINS`
    /// variable. Entries are trimmed, blanks dropped and duplicates removed
    /// keeping the first occurrence.
    pub fn from_list(raw: &str) -> Self {
        let mut allowed_origins: Vec<String> = Vec::new();
        for origin in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !allowed_origins.iter().any(|o| o == origin) {
                allowed_origins.push(origin.to_string());
            }
        }
        Self { allowed_origins }
    }

    /// Whether the list is the single wildcard entry
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == WILDCARD_ORIGIN)
    }

    /// Validate the origin list
    pub fn validate(&self) -> AppResult<()> {
        if self.allowed_origins.is_empty() {
            return Err(AppError::Configuration(
                "ALLOWED_ORIGINS must contain at least one origin".to_string(),
            ));
        }

        if self.allows_any_origin() {
            if self.allowed_origins.len() > 1 {
                return Err(AppError::Configuration(
                    "ALLOWED_ORIGINS cannot mix \"*\" with explicit origins".to_string(),
                ));
            }
            return Ok(());
        }

        self.allowed_origins
            .iter()
            .try_for_each(|origin| validate_origin(origin))
    }
}

/// Check that `origin` is written exactly the way a browser sends it in the
/// `Origin` header, since matching is byte-for-byte.
pub fn validate_origin(origin: &str) -> AppResult<()> {
    let parsed = Url::parse(origin)
        .map_err(|e| AppError::InvalidOrigin(format!("{}: {}", origin, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::InvalidOrigin(format!(
            "{}: scheme must be http or https",
            origin
        )));
    }

    if parsed.host_str().is_none() {
        return Err(AppError::InvalidOrigin(format!("{}: missing host", origin)));
    }

    let serialized = parsed.origin().ascii_serialization();
    if serialized != origin {
        return Err(AppError::InvalidOrigin(format!(
            "{}: browsers send this origin as {}",
            origin, serialized
        )));
    }

    Ok(())
}
