use std::time::Duration;

use super::envio::EnvioError;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "FACTURASEND_API_KEY";

/// Environment variable holding the tenant base URL.
pub const ENV_BASE_URL: &str = "FACTURASEND_BASE_URL";

/// Configuration for the FacturaSend client.
///
/// Constructed explicitly and passed into [`super::ClienteFacturaSend`];
/// nothing is read from the environment after construction, so tests never
/// need to mutate process state. A missing API key is reported at submission
/// time, not here.
#[derive(Debug, Clone)]
pub struct FacturaSendConfig {
    /// Tenant base URL, e.g. `https://api.facturasend.com.py/<tenant>`.
    pub base_url: String,
    /// Bearer credential; sent as `Authorization: Bearer api_key_{key}`.
    pub api_key: Option<String>,
    /// Request timeout for the underlying HTTP client.
    pub timeout: Duration,
}

impl FacturaSendConfig {
    /// Config for a tenant base URL; trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `FACTURASEND_BASE_URL` (required) and `FACTURASEND_API_KEY`
    /// (optional) from the process environment.
    pub fn from_env() -> Result<Self, EnvioError> {
        let base_url = std::env::var(ENV_BASE_URL)
            .map_err(|_| EnvioError::Configuracion(format!("variable {ENV_BASE_URL} no definida")))?;
        let mut config = Self::new(base_url);
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_sin_barra_final() {
        let config = FacturaSendConfig::new("https://api.example.com/tenant///");
        assert_eq!(config.base_url, "https://api.example.com/tenant");
    }

    #[test]
    fn api_key_encadenada() {
        let config = FacturaSendConfig::new("https://api.example.com").api_key("abc123");
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
