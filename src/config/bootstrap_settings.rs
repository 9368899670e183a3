use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;

/// Infrastructure settings needed to start the server
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    upload_dir: PathBuf,
    public_base_url: String,
}

impl BootstrapSettings {
    /// Load bootstrap settings through ConfigSpec
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let database_url = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://people.db?mode=rwc")
            .min_length(1)
            .load()?;

        let server_host = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address)
            .load()?;

        let port_value = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3088")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535))
            .load()?;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        let upload_dir = ConfigSpec::new(env_provider.clone())
            .env_override("UPLOAD_DIR")
            .default_value("uploads")
            .min_length(1)
            .load()?;

        let public_base_url = ConfigSpec::new(env_provider)
            .env_override("PUBLIC_BASE_URL")
            .default_value("http://localhost:3088")
            .validator(ConfigSpec::validate_http_url)
            .load()?;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            upload_dir: PathBuf::from(upload_dir),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Base URL used when building links to uploaded pictures
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    /// Override the listening port (CLI flag)
    pub fn with_port(mut self, port: u16) -> Self {
        self.server_port = port;
        self
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("upload_dir", &self.upload_dir)
            .field("public_base_url", &self.public_base_url)
            .finish()
    }
}
