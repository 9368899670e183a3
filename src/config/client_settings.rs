use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;

/// Settings for the terminal client
#[derive(Debug, Clone)]
pub struct ClientSettings {
    api_url: String,
    page_size: usize,
}

impl ClientSettings {
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let api_url = ConfigSpec::new(env_provider.clone())
            .env_override("DIRECTORY_API_URL")
            .default_value("http://localhost:3088")
            .validator(ConfigSpec::validate_http_url)
            .load()?;

        let page_size = ConfigSpec::new(env_provider)
            .env_override("DIRECTORY_PAGE_SIZE")
            .default_value("10")
            .validator(|value| ConfigSpec::validate_integer_range(value, 1, 500))
            .load()?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            page_size: ConfigSpec::parse_usize(&page_size, "DIRECTORY_PAGE_SIZE")?,
        })
    }

    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}
