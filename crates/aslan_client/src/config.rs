use crate::AslanError;
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_token: SecretString,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AslanError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function, so tests never mutate the global environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, AslanError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let token = get("ASLAN_API_TOKEN")
            .ok_or_else(|| AslanError::Config("ASLAN_API_TOKEN missing".into()))?;
        let base_url = get("ASLAN_BASE_URL").unwrap_or_else(|| "http://aslan:25000".into());
        Ok(Self {
            api_token: SecretString::new(token.into()),
            base_url,
        })
    }
}
