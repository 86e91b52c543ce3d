//! Connection settings for transport constructors.
//!
//! The core client never reads this; it is handed to whatever [`Transport`]
//! implementation the application wires in, which interprets the fields as it
//! sees fit.
//!
//! [`Transport`]: crate::transport::Transport

/// Settings a transport needs to reach the store.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Region the store lives in.
    pub region: String,
    /// Endpoint URL override, for local or self-hosted stores.
    pub endpoint: Option<String>,
    /// Access key id, when the transport authenticates requests.
    pub access_key_id: Option<String>,
    /// Secret access key, when the transport authenticates requests.
    pub secret_access_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_owned(),
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
        }
    }
}

impl Config {
    /// Load settings from environment variables, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("SPARKPLUG_REGION") {
            config.region = v;
        }
        if let Ok(v) = std::env::var("SPARKPLUG_ENDPOINT") {
            config.endpoint = Some(v);
        }
        if let Ok(v) = std::env::var("AWS_ACCESS_KEY_ID") {
            config.access_key_id = Some(v);
        }
        if let Ok(v) = std::env::var("AWS_SECRET_ACCESS_KEY") {
            config.secret_access_key = Some(v);
        }

        config
    }
}
