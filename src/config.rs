use std::{env, fmt, time::Duration};

use reqwest::Url;

#[derive(Clone)]
pub struct Config {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_redirect_uri: String,
    /// Base URL of the single-page app, the callback redirects to `<frontend_uri>/logged`
    pub frontend_uri: String,
    pub spotify_accounts_url: Url,
    pub spotify_api_url: Url,
    pub server_host: String,
    pub server_port: u16,
    /// Whether session cookies carry the `Secure` attribute. Disable only for plain-HTTP development.
    pub cookie_secure: bool,
    /// Allowed CORS origins (comma-separated). Credentials are allowed, so "*" is not accepted.
    pub cors_origins: Vec<String>,
    /// Timeout applied to every outbound Spotify call. `None` waits indefinitely.
    pub spotify_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| anyhow::anyhow!("{} environment variable must be set", key))
        };

        let frontend_uri = lookup("FRONTEND_URI")
            .unwrap_or_else(|| "http://127.0.0.1:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        let spotify_accounts_url = parse_url(
            "SPOTIFY_ACCOUNTS_URL",
            lookup("SPOTIFY_ACCOUNTS_URL").unwrap_or_else(|| "https://accounts.spotify.com".to_string()),
        )?;
        let spotify_api_url = parse_url(
            "SPOTIFY_API_URL",
            lookup("SPOTIFY_API_URL").unwrap_or_else(|| "https://api.spotify.com".to_string()),
        )?;

        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| anyhow::anyhow!("SERVER_PORT must be a valid port number, got {:?}", port))?,
            None => 3000,
        };

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(v) => parse_bool(&v)
                .ok_or_else(|| anyhow::anyhow!("COOKIE_SECURE must be true or false, got {:?}", v))?,
            None => true,
        };

        // Default to the frontend origin, which is the only caller that needs credentials
        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| frontend_uri.clone())
            .split(',')
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        if cors_origins.iter().any(|origin| origin == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot contain \"*\" because credentials are allowed, list the origins explicitly"
            ));
        }

        let spotify_timeout = match lookup("SPOTIFY_TIMEOUT_SECS") {
            Some(secs) => Some(Duration::from_secs(secs.parse().map_err(|_| {
                anyhow::anyhow!("SPOTIFY_TIMEOUT_SECS must be a whole number of seconds, got {:?}", secs)
            })?)),
            None => None,
        };

        Ok(Config {
            spotify_client_id: required("SPOTIFY_CLIENT_ID")?,
            spotify_client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            spotify_redirect_uri: required("SPOTIFY_REDIRECT_URI")?,
            frontend_uri,
            spotify_accounts_url,
            spotify_api_url,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            cookie_secure,
            cors_origins,
            spotify_timeout,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("spotify_client_id", &self.spotify_client_id)
            .field("spotify_client_secret", &"<redacted>")
            .field("spotify_redirect_uri", &self.spotify_redirect_uri)
            .field("frontend_uri", &self.frontend_uri)
            .field("spotify_accounts_url", &self.spotify_accounts_url.as_str())
            .field("spotify_api_url", &self.spotify_api_url.as_str())
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cookie_secure", &self.cookie_secure)
            .field("cors_origins", &self.cors_origins)
            .field("spotify_timeout", &self.spotify_timeout)
            .finish()
    }
}

fn parse_url(key: &str, value: String) -> Result<Url, anyhow::Error> {
    // A trailing slash keeps `Url::join` from dropping the last path segment
    let value = if value.ends_with('/') { value } else { format!("{}/", value) };
    Url::parse(&value).map_err(|e| anyhow::anyhow!("{} is not a valid URL ({}): {}", key, value, e))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
