use anyhow::{Context, Result};
use url::Url;

const DEFAULT_WEBAPP_URL: &str = "https://your-webapp-url.com";
const DEFAULT_API_PORT: u16 = 8081;
const DEFAULT_INVOICE_PHOTO_URL: &str =
    "https://via.placeholder.com/400x300/FF69B4/FFFFFF?text=Anora+Art";

#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub webapp_url: Url,
    pub invoice_photo_url: Url,
    pub api_listen_port: u16,
    pub api_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        tracing::info!("Loading config from environment");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup("BOT_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .context("BOT_TOKEN is not set")?;

        let webapp_url = url_var(&lookup, "WEBAPP_URL", DEFAULT_WEBAPP_URL)?;
        let invoice_photo_url =
            url_var(&lookup, "INVOICE_PHOTO_URL", DEFAULT_INVOICE_PHOTO_URL)?;

        let api_listen_port = match lookup("API_LISTEN_PORT") {
            Some(p) => p
                .parse()
                .with_context(|| format!("API_LISTEN_PORT is not a port number: {}", p))?,
            None => DEFAULT_API_PORT,
        };

        let api_enabled = lookup("API_ENABLED")
            .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        Ok(Self {
            bot_token,
            webapp_url,
            invoice_photo_url,
            api_listen_port,
            api_enabled,
        })
    }
}

fn url_var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<Url> {
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.parse::<Url>()
        .with_context(|| format!("{} is not a valid URL: {}", key, raw))
}
