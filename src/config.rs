use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://admin-paypointapi.macrotech.com.ng/pay-point/";
pub const DEFAULT_API_KEY: &str = "28042025";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_key: String,
    pub port: u16,
    pub log_file: String,
    pub cookie_secure: bool,
    pub estate_name: String,
    pub request_timeout: Duration,
    pub request_body_limit: usize,
    pub member_view_idle: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or(default.to_string());

        Ok(Self {
            api_base_url: text("API_BASE_URL", DEFAULT_API_BASE_URL),
            api_key: text("API_KEY", DEFAULT_API_KEY),
            port: parsed(&lookup, "PORT", 3000)?,
            log_file: text("LOG_FILE", "app.log"),
            cookie_secure: flag(&lookup, "COOKIE_SECURE", true)?,
            estate_name: text("ESTATE_NAME", "Testing Estate"),
            request_timeout: Duration::from_secs(parsed(&lookup, "REQUEST_TIMEOUT_SECS", 30)?),
            request_body_limit: parsed(&lookup, "REQUEST_BODY_LIMIT", 64 * 1024)?,
            member_view_idle: Duration::from_secs(parsed(&lookup, "MEMBER_VIEW_IDLE_SECS", 8 * 3600)?),
        })
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|err| format!("Invalid {}: {}", key, err)),
        None => Ok(default),
    }
}

fn flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool, String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|value| value.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(value) => match value.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(format!("Invalid {}: expected true or false, got {}", key, value)),
        },
    }
}
