use crate::error::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 3000;
/// Matches an en-US locale string, e.g. `12/8/2025, 3:04:05 PM`
pub const DEFAULT_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
pub const DEFAULT_SCORE_MAX: u32 = 100;

/// Typed site configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteConfig {
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

/// Settings for the per-request values shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// strftime pattern for the server time card
    pub time_format: String,
    /// Exclusive upper bound of the focus score
    pub score_max: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            score_max: DEFAULT_SCORE_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Raw TOML configuration structure.
/// Every section and key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    server: RawServer,
    #[serde(default)]
    dashboard: RawDashboard,
    #[serde(default)]
    logging: RawLogging,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDashboard {
    time_format: Option<String>,
    score_max: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLogging {
    level: Option<String>,
    format: Option<String>,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    let host = match raw.server.host {
        Some(host) => host.trim().parse::<IpAddr>().map_err(|e| {
            Error::ConfigParse(format!("Invalid 'server.host' '{}': {}", host, e))
        })?,
        None => DEFAULT_HOST,
    };

    let port = raw.server.port.unwrap_or(DEFAULT_PORT);
    if port == 0 {
        return Err(Error::ConfigParse(
            "'server.port' must be greater than 0".to_string(),
        ));
    }

    let time_format = match raw.dashboard.time_format {
        Some(format) => validate_time_format(&format, "dashboard.time_format")?,
        None => DEFAULT_TIME_FORMAT.to_string(),
    };

    let score_max = raw.dashboard.score_max.unwrap_or(DEFAULT_SCORE_MAX);
    if score_max == 0 {
        return Err(Error::ConfigParse(
            "'dashboard.score_max' must be at least 1".to_string(),
        ));
    }

    let level = match raw.logging.level.as_deref() {
        Some(level) => parse_log_level(level)?,
        None => LogLevel::default(),
    };

    let format = match raw.logging.format.as_deref().map(str::trim) {
        Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
        Some(f) if f.eq_ignore_ascii_case("compact") => LogFormat::Compact,
        Some(other) => {
            return Err(Error::ConfigParse(format!(
                "Invalid 'logging.format' '{}', expected compact or json",
                other
            )));
        }
        None => LogFormat::default(),
    };

    Ok(SiteConfig {
        server: ServerConfig { host, port },
        dashboard: DashboardConfig {
            time_format,
            score_max,
        },
        logging: LoggingConfig { level, format },
    })
}

fn parse_log_level(s: &str) -> Result<LogLevel> {
    match s.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LogLevel::Trace),
        "debug" => Ok(LogLevel::Debug),
        "info" => Ok(LogLevel::Info),
        "warn" => Ok(LogLevel::Warn),
        "error" => Ok(LogLevel::Error),
        _ => Err(Error::ConfigParse(format!(
            "Invalid 'logging.level' '{}', expected trace, debug, info, warn or error",
            s
        ))),
    }
}

/// Reject empty or malformed strftime patterns.
///
/// chrono panics while displaying a malformed pattern, so this has to run
/// before any timestamp is formatted with it.
fn validate_time_format(format: &str, field_name: &str) -> Result<String> {
    if format.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty time format in '{}' field",
            field_name
        )));
    }

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::ConfigParse(format!(
            "Invalid time format in '{}': '{}'",
            field_name, format
        )));
    }

    Ok(format.to_string())
}
