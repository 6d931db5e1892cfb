//! Widget configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget ships as a single script with no runtime settings surface, so
//! every knob is a compile-time constant. `CLARITY_*` environment variables
//! seen by the compiler override the defaults; changing them means
//! rebuilding the bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::WidgetError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_PRIMARY_COLOR: &str = "#2563EB";
pub const DEFAULT_TITLE: &str = "⚡ ClarityOS";
pub const DEFAULT_GREETING: &str = "Hi! I'm ClarityOS. I'll help you find the perfect mentor. \
     Let's start by understanding your challenge. 📎 You can upload documents for better analysis.";
pub const DEFAULT_PLACEHOLDER: &str = "Describe your challenge...";
/// File picker hint only; the backend decides what it can parse.
pub const DEFAULT_ACCEPT: &str = ".pdf,.docx,.doc,.txt,.md,.csv,.xlsx,.xls,.ppt,.pptx";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Static configuration for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    /// Accent color as `#rgb` or `#rrggbb`.
    pub primary_color: String,
    pub title: String,
    pub greeting: String,
    pub placeholder: String,
    pub accept: String,
    /// Render assistant replies with their raw HTML intact.
    ///
    /// Off by default: replies go through the Markdown subset in
    /// [`crate::render::markup`] with raw HTML dropped. Only enable for a
    /// backend whose output is fully trusted.
    pub trust_reply_html: bool,
    pub log_level: log::Level,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            greeting: DEFAULT_GREETING.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            accept: DEFAULT_ACCEPT.to_owned(),
            trust_reply_html: false,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl WidgetConfig {
    /// Build the config from `CLARITY_*` variables captured at compile time.
    ///
    /// Optional:
    /// - `CLARITY_API_URL`: backend base URL (default `http://localhost:8000`)
    /// - `CLARITY_PRIMARY_COLOR`: accent color (default `#2563EB`)
    /// - `CLARITY_TRUST_REPLY_HTML`: `true`/`false` (default `false`)
    /// - `CLARITY_LOG_LEVEL`: `error` .. `trace` (default `info`)
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Config`] if any provided value is malformed.
    pub fn from_build_env() -> Result<Self, WidgetError> {
        Self::from_values(BuildValues {
            api_url: option_env!("CLARITY_API_URL"),
            primary_color: option_env!("CLARITY_PRIMARY_COLOR"),
            trust_reply_html: option_env!("CLARITY_TRUST_REPLY_HTML"),
            log_level: option_env!("CLARITY_LOG_LEVEL"),
        })
    }

    fn from_values(values: BuildValues<'_>) -> Result<Self, WidgetError> {
        let mut config = Self::default();
        if let Some(raw) = values.api_url {
            config.api_url = parse_api_url(raw)?;
        }
        if let Some(raw) = values.primary_color {
            config.primary_color = parse_color(raw)?;
        }
        if let Some(raw) = values.trust_reply_html {
            config.trust_reply_html = parse_bool("CLARITY_TRUST_REPLY_HTML", raw)?;
        }
        if let Some(raw) = values.log_level {
            config.log_level = parse_log_level(raw)?;
        }
        Ok(config)
    }

    /// `POST` target for multipart file uploads.
    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.api_url)
    }

    /// `POST` target for chat turns.
    pub fn chat_url(&self) -> String {
        format!("{}/chat/message", self.api_url)
    }

    /// `GET` target for the backend health probe.
    pub fn health_url(&self) -> String {
        format!("{}/", self.api_url)
    }
}

/// Log level for console output, before the rest of the config is parsed.
pub fn build_log_level() -> log::Level {
    match option_env!("CLARITY_LOG_LEVEL").map(parse_log_level) {
        Some(Ok(level)) => level,
        _ => DEFAULT_LOG_LEVEL,
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct BuildValues<'a> {
    api_url: Option<&'a str>,
    primary_color: Option<&'a str>,
    trust_reply_html: Option<&'a str>,
    log_level: Option<&'a str>,
}

fn parse_api_url(raw: &str) -> Result<String, WidgetError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(WidgetError::Config {
            key: "CLARITY_API_URL",
            reason: format!("expected an http(s) URL, got {raw:?}"),
        });
    }
    Ok(trimmed.to_owned())
}

fn parse_color(raw: &str) -> Result<String, WidgetError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or("");
    let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(WidgetError::Config {
            key: "CLARITY_PRIMARY_COLOR",
            reason: format!("expected #rgb or #rrggbb, got {raw:?}"),
        });
    }
    Ok(trimmed.to_owned())
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, WidgetError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(WidgetError::Config { key, reason: format!("expected a boolean, got {other:?}") }),
    }
}

fn parse_log_level(raw: &str) -> Result<log::Level, WidgetError> {
    raw.trim()
        .parse::<log::Level>()
        .map_err(|_| WidgetError::Config { key: "CLARITY_LOG_LEVEL", reason: format!("unknown level {raw:?}") })
}
