//! Build-time Configuration
//!
//! Values are baked in from environment variables when the bundle is built
//! (e.g. `TASKS_API_BASE=https://tasks.example.com/api trunk build`).

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
pub const DEFAULT_NOTICE_TTL_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Task API root, without trailing slash
    pub api_base: &'static str,
    /// How long a notification stays on screen
    pub notice_ttl_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE,
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("TASKS_API_BASE"),
            option_env!("TASKS_NOTICE_TTL_MS"),
            option_env!("TASKS_LOG_LEVEL"),
        )
    }

    fn from_values(
        api_base: Option<&'static str>,
        notice_ttl_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|b| b.trim_end_matches('/'))
                .filter(|b| !b.is_empty())
                .unwrap_or(defaults.api_base),
            notice_ttl_ms: notice_ttl_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.notice_ttl_ms),
            log_level: log_level
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
