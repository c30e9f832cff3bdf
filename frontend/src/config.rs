//! 构建期配置
//!
//! 浏览器端没有进程环境变量，配置在编译时通过 `option_env!` 注入：
//! - `SCHEDULER_API_BASE`: API 源前缀，默认同源
//! - `SCHEDULER_LOG`: 日志级别，默认 `info`

use std::str::FromStr;

const DEFAULT_API_BASE: &str = "";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SCHEDULER_API_BASE"), option_env!("SCHEDULER_LOG"))
    }

    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let log_level = log_level
            .and_then(|level| log::Level::from_str(level.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            api_base,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_same_origin_and_info() {
        assert_eq!(AppConfig::from_values(None, None), AppConfig::default());
    }

    #[test]
    fn trims_api_base() {
        let config = AppConfig::from_values(Some(" https://api.workshop.example/ "), None);
        assert_eq!(config.api_base, "https://api.workshop.example");
    }

    #[test]
    fn parses_log_level_case_insensitively() {
        let config = AppConfig::from_values(None, Some("DEBUG"));
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn unknown_log_level_falls_back() {
        let config = AppConfig::from_values(None, Some("chatty"));
        assert_eq!(config.log_level, log::Level::Info);
    }
}
