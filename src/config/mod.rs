//! Application configuration, loaded once at startup.

use serde::{Deserialize, Serialize};

/// 静态配置（TOML + 环境变量，启动时加载一次）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub links: LinkConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：LP，嵌套分隔符：__
    /// 示例：LP_SERVER__PORT=9999
    ///
    /// 配置文件路径可通过 LP_CONFIG 环境变量覆盖。
    pub fn load() -> crate::errors::Result<Self> {
        use config::{Config, Environment, File};

        let path = std::env::var("LP_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(&path).required(false))
            // 2. 从环境变量覆盖，前缀 LP，分隔符 __
            .add_source(
                Environment::with_prefix("LP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<AppConfig>()?;

        if std::path::Path::new(&path).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", path);
        }

        Ok(config)
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
}

/// 短链接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Length of generated short ids.
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    /// Absolute prefix used to build short URLs in `Location` headers.
    /// Falls back to `http://{host}:{port}/` when unset.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Where `GET /` redirects. Without it the root returns 404.
    #[serde(default)]
    pub default_url: Option<String>,
}

/// 限流配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_max_requests")]
    pub max_requests: u64,
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

/// 快照文件配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default = "default_forward_path")]
    pub forward_path: String,
    #[serde(default = "default_reverse_path")]
    pub reverse_path: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_code_length() -> usize {
    6
}

fn default_max_requests() -> u64 {
    100
}

fn default_window_secs() -> u64 {
    3600
}

fn default_forward_path() -> String {
    "links.json".to_string()
}

fn default_reverse_path() -> String {
    "links_by_url.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            base_url: None,
            default_url: None,
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            forward_path: default_forward_path(),
            reverse_path: default_reverse_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.links.code_length, 6);
        assert_eq!(config.links.base_url, None);
        assert_eq!(config.rate_limit.max_requests, 100);
        assert_eq!(config.rate_limit.window_secs, 3600);
        assert_eq!(config.snapshot.forward_path, "links.json");
        assert_eq!(config.snapshot.reverse_path, "links_by_url.json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config_fills_missing_fields_with_defaults() {
        let partial = r#"{"server": {"port": 9999}}"#;
        let config: AppConfig = serde_json::from_str(partial).unwrap();

        assert_eq!(config.server.port, 9999);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.rate_limit.max_requests, 100);
    }

    #[test]
    fn test_toml_sections_deserialize() {
        let doc = r#"
            [server]
            host = "0.0.0.0"
            port = 9090

            [links]
            code_length = 8
            base_url = "https://lp.example/"
            default_url = "https://lp.example/about"

            [rate_limit]
            max_requests = 10
            window_secs = 60

            [snapshot]
            forward_path = "data/links.json"
            reverse_path = "data/links_by_url.json"

            [logging]
            level = "debug"
            format = "json"
        "#;
        let config: AppConfig = toml::from_str(doc).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.links.code_length, 8);
        assert_eq!(config.links.base_url.as_deref(), Some("https://lp.example/"));
        assert_eq!(
            config.links.default_url.as_deref(),
            Some("https://lp.example/about")
        );
        assert_eq!(config.rate_limit.max_requests, 10);
        assert_eq!(config.rate_limit.window_secs, 60);
        assert_eq!(config.snapshot.forward_path, "data/links.json");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }
}
