use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkpressError {
    Config(String),
    FileOperation(String),
    Serialization(String),
    Internal(String),
}

impl LinkpressError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkpressError::Config(_) => "E001",
            LinkpressError::FileOperation(_) => "E002",
            LinkpressError::Serialization(_) => "E003",
            LinkpressError::Internal(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkpressError::Config(_) => "Configuration Error",
            LinkpressError::FileOperation(_) => "File Operation Error",
            LinkpressError::Serialization(_) => "Serialization Error",
            LinkpressError::Internal(_) => "Internal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkpressError::Config(msg) => msg,
            LinkpressError::FileOperation(msg) => msg,
            LinkpressError::Serialization(msg) => msg,
            LinkpressError::Internal(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkpressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkpressError {}

// 便捷的构造函数
impl LinkpressError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkpressError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkpressError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkpressError::Serialization(msg.into())
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        LinkpressError::Internal(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for LinkpressError {
    fn from(err: std::io::Error) -> Self {
        LinkpressError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkpressError {
    fn from(err: serde_json::Error) -> Self {
        LinkpressError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for LinkpressError {
    fn from(err: config::ConfigError) -> Self {
        LinkpressError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkpressError>;
