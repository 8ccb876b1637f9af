use std::fmt;

#[derive(Debug, Clone)]
pub enum ShortformError {
    Config(String),
    Http(String),
    Serialization(String),
    Duration(String),
    Validation(String),
    DateParse(String),
    Terminal(String),
}

impl ShortformError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortformError::Config(_) => "E001",
            ShortformError::Http(_) => "E002",
            ShortformError::Serialization(_) => "E003",
            ShortformError::Duration(_) => "E004",
            ShortformError::Validation(_) => "E005",
            ShortformError::DateParse(_) => "E006",
            ShortformError::Terminal(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortformError::Config(_) => "Configuration Error",
            ShortformError::Http(_) => "HTTP Error",
            ShortformError::Serialization(_) => "Serialization Error",
            ShortformError::Duration(_) => "Duration Format Error",
            ShortformError::Validation(_) => "Validation Error",
            ShortformError::DateParse(_) => "Date Parse Error",
            ShortformError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortformError::Config(msg) => msg,
            ShortformError::Http(msg) => msg,
            ShortformError::Serialization(msg) => msg,
            ShortformError::Duration(msg) => msg,
            ShortformError::Validation(msg) => msg,
            ShortformError::DateParse(msg) => msg,
            ShortformError::Terminal(msg) => msg,
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortformError {}

// 便捷的构造函数
impl ShortformError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShortformError::Config(msg.into())
    }

    pub fn http<T: Into<String>>(msg: T) -> Self {
        ShortformError::Http(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortformError::Serialization(msg.into())
    }

    pub fn duration<T: Into<String>>(msg: T) -> Self {
        ShortformError::Duration(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortformError::Validation(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        ShortformError::DateParse(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        ShortformError::Terminal(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for ShortformError {
    fn from(err: std::io::Error) -> Self {
        ShortformError::Terminal(err.to_string())
    }
}

impl From<serde_json::Error> for ShortformError {
    fn from(err: serde_json::Error) -> Self {
        ShortformError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ShortformError {
    fn from(err: chrono::ParseError) -> Self {
        ShortformError::DateParse(err.to_string())
    }
}

impl From<ureq::Error> for ShortformError {
    fn from(err: ureq::Error) -> Self {
        ShortformError::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortformError>;
