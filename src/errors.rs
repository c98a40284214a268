//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_roster_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum RosterError {
            $($variant(String),)*
        }

        impl RosterError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(RosterError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RosterError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(RosterError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl RosterError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RosterError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_roster_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Transaction("E004", "Transaction Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    FileOperation("E009", "File Operation Error"),
    Conflict("E010", "Constraint Violation"),
}

impl RosterError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为请求数据本身的问题（而非存储层故障）
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RosterError::Validation(_) | RosterError::DateParse(_) | RosterError::NotFound(_)
        )
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RosterError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for RosterError {
    fn from(err: sea_orm::DbErr) -> Self {
        RosterError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for RosterError {
    fn from(err: chrono::ParseError) -> Self {
        RosterError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
