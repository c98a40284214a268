use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

// 分页查询参数，page 从 1 开始
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_limit",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub limit: i64,
}

// 分页列表响应：当前页数据 + 过滤后的总数（与分页无关）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub total: i64,
}

/// 归一化后的分页窗口
///
/// `index` 为 0 起始的页号：`page > 0` 时取 `page - 1`，否则为 0。
/// `size` 取调用方给出的正数，缺省或非正数时为 10；不设上限，
/// 偏移量始终为 `index * size`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub index: u64,
    pub size: u64,
}

impl PageWindow {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let index = match page {
            Some(page) if page > 0 => (page - 1) as u64,
            _ => 0,
        };
        let size = match limit {
            Some(limit) if limit > 0 => limit as u64,
            _ => DEFAULT_PAGE_SIZE as u64,
        };
        Self { index, size }
    }

    /// 行偏移量 = index * size
    pub fn offset(&self) -> u64 {
        self.index * self.size
    }
}

impl From<&PaginationQuery> for PageWindow {
    fn from(query: &PaginationQuery) -> Self {
        PageWindow::new(Some(query.page), Some(query.limit))
    }
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(value as i64)
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .trim()
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

// 可选 ID 过滤条件（查询字符串中均为字符串）
pub fn deserialize_optional_string_to_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let value = deserialize_string_to_i64(deserializer)?;
    i32::try_from(value)
        .map(Some)
        .map_err(|_| Error::custom(format!("id out of range: {value}")))
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}
