use crate::models::common::{PaginationQuery, deserialize_optional_string_to_i32};
use crate::utils::validate::{deserialize_birth_date, deserialize_optional_birth_date};
use serde::{Deserialize, Deserializer};
use ts_rs::TS;

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub grade_level: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_to_i32")]
    pub student_id: Option<i32>,
    pub fullname: Option<String>,
}

/// 学生列表的过滤条件，各项独立可选，同时出现时按 AND 组合
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFilter {
    /// 年级名称子串匹配
    pub grade_level: Option<String>,
    /// 学生 ID 精确匹配
    pub student_id: Option<i32>,
    /// "称谓 名 姓" 拼接结果子串匹配
    pub full_name: Option<String>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub filter: StudentFilter,
}

impl From<StudentQueryParams> for StudentListQuery {
    fn from(params: StudentQueryParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            limit: Some(params.pagination.limit),
            filter: StudentFilter {
                grade_level: params.grade_level,
                student_id: params.student_id,
                full_name: params.fullname,
            },
        }
    }
}

// 创建学生请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(deserialize_with = "deserialize_birth_date")]
    #[ts(type = "string")]
    pub birth_date: chrono::NaiveDate,
    pub prefix_id: Option<i32>,
    pub gender_id: Option<i32>,
    pub grade_level_id: Option<i32>,
}

// 更新学生请求，只写入显式提供的字段
//
// 参照 ID 字段区分"未提供"（外层 None）与"置空"（Some(None)）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_birth_date")]
    #[ts(type = "string | null")]
    pub birth_date: Option<chrono::NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub prefix_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub gender_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub grade_level_id: Option<Option<i32>>,
}

impl UpdateStudentRequest {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.birth_date.is_none()
            && self.prefix_id.is_none()
            && self.gender_id.is_none()
            && self.grade_level_id.is_none()
    }
}

// 字段出现即为 Some，值为 null 时得到 Some(None)
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
