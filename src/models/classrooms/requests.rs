use crate::models::common::{PaginationQuery, deserialize_optional_string_to_i32};
use serde::Deserialize;
use ts_rs::TS;

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_string_to_i32")]
    pub classroom_id: Option<i32>,
    pub class_name: Option<String>,
    pub homeroom_teacher: Option<String>,
}

/// 班级列表的过滤条件，各项独立可选，同时出现时按 AND 组合
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassroomFilter {
    pub classroom_id: Option<i32>,
    pub class_name: Option<String>,
    pub homeroom_teacher: Option<String>,
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ClassroomListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub filter: ClassroomFilter,
}

impl From<ClassroomQueryParams> for ClassroomListQuery {
    fn from(params: ClassroomQueryParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            limit: Some(params.pagination.limit),
            filter: ClassroomFilter {
                classroom_id: params.classroom_id,
                class_name: params.class_name,
                homeroom_teacher: params.homeroom_teacher,
            },
        }
    }
}

// 创建班级请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct CreateClassroomRequest {
    pub class_name: String,
    pub academic_year: i32,
    pub homeroom_teacher: String,
}

// 更新班级请求，只写入显式提供的字段
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct UpdateClassroomRequest {
    pub class_name: Option<String>,
    pub academic_year: Option<i32>,
    pub homeroom_teacher: Option<String>,
}

impl UpdateClassroomRequest {
    pub fn is_empty(&self) -> bool {
        self.class_name.is_none() && self.academic_year.is_none() && self.homeroom_teacher.is_none()
    }
}
