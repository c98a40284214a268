use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生列表/详情行：学生字段 + 左连接得到的参照标签
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentRow {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: chrono::NaiveDate,
    pub prefix_id: Option<i32>,
    pub gender_id: Option<i32>,
    pub grade_level_id: Option<i32>,
    // 参照 ID 为空时标签也为空
    pub prefix_name: Option<String>,
    pub gender_name: Option<String>,
    pub level_name: Option<String>,
    // 称谓 + 名 + 姓
    pub full_name: String,
}
