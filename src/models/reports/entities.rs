use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 10~12 岁男生报表行，学生未分班时班级字段为空，多个班级时出现多行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct MaleStudentReportRow {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: chrono::NaiveDate,
    pub age: i64,
    pub gender_name: Option<String>,
    pub prefix_name: Option<String>,
    pub level_name: Option<String>,
    pub class_name: Option<String>,
    pub homeroom_teacher: Option<String>,
}
