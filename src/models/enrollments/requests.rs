use serde::Deserialize;
use ts_rs::TS;

// 将学生加入班级（班级 ID 来自路径）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct LinkStudentRequest {
    pub student_id: i32,
}
