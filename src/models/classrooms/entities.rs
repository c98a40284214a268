use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct Classroom {
    // 班级ID
    pub classroom_id: i32,
    // 班级名称
    pub class_name: String,
    // 学年
    pub academic_year: i32,
    // 班主任
    pub homeroom_teacher: String,
}
