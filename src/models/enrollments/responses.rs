use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::PaginatedResponse;
use crate::models::students::entities::StudentRow;

// 班级内学生行：关联表键 + 学生行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct ClassroomStudent {
    pub student_classroom_id: i32,
    pub classroom_id: i32,
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: StudentRow,
}

pub type ClassroomStudentListResponse = PaginatedResponse<ClassroomStudent>;
pub type UnassignedStudentListResponse = PaginatedResponse<StudentRow>;
