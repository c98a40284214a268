use super::entities::StudentRow;
use crate::models::common::PaginatedResponse;

// 学生列表响应
pub type StudentListResponse = PaginatedResponse<StudentRow>;
