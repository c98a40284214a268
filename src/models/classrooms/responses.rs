use super::entities::Classroom;
use crate::models::common::PaginatedResponse;

// 班级列表响应
pub type ClassroomListResponse = PaginatedResponse<Classroom>;
