use actix_web::{HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::write_error_response;

pub async fn delete_classroom(
    service: &ClassroomService,
    classroom_id: i32,
) -> ActixResult<HttpResponse> {
    // 仍有学生时被外键约束拒绝
    match service.storage().delete_classroom(classroom_id).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            outcome,
            "Classroom deleted successfully",
        ))),
        Err(e) => Ok(write_error_response(
            ErrorCode::ClassroomDeleteFailed,
            "Failed to delete classroom",
            &e,
        )),
    }
}
