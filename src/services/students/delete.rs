use actix_web::{HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::write_error_response;

pub async fn delete_student(
    service: &StudentService,
    student_id: i32,
) -> ActixResult<HttpResponse> {
    match service.storage().delete_student(student_id).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            outcome,
            "Student deleted successfully",
        ))),
        Err(e) => Ok(write_error_response(
            ErrorCode::StudentDeleteFailed,
            "Failed to delete student",
            &e,
        )),
    }
}
