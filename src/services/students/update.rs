use actix_web::{HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::UpdateStudentRequest};
use crate::services::{validation_error_response, write_error_response};
use crate::utils::validate::validate_update_student;

pub async fn update_student(
    service: &StudentService,
    student_id: i32,
    update: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_update_student(&update) {
        return Ok(validation_error_response(msg));
    }

    // 目标不存在时 rowsAffected 为 0，仍按成功返回
    match service.storage().update_student(student_id, update).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            outcome,
            "Student updated successfully",
        ))),
        Err(e) => Ok(write_error_response(
            ErrorCode::StudentUpdateFailed,
            "Failed to update student",
            &e,
        )),
    }
}
