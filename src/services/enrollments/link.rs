use actix_web::{HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{validation_error_response, write_error_response};

pub async fn link_student(
    service: &EnrollmentService,
    student_id: i32,
    classroom_id: i32,
) -> ActixResult<HttpResponse> {
    if student_id <= 0 {
        return Ok(validation_error_response("studentId must be a positive integer"));
    }

    // 学生/班级不存在或重复加入时由约束拒绝
    match service.storage().link_student(student_id, classroom_id).await {
        Ok(outcome) => Ok(HttpResponse::Created().json(ApiResponse::success(
            outcome,
            "Student added to classroom successfully",
        ))),
        Err(e) => Ok(write_error_response(
            ErrorCode::EnrollmentFailed,
            "Failed to add student to classroom",
            &e,
        )),
    }
}

pub async fn unlink_student(
    service: &EnrollmentService,
    student_id: i32,
    classroom_id: i32,
) -> ActixResult<HttpResponse> {
    match service
        .storage()
        .unlink_student(student_id, classroom_id)
        .await
    {
        Ok(outcome) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            outcome,
            "Student removed from classroom successfully",
        ))),
        Err(e) => Ok(write_error_response(
            ErrorCode::UnenrollmentFailed,
            "Failed to remove student from classroom",
            &e,
        )),
    }
}
