use actix_web::{HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::CreateStudentRequest};
use crate::services::{validation_error_response, write_error_response};
use crate::utils::validate::validate_create_student;

pub async fn create_student(
    service: &StudentService,
    student: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_create_student(&student) {
        return Ok(validation_error_response(msg));
    }

    match service.storage().create_student(student).await {
        Ok(outcome) => Ok(HttpResponse::Created().json(ApiResponse::success(
            outcome,
            "Student created successfully",
        ))),
        Err(e) => Ok(write_error_response(
            ErrorCode::StudentCreateFailed,
            "Failed to create student",
            &e,
        )),
    }
}
