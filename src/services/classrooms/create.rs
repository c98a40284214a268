use actix_web::{HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode, classrooms::requests::CreateClassroomRequest};
use crate::services::{validation_error_response, write_error_response};
use crate::utils::validate::validate_create_classroom;

pub async fn create_classroom(
    service: &ClassroomService,
    classroom: CreateClassroomRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_create_classroom(&classroom) {
        return Ok(validation_error_response(msg));
    }

    match service.storage().create_classroom(classroom).await {
        Ok(outcome) => Ok(HttpResponse::Created().json(ApiResponse::success(
            outcome,
            "Classroom created successfully",
        ))),
        Err(e) => Ok(write_error_response(
            ErrorCode::ClassroomCreateFailed,
            "Failed to create classroom",
            &e,
        )),
    }
}
