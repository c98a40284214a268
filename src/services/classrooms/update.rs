use actix_web::{HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode, classrooms::requests::UpdateClassroomRequest};
use crate::services::{validation_error_response, write_error_response};
use crate::utils::validate::validate_update_classroom;

pub async fn update_classroom(
    service: &ClassroomService,
    classroom_id: i32,
    update: UpdateClassroomRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_update_classroom(&update) {
        return Ok(validation_error_response(msg));
    }

    match service.storage().update_classroom(classroom_id, update).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            outcome,
            "Classroom updated successfully",
        ))),
        Err(e) => Ok(write_error_response(
            ErrorCode::ClassroomUpdateFailed,
            "Failed to update classroom",
            &e,
        )),
    }
}
