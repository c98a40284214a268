use actix_web::{HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_classroom(
    service: &ClassroomService,
    classroom_id: i32,
) -> ActixResult<HttpResponse> {
    match service.storage().get_classroom(classroom_id).await {
        Ok(Some(classroom)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            classroom,
            "Classroom detail retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassroomNotFound,
            "Classroom not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get classroom detail: {e}"),
            )),
        ),
    }
}
