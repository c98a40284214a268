use actix_web::{HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode, PaginationQuery};

pub async fn list_classroom_students(
    service: &EnrollmentService,
    classroom_id: i32,
    pagination: PaginationQuery,
) -> ActixResult<HttpResponse> {
    match service
        .storage()
        .list_classroom_students(classroom_id, pagination)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Classroom students retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve classroom students: {e}"),
            )),
        ),
    }
}

pub async fn list_unassigned_students(
    service: &EnrollmentService,
    pagination: PaginationQuery,
) -> ActixResult<HttpResponse> {
    match service.storage().list_unassigned_students(pagination).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Students without a classroom retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve students without a classroom: {e}"),
            )),
        ),
    }
}
