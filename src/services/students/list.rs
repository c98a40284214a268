use actix_web::{HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::requests::{StudentListQuery, StudentQueryParams},
};

pub async fn list_students(
    service: &StudentService,
    query: StudentQueryParams,
) -> ActixResult<HttpResponse> {
    let list_query = StudentListQuery::from(query);

    match service.storage().list_students(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve student list: {e}"),
            )),
        ),
    }
}
