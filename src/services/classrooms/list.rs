use actix_web::{HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{
    ApiResponse, ErrorCode,
    classrooms::requests::{ClassroomListQuery, ClassroomQueryParams},
};

pub async fn list_classrooms(
    service: &ClassroomService,
    query: ClassroomQueryParams,
) -> ActixResult<HttpResponse> {
    let list_query = ClassroomListQuery::from(query);

    match service.storage().list_classrooms(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Classroom list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve classroom list: {e}"),
            )),
        ),
    }
}
