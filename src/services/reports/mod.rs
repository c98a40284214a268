use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct ReportService {
    storage: Arc<dyn Storage>,
}

impl ReportService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 10~12 岁男生及所在班级
    pub async fn male_students(&self) -> ActixResult<HttpResponse> {
        match self.storage.male_students_report().await {
            Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                rows,
                "Male students aged 10 to 12 retrieved successfully",
            ))),
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve male student report: {e}"),
                )),
            ),
        }
    }
}
