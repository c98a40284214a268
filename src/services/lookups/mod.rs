use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{ApiResponse, ErrorCode, lookups::entities::LookupKind};
use crate::storage::Storage;

/// 称谓、性别、年级参照表
pub struct LookupService {
    storage: Arc<dyn Storage>,
}

impl LookupService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn list(&self, kind: LookupKind) -> ActixResult<HttpResponse> {
        match self.storage.list_lookup(kind).await {
            Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                items,
                format!("Lookup {kind} retrieved successfully"),
            ))),
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve lookup {kind}: {e}"),
                )),
            ),
        }
    }
}
