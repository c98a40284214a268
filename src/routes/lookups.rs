use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::{ApiResponse, ErrorCode, lookups::entities::LookupKind};
use crate::services::LookupService;

// GET /api/v1/lookups/{kind}，kind 为 prefixes / genders / grade-levels
pub async fn list_lookup(
    service: web::Data<LookupService>,
    kind: web::Path<String>,
) -> ActixResult<HttpResponse> {
    match kind.parse::<LookupKind>() {
        Ok(kind) => service.list(kind).await,
        Err(msg) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            msg,
        ))),
    }
}

pub fn configure_lookups_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lookups")
            .service(web::resource("/{kind}").route(web::get().to(list_lookup))),
    );
}
