pub mod classrooms;
pub mod enrollments;
pub mod lookups;
pub mod reports;
pub mod students;

pub use classrooms::ClassroomService;
pub use enrollments::EnrollmentService;
pub use lookups::LookupService;
pub use reports::ReportService;
pub use students::StudentService;

use actix_web::HttpResponse;

use crate::errors::RosterError;
use crate::models::{ApiResponse, ErrorCode};

/// 写操作失败时的响应映射
///
/// 校验错误返回 400；唯一约束或外键约束冲突返回 409；其余返回 500。
pub(crate) fn write_error_response(code: ErrorCode, action: &str, e: &RosterError) -> HttpResponse {
    if e.is_client_error() {
        return HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e.message()));
    }

    let detail = e.message();
    match e {
        RosterError::Conflict(_) => HttpResponse::Conflict().json(ApiResponse::error_empty(
            code,
            format!("{action}: constraint violation: {detail}"),
        )),
        _ => HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(code, format!("{action}: {detail}"))),
    }
}

/// 参数校验失败响应
pub(crate) fn validation_error_response(msg: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))
}
