pub mod classrooms;
pub mod common;
pub mod enrollments;
pub mod lookups;
pub mod reports;
pub mod students;

pub use common::{ApiResponse, MutationOutcome, PageWindow, PaginatedResponse, PaginationQuery};

/// 业务错误码，写入 ApiResponse.code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,

    StudentNotFound = 2001,
    StudentCreateFailed = 2002,
    StudentUpdateFailed = 2003,
    StudentDeleteFailed = 2004,

    ClassroomNotFound = 3001,
    ClassroomCreateFailed = 3002,
    ClassroomUpdateFailed = 3003,
    ClassroomDeleteFailed = 3004,

    EnrollmentFailed = 4001,
    UnenrollmentFailed = 4002,

    InternalServerError = 5000,
}
