use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::{PaginationQuery, enrollments::requests::LinkStudentRequest};
use crate::services::EnrollmentService;
use crate::utils::{SafeClassroomId, SafeStudentId};

// HTTP处理程序
pub async fn list_classroom_students(
    service: web::Data<EnrollmentService>,
    classroom_id: SafeClassroomId,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    service
        .list_classroom_students(classroom_id.0, query.into_inner())
        .await
}

pub async fn link_student(
    service: web::Data<EnrollmentService>,
    classroom_id: SafeClassroomId,
    req: web::Json<LinkStudentRequest>,
) -> ActixResult<HttpResponse> {
    service.link_student(classroom_id.0, req.into_inner()).await
}

pub async fn unlink_student(
    service: web::Data<EnrollmentService>,
    classroom_id: SafeClassroomId,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    service.unlink_student(student_id.0, classroom_id.0).await
}

pub async fn list_unassigned_students(
    service: web::Data<EnrollmentService>,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    service.list_unassigned_students(query.into_inner()).await
}

// 注册到 /api/v1/classrooms scope 内
pub fn configure_classroom_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{classroom_id}/students")
            .route(web::get().to(list_classroom_students))
            .route(web::post().to(link_student)),
    )
    .service(
        web::resource("/{classroom_id}/students/{student_id}")
            .route(web::delete().to(unlink_student)),
    );
}

pub fn configure_enrollments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .service(web::resource("/unassigned").route(web::get().to(list_unassigned_students))),
    );
}
