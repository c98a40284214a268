use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::students::requests::{
    CreateStudentRequest, StudentQueryParams, UpdateStudentRequest,
};
use crate::services::StudentService;
use crate::utils::SafeStudentId;

// HTTP处理程序
pub async fn list_students(
    service: web::Data<StudentService>,
    query: web::Query<StudentQueryParams>,
) -> ActixResult<HttpResponse> {
    service.list_students(query.into_inner()).await
}

pub async fn create_student(
    service: web::Data<StudentService>,
    student: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    service.create_student(student.into_inner()).await
}

pub async fn get_student(
    service: web::Data<StudentService>,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    service.get_student(student_id.0).await
}

pub async fn update_student(
    service: web::Data<StudentService>,
    student_id: SafeStudentId,
    update: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    service
        .update_student(student_id.0, update.into_inner())
        .await
}

pub async fn delete_student(
    service: web::Data<StudentService>,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    service.delete_student(student_id.0).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student)),
            )
            .service(
                web::resource("/{student_id}")
                    .route(web::get().to(get_student))
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student)),
            ),
    );
}
