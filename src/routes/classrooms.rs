use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::classrooms::requests::{
    ClassroomQueryParams, CreateClassroomRequest, UpdateClassroomRequest,
};
use crate::services::ClassroomService;
use crate::utils::SafeClassroomId;

// HTTP处理程序
pub async fn list_classrooms(
    service: web::Data<ClassroomService>,
    query: web::Query<ClassroomQueryParams>,
) -> ActixResult<HttpResponse> {
    service.list_classrooms(query.into_inner()).await
}

pub async fn create_classroom(
    service: web::Data<ClassroomService>,
    classroom: web::Json<CreateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    service.create_classroom(classroom.into_inner()).await
}

pub async fn get_classroom(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomId,
) -> ActixResult<HttpResponse> {
    service.get_classroom(classroom_id.0).await
}

pub async fn update_classroom(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomId,
    update: web::Json<UpdateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    service
        .update_classroom(classroom_id.0, update.into_inner())
        .await
}

pub async fn delete_classroom(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomId,
) -> ActixResult<HttpResponse> {
    service.delete_classroom(classroom_id.0).await
}

// 配置路由
pub fn configure_classrooms_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classrooms")
            .service(
                web::resource("")
                    .route(web::get().to(list_classrooms))
                    .route(web::post().to(create_classroom)),
            )
            .service(
                web::resource("/{classroom_id}")
                    .route(web::get().to(get_classroom))
                    .route(web::put().to(update_classroom))
                    .route(web::delete().to(delete_classroom)),
            )
            // 班级内学生管理挂在同一 scope 下
            .configure(super::enrollments::configure_classroom_students_routes),
    );
}
