use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::services::ReportService;

pub async fn male_students(service: web::Data<ReportService>) -> ActixResult<HttpResponse> {
    service.male_students().await
}

pub fn configure_reports_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .service(web::resource("/male-students").route(web::get().to(male_students))),
    );
}
