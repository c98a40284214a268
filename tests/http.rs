mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use common::*;
use roster_service::routes;
use roster_service::runtime::lifetime::startup::AppServices;
use roster_service::storage::Storage;
use roster_service::utils::{json_error_handler, query_error_handler};

macro_rules! roster_app {
    ($storage:expr) => {{
        let services = AppServices::new($storage);
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .configure(move |cfg| services.register(cfg))
                .configure(routes::configure_students_routes)
                .configure(routes::configure_classrooms_routes)
                .configure(routes::configure_enrollments_routes)
                .configure(routes::configure_reports_routes)
                .configure(routes::configure_lookups_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn student_lifecycle_over_http() {
    let db = setup().await;
    let storage: Arc<dyn Storage> = Arc::new(db.storage.clone());
    let app = roster_app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "birthDate": "2014-05-01",
            "prefixId": 1,
            "genderId": 2,
            "gradeLevelId": 3
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    let id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/students/{id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["fullName"], "Master Ann Lee");
    assert_eq!(body["data"]["birthDate"], "2014-05-01");

    let req = test::TestRequest::get()
        .uri("/api/v1/students?page=1&limit=5&fullname=Ann")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 1);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/students/{id}"))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/students/{id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["rowsAffected"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/students/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn invalid_input_is_rejected_with_400() {
    let db = setup().await;
    let storage: Arc<dyn Storage> = Arc::new(db.storage.clone());
    let app = roster_app!(storage);

    let req = test::TestRequest::get()
        .uri("/api/v1/students/abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/v1/classrooms/0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "birthDate": "01/05/2014"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(json!({
            "firstName": "  ",
            "lastName": "Lee",
            "birthDate": "2014-05-01"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/v1/students?page=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn enrollment_routes() {
    let db = setup().await;
    let classroom = create_classroom(&db.storage, "P.5/2", 2024, "Malee Srisuk").await;
    let student = create_student(
        &db.storage,
        student_request("Ann", "Lee", date(2014, 5, 1), None, None, None),
    )
    .await;
    let storage: Arc<dyn Storage> = Arc::new(db.storage.clone());
    let app = roster_app!(storage);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/classrooms/{classroom}/students"))
        .set_json(json!({ "studentId": student }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // 重复加入被唯一约束拒绝
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/classrooms/{classroom}/students"))
        .set_json(json!({ "studentId": student }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/classrooms/{classroom}/students"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["studentId"], student);

    let req = test::TestRequest::get()
        .uri("/api/v1/enrollments/unassigned")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 0);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/classrooms/{classroom}/students/{student}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["rowsAffected"], 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/enrollments/unassigned")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 1);
}

#[actix_web::test]
async fn lookup_and_report_routes() {
    let db = setup().await;
    let storage: Arc<dyn Storage> = Arc::new(db.storage.clone());
    let app = roster_app!(storage);

    let req = test::TestRequest::get()
        .uri("/api/v1/lookups/grade-levels")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 6);

    let req = test::TestRequest::get()
        .uri("/api/v1/lookups/colours")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/v1/reports/male-students")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 0);
    assert!(body["data"].as_array().unwrap().is_empty());
}
