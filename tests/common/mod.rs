//! 集成测试公共工具：每个测试使用独立的临时 SQLite 数据库文件

#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;

use roster_service::config::DatabaseConfig;
use roster_service::models::classrooms::requests::CreateClassroomRequest;
use roster_service::models::students::requests::CreateStudentRequest;
use roster_service::storage::Storage;
use roster_service::storage::sea_orm_storage::SeaOrmStorage;

// 迁移写入的参照数据
pub const PREFIX_MASTER: i32 = 1;
pub const PREFIX_MISS: i32 = 2;
pub const GENDER_MALE: i32 = 1;
pub const GENDER_FEMALE: i32 = 2;

pub struct TestDb {
    pub storage: SeaOrmStorage,
    // 持有临时目录，测试结束时删除
    _dir: TempDir,
}

pub async fn setup() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("roster.db");
    let config = DatabaseConfig {
        url: path.to_string_lossy().into_owned(),
        pool_size: 4,
        timeout: 5,
    };

    let storage = SeaOrmStorage::connect(&config)
        .await
        .expect("connect test database");

    TestDb { storage, _dir: dir }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn student_request(
    first_name: &str,
    last_name: &str,
    birth_date: NaiveDate,
    prefix_id: Option<i32>,
    gender_id: Option<i32>,
    grade_level_id: Option<i32>,
) -> CreateStudentRequest {
    CreateStudentRequest {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        birth_date,
        prefix_id,
        gender_id,
        grade_level_id,
    }
}

pub async fn create_student(storage: &SeaOrmStorage, req: CreateStudentRequest) -> i32 {
    storage
        .create_student(req)
        .await
        .expect("create student")
        .id
}

pub async fn create_classroom(
    storage: &SeaOrmStorage,
    class_name: &str,
    academic_year: i32,
    homeroom_teacher: &str,
) -> i32 {
    storage
        .create_classroom(CreateClassroomRequest {
            class_name: class_name.to_string(),
            academic_year,
            homeroom_teacher: homeroom_teacher.to_string(),
        })
        .await
        .expect("create classroom")
        .id
}
