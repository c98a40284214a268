use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::{
    MutationOutcome, PaginationQuery,
    classrooms::{
        entities::Classroom,
        requests::{ClassroomListQuery, CreateClassroomRequest, UpdateClassroomRequest},
        responses::ClassroomListResponse,
    },
    enrollments::responses::{ClassroomStudentListResponse, UnassignedStudentListResponse},
    lookups::entities::{LookupItem, LookupKind},
    reports::entities::MaleStudentReportRow,
    students::{
        entities::StudentRow,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 存储层抽象
///
/// 读操作不开启显式事务；写操作各自持有一个专用连接和一个事务，
/// 失败时回滚并原样返回错误。目标 ID 不存在的更新/删除不视为错误，
/// 以 `rows_affected == 0` 体现。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 分页列出学生（可按年级、学号、全名过滤）
    async fn list_students(&self, query: StudentListQuery) -> Result<StudentListResponse>;
    // 通过ID获取学生详情
    async fn get_student(&self, student_id: i32) -> Result<Option<StudentRow>>;
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<MutationOutcome>;
    // 更新学生信息（仅更新提供的字段）
    async fn update_student(
        &self,
        student_id: i32,
        update: UpdateStudentRequest,
    ) -> Result<MutationOutcome>;
    // 删除学生
    async fn delete_student(&self, student_id: i32) -> Result<MutationOutcome>;

    /// 班级管理方法
    // 分页列出班级
    async fn list_classrooms(&self, query: ClassroomListQuery) -> Result<ClassroomListResponse>;
    // 通过ID获取班级详情
    async fn get_classroom(&self, classroom_id: i32) -> Result<Option<Classroom>>;
    // 创建班级
    async fn create_classroom(&self, classroom: CreateClassroomRequest)
    -> Result<MutationOutcome>;
    // 更新班级信息（仅更新提供的字段）
    async fn update_classroom(
        &self,
        classroom_id: i32,
        update: UpdateClassroomRequest,
    ) -> Result<MutationOutcome>;
    // 删除班级
    async fn delete_classroom(&self, classroom_id: i32) -> Result<MutationOutcome>;

    /// 学生-班级关联方法
    // 列出班级内学生
    async fn list_classroom_students(
        &self,
        classroom_id: i32,
        pagination: PaginationQuery,
    ) -> Result<ClassroomStudentListResponse>;
    // 列出尚未加入任何班级的学生
    async fn list_unassigned_students(
        &self,
        pagination: PaginationQuery,
    ) -> Result<UnassignedStudentListResponse>;
    // 学生加入班级
    async fn link_student(&self, student_id: i32, classroom_id: i32) -> Result<MutationOutcome>;
    // 学生移出班级
    async fn unlink_student(&self, student_id: i32, classroom_id: i32)
    -> Result<MutationOutcome>;

    /// 报表与参照表
    // 10~12 岁男生报表
    async fn male_students_report(&self) -> Result<Vec<MaleStudentReportRow>>;
    // 参照表全部条目
    async fn list_lookup(&self, kind: LookupKind) -> Result<Vec<LookupItem>>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
