pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{
    CreateStudentRequest, StudentQueryParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 获取学生列表
    pub async fn list_students(&self, query: StudentQueryParams) -> ActixResult<HttpResponse> {
        list::list_students(self, query).await
    }

    // 根据学生 ID 获取学生详情
    pub async fn get_student(&self, student_id: i32) -> ActixResult<HttpResponse> {
        get::get_student(self, student_id).await
    }

    pub async fn create_student(&self, student: CreateStudentRequest) -> ActixResult<HttpResponse> {
        create::create_student(self, student).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        student_id: i32,
        update: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, student_id, update).await
    }

    // 根据学生 ID 删除学生
    pub async fn delete_student(&self, student_id: i32) -> ActixResult<HttpResponse> {
        delete::delete_student(self, student_id).await
    }
}
