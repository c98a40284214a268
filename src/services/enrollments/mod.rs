pub mod link;
pub mod list;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{PaginationQuery, enrollments::requests::LinkStudentRequest};
use crate::storage::Storage;

/// 学生与班级的关联管理
pub struct EnrollmentService {
    storage: Arc<dyn Storage>,
}

impl EnrollmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 班级内学生列表
    pub async fn list_classroom_students(
        &self,
        classroom_id: i32,
        pagination: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_classroom_students(self, classroom_id, pagination).await
    }

    // 未分班学生列表
    pub async fn list_unassigned_students(
        &self,
        pagination: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_unassigned_students(self, pagination).await
    }

    pub async fn link_student(
        &self,
        classroom_id: i32,
        req: LinkStudentRequest,
    ) -> ActixResult<HttpResponse> {
        link::link_student(self, req.student_id, classroom_id).await
    }

    pub async fn unlink_student(
        &self,
        student_id: i32,
        classroom_id: i32,
    ) -> ActixResult<HttpResponse> {
        link::unlink_student(self, student_id, classroom_id).await
    }
}
