pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classrooms::requests::{
    ClassroomQueryParams, CreateClassroomRequest, UpdateClassroomRequest,
};
use crate::storage::Storage;

pub struct ClassroomService {
    storage: Arc<dyn Storage>,
}

impl ClassroomService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 获取班级列表
    pub async fn list_classrooms(&self, query: ClassroomQueryParams) -> ActixResult<HttpResponse> {
        list::list_classrooms(self, query).await
    }

    // 根据班级 ID 获取班级信息
    pub async fn get_classroom(&self, classroom_id: i32) -> ActixResult<HttpResponse> {
        get::get_classroom(self, classroom_id).await
    }

    pub async fn create_classroom(
        &self,
        classroom: CreateClassroomRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_classroom(self, classroom).await
    }

    // 更新班级信息
    pub async fn update_classroom(
        &self,
        classroom_id: i32,
        update: UpdateClassroomRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_classroom(self, classroom_id, update).await
    }

    // 根据班级 ID 删除班级
    pub async fn delete_classroom(&self, classroom_id: i32) -> ActixResult<HttpResponse> {
        delete::delete_classroom(self, classroom_id).await
    }
}
