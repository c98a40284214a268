//! 班级存储操作

use super::transaction::TransactionScope;
use super::{SeaOrmStorage, db_failure};
use crate::entity::classroom::{ActiveModel, Column, Entity as Classrooms};
use crate::errors::{Result, RosterError};
use crate::models::{
    MutationOutcome, PageWindow, PaginatedResponse,
    classrooms::{
        entities::Classroom,
        requests::{ClassroomListQuery, CreateClassroomRequest, UpdateClassroomRequest},
        responses::ClassroomListResponse,
    },
};
use crate::utils::{contains_pattern, non_blank};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 分页列出班级
    pub async fn list_classrooms_impl(
        &self,
        query: ClassroomListQuery,
    ) -> Result<ClassroomListResponse> {
        let window = PageWindow::new(query.page, query.limit);
        let filter = query.filter;
        let mut select = Classrooms::find();

        if let Some(classroom_id) = filter.classroom_id {
            select = select.filter(Column::ClassroomId.eq(classroom_id));
        }

        if let Some(class_name) = non_blank(filter.class_name.as_deref()) {
            select = select.filter(Column::ClassName.like(contains_pattern(class_name)));
        }

        if let Some(teacher) = non_blank(filter.homeroom_teacher.as_deref()) {
            select = select.filter(Column::HomeroomTeacher.like(contains_pattern(teacher)));
        }

        let paginator = select
            .order_by_asc(Column::ClassroomId)
            .paginate(&self.db, window.size);

        let total = paginator
            .num_items()
            .await
            .map_err(db_failure("查询班级总数失败"))?;

        let classrooms = paginator
            .fetch_page(window.index)
            .await
            .map_err(db_failure("查询班级列表失败"))?;

        Ok(PaginatedResponse {
            items: classrooms.into_iter().map(|m| m.into_classroom()).collect(),
            total: total as i64,
        })
    }

    /// 通过 ID 获取班级
    pub async fn get_classroom_impl(&self, classroom_id: i32) -> Result<Option<Classroom>> {
        let result = Classrooms::find_by_id(classroom_id)
            .one(&self.db)
            .await
            .map_err(db_failure("查询班级失败"))?;

        Ok(result.map(|m| m.into_classroom()))
    }

    /// 创建班级
    pub async fn create_classroom_impl(
        &self,
        req: CreateClassroomRequest,
    ) -> Result<MutationOutcome> {
        let model = ActiveModel {
            class_name: Set(req.class_name.trim().to_string()),
            academic_year: Set(req.academic_year),
            homeroom_teacher: Set(req.homeroom_teacher.trim().to_string()),
            ..Default::default()
        };

        let scope = TransactionScope::begin(&self.db, "创建班级").await?;
        let outcome = model.insert(scope.connection()).await;
        let created = scope.settle(outcome).await?;

        Ok(MutationOutcome::new(
            created.classroom_id,
            1,
            format!(
                "Classroom with ID {} created successfully",
                created.classroom_id
            ),
        ))
    }

    /// 更新班级信息
    pub async fn update_classroom_impl(
        &self,
        classroom_id: i32,
        update: UpdateClassroomRequest,
    ) -> Result<MutationOutcome> {
        let mut model = ActiveModel {
            ..Default::default()
        };

        if let Some(class_name) = update.class_name {
            model.class_name = Set(class_name.trim().to_string());
        }
        if let Some(academic_year) = update.academic_year {
            model.academic_year = Set(academic_year);
        }
        if let Some(teacher) = update.homeroom_teacher {
            model.homeroom_teacher = Set(teacher.trim().to_string());
        }

        if !model.is_changed() {
            return Err(RosterError::validation("No fields to update"));
        }

        let scope = TransactionScope::begin(&self.db, "更新班级").await?;
        let outcome = Classrooms::update_many()
            .set(model)
            .filter(Column::ClassroomId.eq(classroom_id))
            .exec(scope.connection())
            .await;
        let result = scope.settle(outcome).await?;

        Ok(MutationOutcome::new(
            classroom_id,
            result.rows_affected,
            format!("Classroom with ID {classroom_id} updated successfully"),
        ))
    }

    /// 删除班级
    ///
    /// 仍有学生关联时受外键 RESTRICT 约束而失败。
    pub async fn delete_classroom_impl(&self, classroom_id: i32) -> Result<MutationOutcome> {
        let scope = TransactionScope::begin(&self.db, "删除班级").await?;
        let outcome = Classrooms::delete_many()
            .filter(Column::ClassroomId.eq(classroom_id))
            .exec(scope.connection())
            .await;
        let result = scope.settle(outcome).await?;

        Ok(MutationOutcome::new(
            classroom_id,
            result.rows_affected,
            format!("Classroom with ID {classroom_id} deleted successfully"),
        ))
    }
}
