//! 学生存储操作

use super::projection::{StudentRecord, full_name_sql, with_student_columns};
use super::transaction::TransactionScope;
use super::{SeaOrmStorage, db_failure};
use crate::entity::gradelevel;
use crate::entity::student::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, RosterError};
use crate::models::{
    MutationOutcome, PageWindow, PaginatedResponse,
    students::{
        entities::StudentRow,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::{contains_pattern, non_blank};
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};

impl SeaOrmStorage {
    /// 学生投影的基础查询
    pub(crate) fn student_select(&self) -> Select<Students> {
        let backend = self.db.get_database_backend();
        with_student_columns(Students::find().select_only(), backend)
    }

    /// 分页列出学生
    pub async fn list_students_impl(&self, query: StudentListQuery) -> Result<StudentListResponse> {
        let window = PageWindow::new(query.page, query.limit);
        let filter = query.filter;
        let mut select = self.student_select();

        // 年级名称
        if let Some(grade_level) = non_blank(filter.grade_level.as_deref()) {
            select =
                select.filter(gradelevel::Column::LevelName.like(contains_pattern(grade_level)));
        }

        // 学号
        if let Some(student_id) = filter.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 全名
        if let Some(full_name) = non_blank(filter.full_name.as_deref()) {
            let backend = self.db.get_database_backend();
            select = select
                .filter(Expr::cust(full_name_sql(backend)).like(contains_pattern(full_name)));
        }

        let paginator = select
            .order_by_asc(Column::StudentId)
            .into_model::<StudentRecord>()
            .paginate(&self.db, window.size);

        let total = paginator
            .num_items()
            .await
            .map_err(db_failure("查询学生总数失败"))?;

        let students = paginator
            .fetch_page(window.index)
            .await
            .map_err(db_failure("查询学生列表失败"))?;

        Ok(PaginatedResponse {
            items: students
                .into_iter()
                .map(StudentRecord::into_student_row)
                .collect(),
            total: total as i64,
        })
    }

    /// 通过 ID 获取学生
    pub async fn get_student_impl(&self, student_id: i32) -> Result<Option<StudentRow>> {
        let result = self
            .student_select()
            .filter(Column::StudentId.eq(student_id))
            .into_model::<StudentRecord>()
            .one(&self.db)
            .await
            .map_err(db_failure("查询学生失败"))?;

        Ok(result.map(StudentRecord::into_student_row))
    }

    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<MutationOutcome> {
        let model = ActiveModel {
            prefix_id: Set(req.prefix_id),
            first_name: Set(req.first_name.trim().to_string()),
            last_name: Set(req.last_name.trim().to_string()),
            gender_id: Set(req.gender_id),
            birth_date: Set(req.birth_date),
            grade_level_id: Set(req.grade_level_id),
            ..Default::default()
        };

        let scope = TransactionScope::begin(&self.db, "创建学生").await?;
        let outcome = model.insert(scope.connection()).await;
        let created = scope.settle(outcome).await?;

        Ok(MutationOutcome::new(
            created.student_id,
            1,
            format!("Student with ID {} created successfully", created.student_id),
        ))
    }

    /// 更新学生信息
    ///
    /// 只写入提供的字段；目标不存在时 `rows_affected` 为 0。
    pub async fn update_student_impl(
        &self,
        student_id: i32,
        update: UpdateStudentRequest,
    ) -> Result<MutationOutcome> {
        let mut model = ActiveModel {
            ..Default::default()
        };

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name.trim().to_string());
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name.trim().to_string());
        }
        if let Some(birth_date) = update.birth_date {
            model.birth_date = Set(birth_date);
        }
        if let Some(prefix_id) = update.prefix_id {
            model.prefix_id = Set(prefix_id);
        }
        if let Some(gender_id) = update.gender_id {
            model.gender_id = Set(gender_id);
        }
        if let Some(grade_level_id) = update.grade_level_id {
            model.grade_level_id = Set(grade_level_id);
        }

        if !model.is_changed() {
            return Err(RosterError::validation("No fields to update"));
        }

        let scope = TransactionScope::begin(&self.db, "更新学生").await?;
        let outcome = Students::update_many()
            .set(model)
            .filter(Column::StudentId.eq(student_id))
            .exec(scope.connection())
            .await;
        let result = scope.settle(outcome).await?;

        Ok(MutationOutcome::new(
            student_id,
            result.rows_affected,
            format!("Student with ID {student_id} updated successfully"),
        ))
    }

    /// 删除学生
    ///
    /// 仍有班级关联时受外键 RESTRICT 约束而失败。
    pub async fn delete_student_impl(&self, student_id: i32) -> Result<MutationOutcome> {
        let scope = TransactionScope::begin(&self.db, "删除学生").await?;
        let outcome = Students::delete_many()
            .filter(Column::StudentId.eq(student_id))
            .exec(scope.connection())
            .await;
        let result = scope.settle(outcome).await?;

        Ok(MutationOutcome::new(
            student_id,
            result.rows_affected,
            format!("Student with ID {student_id} deleted successfully"),
        ))
    }
}
