//! 学生-班级关联存储操作

use super::projection::{ClassroomStudentRecord, StudentRecord, with_student_columns};
use super::transaction::TransactionScope;
use super::{SeaOrmStorage, db_failure};
use crate::entity::student;
use crate::entity::student_classroom::{
    self, ActiveModel, Column, Entity as StudentClassrooms,
};
use crate::errors::Result;
use crate::models::{
    MutationOutcome, PageWindow, PaginatedResponse, PaginationQuery,
    enrollments::responses::{ClassroomStudentListResponse, UnassignedStudentListResponse},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// 列出班级内学生
    pub async fn list_classroom_students_impl(
        &self,
        classroom_id: i32,
        pagination: PaginationQuery,
    ) -> Result<ClassroomStudentListResponse> {
        let window = PageWindow::from(&pagination);
        let backend = self.db.get_database_backend();

        // 关联表内连接学生，再左连接参照表
        let select = StudentClassrooms::find()
            .select_only()
            .column(Column::StudentClassroomId)
            .column(Column::ClassroomId)
            .join(JoinType::InnerJoin, student_classroom::Relation::Student.def());

        let paginator = with_student_columns(select, backend)
            .filter(Column::ClassroomId.eq(classroom_id))
            .order_by_asc(student::Column::StudentId)
            .into_model::<ClassroomStudentRecord>()
            .paginate(&self.db, window.size);

        let total = paginator
            .num_items()
            .await
            .map_err(db_failure("查询班级学生总数失败"))?;

        let rows = paginator
            .fetch_page(window.index)
            .await
            .map_err(db_failure("查询班级学生列表失败"))?;

        Ok(PaginatedResponse {
            items: rows
                .into_iter()
                .map(ClassroomStudentRecord::into_classroom_student)
                .collect(),
            total: total as i64,
        })
    }

    /// 列出没有任何班级关联的学生
    pub async fn list_unassigned_students_impl(
        &self,
        pagination: PaginationQuery,
    ) -> Result<UnassignedStudentListResponse> {
        let window = PageWindow::from(&pagination);

        let paginator = self
            .student_select()
            .join(JoinType::LeftJoin, student::Relation::StudentClassroom.def())
            .filter(Column::StudentClassroomId.is_null())
            .order_by_asc(student::Column::StudentId)
            .into_model::<StudentRecord>()
            .paginate(&self.db, window.size);

        let total = paginator
            .num_items()
            .await
            .map_err(db_failure("查询未分班学生总数失败"))?;

        let rows = paginator
            .fetch_page(window.index)
            .await
            .map_err(db_failure("查询未分班学生列表失败"))?;

        Ok(PaginatedResponse {
            items: rows
                .into_iter()
                .map(StudentRecord::into_student_row)
                .collect(),
            total: total as i64,
        })
    }

    /// 学生加入班级
    ///
    /// 学生或班级不存在、或该组合已存在时由约束拒绝。
    pub async fn link_student_impl(
        &self,
        student_id: i32,
        classroom_id: i32,
    ) -> Result<MutationOutcome> {
        let model = ActiveModel {
            student_id: Set(student_id),
            classroom_id: Set(classroom_id),
            ..Default::default()
        };

        let scope = TransactionScope::begin(&self.db, "学生加入班级").await?;
        let outcome = model.insert(scope.connection()).await;
        let created = scope.settle(outcome).await?;

        Ok(MutationOutcome::new(
            created.student_classroom_id,
            1,
            format!(
                "Student with ID {student_id} added to classroom with ID {classroom_id} successfully"
            ),
        ))
    }

    /// 学生移出班级
    pub async fn unlink_student_impl(
        &self,
        student_id: i32,
        classroom_id: i32,
    ) -> Result<MutationOutcome> {
        let scope = TransactionScope::begin(&self.db, "学生移出班级").await?;
        let outcome = StudentClassrooms::delete_many()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::ClassroomId.eq(classroom_id))
            .exec(scope.connection())
            .await;
        let result = scope.settle(outcome).await?;

        Ok(MutationOutcome::new(
            student_id,
            result.rows_affected,
            format!(
                "Student with ID {student_id} removed from classroom with ID {classroom_id} successfully"
            ),
        ))
    }
}
