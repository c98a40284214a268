//! 学生行投影
//!
//! 学生列表、班级内学生、未分班学生共用同一组列和参照表左连接。

use sea_orm::sea_query::Expr;
use sea_orm::{
    DbBackend, EntityTrait, FromQueryResult, JoinType, QuerySelect, RelationTrait, Select,
};

use crate::entity::student;
use crate::models::{enrollments::responses::ClassroomStudent, students::entities::StudentRow};

/// 全名表达式：称谓为空时只剩 "名 姓"
pub(crate) fn full_name_sql(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::MySql => {
            "TRIM(CONCAT(COALESCE(prefix.prefix_name, ''), ' ', student.first_name, ' ', student.last_name))"
        }
        _ => {
            "TRIM(COALESCE(prefix.prefix_name, '') || ' ' || student.first_name || ' ' || student.last_name)"
        }
    }
}

/// 追加学生列、参照标签列和全名列
///
/// 调用方需保证 `student` 表已在 FROM 或先前的 JOIN 中出现。
pub(crate) fn with_student_columns<E: EntityTrait>(
    select: Select<E>,
    backend: DbBackend,
) -> Select<E> {
    select
        .column(student::Column::StudentId)
        .column(student::Column::FirstName)
        .column(student::Column::LastName)
        .column(student::Column::BirthDate)
        .column(student::Column::PrefixId)
        .column(student::Column::GenderId)
        .column(student::Column::GradeLevelId)
        .column_as(crate::entity::prefix::Column::PrefixName, "prefix_name")
        .column_as(crate::entity::gender::Column::GenderName, "gender_name")
        .column_as(crate::entity::gradelevel::Column::LevelName, "level_name")
        .column_as(Expr::cust(full_name_sql(backend)), "full_name")
        .join(JoinType::LeftJoin, student::Relation::Prefix.def())
        .join(JoinType::LeftJoin, student::Relation::Gender.def())
        .join(JoinType::LeftJoin, student::Relation::Gradelevel.def())
}

#[derive(Debug, FromQueryResult)]
pub(crate) struct StudentRecord {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: chrono::NaiveDate,
    pub prefix_id: Option<i32>,
    pub gender_id: Option<i32>,
    pub grade_level_id: Option<i32>,
    pub prefix_name: Option<String>,
    pub gender_name: Option<String>,
    pub level_name: Option<String>,
    pub full_name: String,
}

impl StudentRecord {
    pub fn into_student_row(self) -> StudentRow {
        StudentRow {
            student_id: self.student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            prefix_id: self.prefix_id,
            gender_id: self.gender_id,
            grade_level_id: self.grade_level_id,
            prefix_name: self.prefix_name,
            gender_name: self.gender_name,
            level_name: self.level_name,
            full_name: self.full_name,
        }
    }
}

/// 班级内学生：关联表键 + 学生投影
#[derive(Debug, FromQueryResult)]
pub(crate) struct ClassroomStudentRecord {
    pub student_classroom_id: i32,
    pub classroom_id: i32,
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: chrono::NaiveDate,
    pub prefix_id: Option<i32>,
    pub gender_id: Option<i32>,
    pub grade_level_id: Option<i32>,
    pub prefix_name: Option<String>,
    pub gender_name: Option<String>,
    pub level_name: Option<String>,
    pub full_name: String,
}

impl ClassroomStudentRecord {
    pub fn into_classroom_student(self) -> ClassroomStudent {
        ClassroomStudent {
            student_classroom_id: self.student_classroom_id,
            classroom_id: self.classroom_id,
            student: StudentRow {
                student_id: self.student_id,
                first_name: self.first_name,
                last_name: self.last_name,
                birth_date: self.birth_date,
                prefix_id: self.prefix_id,
                gender_id: self.gender_id,
                grade_level_id: self.grade_level_id,
                prefix_name: self.prefix_name,
                gender_name: self.gender_name,
                level_name: self.level_name,
                full_name: self.full_name,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_sql_per_backend() {
        assert!(full_name_sql(DbBackend::MySql).starts_with("TRIM(CONCAT("));
        assert!(full_name_sql(DbBackend::Sqlite).contains("||"));
        assert!(full_name_sql(DbBackend::Postgres).contains("COALESCE(prefix.prefix_name, '')"));
    }
}
