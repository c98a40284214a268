//! 学生-班级关联实体（多对多桥接表）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_classroom")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub student_classroom_id: i32,
    pub student_id: i32,
    pub classroom_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::StudentId",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::classroom::Entity",
        from = "Column::ClassroomId",
        to = "super::classroom::Column::ClassroomId",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Classroom,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::classroom::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classroom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
