//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub student_id: i32,
    pub prefix_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub gender_id: Option<i32>,
    pub birth_date: Date,
    pub grade_level_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::prefix::Entity",
        from = "Column::PrefixId",
        to = "super::prefix::Column::PrefixId",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Prefix,
    #[sea_orm(
        belongs_to = "super::gender::Entity",
        from = "Column::GenderId",
        to = "super::gender::Column::GenderId",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Gender,
    #[sea_orm(
        belongs_to = "super::gradelevel::Entity",
        from = "Column::GradeLevelId",
        to = "super::gradelevel::Column::GradeLevelId",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Gradelevel,
    #[sea_orm(has_many = "super::student_classroom::Entity")]
    StudentClassroom,
}

impl Related<super::prefix::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prefix.def()
    }
}

impl Related<super::gender::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gender.def()
    }
}

impl Related<super::gradelevel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gradelevel.def()
    }
}

impl Related<super::student_classroom::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentClassroom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
