//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classroom")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub classroom_id: i32,
    pub class_name: String,
    pub academic_year: i32,
    pub homeroom_teacher: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_classroom::Entity")]
    StudentClassroom,
}

impl Related<super::student_classroom::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentClassroom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_classroom(self) -> crate::models::classrooms::entities::Classroom {
        use crate::models::classrooms::entities::Classroom;

        Classroom {
            classroom_id: self.classroom_id,
            class_name: self.class_name,
            academic_year: self.academic_year,
            homeroom_teacher: self.homeroom_teacher,
        }
    }
}
