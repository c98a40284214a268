//! 性别参照表（只读）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gender")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub gender_id: i32,
    pub gender_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_lookup(self) -> crate::models::lookups::entities::LookupItem {
        crate::models::lookups::entities::LookupItem {
            id: self.gender_id,
            name: self.gender_name,
        }
    }
}
