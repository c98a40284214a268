//! 参照表存储操作

use super::{SeaOrmStorage, db_failure};
use crate::entity::prelude::{Genders, Gradelevels, Prefixes};
use crate::entity::{gender, gradelevel, prefix};
use crate::errors::Result;
use crate::models::lookups::entities::{LookupItem, LookupKind};
use sea_orm::{EntityTrait, QueryOrder};

impl SeaOrmStorage {
    /// 按 ID 升序列出参照表全部条目
    pub async fn list_lookup_impl(&self, kind: LookupKind) -> Result<Vec<LookupItem>> {
        let items: Vec<LookupItem> = match kind {
            LookupKind::Prefix => Prefixes::find()
                .order_by_asc(prefix::Column::PrefixId)
                .all(&self.db)
                .await
                .map_err(db_failure("查询称谓失败"))?
                .into_iter()
                .map(|m| m.into_lookup())
                .collect(),
            LookupKind::Gender => Genders::find()
                .order_by_asc(gender::Column::GenderId)
                .all(&self.db)
                .await
                .map_err(db_failure("查询性别失败"))?
                .into_iter()
                .map(|m| m.into_lookup())
                .collect(),
            LookupKind::GradeLevel => Gradelevels::find()
                .order_by_asc(gradelevel::Column::GradeLevelId)
                .all(&self.db)
                .await
                .map_err(db_failure("查询年级失败"))?
                .into_iter()
                .map(|m| m.into_lookup())
                .collect(),
        };

        Ok(items)
    }
}
