use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_roster_tables::{Gender, Gradelevel, Prefix};

#[derive(DeriveMigrationName)]
pub struct Migration;

const PREFIXES: [&str; 5] = ["Master", "Miss", "Mr.", "Mrs.", "Ms."];
// 性别 ID 1 固定为男性，统计报表依赖此约定
const GENDERS: [&str; 2] = ["Male", "Female"];
const GRADE_LEVELS: [&str; 6] = [
    "Grade 1", "Grade 2", "Grade 3", "Grade 4", "Grade 5", "Grade 6",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in PREFIXES {
            let insert = Query::insert()
                .into_table(Prefix::Table)
                .columns([Prefix::PrefixName])
                .values_panic([name.into()])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        for name in GENDERS {
            let insert = Query::insert()
                .into_table(Gender::Table)
                .columns([Gender::GenderName])
                .values_panic([name.into()])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        for name in GRADE_LEVELS {
            let insert = Query::insert()
                .into_table(Gradelevel::Table)
                .columns([Gradelevel::LevelName])
                .values_panic([name.into()])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Gradelevel::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Gender::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Prefix::Table).to_owned())
            .await?;
        Ok(())
    }
}
