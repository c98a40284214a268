use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 参照表：称谓、性别、年级
        manager
            .create_table(
                Table::create()
                    .table(Prefix::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prefix::PrefixId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prefix::PrefixName).string_len(10).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Gender::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gender::GenderId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Gender::GenderName).string_len(10).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Gradelevel::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gradelevel::GradeLevelId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Gradelevel::LevelName).string_len(10).not_null())
                    .to_owned(),
            )
            .await?;

        // 学生表，参照列可空，删除/更新被引用行时拒绝
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::StudentId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Student::PrefixId).integer().null())
                    .col(ColumnDef::new(Student::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(Student::LastName).string_len(50).not_null())
                    .col(ColumnDef::new(Student::GenderId).integer().null())
                    .col(ColumnDef::new(Student::BirthDate).date().not_null())
                    .col(ColumnDef::new(Student::GradeLevelId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_prefix")
                            .from(Student::Table, Student::PrefixId)
                            .to(Prefix::Table, Prefix::PrefixId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_gender")
                            .from(Student::Table, Student::GenderId)
                            .to(Gender::Table, Gender::GenderId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_gradelevel")
                            .from(Student::Table, Student::GradeLevelId)
                            .to(Gradelevel::Table, Gradelevel::GradeLevelId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 班级表
        manager
            .create_table(
                Table::create()
                    .table(Classroom::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classroom::ClassroomId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classroom::ClassName).string_len(50).not_null())
                    .col(ColumnDef::new(Classroom::AcademicYear).integer().not_null())
                    .col(
                        ColumnDef::new(Classroom::HomeroomTeacher)
                            .string_len(100)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 学生-班级关联表
        manager
            .create_table(
                Table::create()
                    .table(StudentClassroom::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentClassroom::StudentClassroomId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentClassroom::StudentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentClassroom::ClassroomId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_classroom_student")
                            .from(StudentClassroom::Table, StudentClassroom::StudentId)
                            .to(Student::Table, Student::StudentId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_classroom_classroom")
                            .from(StudentClassroom::Table, StudentClassroom::ClassroomId)
                            .to(Classroom::Table, Classroom::ClassroomId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_gradelevel")
                    .table(Student::Table)
                    .col(Student::GradeLevelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_classroom_classroom")
                    .table(StudentClassroom::Table)
                    .col(StudentClassroom::ClassroomId)
                    .to_owned(),
            )
            .await?;

        // 同一学生在同一班级只能有一条关联
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_student_classroom_pair")
                    .table(StudentClassroom::Table)
                    .col(StudentClassroom::StudentId)
                    .col(StudentClassroom::ClassroomId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(StudentClassroom::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classroom::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Gradelevel::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Gender::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Prefix::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Prefix {
    #[sea_orm(iden = "prefix")]
    Table,
    PrefixId,
    PrefixName,
}

#[derive(DeriveIden)]
pub(crate) enum Gender {
    #[sea_orm(iden = "gender")]
    Table,
    GenderId,
    GenderName,
}

#[derive(DeriveIden)]
pub(crate) enum Gradelevel {
    #[sea_orm(iden = "gradelevel")]
    Table,
    GradeLevelId,
    LevelName,
}

#[derive(DeriveIden)]
enum Student {
    #[sea_orm(iden = "student")]
    Table,
    StudentId,
    PrefixId,
    FirstName,
    LastName,
    GenderId,
    BirthDate,
    GradeLevelId,
}

#[derive(DeriveIden)]
enum Classroom {
    #[sea_orm(iden = "classroom")]
    Table,
    ClassroomId,
    ClassName,
    AcademicYear,
    HomeroomTeacher,
}

#[derive(DeriveIden)]
enum StudentClassroom {
    #[sea_orm(iden = "student_classroom")]
    Table,
    StudentClassroomId,
    StudentId,
    ClassroomId,
}
