//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classrooms;
mod enrollments;
mod lookups;
mod projection;
mod reports;
mod students;
mod transaction;

use crate::config::DatabaseConfig;
use crate::errors::{Result, RosterError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::{error, info};

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按配置建立连接池并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| RosterError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        // 外键约束（RESTRICT）依赖 foreign_keys pragma
        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| RosterError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size.max(1))
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| RosterError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size.max(1))
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| RosterError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(RosterError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}。支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 记录存储层错误并转换为 RosterError
///
/// 失败在发现处记录一次，随后原样向上返回。
pub(crate) fn db_failure(context: &'static str) -> impl FnOnce(DbErr) -> RosterError {
    move |e| {
        error!("{context}: {e}");
        RosterError::database_operation(format!("{context}: {e}"))
    }
}

// Storage trait 实现
use crate::models::{
    MutationOutcome, PaginationQuery,
    classrooms::{
        entities::Classroom,
        requests::{ClassroomListQuery, CreateClassroomRequest, UpdateClassroomRequest},
        responses::ClassroomListResponse,
    },
    enrollments::responses::{ClassroomStudentListResponse, UnassignedStudentListResponse},
    lookups::entities::{LookupItem, LookupKind},
    reports::entities::MaleStudentReportRow,
    students::{
        entities::StudentRow,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn list_students(&self, query: StudentListQuery) -> Result<StudentListResponse> {
        self.list_students_impl(query).await
    }

    async fn get_student(&self, student_id: i32) -> Result<Option<StudentRow>> {
        self.get_student_impl(student_id).await
    }

    async fn create_student(&self, student: CreateStudentRequest) -> Result<MutationOutcome> {
        self.create_student_impl(student).await
    }

    async fn update_student(
        &self,
        student_id: i32,
        update: UpdateStudentRequest,
    ) -> Result<MutationOutcome> {
        self.update_student_impl(student_id, update).await
    }

    async fn delete_student(&self, student_id: i32) -> Result<MutationOutcome> {
        self.delete_student_impl(student_id).await
    }

    // 班级模块
    async fn list_classrooms(&self, query: ClassroomListQuery) -> Result<ClassroomListResponse> {
        self.list_classrooms_impl(query).await
    }

    async fn get_classroom(&self, classroom_id: i32) -> Result<Option<Classroom>> {
        self.get_classroom_impl(classroom_id).await
    }

    async fn create_classroom(
        &self,
        classroom: CreateClassroomRequest,
    ) -> Result<MutationOutcome> {
        self.create_classroom_impl(classroom).await
    }

    async fn update_classroom(
        &self,
        classroom_id: i32,
        update: UpdateClassroomRequest,
    ) -> Result<MutationOutcome> {
        self.update_classroom_impl(classroom_id, update).await
    }

    async fn delete_classroom(&self, classroom_id: i32) -> Result<MutationOutcome> {
        self.delete_classroom_impl(classroom_id).await
    }

    // 关联模块
    async fn list_classroom_students(
        &self,
        classroom_id: i32,
        pagination: PaginationQuery,
    ) -> Result<ClassroomStudentListResponse> {
        self.list_classroom_students_impl(classroom_id, pagination)
            .await
    }

    async fn list_unassigned_students(
        &self,
        pagination: PaginationQuery,
    ) -> Result<UnassignedStudentListResponse> {
        self.list_unassigned_students_impl(pagination).await
    }

    async fn link_student(&self, student_id: i32, classroom_id: i32) -> Result<MutationOutcome> {
        self.link_student_impl(student_id, classroom_id).await
    }

    async fn unlink_student(
        &self,
        student_id: i32,
        classroom_id: i32,
    ) -> Result<MutationOutcome> {
        self.unlink_student_impl(student_id, classroom_id).await
    }

    // 报表与参照表
    async fn male_students_report(&self) -> Result<Vec<MaleStudentReportRow>> {
        self.male_students_report_impl().await
    }

    async fn list_lookup(&self, kind: LookupKind) -> Result<Vec<LookupItem>> {
        self.list_lookup_impl(kind).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("roster.db").unwrap(),
            "sqlite://roster.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("mysql://root@localhost/school").unwrap(),
            "mysql://root@localhost/school"
        );
        assert!(SeaOrmStorage::build_database_url("school").is_err());
    }
}
