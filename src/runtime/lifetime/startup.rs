use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::{
    ClassroomService, EnrollmentService, LookupService, ReportService, StudentService,
};
use crate::storage::Storage;
use actix_web::web;
use std::sync::Arc;
use tracing::{debug, warn};

/// 启动上下文：存储句柄与按构造注入的各服务
pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub services: AppServices,
}

/// 注册到 actix 的服务实例
#[derive(Clone)]
pub struct AppServices {
    pub students: web::Data<StudentService>,
    pub classrooms: web::Data<ClassroomService>,
    pub enrollments: web::Data<EnrollmentService>,
    pub lookups: web::Data<LookupService>,
    pub reports: web::Data<ReportService>,
}

impl AppServices {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            students: web::Data::new(StudentService::new(storage.clone())),
            classrooms: web::Data::new(ClassroomService::new(storage.clone())),
            enrollments: web::Data::new(EnrollmentService::new(storage.clone())),
            lookups: web::Data::new(LookupService::new(storage.clone())),
            reports: web::Data::new(ReportService::new(storage)),
        }
    }

    /// 将全部服务注册到 App
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.students.clone())
            .app_data(self.classrooms.clone())
            .app_data(self.enrollments.clone())
            .app_data(self.lookups.clone())
            .app_data(self.reports.clone());
    }
}

/// 准备服务器启动的上下文
/// 连接数据库（含迁移）并构造服务
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    // 已安装过时返回 Err，可忽略
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    let services = AppServices::new(storage.clone());

    Ok(StartupContext { storage, services })
}
