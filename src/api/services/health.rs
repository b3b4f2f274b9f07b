//! 健康检查接口

use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use tracing::trace;

use crate::services::LinkService;

use super::error_code::ErrorCode;
use super::types::{ApiResponse, HealthData};

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// Health Service
///
/// 整个状态都在进程内存里，没有外部依赖可探测，
/// 所以只报告存活、运行时长和当前链接数。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        service: web::Data<Arc<LinkService>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        trace!("Received health check request");

        let now = chrono::Utc::now();
        let uptime_secs = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;

        HttpResponse::Ok()
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(ApiResponse {
                code: ErrorCode::Success as i32,
                data: HealthData {
                    status: "ok".to_string(),
                    uptime_secs,
                    links: service.link_count(),
                },
            })
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
}
