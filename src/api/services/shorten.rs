//! 创建短链接的公开接口
//!
//! `POST /` 接收 `url`（必填）和 `id`（可选）两个参数，表单和查询串
//! 都接受，表单字段优先。成功时返回 201，`Location` 指向新的短链接。

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, guard, web};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, trace, warn};

use crate::services::{CreateLinkError, CreateLinkRequest, LinkService};

use super::error_code::ErrorCode;
use super::types::{ApiResponse, ErrorData, LinkData};

/// Creation parameters, readable from the query string or an urlencoded
/// form body. Both are optional at this level: presence is checked by the
/// service after the request has been counted against the rate limit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShortenParams {
    pub url: Option<String>,
    pub id: Option<String>,
}

pub struct ShortenService;

impl ShortenService {
    pub async fn handle_shorten(
        query: Option<web::Query<ShortenParams>>,
        form: Option<web::Form<ShortenParams>>,
        service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        trace!("Shorten API: create request received");

        // 解析失败的查询串/表单按缺参处理，请求照样计入限流窗口
        let query = query.map(web::Query::into_inner).unwrap_or_default();
        let form = form.map(web::Form::into_inner).unwrap_or_default();

        // 表单字段优先，查询串兜底（逐字段合并）
        let request = CreateLinkRequest {
            url: form.url.or(query.url),
            id: form.id.or(query.id),
        };

        match service.create_link(request) {
            Ok(outcome) => {
                info!(
                    "Shorten API: '{}' -> '{}' ({})",
                    outcome.short_id,
                    outcome.target_url,
                    if outcome.deduplicated {
                        "existing"
                    } else if outcome.generated_code {
                        "generated"
                    } else {
                        "requested"
                    }
                );

                HttpResponse::Created()
                    .insert_header(("Location", outcome.short_url.clone()))
                    .insert_header(("LinkId", outcome.short_id.clone()))
                    .append_header(("Content-Type", "application/json; charset=utf-8"))
                    .json(ApiResponse {
                        code: ErrorCode::Success as i32,
                        data: LinkData {
                            id: outcome.short_id,
                            short_url: outcome.short_url,
                            target_url: outcome.target_url,
                        },
                    })
            }
            Err(CreateLinkError::RateLimited { retry_after }) => {
                let secs = retry_after.as_secs().max(1);
                warn!("Shorten API: creation rate limit hit, retry after {}s", secs);

                HttpResponse::TooManyRequests()
                    .insert_header(("Retry-After", secs.to_string()))
                    .append_header(("Content-Type", "application/json; charset=utf-8"))
                    .json(ApiResponse {
                        code: ErrorCode::RateLimitExceeded as i32,
                        data: ErrorData {
                            error: format!("rate limit exceeded, retry after {}s", secs),
                        },
                    })
            }
            Err(CreateLinkError::MissingUrl) => error_response(
                StatusCode::BAD_REQUEST,
                ErrorCode::BadRequest,
                "missing required parameter 'url'",
            ),
            Err(CreateLinkError::Conflict { id }) => {
                warn!("Shorten API: short id '{}' already taken", id);
                error_response(
                    StatusCode::CONFLICT,
                    ErrorCode::LinkAlreadyExists,
                    &format!("short id '{}' is already in use", id),
                )
            }
            Err(CreateLinkError::Internal(e)) => {
                error!("Shorten API: creation failed: {}", e);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalServerError,
                    &e.to_string(),
                )
            }
        }
    }
}

/// 构建错误响应
fn error_response(status: StatusCode, code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code as i32,
            data: ErrorData {
                error: message.to_string(),
            },
        })
}

/// Shorten 路由配置
///
/// 只挂 POST。其它方法落到注册在最后的 redirect scope，
/// 让 `GET /` 走默认跳转。
pub fn shorten_routes() -> actix_web::Resource {
    web::resource("/")
        .guard(guard::Post())
        .route(web::post().to(ShortenService::handle_shorten))
}
