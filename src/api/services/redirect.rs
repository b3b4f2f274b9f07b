//! 短链接跳转接口
//!
//! 捕获所有未被其它路由命中的 GET/HEAD 请求。空路径走配置的默认跳转，
//! 命中的短码回 302，未知短码回可缓存的 404。

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use tracing::{debug, trace};

use crate::services::LinkService;

pub struct RedirectService;

impl RedirectService {
    pub async fn handle_redirect(
        path: web::Path<String>,
        service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let captured_path = path.into_inner();

        if captured_path.is_empty() {
            return match service.default_url() {
                Some(url) => {
                    trace!("Root request redirected to default URL");
                    Self::found_response(url)
                }
                None => Self::not_found_response(),
            };
        }

        match service.resolve(&captured_path) {
            Some(target) => {
                debug!("Redirecting '{}' -> '{}'", captured_path, target);
                Self::found_response(&target)
            }
            None => {
                debug!("Redirect link not found: {}", captured_path);
                Self::not_found_response()
            }
        }
    }

    #[inline]
    fn found_response(target: &str) -> HttpResponse {
        HttpResponse::Found()
            .insert_header(("Location", target))
            .finish()
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND)
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .insert_header(("Cache-Control", "public, max-age=60"))
            .body("Not Found")
    }
}

/// Redirect 路由配置
///
/// 必须注册在所有其它 service 之后：scope 前缀为空，先注册会吞掉全部请求。
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("")
        .route("/{path}*", web::get().to(RedirectService::handle_redirect))
        .route("/{path}*", web::head().to(RedirectService::handle_redirect))
}
