//! HTTP API 类型定义

use serde::{Deserialize, Serialize};

/// 统一响应包装
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub data: T,
}

/// Payload of a successful creation response.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LinkData {
    pub id: String,
    pub short_url: String,
    pub target_url: String,
}

/// Error payload for JSON endpoints.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorData {
    pub error: String,
}

/// Payload of the health endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthData {
    pub status: String,
    pub uptime_secs: u64,
    pub links: usize,
}
