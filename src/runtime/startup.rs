//! Server startup preparation
//!
//! Everything that must happen before the first request is accepted:
//! snapshot restore and service assembly.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

use crate::config::AppConfig;
use crate::services::LinkService;
use crate::snapshot::SnapshotStore;

pub struct StartupContext {
    pub service: Arc<LinkService>,
    pub bind_address: String,
    pub workers: usize,
}

/// 准备服务器启动的上下文
///
/// 从快照文件恢复注册表并组装链接服务。快照目录缺失时在这里创建，
/// 这样第一次写入不会失败。
pub fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let snapshots = SnapshotStore::new(
        &config.snapshot.forward_path,
        &config.snapshot.reverse_path,
    );
    snapshots
        .ensure_parent_dirs()
        .context("Failed to create snapshot directories")?;
    debug!(
        "Snapshot files: {} / {}",
        config.snapshot.forward_path, config.snapshot.reverse_path
    );

    let store = snapshots.restore();
    let service = Arc::new(LinkService::new(config, store, snapshots));

    let workers = config.server.cpu_count.min(32);
    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        service,
        bind_address,
        workers,
    })
}
