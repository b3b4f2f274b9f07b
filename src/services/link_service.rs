//! Link creation and resolution service
//!
//! Owns the in-memory registry, the admission limiter and the snapshot
//! writer. HTTP handlers call into it and translate outcomes to responses.

use std::time::Duration;

use parking_lot::RwLock;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::errors::LinkpressError;
use crate::ratelimit::{Admission, FixedWindowLimiter};
use crate::snapshot::SnapshotStore;
use crate::store::LinkStore;
use crate::utils::{generate_random_code, is_reserved_code};

/// Attempts at drawing an unused random id before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 32;

// ============ Request/Response DTOs ============

/// Raw creation parameters as they arrive from the HTTP layer.
#[derive(Debug, Clone, Default)]
pub struct CreateLinkRequest {
    /// Target URL (required, but checked only after admission is counted)
    pub url: Option<String>,
    /// Desired short id (optional, one will be generated if not provided)
    pub id: Option<String>,
}

/// Result of a successful creation.
#[derive(Debug, Clone)]
pub struct CreateLinkOutcome {
    pub short_id: String,
    /// Absolute short URL for the `Location` header
    pub short_url: String,
    pub target_url: String,
    /// True when the URL was already registered and its id was returned as-is
    pub deduplicated: bool,
    /// Whether the id was auto-generated
    pub generated_code: bool,
}

/// Why a creation was refused.
#[derive(Debug)]
pub enum CreateLinkError {
    /// The shared admission window is exhausted
    RateLimited { retry_after: Duration },
    /// No non-empty `url` parameter was supplied
    MissingUrl,
    /// The requested id is already bound or shadowed by a fixed route
    Conflict { id: String },
    /// Persistence or id generation failed; nothing was stored
    Internal(LinkpressError),
}

// ============ LinkService Implementation ============

/// Service owning all mutable state of the shortener.
///
/// Creation runs under a single write lock so existence checks, inserts and
/// the snapshot write cannot interleave between requests.
pub struct LinkService {
    store: RwLock<LinkStore>,
    snapshots: SnapshotStore,
    limiter: FixedWindowLimiter,
    base_url: String,
    code_length: usize,
    default_url: Option<String>,
}

impl LinkService {
    /// Assemble the service from configuration and a restored registry.
    pub fn new(config: &AppConfig, store: LinkStore, snapshots: SnapshotStore) -> Self {
        let mut base_url = config.links.base_url.clone().unwrap_or_else(|| {
            format!("http://{}:{}/", config.server.host, config.server.port)
        });
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            store: RwLock::new(store),
            snapshots,
            limiter: FixedWindowLimiter::new(
                config.rate_limit.max_requests,
                Duration::from_secs(config.rate_limit.window_secs),
            ),
            base_url,
            code_length: config.links.code_length,
            default_url: config.links.default_url.clone(),
        }
    }

    /// Create a short link, or hand back the existing id for a known URL.
    pub fn create_link(&self, req: CreateLinkRequest) -> Result<CreateLinkOutcome, CreateLinkError> {
        // Admission is counted before anything else, invalid requests included
        if let Admission::Denied { retry_after } = self.limiter.admit() {
            return Err(CreateLinkError::RateLimited { retry_after });
        }

        let url = match req.url.filter(|u| !u.is_empty()) {
            Some(url) => url,
            None => return Err(CreateLinkError::MissingUrl),
        };

        let mut store = self.store.write();

        let (id, generated) = match req.id.filter(|c| !c.is_empty()) {
            Some(id) => {
                if is_reserved_code(&id) || store.exists(&id) {
                    return Err(CreateLinkError::Conflict { id });
                }
                (id, false)
            }
            None => {
                // Same URL again returns the first id, nothing new to persist
                if let Some(existing) = store.lookup_existing_id(&url) {
                    let id = existing.to_string();
                    return Ok(CreateLinkOutcome {
                        short_url: self.short_url(&id),
                        short_id: id,
                        target_url: url,
                        deduplicated: true,
                        generated_code: false,
                    });
                }
                (self.generate_id(&store)?, true)
            }
        };

        let displaced = store.insert(id.clone(), url.clone());
        if let Err(e) = self.snapshots.save(&store) {
            // 回滚内存状态，保持与磁盘一致
            store.undo_insert(&id, &url, displaced);
            error!("Failed to persist snapshot after creating '{}': {}", id, e);
            return Err(CreateLinkError::Internal(e));
        }

        let origin = if generated { "generated" } else { "requested" };
        info!("LinkService: created link '{}' -> '{}' ({})", id, url, origin);

        Ok(CreateLinkOutcome {
            short_url: self.short_url(&id),
            short_id: id,
            target_url: url,
            deduplicated: false,
            generated_code: generated,
        })
    }

    /// Look up the target URL for a short id.
    pub fn resolve(&self, short_id: &str) -> Option<String> {
        self.store.read().resolve(short_id).map(str::to_string)
    }

    pub fn link_count(&self) -> usize {
        self.store.read().len()
    }

    /// Redirect target for the bare root path, when configured.
    pub fn default_url(&self) -> Option<&str> {
        self.default_url.as_deref()
    }

    fn short_url(&self, id: &str) -> String {
        format!("{}{}", self.base_url, id)
    }

    // Reserved ids are re-rolled the same way as collisions
    fn generate_id(&self, store: &LinkStore) -> Result<String, CreateLinkError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = generate_random_code(self.code_length);
            if is_reserved_code(&candidate) || store.exists(&candidate) {
                continue;
            }
            return Ok(candidate);
        }
        Err(CreateLinkError::Internal(LinkpressError::internal(format!(
            "Could not find a free short id after {} attempts",
            MAX_GENERATION_ATTEMPTS
        ))))
    }
}
