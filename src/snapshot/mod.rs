//! JSON snapshot persistence for the link registry.
//!
//! Two files mirror the two in-memory maps. The forward file (short id to
//! URL) is the source of truth; the reverse file spares a restore from
//! inverting the forward map, but it is verified on load and rebuilt whenever
//! it disagrees. Snapshots are whole-file overwrites, staged through temp
//! files and renamed into place so a failed write leaves the previous pair
//! on disk untouched.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::Result;
use crate::store::LinkStore;

pub struct SnapshotStore {
    forward_path: PathBuf,
    reverse_path: PathBuf,
}

impl SnapshotStore {
    pub fn new(forward_path: impl Into<PathBuf>, reverse_path: impl Into<PathBuf>) -> Self {
        Self {
            forward_path: forward_path.into(),
            reverse_path: reverse_path.into(),
        }
    }

    /// Create the snapshot directories if they do not exist yet.
    pub fn ensure_parent_dirs(&self) -> Result<()> {
        for path in [&self.forward_path, &self.reverse_path] {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
        }
        Ok(())
    }

    /// Load the registry from disk.
    ///
    /// Never fails: a missing or unreadable forward snapshot yields an empty
    /// registry, and a reverse snapshot that disagrees with the forward one
    /// is discarded and rebuilt from it.
    pub fn restore(&self) -> LinkStore {
        let forward = match read_map(&self.forward_path) {
            Ok(Some(map)) => map,
            Ok(None) => {
                info!(
                    "No snapshot at {}, starting empty",
                    self.forward_path.display()
                );
                return LinkStore::new();
            }
            Err(e) => {
                warn!(
                    "Ignoring unreadable snapshot {}: {}",
                    self.forward_path.display(),
                    e
                );
                return LinkStore::new();
            }
        };

        let reverse = match read_map(&self.reverse_path) {
            Ok(Some(map)) if reverse_consistent(&forward, &map) => map,
            Ok(Some(_)) => {
                warn!(
                    "Reverse snapshot {} disagrees with forward snapshot, rebuilding",
                    self.reverse_path.display()
                );
                rebuild_reverse(&forward)
            }
            Ok(None) => rebuild_reverse(&forward),
            Err(e) => {
                warn!(
                    "Ignoring unreadable snapshot {}: {}",
                    self.reverse_path.display(),
                    e
                );
                rebuild_reverse(&forward)
            }
        };

        let store = LinkStore::from_parts(forward, reverse);
        info!("Restored {} links from snapshot", store.len());
        store
    }

    /// Overwrite both snapshot files with the current registry state.
    ///
    /// Both maps are staged to temp files before either snapshot is
    /// replaced. The forward rename comes last and is the commit point:
    /// restore trusts the forward file and rebuilds the reverse map around
    /// it, so any failure before that rename leaves the previous state
    /// intact on the next restart.
    pub fn save(&self, store: &LinkStore) -> Result<()> {
        let forward_tmp = staging_path(&self.forward_path);
        let reverse_tmp = staging_path(&self.reverse_path);

        let result = self.stage_and_commit(store, &forward_tmp, &reverse_tmp);
        if result.is_err() {
            // 尽力清理残留的临时文件
            let _ = fs::remove_file(&forward_tmp);
            let _ = fs::remove_file(&reverse_tmp);
        }
        result
    }

    fn stage_and_commit(
        &self,
        store: &LinkStore,
        forward_tmp: &Path,
        reverse_tmp: &Path,
    ) -> Result<()> {
        write_map(forward_tmp, store.forward())?;
        write_map(reverse_tmp, store.reverse())?;
        fs::rename(reverse_tmp, &self.reverse_path)?;
        // 提交点：正向文件落位之前，重启看到的仍是旧状态
        fs::rename(forward_tmp, &self.forward_path)?;
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_os_string();
    staged.push(".tmp");
    PathBuf::from(staged)
}

fn read_map(path: &Path) -> Result<Option<HashMap<String, String>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let map = serde_json::from_str(&content)?;
    Ok(Some(map))
}

fn write_map(path: &Path, map: &HashMap<String, String>) -> Result<()> {
    let json = serde_json::to_string_pretty(map)?;
    fs::write(path, json)?;
    Ok(())
}

// 校验反向表与正向表互为精确逆映射
fn reverse_consistent(
    forward: &HashMap<String, String>,
    reverse: &HashMap<String, String>,
) -> bool {
    reverse.iter().all(|(url, id)| forward.get(id) == Some(url))
        && forward.values().all(|url| reverse.contains_key(url))
}

fn rebuild_reverse(forward: &HashMap<String, String>) -> HashMap<String, String> {
    forward
        .iter()
        .map(|(id, url)| (url.clone(), id.clone()))
        .collect()
}
