//! StorageConfig and resolve_path for the inventory file.

use crate::config::merge::merge_policy::DEFAULT_INVENTORY_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_inventory_path() -> PathBuf {
    PathBuf::from(DEFAULT_INVENTORY_FILE)
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Inventory file (relative paths resolve against the workspace root)
    #[serde(default = "default_inventory_path")]
    pub path: PathBuf,
}

impl StorageConfig {
    /// Resolve the inventory file to an actual filesystem location.
    pub fn resolve_path(&self, workspace_root: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            workspace_root.join(&self.path)
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_inventory_path(),
        }
    }
}
