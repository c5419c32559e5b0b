use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Seconds between sweeps of expired entries; 0 disables the sweep and
    /// leaves expiry purely lazy.
    #[serde(default = "default_compaction_interval")]
    pub compaction_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            compaction_interval_secs: default_compaction_interval(),
        }
    }
}

fn default_compaction_interval() -> u64 {
    300
}
