use ironzone_application::ports::CacheMaintenancePort;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Periodically sweeps expired entries out of the response cache.
pub struct CacheCompactionJob {
    maintenance: Arc<dyn CacheMaintenancePort>,
    interval_secs: u64,
}

impl CacheCompactionJob {
    pub fn new(maintenance: Arc<dyn CacheMaintenancePort>, interval_secs: u64) -> Self {
        Self {
            maintenance,
            interval_secs,
        }
    }

    pub fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting cache compaction job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            // The first tick completes immediately; nothing has expired yet.
            interval.tick().await;

            loop {
                interval.tick().await;
                match self.maintenance.run_compaction_cycle().await {
                    Ok(outcome) => {
                        if outcome.entries_removed > 0 {
                            info!(
                                entries_removed = outcome.entries_removed,
                                cache_size = outcome.cache_size,
                                "Cache compaction cycle completed"
                            );
                        }
                    }
                    Err(e) => {
                        error!(error = %e, "Cache compaction cycle failed");
                    }
                }
            }
        });
    }
}
