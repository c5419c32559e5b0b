use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Zone file holding the single origin this instance is authoritative for.
    #[serde(default)]
    pub path: Option<String>,
}
