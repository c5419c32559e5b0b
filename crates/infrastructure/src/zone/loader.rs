use super::parser::ZoneFileParser;
use ironzone_domain::{DomainError, Zone};
use std::path::Path;
use tracing::info;

/// Reads and parses the zone file at `path`.
pub fn load_zone_file(path: impl AsRef<Path>) -> Result<Zone, DomainError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| DomainError::ZoneFileRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let parsed = ZoneFileParser::parse_with_diagnostics(&text)?;

    info!(
        path = %path.display(),
        origin = %parsed.zone.origin(),
        names = parsed.zone.name_count(),
        records = parsed.zone.record_count(),
        skipped_lines = parsed.skipped.len(),
        "Zone loaded"
    );

    Ok(parsed.zone)
}
