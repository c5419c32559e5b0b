use super::dns_query::normalize_name;
use super::{DnsRecord, RecordType};
use std::collections::HashMap;

/// Records this instance is authoritative for, rooted at a single origin.
///
/// Keys are fully-qualified, lower-case names without a trailing dot. The
/// order of records under a name is the order they appeared in the zone file.
#[derive(Debug, Clone, Default)]
pub struct Zone {
    origin: String,
    records: HashMap<String, Vec<DnsRecord>>,
}

impl Zone {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: normalize_name(origin),
            records: HashMap::new(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Appends a record under its owner name.
    pub fn push(&mut self, record: DnsRecord) {
        self.records
            .entry(record.name.to_string())
            .or_default()
            .push(record);
    }

    /// Records stored under `name`, empty when the name is not hosted.
    pub fn lookup(&self, name: &str) -> &[DnsRecord] {
        self.records
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn lookup_type<'a>(
        &'a self,
        name: &str,
        record_type: RecordType,
    ) -> impl Iterator<Item = &'a DnsRecord> + 'a {
        self.lookup(name)
            .iter()
            .filter(move |r| r.record_type == record_type)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Whether `name` is the origin or a name below it.
    pub fn is_within(&self, name: &str) -> bool {
        name == self.origin
            || name
                .strip_suffix(self.origin.as_str())
                .is_some_and(|prefix| prefix.ends_with('.'))
    }

    pub fn name_count(&self) -> usize {
        self.records.len()
    }

    pub fn record_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }
}

/// Resolves a zone-file name against `origin`.
///
/// `@` is the origin itself, a trailing dot marks an absolute name, names
/// already inside the origin are kept, everything else is relative.
pub fn qualify_name(name: &str, origin: &str) -> String {
    if name == "@" {
        return origin.to_string();
    }
    if let Some(absolute) = name.strip_suffix('.') {
        return absolute.to_ascii_lowercase();
    }

    let name = name.to_ascii_lowercase();
    if origin.is_empty() || name == origin || name.ends_with(&format!(".{}", origin)) {
        name
    } else {
        format!("{}.{}", name, origin)
    }
}
