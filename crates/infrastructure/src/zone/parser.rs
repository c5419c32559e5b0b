//! Line-oriented zone file parser.
//!
//! Understands `$ORIGIN` and `$TTL`, parenthesised multi-line records,
//! `;` comments, an optional TTL and class before the record type (in either
//! order) and records that omit their label by starting with `IN`. Lines
//! that cannot be turned into a record, or whose owner falls outside the
//! zone's origin, are skipped with a warning; only a missing `$ORIGIN` is
//! fatal.

use super::ttl::parse_ttl;
use ironzone_domain::zone::qualify_name;
use ironzone_domain::{DnsRecord, DomainError, RecordType, Zone};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use tracing::{debug, warn};

/// TTL applied to records that appear before any `$TTL` directive.
pub const DEFAULT_TTL: u32 = 3600;

/// Result of a parse: the zone plus every line that was skipped.
#[derive(Debug)]
pub struct ParsedZone {
    pub zone: Zone,
    pub skipped: Vec<DomainError>,
}

/// State threaded through the line loop.
struct ParserContext {
    /// Origin used to qualify relative names; changed by every `$ORIGIN`.
    origin: Option<String>,
    default_ttl: u32,
    last_label: Option<String>,
    /// First line number and text of a record still waiting for its `)`.
    continuation: Option<(usize, String)>,
}

impl ParserContext {
    fn new() -> Self {
        Self {
            origin: None,
            default_ttl: DEFAULT_TTL,
            last_label: None,
            continuation: None,
        }
    }
}

pub struct ZoneFileParser;

impl ZoneFileParser {
    pub fn parse(text: &str) -> Result<Zone, DomainError> {
        Self::parse_with_diagnostics(text).map(|parsed| parsed.zone)
    }

    pub fn parse_with_diagnostics(text: &str) -> Result<ParsedZone, DomainError> {
        let mut ctx = ParserContext::new();
        let mut zone: Option<Zone> = None;
        let mut skipped = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }

            let (line_no, logical) = match ctx.continuation.take() {
                Some((start, mut buffer)) => {
                    buffer.push(' ');
                    buffer.push_str(line);
                    if !line.contains(')') {
                        ctx.continuation = Some((start, buffer));
                        continue;
                    }
                    (start, buffer)
                }
                None if line.contains('(') && !line.contains(')') => {
                    ctx.continuation = Some((line_no, line.to_string()));
                    continue;
                }
                None => (line_no, line.to_string()),
            };

            if let Err(e) = Self::parse_line(&mut ctx, &mut zone, line_no, &logical) {
                warn!(line = line_no, error = %e, "Skipping zone file line");
                skipped.push(e);
            }
        }

        if let Some((start, _)) = ctx.continuation.take() {
            let e = DomainError::ZoneParse {
                line: start,
                reason: "unterminated '(' at end of file".to_string(),
            };
            warn!(line = start, error = %e, "Dropping incomplete record");
            skipped.push(e);
        }

        let zone = zone.ok_or(DomainError::MissingOrigin)?;
        Ok(ParsedZone { zone, skipped })
    }

    fn parse_line(
        ctx: &mut ParserContext,
        zone: &mut Option<Zone>,
        line_no: usize,
        line: &str,
    ) -> Result<(), DomainError> {
        let cleaned = line.replace(['(', ')'], " ");
        let fields: Vec<&str> = cleaned.split_whitespace().collect();

        let Some(first) = fields.first() else {
            return Ok(());
        };

        if first.starts_with('$') {
            return Self::parse_directive(ctx, zone, line_no, &fields);
        }

        let (Some(origin), Some(zone)) = (ctx.origin.clone(), zone.as_mut()) else {
            return Err(parse_error(line_no, "record before $ORIGIN"));
        };
        let record = Self::parse_record(ctx, &origin, line_no, &fields)?;

        if !zone.is_within(&record.name) {
            return Err(parse_error(
                line_no,
                &format!("owner {} is outside zone {}", record.name, zone.origin()),
            ));
        }

        zone.push(record);
        Ok(())
    }

    fn parse_directive(
        ctx: &mut ParserContext,
        zone: &mut Option<Zone>,
        line_no: usize,
        fields: &[&str],
    ) -> Result<(), DomainError> {
        let directive = fields[0].to_ascii_uppercase();
        match directive.as_str() {
            "$ORIGIN" => {
                let name = fields
                    .get(1)
                    .ok_or_else(|| parse_error(line_no, "$ORIGIN without a name"))?;
                let origin = qualify_name(name, ctx.origin.as_deref().unwrap_or(""));
                debug!(line = line_no, origin = %origin, "Origin set");

                if zone.is_none() {
                    *zone = Some(Zone::new(&origin));
                }
                ctx.origin = Some(origin);
                Ok(())
            }
            "$TTL" => {
                let ttl = fields
                    .get(1)
                    .and_then(|t| parse_ttl(t))
                    .ok_or_else(|| parse_error(line_no, "$TTL without a valid value"))?;
                ctx.default_ttl = ttl;
                Ok(())
            }
            _ => Err(parse_error(
                line_no,
                &format!("unsupported directive {}", fields[0]),
            )),
        }
    }

    fn parse_record(
        ctx: &mut ParserContext,
        origin: &str,
        line_no: usize,
        fields: &[&str],
    ) -> Result<DnsRecord, DomainError> {
        if fields.len() < 3 {
            return Err(parse_error(
                line_no,
                &format!("expected at least 3 fields, found {}", fields.len()),
            ));
        }

        let mut rest = fields;
        let owner = if rest[0].eq_ignore_ascii_case("IN") {
            ctx.last_label
                .clone()
                .ok_or_else(|| parse_error(line_no, "label omitted with no previous label"))?
        } else {
            let owner = qualify_name(rest[0], origin);
            // Continuation lines belong to this label even if the line fails.
            ctx.last_label = Some(owner.clone());
            rest = &rest[1..];
            owner
        };

        // TTL and class may come in either order, both optional.
        let mut ttl = None;
        let mut class_seen = false;
        while let Some(token) = rest.first() {
            if !class_seen && token.eq_ignore_ascii_case("IN") {
                class_seen = true;
            } else if ttl.is_none() && parse_ttl(token).is_some() {
                ttl = parse_ttl(token);
            } else {
                break;
            }
            rest = &rest[1..];
        }

        let (type_token, data) = rest
            .split_first()
            .ok_or_else(|| parse_error(line_no, "missing record type"))?;
        if data.is_empty() {
            return Err(parse_error(line_no, "missing record data"));
        }

        let record_type =
            RecordType::from_str(type_token).map_err(|e| parse_error(line_no, &e.to_string()))?;
        let data = Self::parse_data(record_type, data, origin)
            .map_err(|reason| parse_error(line_no, &reason))?;

        Ok(DnsRecord::new(
            owner,
            record_type,
            data,
            ttl.unwrap_or(ctx.default_ttl),
        ))
    }

    /// Normalises record data into the presentation form `DnsRecord` keeps,
    /// qualifying every name-valued field.
    fn parse_data(record_type: RecordType, data: &[&str], origin: &str) -> Result<String, String> {
        match record_type {
            RecordType::A => data[0]
                .parse::<Ipv4Addr>()
                .map(|ip| ip.to_string())
                .map_err(|_| format!("invalid IPv4 address {}", data[0])),
            RecordType::AAAA => data[0]
                .parse::<Ipv6Addr>()
                .map(|ip| ip.to_string())
                .map_err(|_| format!("invalid IPv6 address {}", data[0])),
            kind if kind.has_name_data() => Ok(qualify_name(data[0], origin)),
            RecordType::MX => {
                let [priority, target, ..] = data else {
                    return Err("MX needs a priority and a target".to_string());
                };
                let priority: u16 = priority
                    .parse()
                    .map_err(|_| format!("invalid MX priority {}", priority))?;
                Ok(format!("{} {}", priority, qualify_name(target, origin)))
            }
            RecordType::TXT => Ok(data
                .iter()
                .map(|part| part.trim_matches('"'))
                .collect::<Vec<_>>()
                .join(" ")),
            RecordType::SOA => {
                let [mname, rname, serial, timers @ ..] = data else {
                    return Err("SOA needs seven fields".to_string());
                };
                if timers.len() != 4 {
                    return Err("SOA needs seven fields".to_string());
                }
                let serial: u32 = serial
                    .parse()
                    .map_err(|_| format!("invalid SOA serial {}", serial))?;

                let mut parts = vec![
                    qualify_name(mname, origin),
                    qualify_name(rname, origin),
                    serial.to_string(),
                ];
                for timer in timers {
                    let seconds =
                        parse_ttl(timer).ok_or_else(|| format!("invalid SOA timer {}", timer))?;
                    parts.push(seconds.to_string());
                }
                Ok(parts.join(" "))
            }
            other => Err(format!("no data format for {}", other)),
        }
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_error(line: usize, reason: &str) -> DomainError {
    DomainError::ZoneParse {
        line,
        reason: reason.to_string(),
    }
}
