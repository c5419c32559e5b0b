/// Parses a zone-file TTL: plain seconds (`3600`) or BIND unit notation
/// (`1h`, `2d`, `1h30m`). Units are case-insensitive.
pub fn parse_ttl(token: &str) -> Option<u32> {
    if !token.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let mut total: u32 = 0;
    let mut current: u32 = 0;
    let mut pending_digits = false;

    for c in token.chars() {
        if let Some(digit) = c.to_digit(10) {
            current = current.checked_mul(10)?.checked_add(digit)?;
            pending_digits = true;
            continue;
        }

        let multiplier = match c.to_ascii_lowercase() {
            's' => 1,
            'm' => 60,
            'h' => 3_600,
            'd' => 86_400,
            'w' => 604_800,
            _ => return None,
        };
        if !pending_digits {
            return None;
        }
        total = total.checked_add(current.checked_mul(multiplier)?)?;
        current = 0;
        pending_digits = false;
    }

    total.checked_add(current)
}
