//! Uptime and age strings → seconds.

use tracing::trace;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

#[derive(Debug, Default)]
struct Parts {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl Parts {
    fn total(&self) -> u64 {
        self.days
            .saturating_mul(DAY)
            .saturating_add(self.hours.saturating_mul(HOUR))
            .saturating_add(self.minutes.saturating_mul(MINUTE))
            .saturating_add(self.seconds)
    }
}

/// `<n><unit>` → `n`, e.g. `02h` with unit `h` → 2.
fn unit_value(token: &str, unit: char) -> Option<u64> {
    token.strip_suffix(unit)?.trim().parse().ok()
}

/// Parse a device uptime into seconds.
///
/// Tokens are split on `", "` and `":"` and classified in order: a token
/// containing `day` sets days, `<n>h` hours, `<n>m` minutes, `<n>s`
/// seconds. Bare numbers are positional and fill seconds, minutes, hours
/// and days from the right, so `5 days, 02:03:04`, `5 days, 02h:03m:04s`
/// and `5:02:03:04` all parse. Anything else counts as zero.
pub fn parse_uptime(text: &str) -> u64 {
    let mut parts = Parts::default();
    let mut positional = Vec::new();

    for token in text.trim().split(", ").flat_map(|part| part.split(':')) {
        let token = token.trim();
        if token.contains("day") {
            parts.days = token
                .split_whitespace()
                .next()
                .and_then(|n| n.parse().ok())
                .unwrap_or(0);
        } else if let Some(h) = unit_value(token, 'h') {
            parts.hours = h;
        } else if let Some(m) = unit_value(token, 'm') {
            parts.minutes = m;
        } else if let Some(s) = unit_value(token, 's') {
            parts.seconds = s;
        } else if let Ok(n) = token.parse::<u64>() {
            positional.push(n);
        } else if !token.is_empty() {
            trace!(token, "ignoring uptime token");
        }
    }

    let slots = [
        &mut parts.seconds,
        &mut parts.minutes,
        &mut parts.hours,
        &mut parts.days,
    ];
    for (slot, value) in slots.into_iter().zip(positional.iter().rev()) {
        *slot = *value;
    }

    parts.total()
}

/// Parse an ARP age such as `1h 2m 3s` into seconds.
///
/// Returns `None` when no token could be read (`n/a`, static entries).
pub fn try_parse_arp_age(text: &str) -> Option<u64> {
    let mut parts = Parts::default();
    let mut seen = false;

    for token in text.split_whitespace() {
        if let Some(h) = unit_value(token, 'h') {
            parts.hours = h;
        } else if let Some(m) = unit_value(token, 'm') {
            parts.minutes = m;
        } else if let Some(s) = unit_value(token, 's') {
            parts.seconds = s;
        } else {
            trace!(token, "ignoring age token");
            continue;
        }
        seen = true;
    }

    seen.then(|| parts.total())
}

/// Parse an ARP age into seconds; unreadable input is zero.
pub fn parse_arp_age(text: &str) -> u64 {
    try_parse_arp_age(text).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_with_days_and_clock() {
        assert_eq!(parse_uptime("5 days, 02:03:04"), 5 * 86400 + 2 * 3600 + 3 * 60 + 4);
    }

    #[test]
    fn uptime_with_unit_suffixes() {
        assert_eq!(parse_uptime("5 days, 02h:03m:04s"), 439_384);
        assert_eq!(parse_uptime("1 day, 00h:00m:09s"), 86_409);
    }

    #[test]
    fn uptime_positional_fields() {
        assert_eq!(parse_uptime("1:02:03:04"), 86400 + 2 * 3600 + 3 * 60 + 4);
        assert_eq!(parse_uptime("03:04"), 3 * 60 + 4);
        assert_eq!(parse_uptime("0:00:00:00"), 0);
    }

    #[test]
    fn uptime_missing_and_malformed_parts_are_zero() {
        assert_eq!(parse_uptime(""), 0);
        assert_eq!(parse_uptime("unknown"), 0);
        assert_eq!(parse_uptime("xh:5m"), 300);
    }

    #[test]
    fn uptime_saturates() {
        assert_eq!(parse_uptime(&format!("{} days, 00:00:00", u64::MAX)), u64::MAX);
    }

    #[test]
    fn arp_age() {
        assert_eq!(parse_arp_age("1h 2m 3s"), 3723);
        assert_eq!(parse_arp_age("0h 5m 10s"), 310);
        assert_eq!(parse_arp_age("45s"), 45);
        assert_eq!(parse_arp_age("2h junk 5m"), 7500);
    }

    #[test]
    fn arp_age_unreadable() {
        assert_eq!(try_parse_arp_age("n/a"), None);
        assert_eq!(try_parse_arp_age(""), None);
        assert_eq!(parse_arp_age("n/a"), 0);
    }
}
