//! `<number><unit>` duration literals such as `300ms`, `1.5h` or `2h45m`.
//!
//! Valid units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m` and `h`. Each
//! number may carry a fraction. A bare `0` is the only unit-less form.
//! Negative durations cannot be represented and are rejected.

use std::time::Duration;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "µs" | "μs" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Parses a duration literal, returning `None` if it is malformed or
/// overflows.
pub(crate) fn parse_duration(s: &str) -> Option<Duration> {
    let mut s = s.strip_prefix('+').unwrap_or(s);
    if s == "0" {
        return Some(Duration::ZERO);
    }
    if s.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        let (whole, rest) = leading_int(s)?;
        let has_whole = rest.len() != s.len();
        s = rest;

        let (mut frac, mut scale, mut has_frac) = (0u64, 1f64, false);
        if let Some(rest) = s.strip_prefix('.') {
            let (f, sc, rest2) = leading_fraction(rest);
            has_frac = rest2.len() != rest.len();
            (frac, scale) = (f, sc);
            s = rest2;
        }
        if !has_whole && !has_frac {
            return None;
        }

        let unit_len = s
            .bytes()
            .position(|b| b == b'.' || b.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return None;
        }
        let unit = unit_nanos(&s[..unit_len])?;
        s = &s[unit_len..];

        let mut v = whole.checked_mul(unit)?;
        if frac > 0 {
            // Adds less than one `unit`.
            v = v.checked_add((frac as f64 * (unit as f64 / scale)) as u64)?;
        }
        total = total.checked_add(v)?;
    }

    Some(Duration::from_nanos(total))
}

/// Consumes leading decimal digits; `None` on overflow.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    let mut v: u64 = 0;
    for b in s[..end].bytes() {
        v = v.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
    }
    Some((v, &s[end..]))
}

/// Consumes leading fraction digits, ignoring precision past what fits.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    let (mut v, mut scale, mut overflow) = (0u64, 1f64, false);
    for b in s[..end].bytes() {
        if overflow {
            continue;
        }
        match v
            .checked_mul(10)
            .and_then(|x| x.checked_add(u64::from(b - b'0')))
        {
            Some(next) => {
                v = next;
                scale *= 10.0;
            }
            None => overflow = true,
        }
    }
    (v, scale, &s[end..])
}
