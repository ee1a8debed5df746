//! Formatting helpers for timestamps and readings.

use time::{macros::format_description, OffsetDateTime, PrimitiveDateTime};

/// `YYYY-MM-DD HH:MM:SS`, every component zero-padded.
pub fn format_date_time(moment: PrimitiveDateTime) -> String {
    moment
        .format(&format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
        .unwrap_or_else(|_| "—".to_string())
}

/// `YYYY-MM-DD`, month and day zero-padded.
pub fn format_date(moment: PrimitiveDateTime) -> String {
    moment
        .format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// Wall-clock time in the local offset, falling back to UTC when the offset
/// cannot be determined (e.g. multi-threaded native processes).
pub fn local_now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}

/// Parses the backend's `YYYY-MM-DD HH:MM:SS` collect time.
pub fn parse_date_time(raw: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(
        raw.trim(),
        &format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    )
    .ok()
}

/// Renders a numeric reading the way the backend rounds it (at most two
/// decimals, no trailing zeros).
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_string()
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_amount(value))
}
