//! Date formatting for the dates the backend sends.
//!
//! Accepts RFC 3339 (`2024-03-05T10:30:00.000Z`), SQL DATETIME
//! (`2024-03-05 10:30:00`) and bare dates (`2024-03-05`).

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const MESES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun",
    "jul", "ago", "sep", "oct", "nov", "dic",
];

fn parse_fecha_hora(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    let date = raw.get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn mes(dt: &NaiveDateTime) -> &'static str {
    MESES[dt.month0() as usize]
}

/// "5 mar 2024". Unparseable input is returned unchanged.
pub fn format_fecha(raw: &str) -> String {
    match parse_fecha_hora(raw) {
        Some(dt) => format!("{} {} {}", dt.day(), mes(&dt), dt.year()),
        None => raw.to_string(),
    }
}

/// "5 mar 2024, 10:30" (24-hour clock).
pub fn format_fecha_hora(raw: &str) -> String {
    match parse_fecha_hora(raw) {
        Some(dt) => format!("{}, {}", format_fecha(raw), dt.format("%H:%M")),
        None => raw.to_string(),
    }
}
