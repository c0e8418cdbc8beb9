// ============================================================================
// TIME - Formato de fechas
// ============================================================================

use chrono::{DateTime, Local, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formatear la hora de un reporte en la zona horaria del navegador
pub fn format_local(ts: &DateTime<Utc>) -> String {
    format_in(ts, &Local)
}

/// Formatear en una zona horaria concreta (`YYYY-MM-DD HH:MM:SS`)
pub fn format_in<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn formats_in_given_zone() {
        let ts: DateTime<Utc> = "2024-03-01T23:30:00Z".parse().unwrap();
        assert_eq!(format_in(&ts, &Utc), "2024-03-01 23:30:00");

        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_in(&ts, &cet), "2024-03-02 00:30:00");
    }
}
