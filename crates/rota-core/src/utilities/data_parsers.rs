//! Data parsing helpers.
//!
//! Dates cross the command line, config files, and JSON as ISO-8601 strings.
//! These helpers only split the text; range checks happen in `rota-time`.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.  Each field must be all digits,
/// four for the year and two each for month and day.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let widths = [4, 2, 2];
    for (part, width) in parts.iter().zip(widths) {
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    let year: u16 = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let day: u8 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse a date string in the day-first `DD/MM/YYYY` format used locally.
///
/// Returns `(year, month, day)` on success.
pub fn parse_date_slash(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let day: u8 = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let year: u16 = parts[2].parse().ok()?;
    Some((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-10-06"), Some((2024, 10, 6)));
        assert_eq!(parse_iso_date(" 2023-06-15 "), Some((2023, 6, 15)));
        assert_eq!(parse_iso_date("bad"), None);
        assert_eq!(parse_iso_date("2024-1-6"), None);
        assert_eq!(parse_iso_date("2024-10-+6"), None);
        assert_eq!(parse_iso_date("2024-10-06-01"), None);
    }

    #[test]
    fn test_parse_date_slash() {
        assert_eq!(parse_date_slash("06/10/2024"), Some((2024, 10, 6)));
        assert_eq!(parse_date_slash("2024-10-06"), None);
    }
}
