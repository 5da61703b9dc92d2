//! Dimension parsing for sizes such as touch targets.
//!
//! Points, density-independent pixels and CSS pixels are treated as the same
//! logical unit; `rem`/`em` are scaled by [`REM_BASE_PX`].

/// Root font size used to convert `rem` and `em` values.
pub const REM_BASE_PX: f64 = 16.0;

/// Parse a dimension like `44`, `44px`, `44pt`, `48dp` or `2.75rem` into logical pixels.
pub fn parse_pixels(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let split = trimmed
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);
    let value: f64 = number.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    match unit.trim().to_ascii_lowercase().as_str() {
        "" | "px" | "pt" | "dp" => Some(value),
        "rem" | "em" => Some(value * REM_BASE_PX),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_units_are_equivalent() {
        assert_eq!(parse_pixels("44"), Some(44.0));
        assert_eq!(parse_pixels("44px"), Some(44.0));
        assert_eq!(parse_pixels("44pt"), Some(44.0));
        assert_eq!(parse_pixels("48dp"), Some(48.0));
    }

    #[test]
    fn rem_scales_by_base() {
        assert_eq!(parse_pixels("2.75rem"), Some(44.0));
        assert_eq!(parse_pixels("1em"), Some(16.0));
    }

    #[test]
    fn rejects_non_dimensions() {
        assert_eq!(parse_pixels(""), None);
        assert_eq!(parse_pixels("spacing.xl"), None);
        assert_eq!(parse_pixels("12vh"), None);
        assert_eq!(parse_pixels("200ms"), None);
    }
}
