pub const SCROLL_PROGRESS_PROPERTY: &str = "--scroll-progress";

/// Fraction of the scrollable distance already scrolled, in `[0, 1]`.
pub fn scroll_fraction(scrolled: f64, document_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = document_height - viewport_height;
    if max_scroll.is_nan() || max_scroll <= 0.0 || !scrolled.is_finite() {
        return 0.0;
    }

    (scrolled / max_scroll).clamp(0.0, 1.0)
}

pub fn format_progress(fraction: f64) -> String {
    format!("{fraction:.4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overflow_reports_zero() {
        assert_eq!(scroll_fraction(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(120.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(10.0, f64::NAN, 800.0), 0.0);
    }

    #[test]
    fn fraction_tracks_scroll_position() {
        assert_eq!(scroll_fraction(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_fraction(2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn fraction_stays_in_unit_range_for_any_position() {
        for scrolled in [-250.0, -1.0, 0.0, 17.5, 999.0, 2000.0, 2600.0, f64::INFINITY] {
            let fraction = scroll_fraction(scrolled, 3000.0, 1000.0);
            assert!((0.0..=1.0).contains(&fraction), "{scrolled} -> {fraction}");
        }
    }

    #[test]
    fn progress_is_formatted_for_css() {
        assert_eq!(format_progress(0.5), "0.5000");
        assert_eq!(format_progress(0.0), "0.0000");
    }
}
