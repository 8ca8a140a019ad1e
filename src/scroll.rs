//! Scroll Progress
//!
//! How far the reader has scrolled through a section, in percent.

/// `top` is the section's bounding-rect top relative to the viewport
pub fn section_progress(top: f64, section_height: f64, viewport_height: f64) -> f64 {
    if top > 0.0 {
        return 0.0;
    }
    let scrollable = section_height - viewport_height;
    if scrollable <= 0.0 {
        return 100.0;
    }
    (top.abs() / scrollable).min(1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_before_section() {
        assert_eq!(section_progress(250.0, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn test_midway_and_clamped() {
        assert!((section_progress(-1100.0, 3000.0, 800.0) - 50.0).abs() < 1e-9);
        assert_eq!(section_progress(-9000.0, 3000.0, 800.0), 100.0);
        assert_eq!(section_progress(0.0, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn test_short_section() {
        assert_eq!(section_progress(-10.0, 500.0, 800.0), 100.0);
    }
}
