//! Energy Growth Chart Geometry
//!
//! Layout of the three-point growth curve and the hover hit-test. Drawing
//! lives in the component.

pub const PADDING: f64 = 30.0;
/// Horizontal hit radius for the tooltip
pub const HOVER_RADIUS: f64 = 20.0;
pub const POINT_RADIUS: f64 = 6.0;

/// (day, energy fraction)
pub const DATA: [(u32, f64); 3] = [(1, 0.2), (15, 0.6), (30, 1.0)];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Chart laid out for a CSS-pixel canvas size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
}

impl ChartLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// X positions of day 1, day 15 and day 30
    pub fn columns(&self) -> [f64; 3] {
        [PADDING, self.width / 2.0, self.width - PADDING]
    }

    pub fn baseline(&self) -> f64 {
        self.height - PADDING
    }

    fn y_for(&self, fraction: f64) -> f64 {
        self.baseline() - (self.height - 2.0 * PADDING) * fraction
    }

    pub fn points(&self) -> [Point; 3] {
        let cols = self.columns();
        [0, 1, 2].map(|i| Point {
            x: cols[i],
            y: self.y_for(DATA[i].1),
        })
    }

    /// Quadratic segments `(control, end)` smoothing the curve from the
    /// first point through midpoints to the last
    pub fn curve(&self) -> Vec<(Point, Point)> {
        let pts = self.points();
        let mut segments = Vec::with_capacity(pts.len());
        for pair in pts.windows(2) {
            let mid = Point {
                x: (pair[0].x + pair[1].x) / 2.0,
                y: (pair[0].y + pair[1].y) / 2.0,
            };
            segments.push((pair[0], mid));
        }
        segments.push((pts[pts.len() - 2], pts[pts.len() - 1]));
        segments
    }

    /// X-axis labels with their anchor x
    pub fn x_labels(&self) -> [(&'static str, f64); 3] {
        let cols = self.columns();
        [("Day 1", cols[0]), ("Day 15", cols[1]), ("Day 30", cols[2])]
    }

    /// Y-axis labels with their anchor y
    pub fn y_labels(&self) -> [(&'static str, f64); 3] {
        [
            ("0%", self.baseline()),
            ("50%", self.height / 2.0),
            ("100%", PADDING),
        ]
    }

    /// Tooltip for a pointer at `x` (relative to the canvas left edge)
    pub fn hover_label(&self, x: f64) -> Option<String> {
        self.columns()
            .iter()
            .zip(DATA.iter())
            .filter(|(col, _)| (x - **col).abs() < HOVER_RADIUS)
            .min_by(|a, b| (x - a.0).abs().total_cmp(&(x - b.0).abs()))
            .map(|(_, (day, energy))| format!("Day {}: {}% Energy", day, (energy * 100.0).round() as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_scale_with_height() {
        let layout = ChartLayout::new(400.0, 260.0);
        let pts = layout.points();
        assert_eq!(pts[0].x, 30.0);
        assert_eq!(pts[1].x, 200.0);
        assert_eq!(pts[2].x, 370.0);
        // 100% sits on the top padding line
        assert!((pts[2].y - PADDING).abs() < 1e-9);
        // 20% of the 200px plot area above the baseline
        assert!((pts[0].y - (230.0 - 40.0)).abs() < 1e-9);
    }

    #[test]
    fn test_curve_ends_on_last_point() {
        let layout = ChartLayout::new(400.0, 260.0);
        let curve = layout.curve();
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.last().map(|s| s.1), Some(layout.points()[2]));
    }

    #[test]
    fn test_hover_label() {
        let layout = ChartLayout::new(400.0, 260.0);
        assert_eq!(layout.hover_label(35.0).as_deref(), Some("Day 1: 20% Energy"));
        assert_eq!(layout.hover_label(190.0).as_deref(), Some("Day 15: 60% Energy"));
        assert_eq!(layout.hover_label(369.0).as_deref(), Some("Day 30: 100% Energy"));
        assert_eq!(layout.hover_label(120.0), None);
    }
}
