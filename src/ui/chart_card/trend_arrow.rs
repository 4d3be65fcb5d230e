/// Which way the newest segment points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Level,
}

impl Trend {
    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Rising => "↗",
            Trend::Falling => "↘",
            Trend::Level => "→",
        }
    }
}

/// Arrow from the second-to-last point to the last point of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendArrow {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// Head barb length as a fraction of the plot diagonal.
const HEAD_LENGTH: f64 = 0.04;
const HEAD_ANGLE: f64 = std::f64::consts::PI / 6.0;

impl TrendArrow {
    pub fn trend(&self) -> Trend {
        let dy = self.to.1 - self.from.1;
        if dy.abs() < 1e-9 {
            Trend::Level
        } else if dy > 0.0 {
            Trend::Rising
        } else {
            Trend::Falling
        }
    }

    /// `barb, tip, barb` polyline for the arrow head. Computed in plot-relative
    /// units so the head keeps its shape whatever the axis scales are.
    pub fn head(&self, x_bounds: [f64; 2], y_bounds: [f64; 2]) -> Option<[(f64, f64); 3]> {
        let x_span = x_bounds[1] - x_bounds[0];
        let y_span = y_bounds[1] - y_bounds[0];
        if x_span <= 0.0 || y_span <= 0.0 {
            return None;
        }

        let dx = (self.to.0 - self.from.0) / x_span;
        let dy = (self.to.1 - self.from.1) / y_span;
        let length = dx.hypot(dy);
        if length < f64::EPSILON {
            return None;
        }
        let (ux, uy) = (dx / length, dy / length);

        let barb = |angle: f64| {
            let (sin, cos) = angle.sin_cos();
            let rx = ux * cos - uy * sin;
            let ry = ux * sin + uy * cos;
            (
                self.to.0 - HEAD_LENGTH * rx * x_span,
                self.to.1 - HEAD_LENGTH * ry * y_span,
            )
        };

        Some([barb(HEAD_ANGLE), self.to, barb(-HEAD_ANGLE)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_direction() {
        let rising = TrendArrow { from: (0.0, 653.0), to: (1.0, 678.0) };
        let falling = TrendArrow { from: (41.0, 1603.0), to: (42.0, 1553.0) };
        let level = TrendArrow { from: (70.0, 653.0), to: (71.0, 653.0) };

        assert_eq!(rising.trend(), Trend::Rising);
        assert_eq!(falling.trend(), Trend::Falling);
        assert_eq!(level.trend(), Trend::Level);
        assert_eq!(level.trend().glyph(), "→");
    }

    #[test]
    fn test_head_points_back_from_tip() {
        let arrow = TrendArrow { from: (0.0, 5.0), to: (10.0, 5.0) };
        let [left, tip, right] = arrow.head([0.0, 10.0], [0.0, 10.0]).unwrap();

        assert_eq!(tip, (10.0, 5.0));
        assert!(left.0 < 10.0 && right.0 < 10.0);
        // symmetric about the shaft
        assert!((left.1 - 5.0 + (right.1 - 5.0)).abs() < 1e-9);
        assert!((left.0 - right.0).abs() < 1e-9);
    }

    #[test]
    fn test_head_needs_length_and_bounds() {
        let dot = TrendArrow { from: (1.0, 1.0), to: (1.0, 1.0) };
        assert!(dot.head([0.0, 2.0], [0.0, 2.0]).is_none());

        let arrow = TrendArrow { from: (0.0, 0.0), to: (1.0, 1.0) };
        assert!(arrow.head([0.0, 0.0], [0.0, 2.0]).is_none());
    }
}
