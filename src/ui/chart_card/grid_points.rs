/// Dotted grid: `divisions - 1` interior lines per axis, each sampled at
/// `density` points so it renders as a dashed line under the data.
pub fn grid_points(
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    divisions: usize,
    density: usize,
) -> Vec<(f64, f64)> {
    if divisions < 2 || density < 2 {
        return Vec::new();
    }

    let [x0, x1] = x_bounds;
    let [y0, y1] = y_bounds;
    let lerp = |a: f64, b: f64, i: usize, n: usize| a + (b - a) * i as f64 / n as f64;

    let mut points = Vec::with_capacity(2 * (divisions - 1) * density);
    for line in 1..divisions {
        let y = lerp(y0, y1, line, divisions);
        let x = lerp(x0, x1, line, divisions);
        for step in 0..density {
            points.push((lerp(x0, x1, step, density - 1), y));
            points.push((x, lerp(y0, y1, step, density - 1)));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_point_count_and_range() {
        let points = grid_points([0.0, 40.0], [600.0, 1700.0], 4, 10);
        assert_eq!(points.len(), 2 * 3 * 10);
        for (x, y) in points {
            assert!((0.0..=40.0).contains(&x));
            assert!((600.0..=1700.0).contains(&y));
        }
    }

    #[test]
    fn test_grid_lines_at_divisions() {
        let points = grid_points([0.0, 4.0], [0.0, 8.0], 2, 3);
        // one horizontal line at y=4 and one vertical line at x=2
        assert!(points.contains(&(0.0, 4.0)));
        assert!(points.contains(&(4.0, 4.0)));
        assert!(points.contains(&(2.0, 0.0)));
        assert!(points.contains(&(2.0, 8.0)));
    }

    #[test]
    fn test_degenerate_grid() {
        assert!(grid_points([0.0, 1.0], [0.0, 1.0], 1, 10).is_empty());
    }
}
