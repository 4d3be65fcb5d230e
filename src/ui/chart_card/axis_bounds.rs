/// Autoscaled `(x, y)` bounds for a series. Time spans at least one second;
/// values get 5 % headroom, or ±1 when the line is flat.
pub fn axis_bounds(series: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return ([0.0, 1.0], [0.0, 1.0]);
    };

    let x_bounds = [first.0, last.0.max(first.0 + 1.0)];

    let (min, max) = series
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, v)| (lo.min(v), hi.max(v)));

    let span = max - min;
    let y_bounds = if span < f64::EPSILON {
        [min - 1.0, max + 1.0]
    } else {
        let pad = span * 0.05;
        [min - pad, max + pad]
    };

    (x_bounds, y_bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series() {
        assert_eq!(axis_bounds(&[]), ([0.0, 1.0], [0.0, 1.0]));
    }

    #[test]
    fn test_flat_series() {
        let (x, y) = axis_bounds(&[(5.0, 653.0)]);
        assert_eq!(x, [5.0, 6.0]);
        assert_eq!(y, [652.0, 654.0]);
    }

    #[test]
    fn test_padded_series() {
        let (x, y) = axis_bounds(&[(0.0, 0.0), (10.0, 100.0), (20.0, 50.0)]);
        assert_eq!(x, [0.0, 20.0]);
        assert_eq!(y, [-5.0, 105.0]);
    }
}
