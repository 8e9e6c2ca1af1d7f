/// Pixels of travel per shape index at the viewport edge.
pub const PARALLAX_SPEED_FACTOR: f64 = 10.0;

/// Translation for the floating shape at `index` given the pointer position.
/// Shapes further down the list move more; the viewport center is the rest position.
#[must_use]
pub fn parallax_offset(
    index: usize,
    pointer: (f64, f64),
    viewport: (f64, f64),
) -> (f64, f64) {
    #[allow(clippy::cast_precision_loss)]
    let speed = (index + 1) as f64 * PARALLAX_SPEED_FACTOR;

    let x = pointer.0 / viewport.0;
    let y = pointer.1 / viewport.1;

    ((x - 0.5) * speed, (y - 0.5) * speed)
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_center_is_rest() {
        assert!(close(
            parallax_offset(3, (500.0, 400.0), (1000.0, 800.0)),
            (0.0, 0.0)
        ));
    }

    #[test]
    fn test_speed_grows_with_index() {
        assert!(close(
            parallax_offset(0, (1000.0, 0.0), (1000.0, 800.0)),
            (5.0, -5.0)
        ));
        assert!(close(
            parallax_offset(2, (1000.0, 0.0), (1000.0, 800.0)),
            (15.0, -15.0)
        ));
    }
}
