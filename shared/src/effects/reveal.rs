/// Share of an element that has to be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Whether enough of the element (`top`/`bottom` relative to the viewport) is visible.
#[must_use]
pub fn is_revealed(top: f64, bottom: f64, viewport_height: f64) -> bool {
    let height = bottom - top;
    if height <= 0.0 {
        return top >= 0.0 && top <= viewport_height;
    }

    let visible = bottom.min(viewport_height) - top.max(0.0);

    visible > 0.0 && visible / height >= REVEAL_THRESHOLD
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fully_visible() {
        assert!(is_revealed(100.0, 300.0, 800.0));
    }

    #[test]
    fn test_below_fold() {
        assert!(!is_revealed(900.0, 1100.0, 800.0));
        // 5% peeking in
        assert!(!is_revealed(790.0, 990.0, 800.0));
        // 10% peeking in
        assert!(is_revealed(780.0, 980.0, 800.0));
    }

    #[test]
    fn test_scrolled_past() {
        assert!(!is_revealed(-300.0, -100.0, 800.0));
        assert!(is_revealed(-150.0, 50.0, 800.0));
    }

    #[test]
    fn test_taller_than_viewport() {
        assert!(is_revealed(-500.0, 2000.0, 800.0));
    }

    #[test]
    fn test_empty_element() {
        assert!(is_revealed(400.0, 400.0, 800.0));
        assert!(!is_revealed(900.0, 900.0, 800.0));
    }
}
