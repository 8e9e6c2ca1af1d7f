pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 50.0;
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_THRESHOLD
}

/// Section whose bounds contain the marker line just below the navbar.
/// Overlapping sections resolve to the last one in document order.
#[must_use]
pub fn active_section<'a>(scroll_y: f64, sections: &[SectionBounds<'a>]) -> Option<&'a str> {
    let marker = scroll_y + ACTIVE_SECTION_OFFSET;

    sections
        .iter()
        .rev()
        .find(|s| marker >= s.top && marker < s.top + s.height)
        .map(|s| s.id)
}

/// Scroll position that puts a section's top right under the fixed navbar.
#[must_use]
pub fn scroll_target(section_top: f64, navbar_height: f64) -> f64 {
    section_top - navbar_height
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECTIONS: &[SectionBounds<'static>] = &[
        SectionBounds {
            id: "home",
            top: 0.0,
            height: 800.0,
        },
        SectionBounds {
            id: "about",
            top: 800.0,
            height: 600.0,
        },
        SectionBounds {
            id: "contact",
            top: 1400.0,
            height: 500.0,
        },
    ];

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_active_section() {
        assert_eq!(active_section(0.0, SECTIONS), Some("home"));
        assert_eq!(active_section(699.0, SECTIONS), Some("home"));
        assert_eq!(active_section(700.0, SECTIONS), Some("about"));
        assert_eq!(active_section(1300.0, SECTIONS), Some("contact"));
        assert_eq!(active_section(1800.0, SECTIONS), None);
    }

    #[test]
    fn test_overlap_last_wins() {
        let sections = [
            SectionBounds {
                id: "a",
                top: 0.0,
                height: 500.0,
            },
            SectionBounds {
                id: "b",
                top: 100.0,
                height: 100.0,
            },
        ];

        assert_eq!(active_section(50.0, &sections), Some("b"));
    }

    #[test]
    fn test_scroll_target() {
        assert!((scroll_target(1400.0, 80.0) - 1320.0).abs() < f64::EPSILON);
    }
}
