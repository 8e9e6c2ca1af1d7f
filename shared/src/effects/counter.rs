pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;

/// Counts a stat like `"150+"` up from zero, keeping its non-digit characters as suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    suffix: String,
    step: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    /// `None` if `text` carries no digits at all, or more digits than fit a `u64`
    /// (such a stat is shown as is, without counting).
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse::<u64>().ok()?;
        let suffix = text.chars().filter(|c| !c.is_ascii_digit()).collect();

        #[allow(clippy::cast_precision_loss)]
        let step = target as f64 / (f64::from(COUNTER_DURATION_MS) / f64::from(COUNTER_TICK_MS));

        Some(Self {
            target,
            suffix,
            step,
            current: 0.0,
            done: false,
        })
    }

    /// Advances one tick and returns the text to display.
    pub fn tick(&mut self) -> String {
        self.current += self.step;

        #[allow(clippy::cast_precision_loss)]
        let reached = self.current >= self.target as f64;

        if reached {
            self.done = true;
            format!("{}{}", self.target, self.suffix)
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let shown = self.current.floor() as u64;
            format!("{shown}{}", self.suffix)
        }
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn final_text(&self) -> String {
        format!("{}{}", self.target, self.suffix)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_suffix() {
        let counter = CounterAnimation::parse("150+");
        assert_eq!(counter.map(|c| c.final_text()), Some("150+".to_string()));

        let counter = CounterAnimation::parse("98%");
        assert_eq!(counter.map(|c| c.final_text()), Some("98%".to_string()));

        assert_eq!(CounterAnimation::parse("many"), None);
        assert_eq!(CounterAnimation::parse("123456789012345678901+"), None);
    }

    #[test]
    fn test_counts_up_in_125_ticks() {
        let Some(mut counter) = CounterAnimation::parse("250+") else {
            unreachable!()
        };

        assert_eq!(counter.tick(), "2+");
        assert_eq!(counter.tick(), "4+");

        let mut ticks = 2;
        let mut last = String::new();
        while !counter.is_done() {
            last = counter.tick();
            ticks += 1;
        }

        assert_eq!(ticks, 125);
        assert_eq!(last, "250+");
    }

    #[test]
    fn test_small_values_floor() {
        let Some(mut counter) = CounterAnimation::parse("15") else {
            unreachable!()
        };

        // step is 0.12 per tick
        assert_eq!(counter.tick(), "0");
        for _ in 0..8 {
            counter.tick();
        }
        assert_eq!(counter.tick(), "1");
    }

    #[test]
    fn test_zero_finishes_at_once() {
        let Some(mut counter) = CounterAnimation::parse("0 years") else {
            unreachable!()
        };

        assert_eq!(counter.tick(), "0 years");
        assert!(counter.is_done());
    }
}
