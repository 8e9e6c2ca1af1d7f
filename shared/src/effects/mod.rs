//! Pure math behind the landing page's decorative effects.

pub mod counter;
pub mod navbar;
pub mod parallax;
pub mod reveal;
