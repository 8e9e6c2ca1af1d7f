mod enroll_form;
mod floating_shapes;
mod footer;
mod navbar;
mod popup;
mod reveal;
mod stat_counter;
mod success_modal;
mod toasts;

pub use enroll_form::EnrollForm;
pub use floating_shapes::FloatingShapes;
pub use footer::Footer;
pub use navbar::Navbar;
pub use popup::Popup;
pub use reveal::Reveal;
pub use stat_counter::StatCounter;
pub use success_modal::SuccessModal;
pub use toasts::Toasts;
