use shared::{SectionBounds, active_section, is_revealed, scroll_target};
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::{Callback, MouseEvent, NodeRef};

pub fn scroll_y() -> f64 {
    gloo_utils::window().scroll_y().unwrap_or_default()
}

pub fn viewport() -> (f64, f64) {
    let window = gloo_utils::window();
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (width, height)
}

pub fn is_node_revealed(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<web_sys::Element>() else {
        return false;
    };

    let rect = element.get_bounding_client_rect();
    is_revealed(rect.top(), rect.bottom(), viewport().1)
}

fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    gloo_utils::document()
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

fn navbar_height() -> f64 {
    html_element_by_id("navbar").map_or(0.0, |nav| f64::from(nav.offset_height()))
}

/// Id of the `section[id]` currently under the navbar.
pub fn current_section() -> Option<String> {
    let nodes = gloo_utils::document()
        .query_selector_all("section[id]")
        .unwrap_throw();

    let sections: Vec<(String, f64, f64)> = (0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            (
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect();

    let bounds: Vec<SectionBounds<'_>> = sections
        .iter()
        .map(|(id, top, height)| SectionBounds {
            id,
            top: *top,
            height: *height,
        })
        .collect();

    active_section(scroll_y(), &bounds).map(ToOwned::to_owned)
}

/// Smoothly scrolls a section to just below the fixed navbar.
pub fn scroll_to_section(id: &str) {
    let Some(target) = html_element_by_id(id) else {
        log::warn!("no section with id: {id}");
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(target.offset_top()), navbar_height()));
    options.set_behavior(ScrollBehavior::Smooth);

    gloo_utils::window().scroll_to_with_scroll_to_options(&options);
}

/// Click handler for in-page `#id` links.
pub fn anchor_click(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}
