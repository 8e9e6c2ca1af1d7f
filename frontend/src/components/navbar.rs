use gloo_events::EventListener;
use shared::is_scrolled;
use yew::prelude::*;

use crate::dom;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("programs", "Programs"),
    ("why-us", "Why Us"),
    ("gallery", "Gallery"),
    ("contact", "Contact"),
];

pub enum Msg {
    ToggleMenu,
    Navigate(&'static str),
    Scroll,
}

pub struct Navbar {
    menu_open: bool,
    scrolled: bool,
    active: Option<String>,
    _scroll_listener: EventListener,
}

impl Component for Navbar {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let listener = EventListener::new(&gloo_utils::window(), "scroll", move |_| {
            link.send_message(Msg::Scroll);
        });

        Self {
            menu_open: false,
            scrolled: false,
            active: None,
            _scroll_listener: listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            Msg::Navigate(id) => {
                self.menu_open = false;
                dom::scroll_to_section(id);
                true
            }
            Msg::Scroll => {
                let scrolled = is_scrolled(dom::scroll_y());
                let mut changed = scrolled != self.scrolled;
                self.scrolled = scrolled;

                // between sections the last active link stays highlighted
                if let Some(active) = dom::current_section() {
                    if self.active.as_ref() != Some(&active) {
                        self.active = Some(active);
                        changed = true;
                    }
                }

                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let nav_click = |id: &'static str| {
            link.callback(move |e: MouseEvent| {
                e.prevent_default();
                Msg::Navigate(id)
            })
        };

        html! {
            <nav id="navbar" class={classes!("navbar", self.scrolled.then_some("scrolled"))}>
                <div class="nav-container">
                    <a href="#home" class="logo" onclick={nav_click("home")}>
                        <img class="logo-img" src="assets/logo.png" alt="Ducklings logo" />
                        <span class="logo-text">{"Ducklings"}</span>
                    </a>

                    <ul id="nav-menu" class={classes!("nav-menu", self.menu_open.then_some("active"))}>
                        {
                            for NAV_LINKS.iter().map(|(id, label)| {
                                let active = self.active.as_deref() == Some(*id);
                                html! {
                                    <li>
                                        <a
                                            href={format!("#{id}")}
                                            class={classes!("nav-link", active.then_some("active"))}
                                            onclick={nav_click(*id)}>
                                            {*label}
                                        </a>
                                    </li>
                                }
                            })
                        }
                        <li>
                            <a href="#contact" class="btn btn-primary nav-cta" onclick={nav_click("contact")}>
                                {"Enroll Now"}
                            </a>
                        </li>
                    </ul>

                    <div
                        id="hamburger"
                        class={classes!("hamburger", self.menu_open.then_some("active"))}
                        onclick={link.callback(|_| Msg::ToggleMenu)}>
                        <span class="bar" />
                        <span class="bar" />
                        <span class="bar" />
                    </div>
                </div>
            </nav>
        }
    }
}
