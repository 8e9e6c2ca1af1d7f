use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::{VERSION_STR, components::navbar::NAV_LINKS, dom};

pub struct Footer;

impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let branch = env!("VERGEN_GIT_BRANCH");
        let branch = if branch == "main" {
            String::new()
        } else {
            format!("({branch})")
        };

        let git_sha = env!("VERGEN_GIT_SHA");
        let year = Utc::now().year();

        html! {
            <footer class="footer">
                <div class="footer-content">
                    <div class="footer-brand">
                        <h3>{"Ducklings Preschool"}</h3>
                        <p>{"Where little ones learn, play and grow together."}</p>
                    </div>

                    <ul class="footer-links">
                        {
                            for NAV_LINKS.iter().map(|(id, label)| html! {
                                <li>
                                    <a href={format!("#{id}")} onclick={dom::anchor_click(*id)}>
                                        {*label}
                                    </a>
                                </li>
                            })
                        }
                    </ul>
                </div>

                <div class="copyright">
                    { format!("\u{a9} {year} Ducklings Preschool. All rights reserved.") }
                </div>

                <div class="version">
                    { format!("v{VERSION_STR}-{git_sha} {branch}") }
                </div>
            </footer>
        }
    }
}
