#![deny(
    unused_imports,
    unused_must_use,
    unused_variables,
    unused_mut,
    dead_code,
    clippy::expect_used
)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::dbg_macro,
    clippy::unwrap_used,
    clippy::panic,
    clippy::needless_update,
    clippy::match_like_matches_macro,
    clippy::from_over_into,
    clippy::useless_conversion,
    clippy::float_cmp_const,
    clippy::lossy_float_literal,
    clippy::string_to_string,
    clippy::unneeded_field_pattern,
    clippy::verbose_file_reads
)]
#![allow(
    clippy::use_self,
    clippy::module_name_repetitions,
    clippy::let_unit_value
)]
mod components;
mod dom;
mod environment;
mod pages;
mod scheduler;

use yew::prelude::*;

use crate::{
    components::{Footer, Navbar},
    pages::Home,
};

pub const VERSION_STR: &str = env!("CARGO_PKG_VERSION");

pub struct AppRoot;

impl Component for AppRoot {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-host">
                <Navbar />
                <Home />
                <Footer />
            </div>
        }
    }
}

pub fn run_app() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(environment::log_level()));
    log::info!("ducklings preschool v{VERSION_STR} loaded");

    yew::Renderer::<AppRoot>::new().render();
}
