use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PopupProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    pub on_close: Callback<()>,
}

pub enum Msg {
    ClickOutside,
    ClickInside,
}

/// Modal surface on a backdrop, clicking the backdrop closes it.
pub struct Popup;

impl Component for Popup {
    type Message = Msg;
    type Properties = PopupProps;

    fn create(_ctx: &Context<Self>) -> Self {
        toggle_modal(true);

        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ClickOutside => {
                ctx.props().on_close.emit(());
                true
            }
            Msg::ClickInside => {
                //do nothing
                false
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        toggle_modal(false);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let click_outside = ctx.link().callback(|_: MouseEvent| Msg::ClickOutside);
        let click_inside = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::ClickInside
        });

        let PopupProps {
            class, children, ..
        } = &ctx.props();

        let mut c = class.clone();
        c.push(classes!("modal-content"));

        html! {
            <div class="modal show" onclick={click_outside}>
                <div class={c} onclick={click_inside}>
                    { for children.iter() }
                </div>
            </div>
        }
    }
}

fn toggle_modal(enable: bool) {
    let body: HtmlElement = gloo_utils::body();

    let result = if enable {
        body.class_list().add_1("modal-open")
    } else {
        body.class_list().remove_1("modal-open")
    };

    if let Err(e) = result {
        log::error!("toggle_modal error: {e:?}");
    }
}
