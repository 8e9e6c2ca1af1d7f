use gloo_events::EventListener;
use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_reveal: Callback<()>,
}

pub enum Msg {
    Scroll,
}

/// Fades its children in the first time they scroll into view.
pub struct Reveal {
    node_ref: NodeRef,
    revealed: bool,
    scroll_listener: Option<EventListener>,
}

impl Component for Reveal {
    type Message = Msg;
    type Properties = RevealProps;

    fn create(ctx: &Context<Self>) -> Self {
        let scroll_listener = {
            let link = ctx.link().clone();
            EventListener::new(&gloo_utils::window(), "scroll", move |_| {
                link.send_message(Msg::Scroll);
            })
        };

        Self {
            node_ref: NodeRef::default(),
            revealed: false,
            scroll_listener: Some(scroll_listener),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Scroll => {
                if self.revealed || !dom::is_node_revealed(&self.node_ref) {
                    return false;
                }

                self.revealed = true;
                // revealed for good, stop listening
                self.scroll_listener = None;
                ctx.props().on_reveal.emit(());
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Scroll);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let RevealProps {
            class, children, ..
        } = ctx.props();

        html! {
            <div
                ref={self.node_ref.clone()}
                class={classes!(class.clone(), "reveal", self.revealed.then_some("animate-in"))}>
                { for children.iter() }
            </div>
        }
    }
}
