use shared::{Notification, NotificationPhase};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastsProps {
    pub items: Vec<Notification>,
}

/// Renders the transient error notifications, newest at the bottom.
pub struct Toasts;

impl Component for Toasts {
    type Message = ();
    type Properties = ToastsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="toast-stack">
                {
                    for ctx.props().items.iter().map(|item| {
                        let leaving = matches!(item.phase, NotificationPhase::Leaving);
                        html! {
                            <div
                                key={item.id}
                                class={classes!("toast-error", leaving.then_some("leaving"))}>
                                <span>{"\u{26a0}\u{fe0f}"}</span>
                                <span>{item.message.clone()}</span>
                            </div>
                        }
                    })
                }
            </div>
        }
    }
}
