use yew::prelude::*;

use crate::components::Popup;

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub on_close: Callback<()>,
}

pub struct SuccessModal;

impl Component for SuccessModal {
    type Message = ();
    type Properties = SuccessModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_close = ctx.props().on_close.clone();
        let close_click = {
            let on_close = on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };

        html! {
            <Popup class="success-modal" {on_close}>
                <div class="modal-icon">{"\u{1f389}"}</div>
                <h3>{"Thank You!"}</h3>
                <p>
                    {"Your enrollment inquiry has been received. Our team will call you within 24 hours to schedule a visit."}
                </p>
                <button class="btn btn-primary" onclick={close_click}>
                    {"Close"}
                </button>
            </Popup>
        }
    }
}
